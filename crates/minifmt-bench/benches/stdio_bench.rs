//! Format engine benchmarks, with the host `snprintf` as a baseline.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use minifmt_core::{Arg, FnSink, format, format_into};

const CASES: &[(&str, &str)] = &[
    ("literal", "the quick brown fox jumps over the lazy dog\n"),
    ("int", "id=%d\n"),
    ("padded", "[%-8s] %08X %5d\n"),
    ("string", "%s:%s\n"),
];

fn args_for(name: &str) -> Vec<Arg<'static>> {
    match name {
        "int" => vec![Arg::from(-123_456)],
        "padded" => vec![Arg::from("motor"), Arg::from(0xBEEFu32), Arg::from(42)],
        "string" => vec![Arg::from("sensor"), Arg::from("nominal")],
        _ => Vec::new(),
    }
}

fn bench_format_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_into");

    for &(name, fmt) in CASES {
        let args = args_for(name);
        group.bench_with_input(BenchmarkId::new("minifmt", name), &fmt, |b, fmt| {
            let mut buf = [0u8; 128];
            b.iter(|| {
                let n = format_into(&mut buf, black_box(*fmt), black_box(&args));
                black_box(n);
            });
        });
    }
    group.finish();
}

fn bench_stream_sink(c: &mut Criterion) {
    c.bench_function("format/counting_sink", |b| {
        let args = args_for("padded");
        b.iter(|| {
            let mut count = 0usize;
            let n = format(
                &mut FnSink(|_: u8| count += 1),
                black_box("[%-8s] %08X %5d\n"),
                black_box(&args),
            );
            black_box((n, count));
        });
    });
}

fn bench_host_snprintf(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_into");
    let motor = c"motor";

    group.bench_function(BenchmarkId::new("host_snprintf", "padded"), |b| {
        let mut buf = [0 as libc::c_char; 128];
        b.iter(|| {
            // SAFETY: `buf` is writable for its full length and every
            // conversion is matched by an argument of the right C type.
            let n = unsafe {
                libc::snprintf(
                    buf.as_mut_ptr(),
                    buf.len(),
                    c"[%-8s] %08X %5d\n".as_ptr(),
                    motor.as_ptr(),
                    black_box(0xBEEF as libc::c_uint),
                    black_box(42 as libc::c_int),
                )
            };
            black_box(n);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_format_into,
    bench_stream_sink,
    bench_host_snprintf
);
criterion_main!(benches);
