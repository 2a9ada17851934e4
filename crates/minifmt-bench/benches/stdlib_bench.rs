//! Number conversion benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use minifmt_core::stdlib::{FTOA_MAX_LEN, MAX_DIGITS, Radix, ftoa, ltoa};

fn bench_ltoa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ltoa");
    group.throughput(Throughput::Elements(1));

    for radix in [Radix::BINARY, Radix::OCTAL, Radix::DECIMAL, Radix::HEX] {
        group.bench_with_input(
            BenchmarkId::new("u64_max", radix.get()),
            &radix,
            |b, &radix| {
                let mut buf = [0u8; MAX_DIGITS];
                b.iter(|| black_box(ltoa(&mut buf, black_box(u64::MAX), radix)));
            },
        );
    }
    group.finish();
}

fn bench_ftoa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ftoa");
    let values: &[(&str, f64)] = &[
        ("plain", 1234.5678),
        ("small", 0.000_123),
        ("huge", 1.0e300),
    ];

    for &(name, value) in values {
        group.bench_with_input(BenchmarkId::new("precision_9", name), &value, |b, &v| {
            let mut buf = [0u8; FTOA_MAX_LEN];
            b.iter(|| black_box(ftoa(&mut buf, black_box(v), 9)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ltoa, bench_ftoa);
criterion_main!(benches);
