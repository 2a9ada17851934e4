#![no_main]
use libfuzzer_sys::fuzz_target;
use minifmt_core::{Arg, format, format_into};

// First byte picks the buffer capacity, the next 16 feed the argument
// list, the rest is the format string.
fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let capacity = usize::from(data[0]);
    let (raw, fmt) = data[1..].split_at(16);

    let word = |i: usize| i32::from_le_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]);
    let args = [
        Arg::Int(word(0)),
        Arg::Str(Some(&raw[4..12])),
        Arg::Long(i64::from(word(12)) << 20),
        Arg::Double(f64::from(word(8)) / 7.0),
        Arg::Str(None),
        Arg::Char(raw[3]),
    ];

    let mut stream = Vec::<u8>::new();
    let logical = format(&mut stream, fmt, &args);
    assert_eq!(logical, stream.len());

    let mut buf = vec![0xA5u8; capacity];
    let n = format_into(&mut buf, fmt, &args);
    assert_eq!(n, logical);
    if capacity > 0 {
        let stored = (capacity - 1).min(logical);
        assert_eq!(&buf[..stored], &stream[..stored]);
        assert_eq!(buf[stored], 0);
    }
});
