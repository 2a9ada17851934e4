#![no_main]
use libfuzzer_sys::fuzz_target;
use minifmt_core::stdlib::{FTOA_MAX_LEN, ftoa};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let mut bits = [0u8; 8];
    bits.copy_from_slice(&data[..8]);
    let value = f64::from_bits(u64::from_le_bytes(bits));
    let precision = usize::from(data[8] % 12);

    let mut buf = [0u8; FTOA_MAX_LEN];
    let len = ftoa(&mut buf, value, precision);
    assert!(len > 0 && len <= FTOA_MAX_LEN);
    assert!(buf[..len].iter().all(|b| b.is_ascii_graphic()));
});
