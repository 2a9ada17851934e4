//! Floating point to text with a fixed number of significant digits.
//!
//! The value is normalised so its leading digit sits in the ones place,
//! remembering the decimal exponent `E` of that digit. When `0 <= E <
//! precision` the digits are printed plainly with a decimal point after the
//! ones digit; otherwise the value is printed as `d.ddd...E±n`.
//!
//! The conversion truncates. Digits past the requested precision are
//! discarded without any carry, so `2.999` at two digits prints `2.9`, not
//! `3.0`. Conventional formatting libraries round here; this one does not.

use super::ltoa::{Radix, ltoa, ltoa_with_divisor};

/// Largest number of significant digits rendered.
pub const FLOAT_PRECISION: usize = 9;

/// Worst-case output length: `-d.ddddddddE-ddd`.
pub const FTOA_MAX_LEN: usize = 16;

const POW10: [u64; FLOAT_PRECISION] = [
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Render `num` with `precision` significant digits into `buf`.
///
/// A precision of `0` or above [`FLOAT_PRECISION`] selects
/// [`FLOAT_PRECISION`]. The format engine strips the sign before calling;
/// a negative finite value passed directly is printed with a leading `-`.
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if `buf` is shorter than the output (at most [`FTOA_MAX_LEN`]).
pub fn ftoa(buf: &mut [u8], num: f64, precision: usize) -> usize {
    if num.is_nan() {
        return put(buf, 0, b"NAN");
    }
    if num.is_infinite() {
        let text: &[u8] = if num < 0.0 { b"-INF" } else { b"INF" };
        return put(buf, 0, text);
    }

    let mut p = 0;
    let mut num = num;
    if num < 0.0 {
        p = put(buf, p, b"-");
        num = -num;
    }

    // Exponent of the most significant digit.
    let mut exp: i32 = 0;
    if num != 0.0 {
        while num >= 10.0 {
            num /= 10.0;
            exp += 1;
        }
        while num < 1.0 {
            num *= 10.0;
            exp -= 1;
        }
    }

    let precision = if precision == 0 || precision > FLOAT_PRECISION {
        FLOAT_PRECISION
    } else {
        precision
    };

    if usize::try_from(exp).is_ok_and(|e| e < precision) {
        let mut remaining = precision;
        while remaining > 0 {
            let digit = num as u8;
            buf[p] = b'0' + digit;
            p += 1;
            if exp == 0 && remaining > 1 {
                p = put(buf, p, b".");
            }
            num -= f64::from(digit);
            num *= 10.0;
            exp -= 1;
            remaining -= 1;
        }
    } else {
        let int_part = num as u64;
        p += ltoa(&mut buf[p..], int_part, Radix::DECIMAL);

        if precision > 1 {
            let scale = POW10[precision - 2];
            p = put(buf, p, b".");
            let frac = ((num - int_part as f64) * scale as f64) as u64;
            p += ltoa_with_divisor(&mut buf[p..], frac, Radix::DECIMAL, scale / 10);
        }

        p = put(buf, p, if exp >= 0 { b"E+" } else { b"E-" });
        p += ltoa(&mut buf[p..], u64::from(exp.unsigned_abs()), Radix::DECIMAL);
    }
    p
}

fn put(buf: &mut [u8], at: usize, bytes: &[u8]) -> usize {
    let end = at + bytes.len();
    buf[at..end].copy_from_slice(bytes);
    end
}
