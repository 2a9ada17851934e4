//! Integer to text in an arbitrary radix.
//!
//! Digits are produced least-significant first into an end-anchored scratch
//! area and then copied out most-significant first. The division loop runs
//! at least once, so zero renders as a single `0`.
//!
//! Digit alphabet is `0-9` followed by upper-case `A-Z`.

/// Longest digit run a `u64` can produce (radix 2).
pub const MAX_DIGITS: usize = 64;

/// A validated numeric base in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    /// Returns `None` unless `radix` is in `2..=36`.
    #[must_use]
    pub const fn new(radix: u32) -> Option<Radix> {
        if radix >= 2 && radix <= 36 {
            Some(Radix(radix))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Render `num` in `radix` into the start of `buf`.
///
/// Returns the number of digits written.
///
/// # Panics
///
/// Panics if `buf` is shorter than the rendered digit count (at most
/// [`MAX_DIGITS`]).
pub fn ltoa(buf: &mut [u8], num: u64, radix: Radix) -> usize {
    ltoa_with_divisor(buf, num, radix, 0)
}

/// Render `num` in `radix` using the digit count of `divisor`.
///
/// With `divisor == 0` this is plain [`ltoa`]. Otherwise exactly as many
/// digits are emitted as `divisor` has: short values gain leading zeros and
/// digits of `num` above that count are dropped. The float renderer uses
/// this to keep fractional zeros (`1.05` must not print as `1.5`).
///
/// # Panics
///
/// Panics if `buf` is shorter than the rendered digit count.
pub fn ltoa_with_divisor(buf: &mut [u8], num: u64, radix: Radix, divisor: u64) -> usize {
    let base = u64::from(radix.0);
    let mut scratch = [0u8; MAX_DIGITS];
    let mut q = MAX_DIGITS;

    let mut l = num;
    let mut ll = if divisor == 0 { num } else { divisor };
    loop {
        q -= 1;
        scratch[q] = digit_char((l % base) as u8);
        l /= base;
        ll /= base;
        if ll == 0 {
            break;
        }
    }

    let digits = &scratch[q..];
    buf[..digits.len()].copy_from_slice(digits);
    digits.len()
}

fn digit_char(d: u8) -> u8 {
    if d < 10 { b'0' + d } else { b'A' + (d - 10) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(num: u64, radix: Radix) -> std::string::String {
        let mut buf = [0u8; MAX_DIGITS];
        let n = ltoa(&mut buf, num, radix);
        std::string::String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_radix_bounds() {
        assert!(Radix::new(0).is_none());
        assert!(Radix::new(1).is_none());
        assert_eq!(Radix::new(2), Some(Radix::BINARY));
        assert_eq!(Radix::new(36).map(Radix::get), Some(36));
        assert!(Radix::new(37).is_none());
    }

    #[test]
    fn test_zero_is_single_digit_in_every_radix() {
        for r in 2..=36 {
            let radix = Radix::new(r).unwrap();
            assert_eq!(render(0, radix), "0", "radix {r}");
        }
    }

    #[test]
    fn test_decimal() {
        assert_eq!(render(42, Radix::DECIMAL), "42");
        assert_eq!(render(1_000_000, Radix::DECIMAL), "1000000");
        assert_eq!(render(u64::MAX, Radix::DECIMAL), "18446744073709551615");
    }

    #[test]
    fn test_hex_is_upper_case() {
        assert_eq!(render(0xdead_beef, Radix::HEX), "DEADBEEF");
        assert_eq!(render(255, Radix::HEX), "FF");
    }

    #[test]
    fn test_octal_and_base36() {
        assert_eq!(render(8, Radix::OCTAL), "10");
        assert_eq!(render(0o755, Radix::OCTAL), "755");
        assert_eq!(render(35, Radix::new(36).unwrap()), "Z");
        assert_eq!(render(36, Radix::new(36).unwrap()), "10");
    }

    #[test]
    fn test_binary_worst_case_fills_max_digits() {
        let s = render(u64::MAX, Radix::BINARY);
        assert_eq!(s.len(), MAX_DIGITS);
        assert!(s.bytes().all(|b| b == b'1'));
    }

    #[test]
    fn test_reparse_round_trip() {
        for &n in &[1u64, 7, 8, 9, 10, 15, 16, 255, 256, 4095, 65_535, 123_456_789, u64::MAX] {
            for radix in [Radix::OCTAL, Radix::DECIMAL, Radix::HEX] {
                let s = render(n, radix);
                assert_eq!(u64::from_str_radix(&s, radix.get()).unwrap(), n);
            }
        }
    }

    #[test]
    fn test_divisor_pads_leading_zeros() {
        let mut buf = [0u8; MAX_DIGITS];
        let n = ltoa_with_divisor(&mut buf, 5, Radix::DECIMAL, 1000);
        assert_eq!(&buf[..n], b"0005");
        let n = ltoa_with_divisor(&mut buf, 0, Radix::DECIMAL, 10_000_000);
        assert_eq!(&buf[..n], b"00000000");
    }

    #[test]
    fn test_divisor_drops_high_digits() {
        let mut buf = [0u8; MAX_DIGITS];
        let n = ltoa_with_divisor(&mut buf, 12_345, Radix::DECIMAL, 100);
        assert_eq!(&buf[..n], b"345");
    }

    #[test]
    fn test_writes_only_digit_count() {
        let mut buf = [b'#'; 8];
        let n = ltoa(&mut buf, 123, Radix::DECIMAL);
        assert_eq!(n, 3);
        assert_eq!(&buf, b"123#####");
    }
}
