//! Argument list consumed by the format engine.
//!
//! [`Arg`] is the tagged value a caller supplies per directive; [`Args`]
//! walks a slice of them strictly left to right, the same way a C
//! `va_list` is consumed. Each accessor reads the next argument as the
//! type the directive asks for, reinterpreting mismatched variants with the
//! ordinary integer casts. Running off the end yields zero (or a null
//! string) rather than panicking.

/// Typed argument value for formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Double(f64),
    Char(u8),
    /// `None` stands for a null string pointer and renders as `(null)`.
    Str(Option<&'a [u8]>),
}

impl Arg<'_> {
    fn as_i64(self) -> i64 {
        match self {
            Arg::Int(v) => i64::from(v),
            Arg::UInt(v) => i64::from(v),
            Arg::Long(v) => v,
            Arg::ULong(v) => v as i64,
            Arg::Double(v) => v as i64,
            Arg::Char(c) => i64::from(c),
            Arg::Str(_) => 0,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Arg::Double(v) => v,
            Arg::Int(v) => f64::from(v),
            Arg::UInt(v) => f64::from(v),
            Arg::Long(v) => v as f64,
            Arg::ULong(v) => v as f64,
            Arg::Char(c) => f64::from(c),
            Arg::Str(_) => 0.0,
        }
    }
}

macro_rules! arg_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(v: $ty) -> Self {
                    Arg::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

arg_from! {
    i8 => Int as i32,
    i16 => Int as i32,
    i32 => Int as i32,
    u16 => UInt as u32,
    u32 => UInt as u32,
    i64 => Long as i64,
    u64 => ULong as u64,
    f32 => Double as f64,
    f64 => Double as f64,
    u8 => Char as u8,
}

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        Arg::Long(v as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Arg::ULong(v as u64)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(Some(s.as_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(Some(s))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Arg::Str(Some(s.as_slice()))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Arg::Str(s.map(str::as_bytes))
    }
}

impl<'a> From<Option<&'a [u8]>> for Arg<'a> {
    fn from(s: Option<&'a [u8]>) -> Self {
        Arg::Str(s)
    }
}

/// Sequential cursor over a caller-built argument slice.
#[derive(Debug, Clone)]
pub struct Args<'a, 'b> {
    list: &'b [Arg<'a>],
    next: usize,
}

impl<'a, 'b> Args<'a, 'b> {
    #[must_use]
    pub const fn new(list: &'b [Arg<'a>]) -> Self {
        Self { list, next: 0 }
    }

    /// Number of arguments consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.next
    }

    /// Number of arguments not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.list.len() - self.next
    }

    fn pull(&mut self) -> Option<Arg<'a>> {
        let arg = self.list.get(self.next).copied();
        if arg.is_some() {
            self.next += 1;
        }
        arg
    }

    pub fn next_int(&mut self) -> i32 {
        self.pull().map_or(0, |a| a.as_i64() as i32)
    }

    pub fn next_uint(&mut self) -> u32 {
        self.pull().map_or(0, |a| a.as_i64() as u32)
    }

    pub fn next_long(&mut self) -> i64 {
        self.pull().map_or(0, Arg::as_i64)
    }

    pub fn next_ulong(&mut self) -> u64 {
        self.pull().map_or(0, |a| a.as_i64() as u64)
    }

    pub fn next_double(&mut self) -> f64 {
        self.pull().map_or(0.0, Arg::as_f64)
    }

    /// Reads the next argument as a character; integers keep their low byte.
    pub fn next_char(&mut self) -> u8 {
        self.next_int() as u8
    }

    /// Reads the next argument as a string. Non-string arguments read as null.
    pub fn next_str(&mut self) -> Option<&'a [u8]> {
        match self.pull() {
            Some(Arg::Str(s)) => s,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_consumption() {
        let list = [Arg::from(1), Arg::from("two"), Arg::from(3.5)];
        let mut args = Args::new(&list);
        assert_eq!(args.remaining(), 3);
        assert_eq!(args.next_int(), 1);
        assert_eq!(args.next_str(), Some(&b"two"[..]));
        assert_eq!(args.next_double(), 3.5);
        assert_eq!(args.consumed(), 3);
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn test_exhausted_list_yields_defaults() {
        let mut args = Args::new(&[]);
        assert_eq!(args.next_int(), 0);
        assert_eq!(args.next_ulong(), 0);
        assert_eq!(args.next_double(), 0.0);
        assert_eq!(args.next_str(), None);
        assert_eq!(args.consumed(), 0);
    }

    #[test]
    fn test_int_reinterpretation() {
        let list = [Arg::Int(-1), Arg::Int(-1), Arg::ULong(u64::MAX), Arg::Long(1 << 40)];
        let mut args = Args::new(&list);
        assert_eq!(args.next_uint(), u32::MAX);
        assert_eq!(args.next_ulong(), u64::MAX);
        assert_eq!(args.next_long(), -1);
        assert_eq!(args.next_int(), 0);
    }

    #[test]
    fn test_non_string_reads_as_null() {
        let list = [Arg::Int(7)];
        let mut args = Args::new(&list);
        assert_eq!(args.next_str(), None);
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Arg::from(-3i8), Arg::Int(-3));
        assert_eq!(Arg::from(7u16), Arg::UInt(7));
        assert_eq!(Arg::from(b'A'), Arg::Char(b'A'));
        assert_eq!(Arg::from(-9isize), Arg::Long(-9));
        assert_eq!(Arg::from(9usize), Arg::ULong(9));
        assert_eq!(Arg::from(1.5f32), Arg::Double(1.5));
        assert_eq!(Arg::from(None::<&str>), Arg::Str(None));
        assert_eq!(Arg::from(b"hi"), Arg::Str(Some(&b"hi"[..])));
    }

    #[test]
    fn test_char_keeps_low_byte() {
        let list = [Arg::Int(0x141)];
        let mut args = Args::new(&list);
        assert_eq!(args.next_char(), b'A');
    }
}
