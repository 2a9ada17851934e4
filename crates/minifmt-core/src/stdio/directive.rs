//! Directive parser.
//!
//! Grammar, with flags accepted only in this order:
//!
//! ```text
//! %[-][0][width|*][.precision|*][l|L]conv
//! ```
//!
//! `*` reads an `int` from the argument list at the point it is parsed, so
//! width and precision arguments precede the value argument. Digits and
//! `*` may be mixed; each step computes `acc * 10 + value`.
//!
//! The operand is "long" either through an explicit `l`/`L` (the conversion
//! is then the following character) or, when that path is not taken,
//! through an upper-case conversion letter such as `D` or `X`.

use super::args::Args;
use crate::stdlib::Radix;

// ---------------------------------------------------------------------------
// Directive types
// ---------------------------------------------------------------------------

/// What a directive renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `c`
    Char,
    /// `s`
    Str,
    /// `d` `D` `i` `I`
    Signed,
    /// `f`
    #[cfg(feature = "float")]
    Float,
    /// `x` `X`
    Hex,
    /// `u` `U`
    Unsigned,
    /// `o` `O`
    Octal,
    /// Anything else, emitted as-is. Covers `%%`.
    Literal(u8),
}

impl Conversion {
    #[must_use]
    pub fn from_byte(c: u8) -> Self {
        match c {
            b'c' => Self::Char,
            b's' => Self::Str,
            b'd' | b'D' | b'i' | b'I' => Self::Signed,
            #[cfg(feature = "float")]
            b'f' => Self::Float,
            b'x' | b'X' => Self::Hex,
            b'u' | b'U' => Self::Unsigned,
            b'o' | b'O' => Self::Octal,
            other => Self::Literal(other),
        }
    }

    /// Radix of the unsigned conversions.
    #[must_use]
    pub fn radix(self) -> Option<Radix> {
        match self {
            Self::Hex => Some(Radix::HEX),
            Self::Unsigned => Some(Radix::DECIMAL),
            Self::Octal => Some(Radix::OCTAL),
            _ => None,
        }
    }
}

/// One parsed `%` directive.
///
/// `width` and `precision` are signed: a negative `*` argument is kept as
/// given (see the engine for how each conversion treats it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub left_align: bool,
    pub zero_pad: bool,
    pub width: i32,
    pub precision: i32,
    pub is_long: bool,
    pub kind: Conversion,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            left_align: false,
            zero_pad: false,
            width: 0,
            precision: 0,
            is_long: false,
            kind: Conversion::Literal(b'%'),
        }
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse one directive; `fmt` starts at the byte after `%`.
///
/// Returns the directive and the number of bytes consumed from `fmt`, or
/// `None` when the format ends (end of slice or NUL) before a conversion
/// character is reached. Any `*` arguments are pulled from `args` even when
/// `None` is returned.
pub fn parse_directive(fmt: &[u8], args: &mut Args<'_, '_>) -> Option<(Directive, usize)> {
    let mut pos = 0;
    let mut d = Directive::default();

    if fmt.get(pos) == Some(&b'-') {
        pos += 1;
        d.left_align = true;
    }
    if fmt.get(pos) == Some(&b'0') {
        pos += 1;
        d.zero_pad = true;
    }

    // --- width ---
    let mut c;
    loop {
        c = take(fmt, &mut pos)?;
        match field_step(c, args) {
            Some(v) => d.width = accumulate(d.width, v),
            None => break,
        }
    }

    // --- precision ---
    if c == b'.' {
        loop {
            c = take(fmt, &mut pos)?;
            match field_step(c, args) {
                Some(v) => d.precision = accumulate(d.precision, v),
                None => break,
            }
        }
    }

    // --- length modifier ---
    if c == b'l' || c == b'L' {
        d.is_long = true;
        if let Some(next) = take(fmt, &mut pos) {
            c = next;
        }
    } else {
        d.is_long = c.is_ascii_uppercase();
    }

    d.kind = Conversion::from_byte(c);
    Some((d, pos))
}

/// Next format byte, treating NUL as the end of the format.
fn take(fmt: &[u8], pos: &mut usize) -> Option<u8> {
    let c = *fmt.get(*pos)?;
    if c == 0 {
        return None;
    }
    *pos += 1;
    Some(c)
}

fn field_step(c: u8, args: &mut Args<'_, '_>) -> Option<i32> {
    match c {
        b'0'..=b'9' => Some(i32::from(c - b'0')),
        b'*' => Some(args.next_int()),
        _ => None,
    }
}

fn accumulate(acc: i32, value: i32) -> i32 {
    acc.wrapping_mul(10).wrapping_add(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
