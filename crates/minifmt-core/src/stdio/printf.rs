//! printf formatting engine.
//!
//! Walks a format string, copying literal bytes to the sink and expanding
//! each `%` directive. Every directive renders into a fixed stack buffer,
//! then gets padded to its width while being emitted byte by byte.
//!
//! The return value of every entry point is the logical length: the number
//! of bytes an unbounded sink would have received. It is counted as bytes
//! are handed over, so a truncating sink still yields the full length.
//!
//! Known quirks, kept on purpose:
//!
//! - `%x` prints upper-case digits, like `%X`.
//! - `%f` truncates instead of rounding (see [`crate::stdlib::ftoa`]).
//! - A negative `*` width means no padding. A negative `*` precision prints
//!   nothing for `%s` and selects the maximum precision for `%f`.
//! - `%.0s` (or no precision) prints at most 32767 bytes of the string.

use super::args::{Arg, Args};
use super::directive::{Conversion, Directive, parse_directive};
use super::sink::{BoundedSink, Sink};
#[cfg(feature = "float")]
use crate::stdlib::{FTOA_MAX_LEN, ftoa};
use crate::stdlib::{MAX_DIGITS, Radix, ltoa};

/// Longest rendered integer: a sign plus [`MAX_DIGITS`].
const INT_MAX_LEN: usize = 1 + MAX_DIGITS;

/// Working buffer size: the longest primitive any directive renders.
///
/// A sign plus 64 binary digits (65 bytes) dominates the longest float,
/// `-d.ddddddddE-ddd` (16 bytes). Strings and `%c` are emitted straight
/// from the argument and never touch the buffer beyond one byte.
#[cfg(feature = "float")]
pub const WORK_BUF_LEN: usize = if INT_MAX_LEN > FTOA_MAX_LEN {
    INT_MAX_LEN
} else {
    FTOA_MAX_LEN
};

#[cfg(not(feature = "float"))]
pub const WORK_BUF_LEN: usize = INT_MAX_LEN;

/// `%s` length cap when no precision is given.
const STR_PRECISION_DEFAULT: i32 = 32767;

const NULL_STR: &[u8] = b"(null)";

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Format into `sink`, returning the logical length.
pub fn format<S, F>(sink: &mut S, fmt: &F, args: &[Arg<'_>]) -> usize
where
    S: Sink + ?Sized,
    F: AsRef<[u8]> + ?Sized,
{
    vformat(sink, fmt, &mut Args::new(args))
}

/// Format into `sink` from a pre-packaged argument cursor.
///
/// On return `args` has advanced past every argument the format consumed.
pub fn vformat<S, F>(sink: &mut S, fmt: &F, args: &mut Args<'_, '_>) -> usize
where
    S: Sink + ?Sized,
    F: AsRef<[u8]> + ?Sized,
{
    let fmt = fmt.as_ref();
    let mut out = Counted { sink, n: 0 };
    let mut pos = 0;

    while let Some(&c) = fmt.get(pos) {
        if c == 0 {
            break;
        }
        pos += 1;
        if c != b'%' {
            out.put(c);
            continue;
        }
        let Some((directive, consumed)) = parse_directive(&fmt[pos..], args) else {
            break;
        };
        pos += consumed;
        emit_directive(&mut out, &directive, args);
    }
    out.n
}

/// Format into a fixed buffer, `snprintf` style.
///
/// At most `buf.len() - 1` data bytes are stored, followed by a NUL unless
/// `buf` is empty. Returns the untruncated logical length, so truncation
/// happened exactly when the result is `>= buf.len()`.
pub fn format_into<F>(buf: &mut [u8], fmt: &F, args: &[Arg<'_>]) -> usize
where
    F: AsRef<[u8]> + ?Sized,
{
    vformat_into(buf, fmt, &mut Args::new(args))
}

/// [`format_into`] from a pre-packaged argument cursor.
pub fn vformat_into<F>(buf: &mut [u8], fmt: &F, args: &mut Args<'_, '_>) -> usize
where
    F: AsRef<[u8]> + ?Sized,
{
    // One slot is reserved for the terminator.
    let data_len = buf.len().saturating_sub(1);
    let (n, eos) = {
        let mut sink = BoundedSink::new(&mut buf[..data_len]);
        let n = vformat(&mut sink, fmt, args);
        (n, sink.len())
    };
    if let Some(terminator) = buf.get_mut(eos) {
        *terminator = 0;
    }
    n
}

/// Variadic form of [`format`]: `printf!(sink, fmt, args...)`.
///
/// Each argument goes through [`Arg::from`](crate::Arg).
#[macro_export]
macro_rules! printf {
    ($sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::stdio::printf::format($sink, $fmt, &[$($crate::stdio::args::Arg::from($arg)),*])
    };
}

/// Variadic form of [`format_into`]: `snprintf!(buf, fmt, args...)`.
#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::stdio::printf::format_into($buf, $fmt, &[$($crate::stdio::args::Arg::from($arg)),*])
    };
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Sink wrapper that counts every byte handed over.
struct Counted<'s, S: Sink + ?Sized> {
    sink: &'s mut S,
    n: usize,
}

impl<S: Sink + ?Sized> Counted<'_, S> {
    fn put(&mut self, byte: u8) {
        self.sink.put(byte);
        self.n += 1;
    }

    fn put_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }

    fn repeat(&mut self, byte: u8, count: u64) {
        for _ in 0..count {
            self.put(byte);
        }
    }
}

fn emit_directive<S: Sink + ?Sized>(
    out: &mut Counted<'_, S>,
    d: &Directive,
    args: &mut Args<'_, '_>,
) {
    let mut work = [0u8; WORK_BUF_LEN];
    let mut filler = if d.zero_pad && !d.left_align { b'0' } else { b' ' };

    let text: &[u8] = match d.kind {
        Conversion::Char => {
            filler = b' ';
            work[0] = args.next_char();
            &work[..1]
        }
        Conversion::Str => {
            filler = b' ';
            let s = args.next_str().unwrap_or(NULL_STR);
            &s[..str_len(s, d.precision)]
        }
        Conversion::Signed => {
            let v = if d.is_long {
                args.next_long()
            } else {
                i64::from(args.next_int())
            };
            let mut len = 0;
            if v < 0 {
                work[0] = b'-';
                len = 1;
            }
            len += ltoa(&mut work[len..], v.unsigned_abs(), Radix::DECIMAL);
            &work[..len]
        }
        #[cfg(feature = "float")]
        Conversion::Float => {
            let mut f = args.next_double();
            let mut len = 0;
            if f < 0.0 {
                work[0] = b'-';
                len = 1;
                f = -f;
            }
            // Negative precision falls to 0, which ftoa widens to the maximum.
            let precision = usize::try_from(d.precision).unwrap_or(0);
            len += ftoa(&mut work[len..], f, precision);
            &work[..len]
        }
        Conversion::Hex | Conversion::Unsigned | Conversion::Octal => {
            let radix = d.kind.radix().unwrap_or(Radix::DECIMAL);
            let v = if d.is_long {
                args.next_ulong()
            } else {
                u64::from(args.next_uint())
            };
            let len = ltoa(&mut work, v, radix);
            &work[..len]
        }
        Conversion::Literal(c) => {
            work[0] = c;
            &work[..1]
        }
    };

    emit_padded(out, text, d.width, d.left_align, filler);
}

/// Bytes of `s` that `%s` prints: up to the first NUL, capped by precision.
fn str_len(s: &[u8], precision: i32) -> usize {
    let limit = if precision == 0 {
        STR_PRECISION_DEFAULT
    } else {
        precision
    };
    let limit = usize::try_from(limit).unwrap_or(0);
    s.iter().take(limit).take_while(|&&b| b != 0).count()
}

fn emit_padded<S: Sink + ?Sized>(
    out: &mut Counted<'_, S>,
    text: &[u8],
    width: i32,
    left_align: bool,
    filler: u8,
) {
    let len = i64::try_from(text.len()).unwrap_or(i64::MAX);
    let pad = u64::try_from(i64::from(width) - len).unwrap_or(0);

    if left_align {
        out.put_all(text);
        out.repeat(filler, pad);
        return;
    }

    let mut text = text;
    if pad > 0 {
        // Keep the sign leftmost of a zero-filled field: -007, not 00-7.
        if filler == b'0'
            && let Some((&b'-', digits)) = text.split_first()
        {
            out.put(b'-');
            text = digits;
        }
        out.repeat(filler, pad);
    }
    out.put_all(text);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
