//! Numeric conversions used by the format engine.
//!
//! Both renderers write into a caller-supplied byte slice and return the
//! number of bytes produced. Neither allocates.

#[cfg(feature = "float")]
pub mod ftoa;
pub mod ltoa;

#[cfg(feature = "float")]
pub use ftoa::{FLOAT_PRECISION, FTOA_MAX_LEN, ftoa};
pub use ltoa::{MAX_DIGITS, Radix, ltoa, ltoa_with_divisor};
