//! # minifmt-core
//!
//! Allocation-free formatted output for constrained targets.
//!
//! The engine interprets a compact `printf`-style directive grammar and
//! emits the result one byte at a time to a [`Sink`]. It never touches the
//! heap and keeps no state between calls; each call works out of a
//! stack-local buffer of [`WORK_BUF_LEN`] bytes.
//!
//! ```
//! use minifmt_core::snprintf;
//!
//! let mut buf = [0u8; 16];
//! let n = snprintf!(&mut buf, "Value: %5d", 42);
//! assert_eq!(n, 12);
//! assert_eq!(&buf[..n], b"Value:    42");
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod stdio;
pub mod stdlib;

#[cfg(feature = "std")]
pub use stdio::IoSink;
pub use stdio::{
    Arg, Args, BoundedSink, Conversion, Directive, FnSink, Sink, WORK_BUF_LEN, format,
    format_into, vformat, vformat_into,
};
pub use stdlib::Radix;
