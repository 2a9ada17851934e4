//! Formatted output.
//!
//! Directive parsing, the format engine, the argument list it consumes and
//! the byte sinks it writes to.

pub mod args;
pub mod directive;
pub mod printf;
pub mod sink;

pub use args::{Arg, Args};
pub use directive::{Conversion, Directive, parse_directive};
pub use printf::{WORK_BUF_LEN, format, format_into, vformat, vformat_into};
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{BoundedSink, FnSink, Sink};
