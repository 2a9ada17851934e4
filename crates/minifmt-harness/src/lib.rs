//! Conformance testing harness for minifmt.
//!
//! This crate provides:
//! - Fixtures: JSON case files pairing a format string and typed arguments
//!   with the exact expected bytes and logical length
//! - Runner: drives each case through the stream and/or bounded entry points
//! - Report generation: Markdown + JSON summaries with fixture digests
//! - Structured logging: JSONL records for every verified case

#![forbid(unsafe_code)]

pub mod arg_spec;
pub mod config;
pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use arg_spec::{ArgParseError, ArgSpec};
pub use config::SinkMode;
pub use fixtures::{FixtureCase, FixtureError, FixtureSet};
pub use report::{ConformanceReport, FixtureDigest};
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
