//! Test execution engine.

use minifmt_core::{format, format_into};

use crate::arg_spec::{ArgSpec, lower};
use crate::config::SinkMode;
use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Fill byte for bounded buffers; anything past the terminator must keep it.
const SENTINEL: u8 = 0xA5;

/// Bytes produced by one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Bytes that reached the sink (without the terminator).
    pub bytes: Vec<u8>,
    /// Length returned by the engine.
    pub logical_len: usize,
    /// Stored data length for bounded calls.
    pub written_len: Option<usize>,
    /// Terminator or untouched-tail violations in the bounded buffer.
    pub buffer_fault: Option<String>,
}

/// Render through the stream form into a growable buffer.
#[must_use]
pub fn render_stream(fmt: &str, args: &[ArgSpec]) -> Rendered {
    let mut bytes = Vec::<u8>::new();
    let logical_len = format(&mut bytes, fmt, &lower(args));
    Rendered {
        bytes,
        logical_len,
        written_len: None,
        buffer_fault: None,
    }
}

/// Render through the bounded form into a buffer of `capacity` bytes.
#[must_use]
pub fn render_bounded(fmt: &str, args: &[ArgSpec], capacity: usize) -> Rendered {
    let mut buf = vec![SENTINEL; capacity];
    let logical_len = format_into(&mut buf, fmt, &lower(args));
    let written = capacity.saturating_sub(1).min(logical_len);

    let buffer_fault = if capacity == 0 {
        None
    } else if buf[written] != 0 {
        Some(format!(
            "missing terminator at offset {written} (found 0x{:02x})",
            buf[written]
        ))
    } else if let Some(off) = buf[written + 1..].iter().position(|&b| b != SENTINEL) {
        Some(format!("byte past terminator modified at offset {}", written + 1 + off))
    } else {
        None
    };

    buf.truncate(written);
    Rendered {
        bytes: buf,
        logical_len,
        written_len: Some(written),
        buffer_fault,
    }
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Entry point(s) used for cases without a pinned capacity.
    pub mode: SinkMode,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: SinkMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all fixtures in a set and return results.
    #[must_use]
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| self.execute_case(case).0)
            .collect()
    }

    /// Like [`run`](Self::run), also writing one log line per case plus
    /// start/end markers.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "set_start")
                .with_mode(self.mode.as_str())
                .with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": fixture_set.family,
                    "version": fixture_set.version,
                    "cases": fixture_set.cases.len(),
                })),
        )?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let (result, primary) = self.execute_case(case);
            let (level, outcome) = if result.passed {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            log.emit_entry(
                LogEntry::new("", level, "case_result")
                    .with_case(&case.name)
                    .with_mode(&result.mode)
                    .with_outcome(outcome)
                    .with_lengths(primary.logical_len, primary.written_len)
                    .with_details(serde_json::json!({
                        "section": case.section,
                        "capacity": case.capacity,
                        "diff": result.diff,
                    })),
            )?;
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.passed).count();
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "set_end")
                .with_outcome(if failed == 0 { Outcome::Pass } else { Outcome::Fail })
                .with_details(serde_json::json!({
                    "family": fixture_set.family,
                    "passed": results.len() - failed,
                    "failed": failed,
                })),
        )?;
        log.flush()?;
        Ok(results)
    }

    /// Execute one case, returning its result and the rendering it was judged on.
    fn execute_case(&self, case: &FixtureCase) -> (VerificationResult, Rendered) {
        let mut notes = Vec::new();

        let (mode, primary) = match case.capacity {
            Some(capacity) => {
                let bounded = render_bounded(&case.format, &case.args, capacity);
                notes.extend(bounded.buffer_fault.clone());
                (SinkMode::Bounded, bounded)
            }
            None => match self.mode {
                SinkMode::Stream => (SinkMode::Stream, render_stream(&case.format, &case.args)),
                SinkMode::Bounded => {
                    let bounded = render_bounded(&case.format, &case.args, case.expected_len + 1);
                    notes.extend(bounded.buffer_fault.clone());
                    (SinkMode::Bounded, bounded)
                }
                SinkMode::Both => {
                    let s = render_stream(&case.format, &case.args);
                    let b = render_bounded(&case.format, &case.args, case.expected_len + 1);
                    notes.extend(b.buffer_fault.clone());
                    if s.bytes != b.bytes || s.logical_len != b.logical_len {
                        notes.push(format!(
                            "stream/bounded disagree: stream={:?} ({}), bounded={:?} ({})",
                            String::from_utf8_lossy(&s.bytes),
                            s.logical_len,
                            String::from_utf8_lossy(&b.bytes),
                            b.logical_len
                        ));
                    }
                    (SinkMode::Both, s)
                }
            },
        };

        let actual = String::from_utf8_lossy(&primary.bytes).into_owned();
        if primary.bytes != case.expected_output.as_bytes() {
            notes.insert(0, diff::render_diff(&case.expected_output, &actual));
        }
        if primary.logical_len != case.expected_len {
            notes.push(format!(
                "length mismatch: expected {}, got {}",
                case.expected_len, primary.logical_len
            ));
        }

        let passed = notes.is_empty();
        let result = VerificationResult {
            case_name: case.name.clone(),
            section: case.section.clone(),
            mode: mode.as_str().to_string(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            expected_len: case.expected_len,
            actual_len: primary.logical_len,
            diff: (!passed).then(|| notes.join("\n")),
        };
        (result, primary)
    }
}
