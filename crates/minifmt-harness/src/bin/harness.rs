//! CLI entrypoint for the minifmt conformance harness.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use minifmt_core::IoSink;
use minifmt_harness::arg_spec::{ArgSpec, lower};
use minifmt_harness::config::{self, SinkMode};
use minifmt_harness::fixtures::{FixtureSet, fixture_files};
use minifmt_harness::report::{ConformanceReport, FixtureDigest};
use minifmt_harness::runner::{TestRunner, render_bounded};
use minifmt_harness::structured_log::{LogEmitter, now_utc};
use minifmt_harness::verify::VerificationSummary;

/// Conformance tooling for minifmt.
#[derive(Debug, Parser)]
#[command(name = "minifmt-harness")]
#[command(about = "Conformance testing harness for minifmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format once and print the result.
    Render {
        /// Format string.
        format: String,
        /// Typed arguments: i:42 u:7 l:-3 lu:9 f:1.5 c:A s:text null
        #[arg(allow_hyphen_values = true)]
        args: Vec<ArgSpec>,
        /// Use the bounded form with a buffer of this many bytes.
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Sink mode (stream|bounded|both); defaults to MINIFMT_SINK_MODE.
        #[arg(long)]
        mode: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            format,
            args,
            capacity,
        } => {
            let stdout = std::io::stdout();
            match capacity {
                Some(capacity) => {
                    let rendered = render_bounded(&format, &args, capacity);
                    let mut out = stdout.lock();
                    out.write_all(&rendered.bytes)?;
                    out.flush()?;
                    eprintln!(
                        "len={} stored={} capacity={capacity}",
                        rendered.logical_len,
                        rendered.written_len.unwrap_or(0)
                    );
                }
                None => {
                    let mut sink = IoSink::new(std::io::BufWriter::new(stdout.lock()));
                    let n = minifmt_core::format(&mut sink, &format, &lower(&args));
                    sink.finish()?;
                    eprintln!("len={n}");
                }
            }
        }
        Command::Verify {
            fixture,
            report,
            log,
            mode,
        } => {
            let mode = mode
                .as_deref()
                .map_or_else(config::sink_mode, SinkMode::from_str_loose);
            eprintln!(
                "Verifying against fixtures in {} (mode={})",
                fixture.display(),
                mode.as_str()
            );

            let mut loaded = Vec::new();
            for path in fixture_files(&fixture)? {
                match FixtureSet::from_file(&path) {
                    Ok(set) => {
                        let digest = FixtureDigest::of_file(&path, &set)?;
                        loaded.push((set, digest));
                    }
                    Err(err) => eprintln!("Skipping {err}"),
                }
            }
            if loaded.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let runner = TestRunner::new("fixture-verify", mode);
            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(
                    path,
                    "minifmt-verify",
                    &format!("run-{}", std::process::id()),
                )?),
                None => None,
            };

            let mut results = Vec::new();
            for (set, _) in &loaded {
                match emitter.as_mut() {
                    Some(emitter) => results.extend(runner.run_logged(set, emitter)?),
                    None => results.extend(runner.run(set)),
                }
            }

            let report_doc = ConformanceReport {
                title: String::from("minifmt Conformance Report"),
                mode: mode.as_str().to_string(),
                timestamp: now_utc(),
                fixtures: loaded.into_iter().map(|(_, digest)| digest).collect(),
                summary: VerificationSummary::from_results(results),
            };

            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {} [{}]", failure.case_name, failure.section);
                if let Some(diff) = &failure.diff {
                    eprintln!("{diff}");
                }
            }
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }
            if let Some(path) = log {
                eprintln!("Wrote structured log to {}", path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
    }

    Ok(())
}
