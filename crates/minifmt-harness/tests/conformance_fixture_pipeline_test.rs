// conformance_fixture_pipeline_test.rs
// Integration tests: golden fixture set through the runner, report and log.

use std::path::{Path, PathBuf};

use minifmt_harness::report::{ConformanceReport, FixtureDigest, sha256_hex};
use minifmt_harness::structured_log::{LogEmitter, validate_log_file};
use minifmt_harness::{FixtureSet, SinkMode, TestRunner, VerificationSummary};

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn golden_path() -> PathBuf {
    repo_root().join("tests/conformance/printf_core.v1.json")
}

fn golden() -> FixtureSet {
    let path = golden_path();
    FixtureSet::from_file(&path).unwrap_or_else(|e| panic!("Failed to load {}: {e}", path.display()))
}

fn assert_all_pass(mode: SinkMode) {
    let results = TestRunner::new("golden", mode).run(&golden());
    let summary = VerificationSummary::from_results(results);
    let failures: Vec<String> = summary
        .failures()
        .map(|r| format!("{}: {}", r.case_name, r.diff.as_deref().unwrap_or("")))
        .collect();
    assert!(
        summary.all_passed(),
        "{} of {} cases failed in {} mode:\n{}",
        summary.failed,
        summary.total,
        mode.as_str(),
        failures.join("\n")
    );
}

#[test]
fn golden_set_passes_in_stream_mode() {
    assert_all_pass(SinkMode::Stream);
}

#[test]
fn golden_set_passes_in_bounded_mode() {
    assert_all_pass(SinkMode::Bounded);
}

#[test]
fn golden_set_passes_in_parity_mode() {
    assert_all_pass(SinkMode::Both);
}

#[test]
fn golden_set_schema_is_sane() {
    let set = golden();
    assert_eq!(set.version, "v1");
    assert_eq!(set.family, "stdio/printf");
    assert!(set.cases.len() >= 40);

    let mut names: Vec<&str> = set.cases.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), set.cases.len(), "case names must be unique");

    for case in &set.cases {
        let stored = case.expected_output.len();
        match case.capacity {
            None => assert_eq!(stored, case.expected_len, "{}", case.name),
            Some(cap) => assert_eq!(
                stored,
                cap.saturating_sub(1).min(case.expected_len),
                "{}",
                case.name
            ),
        }
    }
}

#[test]
fn golden_set_covers_every_section() {
    let set = golden();
    for section in ["padding", "strings", "star", "integers", "literals", "float", "bounded"] {
        assert!(
            set.cases.iter().any(|c| c.section == section),
            "no case for section {section}"
        );
    }
}

#[test]
fn report_records_fixture_digest() {
    let path = golden_path();
    let set = golden();
    let digest = FixtureDigest::of_file(&path, &set).unwrap();
    assert_eq!(digest.sha256, sha256_hex(&std::fs::read(&path).unwrap()));
    assert_eq!(digest.cases, set.cases.len());

    let report = ConformanceReport {
        title: "golden".to_string(),
        mode: "both".to_string(),
        timestamp: "2026-10-19T00:00:00.000Z".to_string(),
        fixtures: vec![digest],
        summary: VerificationSummary::from_results(TestRunner::new("golden", SinkMode::Both).run(&set)),
    };
    let md = report.to_markdown();
    assert!(md.contains(&format!("- Total: {}\n", set.cases.len())));
    assert!(md.contains("- Failed: 0\n"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["fixtures"][0]["family"], "stdio/printf");
    assert_eq!(json["summary"]["failed"], 0);
}

#[test]
fn logged_run_produces_valid_jsonl() {
    let log_path = std::env::temp_dir().join(format!(
        "minifmt_pipeline_{}.jsonl",
        std::process::id()
    ));
    let set = golden();
    {
        let mut emitter = LogEmitter::to_file(&log_path, "golden", "run-1").unwrap();
        let results = TestRunner::new("golden", SinkMode::Both)
            .run_logged(&set, &mut emitter)
            .unwrap();
        assert!(results.iter().all(|r| r.passed));
    }

    let (lines, errors) = validate_log_file(&log_path).unwrap();
    let content = std::fs::read_to_string(&log_path).unwrap();
    std::fs::remove_file(&log_path).ok();

    assert!(errors.is_empty(), "log errors: {errors:?}");
    assert_eq!(lines, set.cases.len() + 2);
    assert!(content.lines().next().unwrap().contains("\"event\":\"set_start\""));
    assert!(content.lines().last().unwrap().contains("\"event\":\"set_end\""));
}
