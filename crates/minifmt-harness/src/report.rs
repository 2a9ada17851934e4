//! Report generation for conformance results.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fixtures::{FixtureError, FixtureSet};
use crate::verify::VerificationSummary;

/// Identity of one fixture file a report was produced from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureDigest {
    pub path: String,
    pub family: String,
    pub version: String,
    pub cases: usize,
    /// SHA-256 of the file contents, lower-case hex.
    pub sha256: String,
}

impl FixtureDigest {
    /// Hash `path` and record the set's identity.
    pub fn of_file(path: &Path, set: &FixtureSet) -> Result<Self, FixtureError> {
        let data = std::fs::read(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.display().to_string(),
            family: set.family.clone(),
            version: set.version.clone(),
            cases: set.cases.len(),
            sha256: sha256_hex(&data),
        })
    }
}

/// A conformance report over one or more fixture sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    /// Sink mode the run used.
    pub mode: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    pub fixtures: Vec<FixtureDigest>,
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Mode: {}\n", self.mode));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        if !self.fixtures.is_empty() {
            out.push_str("## Fixtures\n\n");
            out.push_str("| File | Family | Version | Cases | SHA-256 |\n");
            out.push_str("|------|--------|---------|-------|---------|\n");
            for f in &self.fixtures {
                out.push_str(&format!(
                    "| {} | {} | {} | {} | `{}` |\n",
                    f.path, f.family, f.version, f.cases, f.sha256
                ));
            }
            out.push('\n');
        }

        out.push_str("## Cases\n\n");
        out.push_str("| Case | Section | Mode | Len | Status |\n");
        out.push_str("|------|---------|------|-----|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                r.case_name, r.section, r.mode, r.actual_len, status
            ));
        }

        let failures: Vec<_> = self.summary.failures().collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```diff\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or(""));
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

fn hex_lower(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

/// SHA-256 of `data` as lower-case hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    use sha2::Digest;
    hex_lower(&sha2::Sha256::digest(data))
}
