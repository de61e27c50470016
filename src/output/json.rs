//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing the scanned root, a
//! severity summary, the list of skills checked, and every finding.

use crate::finding::{Finding, RunReport};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    root: &'a Path,
    timestamp: &'a str,
    passed: bool,
    summary: Summary,
    skills: &'a [String],
    findings: &'a [Finding],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

/// Formats a [`RunReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &RunReport) -> String {
    let output = JsonOutput {
        root: &report.root,
        timestamp: &report.timestamp,
        passed: report.passed,
        summary: {
            // Single pass over findings instead of two separate iterations.
            let (errors, warnings) = report.count_by_severity();
            Summary { errors, warnings }
        },
        skills: &report.skills,
        findings: &report.findings,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
