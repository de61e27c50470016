//! Run orchestration.
//!
//! [`run_check`] is the main entry-point: it enumerates candidate
//! directories, narrows them through the gitignore oracle, validates each
//! one sequentially, and assembles the final [`RunReport`]. The findings
//! list is owned here and passed by reference into the validator; one
//! skill's failures never abort processing of the remainder.

use crate::config::Config;
use crate::discover::{self, DiscoverError};
use crate::finding::{Finding, RunReport, Severity};
use crate::gitignore::{self, IgnoreOracle};
use crate::validator::Validator;
use std::path::Path;

/// Runs the complete validation pass over every skill directory under `root`.
///
/// # Pipeline
///
/// 1. Enumerate immediate child directories ([`discover::skill_dirs`]).
/// 2. Drop gitignored candidates ([`gitignore::filter_ignored`], fail-open).
/// 3. Validate each remaining directory in name order.
/// 4. Assemble the [`RunReport`]; `passed` iff no error finding exists.
///
/// Zero candidates after filtering is an explicit success with no findings.
///
/// # Errors
///
/// Only an invalid root surfaces as an `Err` — every per-skill failure is
/// reported as a finding instead.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skillcheck::{config::Config, gitignore::GitCheckIgnore, run};
///
/// let config = Config::load(None).expect("failed to load config");
/// let report = run::run_check(Path::new("./skills"), &config, &GitCheckIgnore)?;
///
/// std::process::exit(if report.passed { 0 } else { 1 });
/// # Ok::<(), skillcheck::discover::DiscoverError>(())
/// ```
pub fn run_check(
    root: &Path,
    config: &Config,
    oracle: &dyn IgnoreOracle,
) -> Result<RunReport, DiscoverError> {
    let mut findings: Vec<Finding> = Vec::new();

    let candidates = discover::skill_dirs(root, config)?;
    let candidates = gitignore::filter_ignored(candidates, root, oracle, &mut findings);

    let validator = Validator::new(config);
    let mut skills = Vec::with_capacity(candidates.len());
    for dir in &candidates {
        skills.push(skill_name(dir));
        validator.validate(dir, &mut findings);
    }

    let passed = !findings.iter().any(|f| f.severity == Severity::Error);

    Ok(RunReport {
        root: root.to_path_buf(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        skills,
        findings,
        passed,
    })
}

/// Extracts the skill name from a directory path.
///
/// Returns the last path component or `"unknown"` when the path has no
/// file-name segment (e.g., `/`).
fn skill_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
