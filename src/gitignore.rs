//! Gitignore-based candidate filtering.
//!
//! Candidates that the repository's ignore rules exclude should not be
//! validated. The check is delegated to `git check-ignore --stdin` — one
//! invocation per run, fed every candidate's relative path at once. The
//! oracle sits behind the [`IgnoreOracle`] trait so tests can substitute a
//! fake without spawning a process.
//!
//! Filtering is an optimization, not a correctness requirement: when the
//! oracle fails for any reason, [`filter_ignored`] emits one warning
//! finding and returns the candidate list unfiltered.

use crate::finding::Finding;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Rule id for the fail-open warning emitted when the oracle is unusable.
pub const RULE_GITIGNORE_SKIPPED: &str = "scan/gitignore-skipped";

/// Classified oracle failures. The `Display` text is what ends up in the
/// warning finding, suffixed by [`filter_ignored`].
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("git executable not found")]
    Unavailable,

    #[error("git check-ignore failed: {0}")]
    Failed(String),

    #[error("git check-ignore failed without message")]
    FailedSilently,
}

/// Decides which candidate paths the repository's ignore rules exclude.
///
/// `paths` are relative to `root`, each suffixed with `/` to mark it as a
/// directory. Returns the ignored subset with the trailing `/` stripped.
pub trait IgnoreOracle {
    fn check(&self, root: &Path, paths: &[String]) -> Result<HashSet<String>, OracleError>;
}

/// Production oracle: one `git check-ignore --stdin` invocation with the
/// root as working directory, candidates written path-per-line on stdin,
/// ignored paths read back from stdout.
///
/// git exits 0 when some paths matched and 1 when none did; both are
/// success here. Any other exit status, a missing `git` binary, or an I/O
/// failure on the pipes is an [`OracleError`].
pub struct GitCheckIgnore;

impl IgnoreOracle for GitCheckIgnore {
    fn check(&self, root: &Path, paths: &[String]) -> Result<HashSet<String>, OracleError> {
        let mut child = Command::new("git")
            .arg("check-ignore")
            .arg("--stdin")
            .current_dir(root)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    OracleError::Unavailable
                } else {
                    OracleError::Failed(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(paths.join("\n").as_bytes())
                .map_err(|e| OracleError::Failed(e.to_string()))?;
            // Dropping stdin closes the pipe; check-ignore reads to EOF.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| OracleError::Failed(e.to_string()))?;

        if !matches!(output.status.code(), Some(0) | Some(1)) {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(if stderr.is_empty() {
                OracleError::FailedSilently
            } else {
                OracleError::Failed(stderr)
            });
        }

        let ignored = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim().trim_end_matches('/').to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Ok(ignored)
    }
}

/// Returns the subset of `dirs` not excluded by the oracle.
///
/// On oracle failure the run proceeds unfiltered: one warning finding is
/// appended and the original list is returned unchanged. An empty
/// candidate list never consults the oracle.
pub fn filter_ignored(
    dirs: Vec<PathBuf>,
    root: &Path,
    oracle: &dyn IgnoreOracle,
    findings: &mut Vec<Finding>,
) -> Vec<PathBuf> {
    if dirs.is_empty() {
        return dirs;
    }

    let rels: Vec<String> = dirs.iter().map(|d| relative_dir_path(d, root)).collect();
    let query: Vec<String> = rels.iter().map(|r| format!("{r}/")).collect();

    match oracle.check(root, &query) {
        Ok(ignored) => dirs
            .into_iter()
            .zip(rels)
            .filter(|(_, rel)| !ignored.contains(rel))
            .map(|(dir, _)| dir)
            .collect(),
        Err(e) => {
            findings.push(Finding::run_warning(
                RULE_GITIGNORE_SKIPPED,
                format!("{e}; skipping .gitignore filtering"),
            ));
            dirs
        }
    }
}

fn relative_dir_path(dir: &Path, root: &Path) -> String {
    dir.strip_prefix(root)
        .unwrap_or(dir)
        .to_string_lossy()
        .trim_end_matches('/')
        .to_string()
}
