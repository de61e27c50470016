use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation outcome.
///
/// Findings are append-only: they are created at the point a check fails and
/// collected into the run's shared list, never mutated afterwards. `skill`
/// is `None` for run-level findings that are not tied to one directory
/// (e.g. the gitignore-oracle warning).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    pub skill: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn error(rule_id: &str, skill: &str, message: impl Into<String>) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            severity: Severity::Error,
            skill: Some(skill.to_string()),
            message: message.into(),
        }
    }

    pub fn warning(rule_id: &str, skill: &str, message: impl Into<String>) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            severity: Severity::Warning,
            skill: Some(skill.to_string()),
            message: message.into(),
        }
    }

    /// A warning not attributed to any one skill directory.
    pub fn run_warning(rule_id: &str, message: impl Into<String>) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            severity: Severity::Warning,
            skill: None,
            message: message.into(),
        }
    }
}

/// Aggregate of one validation run over a root directory.
///
/// `skills` lists every directory that was validated, in scan order, whether
/// or not it produced findings — the pretty formatter uses it to render the
/// per-skill progress lines. `passed` is `true` iff no finding has
/// [`Severity::Error`]; warnings never fail a run, and an empty `skills`
/// list ("no skill directories found") is a success.
#[derive(Debug, serde::Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub timestamp: String,
    pub skills: Vec<String>,
    pub findings: Vec<Finding>,
    pub passed: bool,
}

impl RunReport {
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Count errors and warnings in a single pass.
    ///
    /// Returns `(errors, warnings)`. Prefer this over calling
    /// `error_count()` + `warning_count()` separately when both values are
    /// needed at the same time (e.g. JSON output).
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.findings
            .iter()
            .fold((0, 0), |(e, w), f| match f.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }

    /// Returns `true` if any error finding is attributed to `skill`.
    pub fn skill_has_errors(&self, skill: &str) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Error && f.skill.as_deref() == Some(skill))
    }
}
