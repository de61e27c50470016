//! The skill validation rule engine.
//!
//! Applies an ordered set of structural and metadata checks to one
//! candidate directory, appending classified findings to the run's shared
//! list. Later checks still run after earlier ones fail, except where a
//! check's prerequisite data is unavailable — those cases return early
//! with whatever was collected so far.
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `structure/missing-skill-md` | Error | `SKILL.md` must exist |
//! | `structure/unreadable-skill-md` | Error | `SKILL.md` must be readable |
//! | `structure/missing-frontmatter` | Error | File must start with `---` |
//! | `structure/unterminated-frontmatter` | Error | Frontmatter must be closed by `---` |
//! | `structure/invalid-yaml` | Error | Frontmatter must decode to a YAML mapping |
//! | `structure/missing-name` | Error | Required `name` field |
//! | `structure/missing-description` | Error | Required `description` field |
//! | `structure/name-mismatch` | Error | `name` must equal the directory name |
//! | `structure/invalid-dir-name` | Error | Directory name must be lowercase-kebab-case |
//! | `structure/dir-name-too-long` | Error | Directory name must be ≤ 64 characters |
//! | `structure/description-too-long` | Warning | Description must be ≤ 1024 characters |
//! | `structure/unknown-tool` | Warning | `allowed-tools` entries must be recognized |
//!
//! A skill with zero errors (warnings allowed) is structurally valid.

use crate::config::Config;
use crate::finding::Finding;
use crate::frontmatter::{self, FrontmatterError};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use std::sync::LazyLock;

/// Name of the descriptor file required in every skill directory.
pub const DESCRIPTOR_FILE: &str = "SKILL.md";

/// Lowercase-alphanumeric runs joined by single hyphens; no leading,
/// trailing, or double hyphens.
static RE_DIR_NAME: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Applies the full rule set to one candidate directory at a time.
///
/// Holds the immutable configuration (tool allow-list, length limits) for
/// the lifetime of a run; construct once and reuse for every candidate.
pub struct Validator<'a> {
    config: &'a Config,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Validator { config }
    }

    /// Validates `dir`, appending findings for every violated rule.
    ///
    /// Validation of one skill is fully independent of others: nothing here
    /// unwinds past this boundary, every failure becomes a finding.
    pub fn validate(&self, dir: &Path, findings: &mut Vec<Finding>) {
        let skill_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let skill_md = dir.join(DESCRIPTOR_FILE);

        // Rule 1: the descriptor must exist. Nothing else can be checked
        // without it.
        if !skill_md.exists() {
            findings.push(Finding::error(
                "structure/missing-skill-md",
                &skill_name,
                format!("Missing required {DESCRIPTOR_FILE} file"),
            ));
            return;
        }

        // Rule 2: the descriptor must be readable.
        let content = match std::fs::read_to_string(&skill_md) {
            Ok(c) => c,
            Err(e) => {
                findings.push(Finding::error(
                    "structure/unreadable-skill-md",
                    &skill_name,
                    format!("Error reading {DESCRIPTOR_FILE}: {e}"),
                ));
                return;
            }
        };

        // Rule 3: frontmatter must extract and decode. Field checks are
        // impossible without a mapping.
        let metadata = match frontmatter::parse(&content) {
            Ok(m) => m,
            Err(e) => {
                findings.push(Finding::error(
                    frontmatter_rule_id(&e),
                    &skill_name,
                    e.to_string(),
                ));
                return;
            }
        };

        // Rules 4 and 5: required fields. Subsequent checks depend on them,
        // so their absence ends validation for this skill.
        let Some(name_value) = metadata.get("name") else {
            findings.push(Finding::error(
                "structure/missing-name",
                &skill_name,
                "Missing required 'name' field in frontmatter",
            ));
            return;
        };
        let Some(description) = metadata.get("description") else {
            findings.push(Finding::error(
                "structure/missing-description",
                &skill_name,
                "Missing required 'description' field in frontmatter",
            ));
            return;
        };

        // Rule 6: the declared name must equal the directory name exactly.
        // A non-string value can never equal it.
        if name_value.as_str() != Some(skill_name.as_str()) {
            findings.push(Finding::error(
                "structure/name-mismatch",
                &skill_name,
                format!(
                    "Name field '{}' doesn't match directory name '{}'",
                    scalar_display(name_value),
                    skill_name
                ),
            ));
        }

        // Rule 7: directory naming convention.
        if !RE_DIR_NAME.is_match(&skill_name) {
            findings.push(Finding::error(
                "structure/invalid-dir-name",
                &skill_name,
                "Invalid directory name (must be lowercase letters, numbers, and hyphens only)",
            ));
        }

        // Rule 8: directory name length.
        let max_name = self.config.limits.max_name_length;
        if skill_name.chars().count() > max_name {
            findings.push(Finding::error(
                "structure/dir-name-too-long",
                &skill_name,
                format!("Directory name exceeds {max_name} characters"),
            ));
        }

        // Rule 9: description length, advisory only.
        let max_desc = self.config.limits.max_description_length;
        if let Some(desc) = description.as_str() {
            if desc.chars().count() > max_desc {
                findings.push(Finding::warning(
                    "structure/description-too-long",
                    &skill_name,
                    format!("Description exceeds recommended {max_desc} characters"),
                ));
            }
        }

        // Rule 10: recognized tool identifiers, advisory only.
        self.check_allowed_tools(&metadata, &skill_name, findings);
    }

    /// `allowed-tools` is validated only in its comma-separated string
    /// shape. Other shapes (e.g. a YAML sequence) pass through unchecked.
    fn check_allowed_tools(&self, metadata: &Mapping, skill_name: &str, findings: &mut Vec<Finding>) {
        let Some(tools) = metadata.get("allowed-tools").and_then(Value::as_str) else {
            return;
        };
        for tool in tools.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !self.config.is_known_tool(tool) {
                findings.push(Finding::warning(
                    "structure/unknown-tool",
                    skill_name,
                    format!("Unknown tool '{tool}' in allowed-tools"),
                ));
            }
        }
    }
}

fn frontmatter_rule_id(e: &FrontmatterError) -> &'static str {
    match e {
        FrontmatterError::Missing => "structure/missing-frontmatter",
        FrontmatterError::Unterminated => "structure/unterminated-frontmatter",
        FrontmatterError::InvalidYaml(_) | FrontmatterError::NotAMapping => {
            "structure/invalid-yaml"
        }
    }
}

/// Renders a YAML scalar for an error message. Non-scalar values fall back
/// to their serialized form.
fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| String::from("?")),
    }
}
