//! SKILL.md frontmatter extraction and decoding.
//!
//! A descriptor file begins with a line of `---`, followed by a YAML
//! mapping, a closing `---` line, and arbitrary free-form content. This
//! module extracts the delimited block and decodes it with [`serde_yaml`];
//! each way the extraction can fail maps to its own [`FrontmatterError`]
//! variant so the validator can report a precise rule violation.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Frontmatter block delimiter.
pub const DELIMITER: &str = "---";

/// Classified frontmatter extraction/decoding failures.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The file does not begin with the `---` delimiter.
    #[error("missing YAML frontmatter (must start with ---)")]
    Missing,

    /// The opening delimiter is never closed.
    #[error("unterminated YAML frontmatter (must be enclosed in ---)")]
    Unterminated,

    /// The block is not valid YAML. The underlying syntax error is preserved.
    #[error("invalid YAML syntax: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The block is valid YAML but not a key/value mapping.
    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,
}

/// Extracts and decodes the frontmatter block from descriptor file content.
///
/// Splits on at most two `---` occurrences so that horizontal rules in the
/// free-form body are left untouched. An empty block decodes to an empty
/// mapping, not an error.
pub fn parse(content: &str) -> Result<Mapping, FrontmatterError> {
    if !content.starts_with(DELIMITER) {
        return Err(FrontmatterError::Missing);
    }

    let parts: Vec<&str> = content.splitn(3, DELIMITER).collect();
    if parts.len() < 3 {
        return Err(FrontmatterError::Unterminated);
    }

    let block = parts[1].trim();
    if block.is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(FrontmatterError::NotAMapping),
    }
}
