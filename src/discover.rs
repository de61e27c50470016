//! Candidate skill directory enumeration.
//!
//! A candidate is an immediate child of the root that is a directory, is
//! not hidden, and whose name is not in the configured exclusion set
//! (conventionally `scripts/` and `docs/`). Results are sorted by name so
//! that repeated runs over an unchanged tree report findings in the same
//! order.

use crate::config::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while enumerating candidates. An invalid root is the one
/// unrecoverable startup condition of the whole tool.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("root directory not found: {0}")]
    NotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the candidate skill directories directly under `root`, sorted
/// alphabetically by directory name.
pub fn skill_dirs(root: &Path, config: &Config) -> Result<Vec<PathBuf>, DiscoverError> {
    if !root.exists() {
        return Err(DiscoverError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DiscoverError::NotADirectory(root.to_path_buf()));
    }

    let entries = std::fs::read_dir(root).map_err(|source| DiscoverError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .filter(|p| {
            let name = p
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            !name.starts_with('.') && !config.excluded_dirs.iter().any(|d| *d == name)
        })
        .collect();

    dirs.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(dirs)
}
