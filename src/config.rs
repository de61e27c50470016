//! Configuration loading and management.
//!
//! All knobs of the validator — the directory names excluded from
//! enumeration, the recognized tool identifiers, and the metadata length
//! limits — live in an immutable [`Config`] constructed once per run and
//! injected into the components that need it.
//!
//! # Configuration file
//!
//! The default configuration file is `skillcheck.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use skillcheck::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.is_known_tool("Read"));
//! ```
//!
//! Every field carries a sensible default, so the file can be omitted
//! entirely.

use std::path::Path;

/// Main configuration for a validation run.
///
/// Loaded from a TOML file (typically `skillcheck.toml`).
///
/// # Examples
///
/// ```toml
/// excluded_dirs = ["scripts", "docs", "templates"]
///
/// [limits]
/// max_description_length = 2048
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory names skipped during enumeration (tooling and docs
    /// locations that are never skills).
    pub excluded_dirs: Vec<String>,
    /// Tool identifiers accepted in the `allowed-tools` frontmatter field.
    pub known_tools: Vec<String>,
    /// Metadata length limits.
    pub limits: LimitsConfig,
}

/// Length limits applied by the validator.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum directory name length; longer names are an error.
    pub max_name_length: usize,
    /// Maximum description length; longer descriptions are a warning.
    pub max_description_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            excluded_dirs: vec!["scripts".to_string(), "docs".to_string()],
            known_tools: [
                "Read",
                "Write",
                "Edit",
                "Bash",
                "Grep",
                "Glob",
                "WebFetch",
                "WebSearch",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_name_length: 64,
            max_description_length: 1024,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skillcheck.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("skillcheck.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Returns `true` if `tool` is a recognized tool identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillcheck::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.is_known_tool("Grep"));
    /// assert!(!config.is_known_tool("Sleep"));
    /// ```
    pub fn is_known_tool(&self, tool: &str) -> bool {
        self.known_tools.iter().any(|k| k == tool)
    }
}
