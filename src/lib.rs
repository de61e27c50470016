//! # skillcheck
//!
//! Structural validation for AI agent skill directories.
//!
//! `skillcheck` scans a root directory for skill directories and validates
//! each one against the structural and metadata conventions of the skill
//! format: a required `SKILL.md` descriptor with YAML frontmatter declaring
//! a `name`, a `description`, and optionally a restricted `allowed-tools`
//! list. Errors fail the run; warnings are advisory and never do.
//! Candidates excluded by the repository's `.gitignore` rules are skipped
//! via `git check-ignore`, falling back to an unfiltered scan when git is
//! unavailable.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillcheck::{config::Config, gitignore::GitCheckIgnore, output, run};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = run::run_check(Path::new("./skills"), &config, &GitCheckIgnore)?;
//!
//! if report.passed {
//!     println!("All skills valid!");
//! } else {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! # Ok::<(), skillcheck::discover::DiscoverError>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]** — immutable run configuration from optional TOML.
//! 2. **[`discover`]** — enumerate candidate directories under the root.
//! 3. **[`gitignore`]** — drop gitignored candidates via the injectable
//!    [`gitignore::IgnoreOracle`] (fail-open).
//! 4. **[`frontmatter`]** — extract and decode the `SKILL.md` metadata block.
//! 5. **[`validator`]** — the ordered rule set applied to each candidate.
//! 6. **[`run`]** — orchestrate the pass and aggregate findings.
//! 7. **[`finding`]** — core data types ([`finding::Finding`], [`finding::RunReport`]).
//! 8. **[`output`]** — format reports as pretty text or JSON.

pub mod config;
pub mod discover;
pub mod finding;
pub mod frontmatter;
pub mod gitignore;
pub mod output;
pub mod run;
pub mod validator;
