use clap::Parser;
use skillcheck::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillcheck",
    version,
    about = "Structural validation for AI agent skill directories"
)]
pub struct Cli {
    /// Root directory to scan for skill directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
