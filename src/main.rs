mod cli;

use clap::Parser;
use cli::Cli;
use skillcheck::{config, gitignore::GitCheckIgnore, output, run};

fn main() {
    let cli = Cli::parse();

    let config = config::Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    // Resolve the root so that candidate paths and the git working
    // directory are absolute; a root that cannot be resolved is reported
    // by the enumerator below.
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let report = match run::run_check(&root, &config, &GitCheckIgnore) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    print!("{}", output::format_report(&report, &cli.format));

    std::process::exit(if report.passed { 0 } else { 1 });
}
