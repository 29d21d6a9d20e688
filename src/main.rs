//! LumiRail - archive JPEG photos into date folders
//!
//! Run inside a folder of photos. Every `*.jpg` directly in the current
//! directory is moved to `YYYYMMDD/YYYYMMDD_HHMMSS_<name>.jpg` according to
//! its EXIF capture date, and the outcome is written to
//! `processing_log.csv`.

use anyhow::{Context, Result};
use clap::Parser;
use lumirail::{Cli, ConsoleProgress, Processor, logging};
use tracing::{error, info, warn};

// CLI Output Module
mod cli_output {
    //! Console output apart from the progress bar

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::{stderr, stdout};

    /// Print the version banner
    pub fn print_version(version: &str) {
        let _ = stdout().execute(Print(format!("LumiRail version: {}\n", version)));
    }

    /// Print a warning to stderr
    pub fn print_warning(msg: &str) {
        let _ = stderr().execute(Print(style("⚠ ").with(Color::Yellow).bold()));
        let _ = stderr().execute(Print(format!("{}\n", msg)));
    }

    /// Print a fatal error to stderr
    pub fn print_error(msg: &str) {
        let _ = stderr().execute(Print(style("✗ ").with(Color::Red).bold()));
        let _ = stderr().execute(Print(format!("{}\n", msg)));
    }
}

fn main() {
    if let Err(e) = run() {
        cli_output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let logging = logging::init(cli.verbose, cli.json_log, &logging::log_dirs());

    let version = env!("CARGO_PKG_VERSION");
    cli_output::print_version(version);
    info!(version, "LumiRail starting");

    for failure in &logging.failures {
        warn!(error = %format!("{:#}", failure), "Diagnostics log location unusable");
    }
    match logging.path {
        Some(ref path) => info!(log_file = %path.display(), "Log file location"),
        None => {
            let reason = logging
                .failures
                .last()
                .map(|e| format!("{:#}", e))
                .unwrap_or_default();
            cli_output::print_warning(&format!(
                "Diagnostics log disabled, continuing without it: {}",
                reason
            ));
        }
    }

    let config = cli.load_config()?;
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    let root = std::env::current_dir().context("Failed to determine the working directory")?;
    let processor = Processor::new(config, root.clone());

    let mut progress = ConsoleProgress::new();
    let session = processor.run(&mut progress);
    progress.finish();
    let session = session
        .inspect_err(|e| error!(error = %e, "Archive run aborted"))
        .with_context(|| format!("Archiving {} failed", root.display()))?;

    info!(
        session_log = %processor.log_path().display(),
        summary = %session.summary(),
        "Processing complete"
    );

    Ok(())
}
