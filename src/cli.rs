//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// LumiRail - archive JPEG photos into date folders
///
/// Scans the current directory for JPEG files, reads the capture date from
/// their EXIF metadata and moves each one into a YYYYMMDD folder. Every
/// file gets a row in processing_log.csv.
#[derive(Parser, Debug, Default)]
#[command(name = "lumirail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics, mirrored to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the diagnostics log as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Load the configuration file if one was given, otherwise use defaults
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match self.config {
            Some(ref path) => Config::load_from_file(path)?,
            None => Config::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["lumirail"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(!cli.json_log);
        assert_eq!(cli.load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["lumirail", "-v", "--json-log", "-C", "archive.toml"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json_log);
        assert_eq!(cli.config, Some(PathBuf::from("archive.toml")));
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["lumirail", "/some/dir"]).is_err());
    }
}
