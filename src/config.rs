//! Configuration types for the photo archiver

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file extension picked up by the scanner
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Default name of the CSV session log
pub const DEFAULT_LOG_FILE_NAME: &str = "processing_log.csv";

/// Configuration for the photo archiver
///
/// The scan root is always the current working directory and is not part
/// of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extension to archive, compared case-sensitively
    pub extension: String,

    /// Name of the CSV session log written into the working directory
    pub log_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.into(),
            log_file_name: DEFAULT_LOG_FILE_NAME.into(),
        }
    }
}

impl Config {
    /// Check if a file extension is the one being archived
    pub fn matches_extension(&self, ext: &str) -> bool {
        ext == self.extension
    }

    /// Path of the session log inside the given root
    pub fn log_path(&self, root: &Path) -> PathBuf {
        root.join(&self.log_file_name)
    }

    /// Reject values that would make the run meaningless
    pub fn validate(&self) -> crate::Result<()> {
        if self.extension.is_empty() {
            return Err(crate::Error::Config("extension must not be empty".into()));
        }
        if self.log_file_name.is_empty() {
            return Err(crate::Error::Config("log_file_name must not be empty".into()));
        }
        if Path::new(&self.log_file_name).components().count() != 1 {
            return Err(crate::Error::Config(format!(
                "log_file_name must be a plain file name, got '{}'",
                self.log_file_name
            )));
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}
