//! Error types for the photo archiver

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for archiver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the photo archiver
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read EXIF data from {path}: {message}")]
    ExifRead { path: PathBuf, message: String },

    #[error("Unable to obtain capture date")]
    DateNotFound,

    #[error("Capture date '{timestamp}' has fewer than 8 digits, cannot derive archive folder")]
    MalformedDate { timestamp: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory listing error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
