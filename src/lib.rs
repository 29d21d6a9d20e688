//! LumiRail - archive JPEG photos into date folders
//!
//! This library provides the single-pass archive pipeline:
//! - Non-recursive scanning of the working directory for JPEG files
//! - EXIF capture date extraction with a fixed tag priority
//! - Planning of `YYYYMMDD/<timestamp>_<name>` destinations
//! - Moving files without ever overwriting
//! - A CSV session log and a textual progress bar

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod progress;
pub mod scan;
pub mod session_log;
pub mod time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use process::{FileOutcome, ProcessingSession, Processor};
pub use progress::{ConsoleProgress, ProgressReporter, render_progress};
