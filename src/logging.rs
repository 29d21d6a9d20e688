//! Diagnostics logging setup
//!
//! The diagnostics log goes to `<exe dir>/Log/` when that is writable and to
//! the system temp directory otherwise. Failing to open it never stops a
//! run; the caller gets the errors back to show as warnings.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// An opened diagnostics log file
#[derive(Debug)]
pub struct OpenedLog {
    pub file: File,
    pub path: PathBuf,
}

/// State kept alive for the duration of the program
pub struct Logging {
    /// Flushes the non-blocking writer when dropped
    pub guard: Option<WorkerGuard>,
    /// Where the diagnostics log is written, if anywhere
    pub path: Option<PathBuf>,
    /// Why preferred locations were not used
    pub failures: Vec<anyhow::Error>,
}

/// One file name per run
pub fn log_file_name() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("LumiRail_{}.log", timestamp)
}

/// Candidate log directories, most preferred first
pub fn log_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join("Log"));
    }
    dirs.push(std::env::temp_dir().join("LumiRail"));
    dirs
}

fn create_log_file(dir: &Path, file_name: &str) -> Result<OpenedLog> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(file_name);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(OpenedLog { file, path })
}

/// Open the log in the first directory that allows it
///
/// Returns the errors of every directory tried before the one that worked,
/// or of all of them when none did.
pub fn open_log_file(dirs: &[PathBuf], file_name: &str) -> (Option<OpenedLog>, Vec<anyhow::Error>) {
    let mut failures = Vec::new();
    for dir in dirs {
        match create_log_file(dir, file_name) {
            Ok(log) => return (Some(log), failures),
            Err(e) => failures.push(e),
        }
    }
    (None, failures)
}

/// Install the global subscriber
///
/// Stdout is left to the version line and the progress bar; stderr only gets
/// events in verbose mode.
pub fn init(verbose: bool, json: bool, dirs: &[PathBuf]) -> Logging {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (opened, failures) = open_log_file(dirs, &log_file_name());
    let path = opened.as_ref().map(|log| log.path.clone());

    let (writer, guard) = match opened {
        Some(log) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(log.file);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = writer
        .clone()
        .filter(|_| json)
        .map(|w| fmt::layer().json().with_ansi(false).with_writer(w));
    let text_layer = writer
        .filter(|_| !json)
        .map(|w| fmt::layer().with_ansi(false).with_writer(w));
    let console = verbose.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(json_layer)
        .with(text_layer)
        .init();

    Logging {
        guard,
        path,
        failures,
    }
}
