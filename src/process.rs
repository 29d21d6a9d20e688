//! Archive driver
//!
//! Handles the core loop of:
//! - Scanning the working directory once
//! - Extracting the capture timestamp of each photo
//! - Planning and performing the move into its date folder
//! - Writing a session log row and a progress update per file

use crate::archive::{ArchivePlan, Relocation, relocate};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::progress::ProgressReporter;
use crate::scan::scan_directory;
use crate::session_log::{LogEntry, LogStatus, SessionLog};
use crate::time::exif::read_metadata_entries;
use crate::time::{CaptureTimestamp, extract_capture_timestamp};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, error, info, span, warn};

/// Result of processing a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// Moved into its archive folder
    Archived {
        timestamp: CaptureTimestamp,
        destination: PathBuf,
    },
    /// Destination was already occupied, source left in place.
    /// Logged as a success with the computed destination.
    AlreadyArchived {
        timestamp: CaptureTimestamp,
        destination: PathBuf,
    },
    /// Processing stopped at some step; the file was not moved
    Failed {
        timestamp: Option<CaptureTimestamp>,
        destination: Option<PathBuf>,
        error: Error,
    },
}

impl FileOutcome {
    fn failed(error: Error) -> Self {
        FileOutcome::Failed {
            timestamp: None,
            destination: None,
            error,
        }
    }

    pub fn status(&self) -> LogStatus {
        match self {
            FileOutcome::Archived { .. } | FileOutcome::AlreadyArchived { .. } => LogStatus::Success,
            FileOutcome::Failed { .. } => LogStatus::Failed,
        }
    }

    /// Build the session log row for this outcome
    pub fn log_entry(&self, source: &Path) -> LogEntry {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());

        let (timestamp, destination, error_message) = match self {
            FileOutcome::Archived {
                timestamp,
                destination,
            }
            | FileOutcome::AlreadyArchived {
                timestamp,
                destination,
            } => (Some(timestamp), Some(destination), String::new()),
            FileOutcome::Failed {
                timestamp,
                destination,
                error,
            } => (timestamp.as_ref(), destination.as_ref(), error.to_string()),
        };

        LogEntry {
            status: self.status(),
            file_name,
            date_taken: timestamp.map(|t| t.to_string()).unwrap_or_default(),
            new_file_path: destination
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            error_message,
        }
    }
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSession {
    total: usize,
    processed: usize,
    archived: usize,
    already_archived: usize,
    failed: usize,
}

impl ProcessingSession {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Count one finished file
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        match outcome {
            FileOutcome::Archived { .. } => self.archived += 1,
            FileOutcome::AlreadyArchived { .. } => self.already_archived += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn archived(&self) -> usize {
        self.archived
    }

    pub fn already_archived(&self) -> usize {
        self.already_archived
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn summary(&self) -> String {
        format!(
            "Total: {}, Archived: {}, Already archived: {}, Failed: {}",
            self.total, self.archived, self.already_archived, self.failed
        )
    }
}

/// Archives the photos of one directory
pub struct Processor {
    config: Config,
    root: PathBuf,
}

impl Processor {
    /// Create a processor rooted at `root`, which is both scanned and archived into
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.config.log_path(&self.root)
    }

    /// Run the archive pipeline over every matching file
    ///
    /// Only a failure to list the directory or to write the session log is
    /// returned as an error; per-file problems end up in the log.
    pub fn run(&self, reporter: &mut dyn ProgressReporter) -> Result<ProcessingSession> {
        let _span = span!(Level::INFO, "archive_run", root = ?self.root).entered();

        info!("Scanning working directory...");
        let files = scan_directory(&self.root, &self.config)?;
        info!(count = files.len(), "Found photos");

        let mut log = SessionLog::create(&self.log_path())?;
        let mut session = ProcessingSession::new(files.len());

        for file in &files {
            let outcome = self.process_file(file);
            log.record(&outcome.log_entry(file))?;
            session.record(&outcome);
            reporter.report(session.processed(), session.total());
        }

        log.finish()?;
        info!(summary = %session.summary(), "Archive run complete");
        Ok(session)
    }

    /// Process a single file
    ///
    /// Never fails; every problem is folded into `FileOutcome::Failed`.
    pub fn process_file(&self, source: &Path) -> FileOutcome {
        let _file_span = span!(Level::DEBUG, "process_file", ?source).entered();

        let entries = match read_metadata_entries(source) {
            Ok(entries) => entries,
            Err(e) => {
                error!(?source, error = %e, "Failed to read metadata");
                return FileOutcome::failed(e);
            }
        };

        let Some(timestamp) = extract_capture_timestamp(&entries) else {
            warn!(?source, "No capture date tag found");
            return FileOutcome::failed(Error::DateNotFound);
        };

        let original_name = source.file_name().unwrap_or(source.as_os_str());

        let plan = match ArchivePlan::derive(&self.root, &timestamp, original_name) {
            Ok(plan) => plan,
            Err(e) => {
                error!(?source, %timestamp, error = %e, "Failed to plan archive destination");
                return FileOutcome::Failed {
                    timestamp: Some(timestamp),
                    destination: None,
                    error: e,
                };
            }
        };

        if let Err(e) = plan.create_folder() {
            error!(?source, folder = ?plan.folder, error = %e, "Failed to create archive folder");
            return FileOutcome::Failed {
                timestamp: Some(timestamp),
                destination: None,
                error: e,
            };
        }

        let destination = plan.destination();
        match relocate(source, &destination) {
            Ok(Relocation::Moved) => {
                info!(?source, ?destination, %timestamp, "Archived file");
                FileOutcome::Archived {
                    timestamp,
                    destination,
                }
            }
            Ok(Relocation::Skipped) => {
                debug!(?source, ?destination, "Already archived");
                FileOutcome::AlreadyArchived {
                    timestamp,
                    destination,
                }
            }
            Err(e) => {
                error!(?source, ?destination, error = %e, "Failed to move file");
                FileOutcome::Failed {
                    timestamp: Some(timestamp),
                    destination: Some(destination),
                    error: e,
                }
            }
        }
    }
}
