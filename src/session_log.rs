//! CSV session log
//!
//! One header row followed by one row per processed file, in processing
//! order. Fields are joined with commas as-is; nothing is quoted or escaped.

use crate::error::Result;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header row of the session log
pub const LOG_HEADER: &str = "Status,FileName,DateTaken,NewFilePath,ErrorMessage";

/// Status column of a log row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    Failed,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogStatus::Success => f.write_str("Success"),
            LogStatus::Failed => f.write_str("Failed"),
        }
    }
}

/// One row of the session log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub status: LogStatus,
    pub file_name: String,
    pub date_taken: String,
    pub new_file_path: String,
    pub error_message: String,
}

impl LogEntry {
    /// Render the row without a trailing newline
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.status, self.file_name, self.date_taken, self.new_file_path, self.error_message
        )
    }
}

/// Open session log, held for the whole run
pub struct SessionLog {
    path: PathBuf,
    writer: BufWriter<File>,
    rows: usize,
}

impl SessionLog {
    /// Create (or truncate) the log file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{LOG_HEADER}")?;
        writer.flush()?;

        debug!(?path, "Session log created");
        Ok(Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    /// Append one complete row and flush it to disk
    pub fn record(&mut self, entry: &LogEntry) -> Result<()> {
        writeln!(self.writer, "{}", entry.to_csv_row())?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and close the log
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        debug!(path = ?self.path, rows = self.rows, "Session log closed");
        Ok(())
    }
}
