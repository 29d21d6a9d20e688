//! Archive planning and file relocation
//!
//! A photo with capture timestamp `T` and file name `N` is archived to
//! `<root>/<T[..8]>/<T>_<N>`. Existing files are never overwritten.

use crate::error::{Error, Result};
use crate::time::CaptureTimestamp;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Destination derived from a capture timestamp and an original file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePlan {
    /// `YYYYMMDD` folder name
    pub folder_name: String,
    /// Full destination directory (`root/folder_name`)
    pub folder: PathBuf,
    /// New file name, `<timestamp>_<original name>`
    pub file_name: OsString,
}

impl ArchivePlan {
    /// Derive the destination for a file
    ///
    /// Fails with `MalformedDate` when the timestamp has fewer than 8
    /// characters.
    pub fn derive(root: &Path, timestamp: &CaptureTimestamp, original_name: &OsStr) -> Result<Self> {
        let folder_name = timestamp
            .folder_name()
            .ok_or_else(|| Error::MalformedDate {
                timestamp: timestamp.to_string(),
            })?
            .to_string();

        let mut file_name = OsString::from(format!("{timestamp}_"));
        file_name.push(original_name);

        Ok(Self {
            folder: root.join(&folder_name),
            folder_name,
            file_name,
        })
    }

    /// Full destination path of the archived file
    pub fn destination(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }

    /// Create the destination folder if it does not exist yet
    pub fn create_folder(&self) -> Result<()> {
        if !self.folder.is_dir() {
            debug!(folder = ?self.folder, "Creating archive folder");
        }
        fs::create_dir_all(&self.folder)?;
        Ok(())
    }
}

/// What happened to a file handed to `relocate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// The file was renamed into place
    Moved,
    /// Something already occupied the destination; the source was left alone
    Skipped,
}

/// Move `source` to `destination` unless the destination already exists
pub fn relocate(source: &Path, destination: &Path) -> Result<Relocation> {
    if destination.try_exists()? {
        warn!(
            ?source,
            ?destination,
            "Destination already exists, leaving source in place"
        );
        return Ok(Relocation::Skipped);
    }

    fs::rename(source, destination)?;
    debug!(?source, ?destination, "Moved file");
    Ok(Relocation::Moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_plan() {
        let root = Path::new("/photos");
        let ts = CaptureTimestamp::from_text("2024:03:02 08:05:09");
        let plan = ArchivePlan::derive(root, &ts, OsStr::new("img1.jpg")).unwrap();

        assert_eq!(plan.folder_name, "20240302");
        assert_eq!(plan.folder, PathBuf::from("/photos/20240302"));
        assert_eq!(plan.file_name, OsString::from("20240302_080509_img1.jpg"));
        assert_eq!(
            plan.destination(),
            PathBuf::from("/photos/20240302/20240302_080509_img1.jpg")
        );
    }

    #[test]
    fn test_derive_plan_with_unnormalized_timestamp() {
        let ts = CaptureTimestamp::from_text("2024:03:02");
        let plan = ArchivePlan::derive(Path::new("/photos"), &ts, OsStr::new("a.jpg")).unwrap();
        assert_eq!(plan.folder_name, "20240302");
        assert_eq!(plan.file_name, OsString::from("20240302_a.jpg"));
    }

    #[test]
    fn test_derive_plan_short_timestamp_fails() {
        let ts = CaptureTimestamp::from_text("2024:03");
        let err = ArchivePlan::derive(Path::new("/photos"), &ts, OsStr::new("a.jpg")).unwrap_err();
        match err {
            Error::MalformedDate { timestamp } => assert_eq!(timestamp, "202403"),
            other => panic!("unexpected error: {other}"),
        }

        let empty = CaptureTimestamp::from_text("");
        assert!(ArchivePlan::derive(Path::new("/photos"), &empty, OsStr::new("a.jpg")).is_err());
    }

    #[test]
    fn test_create_folder_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let ts = CaptureTimestamp::from_text("2024:03:02 08:05:09");
        let plan = ArchivePlan::derive(dir.path(), &ts, OsStr::new("a.jpg")).unwrap();

        plan.create_folder().unwrap();
        plan.create_folder().unwrap();
        assert!(dir.path().join("20240302").is_dir());
    }

    #[test]
    fn test_relocate_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("b.jpg");
        fs::write(&source, b"photo").unwrap();

        assert_eq!(relocate(&source, &destination).unwrap(), Relocation::Moved);
        assert!(!source.exists());
        assert_eq!(fs::read(&destination).unwrap(), b"photo");
    }

    #[test]
    fn test_relocate_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("b.jpg");
        fs::write(&source, b"new").unwrap();
        fs::write(&destination, b"old").unwrap();

        assert_eq!(relocate(&source, &destination).unwrap(), Relocation::Skipped);
        assert_eq!(fs::read(&source).unwrap(), b"new");
        assert_eq!(fs::read(&destination).unwrap(), b"old");
    }

    #[test]
    fn test_relocate_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = relocate(&dir.path().join("gone.jpg"), &dir.path().join("b.jpg")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
