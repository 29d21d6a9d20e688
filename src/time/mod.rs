//! Capture time extraction
//!
//! This module turns the EXIF entries of a photo into a capture timestamp
//! token:
//! - `exif` reads the raw metadata entries out of a JPEG file
//! - `extract_capture_timestamp` picks the first candidate date tag and
//!   normalizes its digits into `YYYYMMDD_HHMMSS`

pub mod exif;

use std::fmt;
use tracing::trace;

/// EXIF tag: DateTimeOriginal, when the photo was taken
pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
/// EXIF tag: DateTime, when the file was last modified
pub const TAG_DATE_TIME: u16 = 0x0132;
/// EXIF tag: DateTimeDigitized, when the image was digitized
pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;

/// Date tags to look for, in priority order
pub const DATE_TAGS: [u16; 3] = [
    TAG_DATE_TIME_ORIGINAL,
    TAG_DATE_TIME,
    TAG_DATE_TIME_DIGITIZED,
];

/// Number of digits in a complete `YYYYMMDDHHMMSS` value
const FULL_DATE_DIGITS: usize = 14;

/// Number of leading characters naming the archive folder (`YYYYMMDD`)
pub const FOLDER_NAME_LEN: usize = 8;

/// A single metadata entry: tag identifier and its raw value bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub tag: u16,
    pub raw: Vec<u8>,
}

impl MetadataEntry {
    pub fn new(tag: u16, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            raw: raw.into(),
        }
    }
}

/// Capture timestamp token
///
/// Either normalized (`YYYYMMDD_HHMMSS`) when at least 14 digits were found,
/// or the bare digit string otherwise, which may be short or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTimestamp(String);

impl CaptureTimestamp {
    /// Build a token from the text of a date tag
    pub fn from_text(text: &str) -> Self {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() >= FULL_DATE_DIGITS {
            Self(format!("{}_{}", &digits[..8], &digits[8..FULL_DATE_DIGITS]))
        } else {
            Self(digits)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYYMMDD` folder name, if the token is long enough to have one
    pub fn folder_name(&self) -> Option<&str> {
        self.0.get(..FOLDER_NAME_LEN)
    }
}

impl fmt::Display for CaptureTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the capture timestamp among a file's metadata entries
///
/// Tags are tried in `DATE_TAGS` order. The first tag present decides the
/// result, even when its value yields too few digits to be usable; later
/// tags are never consulted. Returns `None` only when no date tag exists.
pub fn extract_capture_timestamp(entries: &[MetadataEntry]) -> Option<CaptureTimestamp> {
    for tag in DATE_TAGS {
        if let Some(entry) = entries.iter().find(|e| e.tag == tag) {
            let text = String::from_utf8_lossy(&entry.raw);
            let timestamp = CaptureTimestamp::from_text(&text);
            trace!(tag, %timestamp, "Found date tag");
            return Some(timestamp);
        }
    }

    None
}
