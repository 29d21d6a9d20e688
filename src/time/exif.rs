//! EXIF metadata reading for JPEG files

use super::MetadataEntry;
use crate::error::{Error, Result};
use exif::{Field, In, Reader, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, trace};

/// Read the primary-image EXIF entries of a file
///
/// The file handle is closed before this returns, so the caller is free to
/// move the file afterwards. A JPEG without an EXIF segment yields no
/// entries rather than an error.
pub fn read_metadata_entries(path: &Path) -> Result<Vec<MetadataEntry>> {
    let exif = {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        match Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => {
                debug!(?path, "No EXIF data in file");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::ExifRead {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    };

    let entries: Vec<MetadataEntry> = exif
        .fields()
        .filter(|field| field.ifd_num == In::PRIMARY)
        .map(|field| MetadataEntry::new(field.tag.number(), raw_bytes(field)))
        .collect();

    trace!(?path, count = entries.len(), "Read EXIF entries");
    Ok(entries)
}

/// Raw byte buffer of a field value
///
/// ASCII values keep their NUL terminators, other types fall back to the
/// displayed value.
fn raw_bytes(field: &Field) -> Vec<u8> {
    match &field.value {
        Value::Ascii(parts) => parts
            .iter()
            .flat_map(|part| part.iter().copied().chain(std::iter::once(0)))
            .collect(),
        Value::Undefined(bytes, _) => bytes.clone(),
        _ => field.display_value().to_string().into_bytes(),
    }
}
