//! Directory scanning

use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// List the files directly inside `root` whose extension matches the config
///
/// Not recursive. A symlink to a regular file is listed under the link's own
/// name; dangling links are skipped. The result is sorted by file name and is
/// a snapshot: files appearing later are not picked up. Any error reading the
/// directory is returned to the caller.
pub fn scan_directory(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        // Follows symlinks
        if !entry.path().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| config.matches_extension(ext))
            .unwrap_or(false);

        if matches {
            files.push(entry.into_path());
        } else {
            trace!(path = ?entry.path(), "Ignoring non-matching file");
        }
    }

    debug!(?root, count = files.len(), "Scanned directory");
    Ok(files)
}
