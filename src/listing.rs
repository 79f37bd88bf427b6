//! Directory reading: one-shot listing of a directory's immediate children

use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};

/// One immediate child of a directory, snapshotted at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    /// Byte size; meaningful only for files.
    pub size: u64,
}

/// Read, filter, and sort the immediate children of `path`.
///
/// Directories are always kept; regular files only when `include_files` is
/// set. Symlinks and special files are dropped. The result is sorted by name
/// in byte-wise ascending order, directories and files interleaved.
///
/// A directory with no qualifying children yields an empty vector, not an
/// error. Failures to open or iterate the listing are mapped onto
/// [`TreeError`] with the offending path attached.
pub fn read_entries(path: &Path, include_files: bool) -> Result<Vec<Entry>> {
    let dir = fs::read_dir(path).map_err(|e| TreeError::from_io(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in dir {
        let dir_entry = dir_entry.map_err(|e| TreeError::from_io(e, path))?;
        let file_type = dir_entry
            .file_type()
            .map_err(|e| TreeError::from_io(e, &dir_entry.path()))?;

        if !file_type.is_dir() && !(include_files && file_type.is_file()) {
            continue;
        }

        let size = if file_type.is_file() {
            dir_entry
                .metadata()
                .map_err(|e| TreeError::from_io(e, &dir_entry.path()))?
                .len()
        } else {
            0
        };

        entries.push(Entry {
            name: dir_entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
            size,
        });
    }

    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    Ok(entries)
}
