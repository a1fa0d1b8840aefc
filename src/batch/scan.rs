use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-name fragments of editor metadata and OS files that sit next to the
/// trajectory logs.
pub const EXCLUDED_MARKERS: [&str; 2] = [".meta", ".DS_Store"];

/// Extension of segment files picked up for aggregation.
pub const SEGMENT_EXTENSION: &str = ".txt";

/// Trajectory logs in `dir`, sorted by file name.
pub fn list_input_logs(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files(dir, |name| {
        !EXCLUDED_MARKERS.iter().any(|marker| name.contains(marker))
    })
}

/// Segment files in `dir`, sorted by file name.
pub fn list_segment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files(dir, |name| name.ends_with(SEGMENT_EXTENSION))
}

fn list_files(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let keep_it = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(&keep);
        if keep_it {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
