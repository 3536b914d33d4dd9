//! File discovery module for finding video files to measure.
//!
//! Scans the top level of the provided directory for files carrying one of
//! the supported video extensions (case-insensitive). Subdirectories are not
//! searched.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Extensions accepted by the directory scan, lowercase without the dot.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "wmv", "flv"];

/// Returns true when `path` carries one of the supported video extensions.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Finds video files eligible for measurement in the specified directory.
///
/// The listing is sorted by file name so batch order is deterministic across
/// platforms.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths to the discovered video files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoFilesFound)` - If no video files are found
pub fn find_video_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            is_video_file(&path).then_some(path)
        })
        .collect();

    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
