// vidtime-cli/src/config.rs
//
// Defines default configuration constants for the `vidtime-cli` application.

/// Directory scanned for video files when none is given.
pub const DEFAULT_INPUT_DIR: &str = "videos";

/// Spreadsheet written by `scan` when no destination is given.
pub const DEFAULT_OUTPUT_FILE: &str = "video_durations.xlsx";
