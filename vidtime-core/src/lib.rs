//! Core library for measuring video running time from container metadata.
//!
//! This crate provides video file discovery, duration extraction via
//! ffprobe, ordered batch processing with progress events from a background
//! worker, and spreadsheet export of the accumulated results.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vidtime_core::{BatchEvent, find_video_files, spawn_batch, write_spreadsheet};
//!
//! let files = find_video_files(Path::new("videos")).unwrap();
//! let (events, worker) = spawn_batch(files);
//!
//! for event in events {
//!     match event {
//!         BatchEvent::Progress { percent } => println!("{percent}%"),
//!         BatchEvent::FileProcessed { name, minutes } => println!("{name}: {minutes}"),
//!         BatchEvent::Finished => break,
//!     }
//! }
//!
//! let records = worker.join().unwrap();
//! write_spreadsheet(Path::new("video_durations.xlsx"), &records).unwrap();
//! ```

pub mod batch;
pub mod discovery;
pub mod error;
pub mod events;
pub mod export;
pub mod probe;
pub mod worker;

// Re-exports for public API
pub use batch::{BatchSession, BatchState, run_batch};
pub use discovery::{VIDEO_EXTENSIONS, find_video_files, is_video_file};
pub use error::{CoreError, CoreResult};
pub use events::{BatchEvent, ChannelEmitter, EventDispatcher, EventHandler};
pub use export::{RUNTIME_HEADER, TITLE_HEADER, resolve_output_path, write_spreadsheet};
pub use probe::{DurationOutcome, compute_duration, duration_minutes, probe_video};
pub use worker::spawn_batch;

/// One measured video: the display file name and its running time in
/// minutes, rounded to two decimal places. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub name: String,
    pub minutes: f64,
}
