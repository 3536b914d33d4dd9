//! Sequential batch measurement with progress reporting.
//!
//! A batch is one ordered group of video paths measured together. Files are
//! processed strictly in submission order by a single runner; per-file
//! failures degrade to a zero duration so one bad file never aborts a batch.

use std::path::{Path, PathBuf};

use crate::VideoRecord;
use crate::error::{CoreError, CoreResult};
use crate::events::{BatchEvent, EventHandler};
use crate::probe;

/// Runs one batch, emitting events to `handler` as items complete.
///
/// Before item `i` the handler sees `Progress { floor(i / len * 100) }`;
/// after measuring it, `FileProcessed` with the file's display name. The
/// final events are `Progress { 100 }` then `Finished`. An empty batch emits
/// `Finished` only.
pub fn run_batch(paths: &[PathBuf], handler: &dyn EventHandler) -> Vec<VideoRecord> {
    let mut records = Vec::with_capacity(paths.len());

    if paths.is_empty() {
        handler.handle(&BatchEvent::Finished);
        return records;
    }

    for (i, path) in paths.iter().enumerate() {
        let percent = (i * 100 / paths.len()) as u8;
        handler.handle(&BatchEvent::Progress { percent });

        let minutes = probe::compute_duration(path);
        let name = display_name(path);
        handler.handle(&BatchEvent::FileProcessed {
            name: name.clone(),
            minutes,
        });
        records.push(VideoRecord { name, minutes });
    }

    handler.handle(&BatchEvent::Progress { percent: 100 });
    handler.handle(&BatchEvent::Finished);

    records
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Processing,
}

/// Session-level batch coordinator.
///
/// Holds the ordered record collection for the lifetime of the session; the
/// collection is only appended to, and only cleared by dropping the session.
/// One batch may be in flight at a time; an overlapping submission is
/// rejected.
pub struct BatchSession {
    state: BatchState,
    records: Vec<VideoRecord>,
}

impl BatchSession {
    pub fn new() -> Self {
        Self {
            state: BatchState::Idle,
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Records accumulated across every batch submitted so far, in
    /// processing order. Read this only after the batch's `Finished` event.
    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    /// Runs one batch and appends its records to the session collection.
    /// Returns the number of records the batch produced.
    pub fn submit(&mut self, paths: &[PathBuf], handler: &dyn EventHandler) -> CoreResult<usize> {
        if self.state == BatchState::Processing {
            return Err(CoreError::BatchInProgress);
        }
        self.state = BatchState::Processing;
        let batch = run_batch(paths, handler);
        let count = batch.len();
        self.records.extend(batch);
        self.state = BatchState::Idle;
        Ok(count)
    }
}

impl Default for BatchSession {
    fn default() -> Self {
        Self::new()
    }
}
