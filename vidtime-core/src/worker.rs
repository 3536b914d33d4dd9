//! Background batch execution.
//!
//! One worker thread runs a batch without yielding control until finished,
//! publishing `BatchEvent`s over an ordered channel. The submitting side
//! consumes events in arrival order and reads the record collection only
//! after `Finished`, by joining the worker.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;

use crate::VideoRecord;
use crate::batch;
use crate::events::{BatchEvent, ChannelEmitter};

/// Spawns a background worker for one batch.
///
/// The receiver yields the batch's events in emission order, ending with
/// `BatchEvent::Finished`; the join handle returns the records in input
/// order.
pub fn spawn_batch(paths: Vec<PathBuf>) -> (Receiver<BatchEvent>, JoinHandle<Vec<VideoRecord>>) {
    let (tx, rx) = crossbeam_channel::unbounded();

    let handle = thread::spawn(move || {
        let emitter = ChannelEmitter::new(tx);
        batch::run_batch(&paths, &emitter)
    });

    (rx, handle)
}
