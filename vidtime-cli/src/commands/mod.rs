// vidtime-cli/src/commands/mod.rs
//
// Command implementations, one module per subcommand.

pub mod probe;
pub mod scan;

use std::path::PathBuf;

use vidtime_core::{BatchEvent, VideoRecord, spawn_batch};

use crate::output;

/// Runs one batch on a background worker, driving the progress bar and
/// printing each result as it arrives. The record collection is read only
/// after the worker signals completion.
pub(crate) fn measure_batch(paths: Vec<PathBuf>) -> Vec<VideoRecord> {
    let (events, worker) = spawn_batch(paths);
    let bar = output::batch_progress_bar();

    for event in events {
        match event {
            BatchEvent::Progress { percent } => bar.set_position(u64::from(percent)),
            BatchEvent::FileProcessed { name, minutes } => {
                bar.println(format!("  {name}: {minutes:.2} min"));
            }
            BatchEvent::Finished => break,
        }
    }
    bar.finish_and_clear();

    match worker.join() {
        Ok(records) => records,
        Err(_) => {
            output::print_error("Measurement worker terminated unexpectedly");
            Vec::new()
        }
    }
}
