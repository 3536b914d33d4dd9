// vidtime-cli/src/commands/probe.rs
//
// Explicit-list mode: measure the given files in submission order, with an
// optional spreadsheet export.

use vidtime_core::{CoreResult, write_spreadsheet};

use crate::cli::ProbeArgs;
use crate::commands::measure_batch;
use crate::output;

pub fn execute_probe(args: ProbeArgs) -> CoreResult<()> {
    output::print_heading("Video Running Time Measurement");
    println!("Measuring {} video file(s)...", args.files.len());

    let records = measure_batch(args.files);

    println!();
    output::print_records_table(&records);

    if let Some(destination) = args.output {
        if records.is_empty() {
            output::print_warning("No results to export; nothing was written.");
            return Ok(());
        }
        println!();
        match write_spreadsheet(&destination, &records) {
            Ok(path) => {
                output::print_success(&format!("Results saved to {}", path.display()));
            }
            Err(e) => {
                output::print_warning(
                    "Results were not written; retry with a different destination.",
                );
                return Err(e);
            }
        }
    }

    Ok(())
}
