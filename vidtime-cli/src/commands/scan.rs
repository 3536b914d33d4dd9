// vidtime-cli/src/commands/scan.rs
//
// Directory mode: scan a folder for video files, measure every file, and
// export the results to a spreadsheet.

use vidtime_core::{CoreError, CoreResult, find_video_files, write_spreadsheet};

use crate::cli::ScanArgs;
use crate::commands::measure_batch;
use crate::output;

pub fn execute_scan(args: ScanArgs) -> CoreResult<()> {
    output::print_heading("Video Running Time Scan");
    output::print_info("Input directory", args.input_dir.display());
    output::print_info(
        "Started",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
    );

    let files = match find_video_files(&args.input_dir) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            output::print_warning("No video files found in the input directory.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    log::info!(
        "Found {} video file(s) in {}",
        files.len(),
        args.input_dir.display()
    );
    println!("Measuring {} video file(s)...", files.len());

    let records = measure_batch(files);

    println!();
    output::print_records_table(&records);
    println!();

    match write_spreadsheet(&args.output, &records) {
        Ok(path) => {
            output::print_success(&format!("Results saved to {}", path.display()));
            Ok(())
        }
        Err(e) => {
            output::print_warning("Results were not written; retry with a different destination.");
            Err(e)
        }
    }
}
