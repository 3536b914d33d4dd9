use std::fmt::Display;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use vidtime_core::{RUNTIME_HEADER, TITLE_HEADER, VideoRecord};

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text).bold().bright_white();
    let line = "=".repeat(50).bright_blue();

    println!("\n{}", line);
    println!("{}", heading);
    println!("{}\n", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

pub fn print_success(text: &str) {
    println!("{}", text.bright_green());
}

pub fn print_warning(text: &str) {
    println!("{}", text.yellow());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.bright_red().bold());
}

/// Percent-based progress bar driven by batch `Progress` events.
pub fn batch_progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("  Measuring: {pos:>3}% [{bar:30}] {msg}")
            .unwrap()
            .progress_chars("##."),
    );
    bar
}

/// Print the accumulated records as a two-column table, in order.
pub fn print_records_table(records: &[VideoRecord]) {
    let width = records
        .iter()
        .map(|record| record.name.chars().count())
        .chain([TITLE_HEADER.len()])
        .max()
        .unwrap_or(TITLE_HEADER.len());

    // Pad before coloring so ANSI escapes do not skew the column width.
    println!(
        "{}  {}",
        format!("{:<width$}", TITLE_HEADER).bold(),
        RUNTIME_HEADER.bold()
    );
    println!("{}", "-".repeat(width + RUNTIME_HEADER.len() + 2).blue());

    for record in records {
        println!("{:<width$}  {:>13.2}", record.name, record.minutes);
    }
}
