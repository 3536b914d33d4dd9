// vidtime-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidtime: Video running time measurement tool",
    long_about = "Measures video running time from container metadata (frame count and \
frame rate) and exports the results to a spreadsheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans a directory for video files, measures them, and exports a spreadsheet
    Scan(ScanArgs),
    /// Measures an explicit list of video files
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory containing video files
    #[arg(value_name = "INPUT_DIR", default_value = config::DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Destination spreadsheet (.xlsx is appended when missing)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_FILE",
        default_value = config::DEFAULT_OUTPUT_FILE
    )]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Video files to measure, in submission order
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Optional destination spreadsheet (.xlsx is appended when missing)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_defaults() {
        let cli = Cli::parse_from(["vidtime", "scan"]);

        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.input_dir, PathBuf::from(config::DEFAULT_INPUT_DIR));
                assert_eq!(args.output, PathBuf::from(config::DEFAULT_OUTPUT_FILE));
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_parse_scan_with_overrides() {
        let cli = Cli::parse_from(["vidtime", "scan", "footage", "--output", "report"]);

        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.input_dir, PathBuf::from("footage"));
                assert_eq!(args.output, PathBuf::from("report"));
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_parse_probe_files_in_order() {
        let cli = Cli::parse_from(["vidtime", "probe", "a.mp4", "b.mkv", "-o", "out.xlsx"]);

        match cli.command {
            Commands::Probe(args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.mp4"), PathBuf::from("b.mkv")]);
                assert_eq!(args.output, Some(PathBuf::from("out.xlsx")));
            }
            _ => panic!("Expected Probe command"),
        }
    }

    #[test]
    fn test_parse_probe_requires_files() {
        assert!(Cli::try_parse_from(["vidtime", "probe"]).is_err());
    }
}
