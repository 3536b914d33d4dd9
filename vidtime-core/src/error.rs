use thiserror::Error;

/// Custom error types for vidtime
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No video files found in the input directory")]
    NoFilesFound,

    #[error("A batch is already being processed")]
    BatchInProgress,

    #[error("No records to export")]
    NoRecords,

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for vidtime operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
