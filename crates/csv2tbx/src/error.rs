//! Error types for the CSV to TBX conversion pipeline.

use thiserror::Error;

/// The error type for all conversion operations.
///
/// Every failure aborts the run: there is no retry, no partial recovery,
/// and no silent skipping of bad rows.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input unreadable, output unwritable, or directory creation failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input (quoting violations and other parse
    /// failures).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A record with fewer than the two required columns.
    #[error("malformed record at row {row}: expected at least 2 columns, found {columns}")]
    MalformedRecord { row: usize, columns: usize },

    /// Tree-to-markup conversion failure.
    #[error(transparent)]
    Serialize(#[from] glossia_serde::SerdeError),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
