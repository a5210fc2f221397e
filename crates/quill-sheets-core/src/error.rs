//! Error types for quill-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a workbook document
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed cell address
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Malformed or illegal cell range (degenerate or inverted corners)
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row {0} out of bounds (valid: 1..={1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column {0} out of bounds (valid: 1..={1})")]
    ColumnOutOfBounds(u32, u16),

    /// Merge range collides with an existing merge on the same sheet
    #[error("Merge range {0} overlaps an existing merge range")]
    MergeConflict(String),

    /// A style name, id, or reference could not be resolved
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Removing the last remaining sheet is not allowed
    #[error("Cannot remove the only sheet in the workbook")]
    LastSheet,

    /// A cell was assigned a value that is not a scalar
    #[error("Cell value must be a scalar: {0}")]
    TypeMismatch(String),

    /// Unrecognized file property key
    #[error("Unknown file property key: {0}")]
    PropertyKey(String),

    /// Unsupported workbook protection algorithm
    #[error("Unsupported protection algorithm: {0}")]
    InvalidProtection(String),

    /// Chart configuration could not be normalized or was missing
    #[error("Invalid chart: {0}")]
    Chart(String),

    /// The external renderer failed
    #[error("Render failed: {0}")]
    Render(String),

    /// I/O error writing the rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
