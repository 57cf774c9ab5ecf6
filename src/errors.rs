use thiserror::Error;

/// Custom error types for the summary formatter
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document error: {0}")]
    Document(String),

    #[error("No table in document: add_table must be called before {operation}")]
    MissingTable { operation: &'static str },

    #[error("Cell ({row}, {col}) is out of bounds for the current table")]
    CellOutOfBounds { row: usize, col: usize },
}

/// Result type specific to summary operations
pub type SummaryResult<T> = Result<T, SummaryError>;
