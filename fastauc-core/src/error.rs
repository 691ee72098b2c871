//! Structured error types for the fastauc workspace.

use thiserror::Error;

/// Unified error type for all fastauc operations.
#[derive(Debug, Error)]
pub enum AucError {
    /// One of the two classes is absent, so the ROC curve is undefined.
    #[error(
        "degenerate input: found {positives} positive and {negatives} negative samples, \
         AUC needs at least one of each"
    )]
    DegenerateInput { positives: u64, negatives: u64 },

    /// Invalid input (empty sequences, length mismatch, NaN values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (malformed numbers or documents)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error (file not found, broken pipe, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AucError {
    /// Whether this error comes from the AUC engine rather than from
    /// argument validation or input reading.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, AucError::DegenerateInput { .. })
    }
}

/// Convenience alias used throughout the fastauc workspace.
pub type Result<T> = std::result::Result<T, AucError>;
