//! Error types for csvify-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in csvify-core
///
/// Most lenient operations recover locally and never produce these; they
/// surface from the strict variants and from configuration mismatches.
#[derive(Debug, Error)]
pub enum Error {
    /// Resolved column names do not match the width of the data table
    #[error("Column count mismatch: data has {expected} columns, got {actual} names")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Numeric text could not be parsed after locale conversion
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The naming prompt failed to produce an answer
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl Error {
    /// Create a new prompt error with a message
    pub fn prompt<S: Into<String>>(msg: S) -> Self {
        Error::Prompt(msg.into())
    }
}
