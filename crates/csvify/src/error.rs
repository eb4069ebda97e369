//! Error type for the sheet pipeline

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while processing a sheet
#[derive(Debug, Error)]
pub enum Error {
    /// Naming or assembly failed
    #[error(transparent)]
    Core(#[from] csvify_core::Error),

    /// Serialization failed
    #[error(transparent)]
    Csv(#[from] csvify_csv::CsvError),
}
