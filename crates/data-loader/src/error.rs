//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading listing documents.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is not valid JSON, or a record in it has the wrong shape
    #[error("Invalid JSON in {source_name}: {reason}")]
    JsonError { source_name: String, reason: String },

    /// Document parsed but is neither a listing array nor a known envelope
    #[error("Unrecognised document in {source_name}: expected an array of listings or an object with an `internships` or `data` array")]
    UnexpectedShape { source_name: String },

    /// Two listings share the same id
    #[error("Duplicate listing id: {id}")]
    DuplicateId { id: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
