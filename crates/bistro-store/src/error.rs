//! # Store Error Types
//!
//! Menu file failures. Both are non-fatal: the caller reports them and the
//! in-memory catalog stays as it was.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be created or written.
    #[error("Unable to open file for writing: {path} ({reason})")]
    WriteFailed { path: String, reason: String },

    /// The file could not be opened or read as text.
    #[error("Unable to open file for reading: {path} ({reason})")]
    ReadFailed { path: String, reason: String },
}

impl StoreError {
    pub fn write_failed(path: impl Into<String>, err: &std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    pub fn read_failed(path: impl Into<String>, err: &std::io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
