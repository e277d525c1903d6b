//! # Console Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Role session action                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CommandError>                                         │  │
//! │  │         │                                                        │  │
//! │  │  CoreError ──┐                                                   │  │
//! │  │  StoreError ─┴──► CommandError { code, message } ──► reported,   │  │
//! │  │                                                     session goes  │  │
//! │  │                                                     on            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ConsoleError (stdin closed, stdout broken) ──► ends the driver loop   │
//! │  AppError (bad config) ──────────────────────► exits before the loop   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use bistro_core::{CoreError, ValidationError};
use bistro_store::StoreError;
use thiserror::Error;

// =============================================================================
// Command Error
// =============================================================================

/// What a failed command reports back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message shown to the user
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Menu item or table does not exist
    NotFound,

    /// Input failed a validation rule
    Validation,

    /// Catalog or ticket is full
    Capacity,

    /// Menu file could not be read or written
    Storage,

    /// Table is in the wrong state for the request
    Unavailable,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Validation, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Unavailable, message)
    }

    /// Capacity and file errors belong on the error stream.
    pub fn is_error_stream(&self) -> bool {
        matches!(self.code, ErrorCode::Capacity | ErrorCode::Storage)
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::MenuFull { .. } | CoreError::TicketFull { .. } => ErrorCode::Capacity,
            CoreError::ItemNotFound { .. } | CoreError::TableNotFound { .. } => {
                ErrorCode::NotFound
            }
            CoreError::Validation(_) | CoreError::TicketOverflow => ErrorCode::Validation,
        };
        CommandError::new(code, err.to_string())
    }
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        tracing::warn!(error = %err, "Menu file operation failed");
        let message = match err {
            StoreError::WriteFailed { .. } => "Unable to open file for writing.",
            StoreError::ReadFailed { .. } => "Unable to open file for reading.",
        };
        CommandError::new(ErrorCode::Storage, message)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

/// Convenience type alias for command results.
pub type CommandResult<T> = Result<T, CommandError>;

// =============================================================================
// Console Error
// =============================================================================

/// Failures of the interactive stream itself.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end of file.
    #[error("Input closed")]
    Closed,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

// =============================================================================
// Application Error
// =============================================================================

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file could not be read.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration values break a rule.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::InvalidConfig(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
