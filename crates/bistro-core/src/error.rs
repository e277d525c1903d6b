//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Capacity and lookup failures                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bistro-store errors (separate crate)                                  │
//! │  └── StoreError       - Menu file failures                             │
//! │                                                                         │
//! │  console errors (in app)                                               │
//! │  └── CommandError     - What a role session reports to the user        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CommandError → console output     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal: the operation that raised them leaves the
/// catalog, ticket or registry exactly as it was.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog already holds its maximum number of entries.
    #[error("Menu is full. Cannot add more than {max} items.")]
    MenuFull { max: usize },

    /// The ticket already holds its maximum number of lines.
    #[error("Order is full. Cannot add more than {max} items.")]
    TicketFull { max: usize },

    /// The line would push the ticket past the largest billable amount.
    #[error("Order total is too large. Line not added.")]
    TicketOverflow,

    /// No menu entry at the given 1-based position.
    ///
    /// ## When This Occurs
    /// - index is 0
    /// - index is past the end of the catalog
    /// - the entry at that position has an empty name
    #[error("Invalid menu item index: {index}")]
    ItemNotFound { index: usize },

    /// No table with the given number.
    #[error("Invalid table number: {number}")]
    TableNotFound { number: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
