//! # Validation Module
//!
//! Input rules applied before the catalog, tickets or tables are touched.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console prompt ──► parse (number? decimal?) ──► THIS MODULE ──► mutate │
//! │                                                                         │
//! │  price        must be >= 0                                              │
//! │  quantity     must be >= 1                                              │
//! │  table number must be within 1..=table count                            │
//! │  menu index   must be within 1..=catalog length                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::validation::{validate_quantity, validate_table_number};
//!
//! assert!(validate_quantity(2).is_ok());
//! assert!(validate_table_number(21, 20).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a login name: must not be blank.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Example
/// ```rust
/// use bistro_core::money::Money;
/// use bistro_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(999)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an order quantity (must be at least 1).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a 1-based table number against the number of tables.
pub fn validate_table_number(number: i64, table_count: usize) -> ValidationResult<usize> {
    if number < 1 || number > table_count as i64 {
        return Err(ValidationError::OutOfRange {
            field: "table number".to_string(),
            min: 1,
            max: table_count as i64,
        });
    }

    Ok(number as usize)
}

/// Validates a capacity setting (must allow at least one entry).
pub fn validate_capacity(field: &str, capacity: usize) -> ValidationResult<()> {
    if capacity == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
