//! # Error Types
//!
//! Domain-specific error types for pricewise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricewise-core errors (this file)                                     │
//! │  ├── CoreError        - Boundary failures (currency mismatch)          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pricewise-cli errors (app)                                            │
//! │  └── CliError         - Config, file and JSON failures                 │
//! │                                                                         │
//! │  The comparison engine itself has no error type: it is total.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning stored observations into engine input.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// An observation is priced in a currency other than the working one.
    ///
    /// ## When This Occurs
    /// A list mixes prices recorded in different currencies. The engine
    /// does one currency per call and never converts.
    #[error("Currency mismatch: expected {expected}, found {found} at {store}")]
    CurrencyMismatch {
        expected: String,
        found: String,
        store: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the boundary layer before data reaches the engine; the engine
/// assumes finite, non-negative prices.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Floating-point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g. currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_mismatch_message() {
        let err = CoreError::CurrencyMismatch {
            expected: "USD".to_string(),
            found: "ILS".to_string(),
            store: "Rami Levy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Currency mismatch: expected USD, found ILS at Rami Levy"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "store name".to_string(),
        };
        assert_eq!(err.to_string(), "store name is required");

        let err = ValidationError::NotFinite {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a finite number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
