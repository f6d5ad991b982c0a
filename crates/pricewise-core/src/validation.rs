//! # Validation Module
//!
//! Input checks for the boundary layer that builds price observations from
//! user input.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User input ("Milk", "2", "Mega", "3.99")                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: names, quantities, prices, currency codes                 │
//! │       │                                                                 │
//! │       ├── invalid ──► ValidationError ──► shown to the user             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PriceObservation / ItemRecord ──► comparison engine                    │
//! │                                    (assumes finite, non-negative data)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricewise_core::validation::{validate_price, validate_quantity};
//!
//! assert_eq!(validate_quantity(2), Ok(2));
//! assert!(validate_price(f64::NAN).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_NAME_LENGTH, MAX_UNIT_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Required, trimmed, at most [`MAX_NAME_LENGTH`] characters.
fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a store name.
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::validate_store_name;
///
/// assert!(validate_store_name("Rami Levy").is_ok());
/// assert!(validate_store_name("  ").is_err());
/// ```
pub fn validate_store_name(name: &str) -> ValidationResult<()> {
    validate_name("store name", name)
}

/// Validates a shopping-list item name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item name", name)
}

/// Validates a shopping-list name.
pub fn validate_list_name(name: &str) -> ValidationResult<()> {
    validate_name("list name", name)
}

/// Validates an optional unit label ("kg", "bottles").
pub fn validate_unit(unit: Option<&str>) -> ValidationResult<()> {
    match unit {
        Some(unit) if unit.chars().count() > MAX_UNIT_LENGTH => Err(ValidationError::TooLong {
            field: "unit".to_string(),
            max: MAX_UNIT_LENGTH,
        }),
        _ => Ok(()),
    }
}

/// Validates an ISO 4217 currency code: exactly three ASCII letters.
///
/// Returns the code upper-cased.
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::validate_currency_code;
///
/// assert_eq!(validate_currency_code("ils").unwrap(), "ILS");
/// assert!(validate_currency_code("US$").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a three-letter ISO 4217 code".to_string(),
        });
    }

    Ok(code.to_ascii_uppercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a list quantity and narrows it to the engine's type.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(qty as u32)
}

/// Validates a stored price in cents.
///
/// Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(399).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a major-unit price before it is handed to the engine.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Parses a price typed by a user ("3.99") into stored cents.
///
/// ## Example
/// ```rust
/// use pricewise_core::money::Money;
/// use pricewise_core::validation::parse_price_input;
///
/// assert_eq!(parse_price_input(" 3.99 "), Ok(Money::from_cents(399)));
/// assert!(parse_price_input("free").is_err());
/// assert!(parse_price_input("-2").is_err());
/// ```
pub fn parse_price_input(input: &str) -> ValidationResult<Money> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let amount: f64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: format!("'{}' is not a number", input),
    })?;
    validate_price(amount)?;

    Money::from_major(amount).ok_or_else(|| ValidationError::NotFinite {
        field: "price".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_store_name() {
        assert!(validate_store_name("Whole Foods").is_ok());
        assert!(validate_store_name("Trader Joe's").is_ok());

        assert_eq!(
            validate_store_name(""),
            Err(ValidationError::Required {
                field: "store name".to_string()
            })
        );
        assert!(validate_store_name(&"S".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_name_counts_characters() {
        // 255 Hebrew letters are 510 bytes but still a valid name
        assert!(validate_item_name(&"ח".repeat(255)).is_ok());
        assert!(validate_item_name(&"ח".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_list_name() {
        assert!(validate_list_name("Weekly groceries").is_ok());
        assert!(validate_list_name("   ").is_err());
    }

    #[test]
    fn test_validate_unit() {
        assert!(validate_unit(None).is_ok());
        assert!(validate_unit(Some("kg")).is_ok());
        assert!(validate_unit(Some(&"x".repeat(51))).is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert_eq!(validate_currency_code("USD").unwrap(), "USD");
        assert_eq!(validate_currency_code(" eur ").unwrap(), "EUR");
        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("DOLLAR").is_err());
        assert!(validate_currency_code("U5D").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1), Ok(1));
        assert_eq!(validate_quantity(999), Ok(999));

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input("3.99"), Ok(Money::from_cents(399)));
        assert_eq!(parse_price_input("10"), Ok(Money::from_cents(1000)));
        assert_eq!(parse_price_input("0.125"), Ok(Money::from_cents(13)));
        assert!(matches!(
            parse_price_input(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_price_input("3,99"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price_input("inf"),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_price_input("1e300"),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(7.49).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert_eq!(
            validate_price(f64::NAN),
            Err(ValidationError::NotFinite {
                field: "price".to_string()
            })
        );
    }
}
