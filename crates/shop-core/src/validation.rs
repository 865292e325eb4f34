//! # Validation Module
//!
//! Field checks the catalog runs before it constructs an item.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command line (shop-cli)                                      │
//! │  ├── Word count per command                                            │
//! │  └── Numeric parsing (ids, amounts, ratings)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog (shop-core)                                          │
//! │  ├── Id uniqueness, computer existence, type tags                      │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Computer aggregate                                           │
//! │  └── At most one item of each kind                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The value types in [`crate::product`] never validate; only the catalog
//! calls into this module.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must be greater than zero
pub fn validate_id(id: u32) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "Id".to_string(),
        });
    }

    Ok(())
}

/// Highest accepted price for a single item: 1,000,000,000.00.
///
/// A computer carries at most one item per component and peripheral kind,
/// so its summed price stays far below `i64::MAX` cents.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000_000);

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (bundled freebies)
/// - Must not exceed [`MAX_PRICE`]
///
/// ## Example
/// ```rust
/// use shop_core::money::Money;
/// use shop_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "Price".to_string(),
            min: 0,
            max: MAX_PRICE.whole(),
        });
    }

    Ok(())
}

/// Validates an overall performance rating.
///
/// ## Rules
/// - Must be a finite number
/// - Must be greater than zero
pub fn validate_performance(performance: f64) -> ValidationResult<()> {
    if !performance.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "Overall Performance".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if performance <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "Overall Performance".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a manufacturer name (non-empty after trimming).
pub fn validate_manufacturer(manufacturer: &str) -> ValidationResult<()> {
    require("Manufacturer", manufacturer)
}

/// Validates a model name (non-empty after trimming).
pub fn validate_model(model: &str) -> ValidationResult<()> {
    require("Model", model)
}

/// Runs every product-level check in the order the catalog reports them.
pub fn validate_product_fields(
    id: u32,
    manufacturer: &str,
    model: &str,
    price: Money,
    performance: f64,
) -> ValidationResult<()> {
    validate_id(id)?;
    validate_manufacturer(manufacturer)?;
    validate_model(model)?;
    validate_price(price)?;
    validate_performance(performance)
}

// =============================================================================
// Unit Tests
// =============================================================================
