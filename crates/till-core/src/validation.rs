//! # Validation Module
//!
//! Construction-time checks for product definitions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Bad Input Stops                              │
//! │                                                                         │
//! │  ProductDefinition::new(...)                                           │
//! │  ├── validate_product_name                                             │
//! │  ├── validate_price_cents                                              │
//! │  └── validate_rule  ← THIS MODULE                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Checkout::scan          never validates, never fails                  │
//! │  pricing::compute_*      total over every input                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_discount_percent, validate_trigger_count};
//!
//! assert!(validate_trigger_count(2).is_ok());
//! assert!(validate_trigger_count(0).is_err());
//! assert!(validate_discount_percent(101).is_err());
//! ```

use crate::error::ValidationError;
use crate::product::PricingRule;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// The name itself is never trimmed or normalized: grouping compares names
/// by exact value.
///
/// ```rust
/// use till_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Toothbrush").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the paid-unit count of a buy-N-get-M-free rule.
///
/// Zero would make every unit free, so it is rejected here rather than
/// discovered at pricing time.
pub fn validate_trigger_count(count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "trigger_count".to_string(),
        });
    }

    Ok(())
}

/// Validates the free-unit count of a buy-N-get-M-free rule.
pub fn validate_free_count(count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "free_count".to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity threshold of a percentage discount.
pub fn validate_trigger_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "trigger_quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percent(percent: u8) -> ValidationResult<()> {
    if percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount_percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Rule Validator
// =============================================================================

/// Validates every parameter of a pricing rule.
///
/// ```rust
/// use till_core::validation::validate_rule;
/// use till_core::PricingRule;
///
/// assert!(validate_rule(&PricingRule::Standard).is_ok());
/// assert!(validate_rule(&PricingRule::BuyMultipleGetFree {
///     trigger_count: 0,
///     free_count: 1,
/// })
/// .is_err());
/// ```
pub fn validate_rule(rule: &PricingRule) -> ValidationResult<()> {
    match *rule {
        PricingRule::Standard => Ok(()),
        PricingRule::BuyMultipleGetFree {
            trigger_count,
            free_count,
        } => {
            validate_trigger_count(trigger_count)?;
            validate_free_count(free_count)
        }
        PricingRule::PercentageDiscount {
            trigger_quantity,
            discount_percent,
        } => {
            validate_trigger_quantity(trigger_quantity)?;
            validate_discount_percent(discount_percent)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
