//! # Product Definitions
//!
//! A product is a name, a unit price and the pricing rule that turns a
//! scanned quantity into a group total.
//!
//! ## Rule Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PricingRule                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌──────────────────┐ │
//! │  │    Standard     │   │  BuyMultipleGetFree  │   │PercentageDiscount│ │
//! │  │  ─────────────  │   │  ──────────────────  │   │ ──────────────── │ │
//! │  │  price × qty    │   │  trigger_count       │   │ trigger_quantity │ │
//! │  │                 │   │  free_count          │   │ discount_percent │ │
//! │  └─────────────────┘   └──────────────────────┘   └──────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Definitions are immutable and validated on construction; there is no way
//! to build a `ProductDefinition` holding a rule the evaluator would reject.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{
    validate_price_cents, validate_product_name, validate_rule, ValidationResult,
};

// =============================================================================
// Pricing Rule
// =============================================================================

/// How a product group's total is computed from its scanned quantity.
///
/// Serialized internally tagged, e.g.
/// `{ "kind": "buy_multiple_get_free", "trigger_count": 2, "free_count": 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRule {
    /// Unit price times quantity.
    #[default]
    Standard,

    /// For every `trigger_count` paid units the next `free_count` are free.
    BuyMultipleGetFree { trigger_count: u32, free_count: u32 },

    /// `discount_percent` off the whole group once at least
    /// `trigger_quantity` units were scanned.
    PercentageDiscount {
        trigger_quantity: u32,
        discount_percent: u8,
    },
}

impl PricingRule {
    /// Returns true for rules that can lower a group total.
    pub fn is_promotional(&self) -> bool {
        !matches!(self, PricingRule::Standard)
    }
}

impl fmt::Display for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingRule::Standard => write!(f, "standard price"),
            PricingRule::BuyMultipleGetFree {
                trigger_count,
                free_count,
            } => write!(f, "buy {} get {} free", trigger_count, free_count),
            PricingRule::PercentageDiscount {
                trigger_quantity,
                discount_percent,
            } => write!(f, "{}% off {} or more", discount_percent, trigger_quantity),
        }
    }
}

// =============================================================================
// Product Definition
// =============================================================================

/// A product as seen by the checkout: identity, unit price and pricing rule.
///
/// ## Identity
/// `name` is the grouping key within a checkout session, compared by exact
/// value (case-sensitive, no trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDefinition {
    name: String,
    unit_price: Money,
    rule: PricingRule,
}

impl ProductDefinition {
    /// Creates a validated product definition.
    ///
    /// ## Errors
    /// - blank or overlong name
    /// - negative unit price
    /// - rule parameters out of range (zero trigger/free counts, zero
    ///   threshold, discount above 100%)
    ///
    /// ```rust
    /// use till_core::{PricingRule, ProductDefinition};
    ///
    /// let toothbrush = ProductDefinition::new(
    ///     "Toothbrush",
    ///     30,
    ///     PricingRule::BuyMultipleGetFree { trigger_count: 2, free_count: 1 },
    /// )
    /// .unwrap();
    /// assert_eq!(toothbrush.unit_price().cents(), 30);
    ///
    /// assert!(ProductDefinition::new("Apple", -1, PricingRule::Standard).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        unit_price_cents: i64,
        rule: PricingRule,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_cents(unit_price_cents)?;
        validate_rule(&rule)?;

        Ok(ProductDefinition {
            name,
            unit_price: Money::from_cents(unit_price_cents),
            rule,
        })
    }

    /// Creates a product charged at unit price times quantity.
    pub fn standard(name: impl Into<String>, unit_price_cents: i64) -> ValidationResult<Self> {
        Self::new(name, unit_price_cents, PricingRule::Standard)
    }

    /// Creates a "buy `trigger_count` get `free_count` free" product.
    pub fn buy_multiple_get_free(
        name: impl Into<String>,
        unit_price_cents: i64,
        trigger_count: u32,
        free_count: u32,
    ) -> ValidationResult<Self> {
        Self::new(
            name,
            unit_price_cents,
            PricingRule::BuyMultipleGetFree {
                trigger_count,
                free_count,
            },
        )
    }

    /// Creates a product with `discount_percent` off once `trigger_quantity`
    /// units are scanned.
    pub fn percentage_discount(
        name: impl Into<String>,
        unit_price_cents: i64,
        trigger_quantity: u32,
        discount_percent: u8,
    ) -> ValidationResult<Self> {
        Self::new(
            name,
            unit_price_cents,
            PricingRule::PercentageDiscount {
                trigger_quantity,
                discount_percent,
            },
        )
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn rule(&self) -> &PricingRule {
        &self.rule
    }

    /// Returns true when `other` carries the same price and rule.
    ///
    /// Names are not compared; callers use this after matching by name to
    /// detect a rescan with different terms.
    pub fn same_terms(&self, other: &ProductDefinition) -> bool {
        self.unit_price == other.unit_price && self.rule == other.rule
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
