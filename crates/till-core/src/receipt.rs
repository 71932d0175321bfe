//! # Receipt
//!
//! Immutable priced result of a checkout session.
//!
//! ## Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout groups (first-seen order)                                     │
//! │    Apple ×1, Orange ×1, Toothbrush ×3                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ReceiptBuilder::group ──► pricing::compute_group_total                 │
//! │         │                    30      40      60                         │
//! │         ▼                                                               │
//! │  Receipt { items: [Apple, Orange, Toothbrush], total_price: 130 }       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  total_major_units() → 1.30   (presentation only)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The builder does no rule dispatch of its own; every price comes from the
//! [`pricing`](crate::pricing) module.

use serde::Serialize;
use tracing::trace;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing;
use crate::product::ProductDefinition;

// =============================================================================
// Line Item
// =============================================================================

/// One product group on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLineItem {
    /// Definition of the first scan of this product name.
    pub product: ProductDefinition,

    /// Number of scans, always at least 1.
    pub quantity: u32,

    /// Group total after the product's pricing rule, in cents.
    pub total_price: Money,
}

impl ReceiptLineItem {
    /// Amount the pricing rule took off the standard price.
    pub fn savings(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity) - self.total_price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A priced receipt.
///
/// ## Invariants
/// - One line item per distinct product name, in first-scan order
/// - `total_price` is the sum of the line totals and never negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[ts(as = "String")]
    checkout_id: Uuid,
    items: Vec<ReceiptLineItem>,
    total_price: Money,
}

impl Receipt {
    /// Session this receipt was generated from.
    pub fn checkout_id(&self) -> Uuid {
        self.checkout_id
    }

    pub fn items(&self) -> &[ReceiptLineItem] {
        &self.items
    }

    /// Total in cents.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Total in major currency units, rounded to two decimals (130 → 1.30).
    pub fn total_major_units(&self) -> f64 {
        self.total_price.to_major_units()
    }

    /// Looks up a line item by exact product name.
    pub fn item(&self, name: &str) -> Option<&ReceiptLineItem> {
        self.items.iter().find(|i| i.product.name() == name)
    }

    /// Number of units scanned across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Amount saved by promotions across all lines.
    pub fn total_savings(&self) -> Money {
        self.items.iter().map(ReceiptLineItem::savings).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Assembles a [`Receipt`] from ordered `(product, quantity)` groups.
///
/// ```rust
/// use till_core::{ProductDefinition, ReceiptBuilder};
/// use uuid::Uuid;
///
/// let apple = ProductDefinition::standard("Apple", 30).unwrap();
/// let brush = ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 2, 1).unwrap();
///
/// let receipt = ReceiptBuilder::new(Uuid::nil())
///     .group(&apple, 1)
///     .group(&brush, 3)
///     .build();
///
/// assert_eq!(receipt.items().len(), 2);
/// assert_eq!(receipt.total_price().cents(), 90);
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    checkout_id: Uuid,
    items: Vec<ReceiptLineItem>,
}

impl ReceiptBuilder {
    pub fn new(checkout_id: Uuid) -> Self {
        ReceiptBuilder {
            checkout_id,
            items: Vec::new(),
        }
    }

    /// Prices one group and appends it. Empty groups are skipped.
    pub fn group(mut self, product: &ProductDefinition, quantity: u32) -> Self {
        if quantity == 0 {
            trace!(product = product.name(), "Skipping empty group");
            return self;
        }

        let total_price =
            pricing::compute_group_total(product.rule(), product.unit_price(), quantity);

        self.items.push(ReceiptLineItem {
            product: product.clone(),
            quantity,
            total_price,
        });
        self
    }

    /// Sums the line totals into the final receipt.
    pub fn build(self) -> Receipt {
        let total_price = self.items.iter().map(|i| i.total_price).sum();

        Receipt {
            checkout_id: self.checkout_id,
            items: self.items,
            total_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> ProductDefinition {
        ProductDefinition::standard("Apple", 30).unwrap()
    }

    fn orange() -> ProductDefinition {
        ProductDefinition::standard("Orange", 40).unwrap()
    }

    fn toothbrush() -> ProductDefinition {
        ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 2, 1).unwrap()
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = ReceiptBuilder::new(Uuid::nil()).build();
        assert!(receipt.is_empty());
        assert!(receipt.total_price().is_zero());
        assert_eq!(receipt.total_major_units(), 0.0);
    }

    #[test]
    fn test_mixed_receipt() {
        let receipt = ReceiptBuilder::new(Uuid::nil())
            .group(&apple(), 1)
            .group(&orange(), 1)
            .group(&toothbrush(), 3)
            .build();

        let names: Vec<&str> = receipt.items().iter().map(|i| i.product.name()).collect();
        assert_eq!(names, ["Apple", "Orange", "Toothbrush"]);
        assert_eq!(receipt.total_price().cents(), 130);
        assert_eq!(receipt.total_major_units(), 1.30);
        assert_eq!(receipt.total_quantity(), 5);

        let brush = receipt.item("Toothbrush").unwrap();
        assert_eq!(brush.quantity, 3);
        assert_eq!(brush.total_price.cents(), 60);
        assert_eq!(brush.savings().cents(), 30);
        assert_eq!(receipt.total_savings().cents(), 30);
    }

    #[test]
    fn test_zero_quantity_groups_are_skipped() {
        let receipt = ReceiptBuilder::new(Uuid::nil())
            .group(&apple(), 0)
            .group(&orange(), 2)
            .build();

        assert_eq!(receipt.items().len(), 1);
        assert!(receipt.item("Apple").is_none());
        assert_eq!(receipt.total_price().cents(), 80);
    }

    #[test]
    fn test_item_lookup_is_exact() {
        let receipt = ReceiptBuilder::new(Uuid::nil()).group(&apple(), 1).build();
        assert!(receipt.item("Apple").is_some());
        assert!(receipt.item("apple").is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let receipt = ReceiptBuilder::new(Uuid::nil())
            .group(&toothbrush(), 3)
            .build();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["checkoutId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["totalPrice"], 60);
        assert_eq!(json["items"][0]["quantity"], 3);
        assert_eq!(json["items"][0]["totalPrice"], 60);
        assert_eq!(json["items"][0]["product"]["name"], "Toothbrush");
        assert_eq!(json["items"][0]["product"]["unitPrice"], 30);
        assert_eq!(json["items"][0]["product"]["rule"]["kind"], "buy_multiple_get_free");
    }
}
