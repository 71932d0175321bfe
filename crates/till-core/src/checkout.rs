//! # Checkout Session
//!
//! Accumulates scans into per-product groups and produces priced receipts.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Operations                                 │
//! │                                                                         │
//! │  Caller Action          Method                  State Change            │
//! │  ─────────────          ──────                  ────────────            │
//! │                                                                         │
//! │  Open session ────────► Checkout::new() ──────► groups = []             │
//! │                                                                         │
//! │  Scan item ───────────► scan(&product) ───────► group(name).qty += 1    │
//! │                                                  (new name → appended)  │
//! │                                                                         │
//! │  Print receipt ───────► generate_receipt() ───► (read only)             │
//! │                                                                         │
//! │  NOTE: generate_receipt() may be called any number of times; it never  │
//! │        clears the session.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! A session belongs to one customer transaction. It has no internal locking;
//! concurrent checkouts use one `Checkout` each.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::product::ProductDefinition;
use crate::receipt::{Receipt, ReceiptBuilder};
use crate::settings::{CheckoutSettings, RescanPolicy};

/// All scans of one product name.
#[derive(Debug, Clone)]
struct ProductGroup {
    /// Definition from the first scan of this name.
    definition: ProductDefinition,
    quantity: u32,
}

/// A checkout session.
///
/// ## Invariants
/// - Exactly one group per distinct product name
/// - Groups are kept in the order their name was first scanned
/// - Every group has quantity ≥ 1
///
/// ```rust
/// use till_core::{Checkout, ProductDefinition};
///
/// let apple = ProductDefinition::standard("Apple", 30).unwrap();
/// let orange = ProductDefinition::standard("Orange", 40).unwrap();
///
/// let mut checkout = Checkout::new();
/// checkout.scan(&apple);
/// checkout.scan(&orange);
/// checkout.scan(&apple);
///
/// let receipt = checkout.generate_receipt();
/// assert_eq!(receipt.items().len(), 2);
/// assert_eq!(receipt.item("Apple").unwrap().quantity, 2);
/// assert_eq!(receipt.total_price().cents(), 100);
/// ```
#[derive(Debug)]
pub struct Checkout {
    id: Uuid,
    settings: CheckoutSettings,
    groups: Vec<ProductGroup>,
    /// Product name → position in `groups`.
    index: HashMap<String, usize>,
}

impl Checkout {
    /// Opens an empty session with default settings.
    pub fn new() -> Self {
        Self::with_settings(CheckoutSettings::default())
    }

    /// Opens an empty session with the given settings.
    pub fn with_settings(settings: CheckoutSettings) -> Self {
        let id = Uuid::new_v4();
        debug!(checkout_id = %id, rescan_policy = %settings.rescan_policy, "Checkout opened");

        Checkout {
            id,
            settings,
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }

    /// Registers one scanned unit. Never fails.
    ///
    /// A rescan with different terms is resolved by the session's
    /// [`RescanPolicy`]; under `Reject` the unit is dropped with a warning.
    pub fn scan(&mut self, product: &ProductDefinition) {
        if let Err(err) = self.try_scan(product) {
            warn!(checkout_id = %self.id, error = %err, "Scan dropped");
        }
    }

    /// Registers one scanned unit, failing on a conflicting rescan when the
    /// session uses [`RescanPolicy::Reject`].
    ///
    /// ## Errors
    /// [`CoreError::ConflictingDefinition`] if `product.name()` was already
    /// scanned with a different price or rule and the policy is `Reject`.
    /// The session is left unchanged in that case.
    pub fn try_scan(&mut self, product: &ProductDefinition) -> CoreResult<()> {
        let existing = self.index.get(product.name()).copied();

        match existing {
            Some(slot) => {
                let group = &mut self.groups[slot];

                if !group.definition.same_terms(product) {
                    match self.settings.rescan_policy {
                        RescanPolicy::FirstScanWins => {
                            warn!(
                                checkout_id = %self.id,
                                product = product.name(),
                                kept_price = %group.definition.unit_price(),
                                ignored_price = %product.unit_price(),
                                "Rescan with different terms, keeping first definition"
                            );
                        }
                        RescanPolicy::Reject => {
                            return Err(CoreError::ConflictingDefinition {
                                name: product.name().to_string(),
                            });
                        }
                    }
                }

                group.quantity = group.quantity.saturating_add(1);
                debug!(
                    checkout_id = %self.id,
                    product = product.name(),
                    quantity = group.quantity,
                    "Item scanned"
                );
            }
            None => {
                self.index
                    .insert(product.name().to_string(), self.groups.len());
                self.groups.push(ProductGroup {
                    definition: product.clone(),
                    quantity: 1,
                });
                debug!(
                    checkout_id = %self.id,
                    product = product.name(),
                    rule = %product.rule(),
                    "New product group"
                );
            }
        }

        Ok(())
    }

    /// Prices the current groups. Does not modify the session.
    pub fn generate_receipt(&self) -> Receipt {
        let receipt = self
            .groups()
            .fold(ReceiptBuilder::new(self.id), |builder, (product, quantity)| {
                builder.group(product, quantity)
            })
            .build();

        info!(
            checkout_id = %self.id,
            lines = receipt.items().len(),
            total = %receipt.total_price(),
            "Receipt generated"
        );

        receipt
    }

    /// Groups in first-scan order as `(definition, quantity)`.
    pub fn groups(&self) -> impl Iterator<Item = (&ProductDefinition, u32)> + '_ {
        self.groups.iter().map(|g| (&g.definition, g.quantity))
    }

    /// Number of distinct product names scanned.
    pub fn line_count(&self) -> usize {
        self.groups.len()
    }

    /// Scanned quantity for a product name, 0 if never scanned.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.index
            .get(name)
            .map(|&slot| self.groups[slot].quantity)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
