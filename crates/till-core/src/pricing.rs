//! # Pricing Rule Evaluator
//!
//! Pure functions from `(rule, unit price, quantity)` to a group total.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Standard                                                               │
//! │    total = price × qty                                                  │
//! │                                                                         │
//! │  BuyMultipleGetFree(trigger, free)                                      │
//! │    cycle   = trigger + free                                             │
//! │    charged = ⌊qty / cycle⌋ × trigger + min(qty mod cycle, trigger)      │
//! │    total   = price × charged                                            │
//! │                                                                         │
//! │    trigger=2 free=1, qty=6:  [P P F][P P F]  → 4 charged               │
//! │    trigger=4 free=1, qty=5:  [P P P P F]     → 4 charged               │
//! │    trigger=4 free=1, qty=4:  [P P P P]       → 4 charged (no free yet) │
//! │                                                                         │
//! │  PercentageDiscount(threshold, pct)                                     │
//! │    base  = price × qty                                                  │
//! │    total = qty ≥ threshold ? base − round(base × pct / 100) : base      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is total. Rules are validated when a
//! [`ProductDefinition`](crate::ProductDefinition) is built, but a bare
//! [`PricingRule`] can still be constructed by hand, so degenerate parameters
//! are neutralized: a zero-length cycle charges every unit and a percentage
//! above 100 is treated as 100. The result is always between zero and the
//! standard total.

use crate::money::Money;
use crate::product::PricingRule;

/// Computes the total price for one product group.
///
/// ```rust
/// use till_core::money::Money;
/// use till_core::pricing::compute_group_total;
/// use till_core::PricingRule;
///
/// let rule = PricingRule::BuyMultipleGetFree { trigger_count: 2, free_count: 1 };
/// let total = compute_group_total(&rule, Money::from_cents(30), 6);
/// assert_eq!(total.cents(), 120);
/// ```
pub fn compute_group_total(rule: &PricingRule, unit_price: Money, quantity: u32) -> Money {
    match *rule {
        PricingRule::Standard => unit_price.multiply_quantity(quantity),
        PricingRule::BuyMultipleGetFree {
            trigger_count,
            free_count,
        } => unit_price.multiply_quantity(charged_units(trigger_count, free_count, quantity)),
        PricingRule::PercentageDiscount {
            trigger_quantity,
            discount_percent,
        } => {
            let base = unit_price.multiply_quantity(quantity);
            if quantity >= trigger_quantity {
                let percent = u32::from(discount_percent.min(100));
                base.apply_percentage_discount(percent * 100)
            } else {
                base
            }
        }
    }
}

/// Number of units that are paid for under "buy `trigger` get `free` free".
///
/// A trailing partial cycle charges up to `trigger` units; its free units
/// only apply once the paid part of the cycle is complete.
///
/// ```rust
/// use till_core::pricing::charged_units;
///
/// assert_eq!(charged_units(2, 1, 6), 4);
/// assert_eq!(charged_units(4, 1, 5), 4);
/// assert_eq!(charged_units(2, 1, 2), 2);
/// ```
pub fn charged_units(trigger: u32, free: u32, quantity: u32) -> u32 {
    let cycle = u64::from(trigger) + u64::from(free);
    if cycle == 0 {
        return quantity;
    }

    let quantity = u64::from(quantity);
    let full_cycles = quantity / cycle;
    let remainder = quantity % cycle;
    let charged = full_cycles * u64::from(trigger) + remainder.min(u64::from(trigger));

    // charged <= quantity, which came from a u32
    charged as u32
}

/// What the rule saved compared with standard pricing.
///
/// ```rust
/// use till_core::money::Money;
/// use till_core::pricing::savings;
/// use till_core::PricingRule;
///
/// let rule = PricingRule::PercentageDiscount { trigger_quantity: 1, discount_percent: 10 };
/// assert_eq!(savings(&rule, Money::from_cents(100), 1).cents(), 10);
/// ```
pub fn savings(rule: &PricingRule, unit_price: Money, quantity: u32) -> Money {
    let standard = unit_price.multiply_quantity(quantity);
    standard - compute_group_total(rule, unit_price, quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
