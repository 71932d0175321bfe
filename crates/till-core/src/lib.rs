//! # till-core: Pure Pricing Engine for Till
//!
//! Turns a sequence of scanned products into a priced receipt. Everything in
//! this crate is an in-memory computation: no I/O, no async, no locking.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Callers (scanner UI, CLI, catalog service)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ProductDefinition, scan()              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ checkout  │  │  pricing  │  │  receipt  │  │   │
//! │  │   │Definition │─►│ groups by │─►│ rule math │─►│  builder  │  │   │
//! │  │   │PricingRule│  │   name    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              till-config (settings + price list)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product definitions and pricing rule variants
//! - [`pricing`] - Rule evaluator (quantity → group total)
//! - [`checkout`] - Scan aggregation in first-seen order
//! - [`receipt`] - Receipt and its builder
//! - [`money`] - Integer money (no floating point until presentation)
//! - [`settings`] - Per-session behavior switches
//! - [`validation`] - Construction-time checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{Checkout, ProductDefinition};
//!
//! let apple = ProductDefinition::standard("Apple", 30).unwrap();
//! let orange = ProductDefinition::standard("Orange", 40).unwrap();
//! let toothbrush = ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 2, 1).unwrap();
//!
//! let mut checkout = Checkout::new();
//! checkout.scan(&apple);
//! checkout.scan(&orange);
//! for _ in 0..3 {
//!     checkout.scan(&toothbrush);
//! }
//!
//! let receipt = checkout.generate_receipt();
//! assert_eq!(receipt.items().len(), 3);
//! assert_eq!(receipt.total_price().cents(), 130);
//! assert_eq!(receipt.total_major_units(), 1.30);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod product;
pub mod receipt;
pub mod settings;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::Checkout;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{PricingRule, ProductDefinition};
pub use receipt::{Receipt, ReceiptBuilder, ReceiptLineItem};
pub use settings::{CheckoutSettings, RescanPolicy};
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest product name accepted, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
