//! # till-config: Settings and Price List Loading
//!
//! Reads a TOML document (plus environment overrides) into
//! [`CheckoutSettings`](till_core::CheckoutSettings) and a validated
//! [`Catalog`] of product definitions.
//!
//! ## Example Usage
//!
//! ```rust
//! use till_config::TillConfig;
//!
//! let config = TillConfig::from_toml_str(r#"
//!     [[catalog]]
//!     name = "Toothbrush"
//!     unit_price_cents = 30
//!     rule = { kind = "buy_multiple_get_free", trigger_count = 2, free_count = 1 }
//! "#).unwrap();
//!
//! let catalog = config.catalog().unwrap();
//! let mut checkout = catalog.checkout();
//! let toothbrush = catalog.get("Toothbrush").unwrap();
//! for _ in 0..3 {
//!     checkout.scan(toothbrush);
//! }
//! assert_eq!(checkout.generate_receipt().total_price().cents(), 60);
//! ```

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{TillConfig, ENV_RESCAN_POLICY};
pub use error::{ConfigError, ConfigResult};
