//! # Catalog
//!
//! Validated price list built from configuration. Callers look products up
//! by name and feed them to a [`Checkout`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use till_core::{Checkout, CheckoutSettings, PricingRule, ProductDefinition};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Catalog Entry
// =============================================================================

/// One `[[catalog]]` table as written in the config file.
///
/// ```toml
/// [[catalog]]
/// name = "Rice"
/// unit_price_cents = 100
/// rule = { kind = "percentage_discount", trigger_quantity = 1, discount_percent = 10 }
/// ```
///
/// `rule` may be omitted for standard pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price_cents: i64,
    #[serde(default)]
    pub rule: PricingRule,
}

impl CatalogEntry {
    /// Validates the entry into a product definition.
    pub fn to_definition(&self) -> ConfigResult<ProductDefinition> {
        ProductDefinition::new(self.name.clone(), self.unit_price_cents, self.rule).map_err(
            |source| ConfigError::InvalidProduct {
                name: self.name.clone(),
                source,
            },
        )
    }
}

impl From<&ProductDefinition> for CatalogEntry {
    fn from(product: &ProductDefinition) -> Self {
        CatalogEntry {
            name: product.name().to_string(),
            unit_price_cents: product.unit_price().cents(),
            rule: *product.rule(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Product definitions keyed by name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    settings: CheckoutSettings,
    products: Vec<ProductDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names.
    pub fn from_definitions(
        settings: CheckoutSettings,
        definitions: impl IntoIterator<Item = ProductDefinition>,
    ) -> ConfigResult<Self> {
        let mut catalog = Catalog {
            settings,
            ..Catalog::default()
        };

        for product in definitions {
            if catalog.index.contains_key(product.name()) {
                return Err(ConfigError::DuplicateProduct(product.name().to_string()));
            }
            catalog
                .index
                .insert(product.name().to_string(), catalog.products.len());
            catalog.products.push(product);
        }

        Ok(catalog)
    }

    /// Looks up a product by exact name.
    pub fn get(&self, name: &str) -> Option<&ProductDefinition> {
        self.index.get(name).map(|&slot| &self.products[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductDefinition> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }

    /// Opens a checkout session using the configured settings.
    pub fn checkout(&self) -> Checkout {
        Checkout::with_settings(self.settings)
    }
}
