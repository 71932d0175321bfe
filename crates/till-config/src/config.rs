//! # Till Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TILL_RESCAN_POLICY=reject                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/till/till.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.till.till/till.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     RescanPolicy::FirstScanWins, empty catalog                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [checkout]
//! rescan_policy = "first_scan_wins"  # first_scan_wins | reject
//!
//! [[catalog]]
//! name = "Apple"
//! unit_price_cents = 30
//!
//! [[catalog]]
//! name = "Toothbrush"
//! unit_price_cents = 30
//! rule = { kind = "buy_multiple_get_free", trigger_count = 2, free_count = 1 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use till_core::{CheckoutSettings, RescanPolicy};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding [`CheckoutSettings::rescan_policy`].
pub const ENV_RESCAN_POLICY: &str = "TILL_RESCAN_POLICY";

/// Complete Till configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillConfig {
    /// Session behavior.
    #[serde(default)]
    pub checkout: CheckoutSettings,

    /// Price list.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

impl TillConfig {
    /// Parses and validates a TOML document. Environment is not consulted.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: TillConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading till config from file");
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        info!(
            rescan_policy = %config.checkout.rescan_policy,
            products = config.catalog.len(),
            "Till config loaded"
        );
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load till config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Checks every catalog entry and rejects duplicate names.
    pub fn validate(&self) -> ConfigResult<()> {
        self.catalog().map(|_| ())
    }

    /// Builds the validated catalog.
    pub fn catalog(&self) -> ConfigResult<Catalog> {
        let definitions = self
            .catalog
            .iter()
            .map(CatalogEntry::to_definition)
            .collect::<ConfigResult<Vec<_>>>()?;

        Catalog::from_definitions(self.checkout, definitions)
    }

    fn read_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// [`load`](Self::load)).
    fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_RESCAN_POLICY) {
            let policy: RescanPolicy =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_RESCAN_POLICY.to_string(),
                    value: value.clone(),
                })?;
            debug!(rescan_policy = %policy, "Overriding rescan policy from environment");
            self.checkout.rescan_policy = policy;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "till")
            .map(|dirs| dirs.config_dir().join("till.toml"))
    }
}
