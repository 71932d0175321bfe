//! # Config Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Config Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │      Source     │  │     Values      │  │        Catalog          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  InvalidValue   │  │  DuplicateProduct       │ │
//! │  │  Parse          │  │                 │  │  InvalidProduct         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use till_core::ValidationError;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has a value we cannot use.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Two catalog entries share a product name.
    #[error("Product '{0}' is listed more than once in the catalog")]
    DuplicateProduct(String),

    /// A catalog entry failed product validation.
    #[error("Invalid catalog entry '{name}': {source}")]
    InvalidProduct {
        name: String,
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::DuplicateProduct("Apple".to_string());
        assert_eq!(
            err.to_string(),
            "Product 'Apple' is listed more than once in the catalog"
        );

        let err = ConfigError::InvalidProduct {
            name: "Toothbrush".to_string(),
            source: ValidationError::MustBePositive {
                field: "trigger_count".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid catalog entry 'Toothbrush': trigger_count must be positive"
        );
    }
}
