//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Checkout misuse                                │
//! │  └── ValidationError  - Rejected product definitions                   │
//! │                                                                         │
//! │  till-config errors (separate crate)                                   │
//! │  └── ConfigError      - File, TOML and catalog failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / ConfigError → Caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing itself never fails: every configuration problem is caught when a
//! [`ProductDefinition`](crate::ProductDefinition) is constructed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product name was rescanned with a different price or pricing rule
    /// while the session uses [`RescanPolicy::Reject`](crate::RescanPolicy::Reject).
    ///
    /// ## User Workflow
    /// ```text
    /// scan(Apple @ 30, standard)
    ///      │
    ///      ▼
    /// try_scan(Apple @ 25, standard)
    ///      │
    ///      ▼
    /// ConflictingDefinition { name: "Apple" }
    ///      │
    ///      ▼
    /// Group keeps quantity 1, priced at 30
    /// ```
    #[error("Product '{name}' was already scanned with a different price or pricing rule")]
    ConflictingDefinition { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product definition validation errors.
///
/// Raised at construction time so the pricing evaluator only ever sees
/// well-formed rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
