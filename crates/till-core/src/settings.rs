//! # Checkout Settings
//!
//! Behavior switches for a checkout session. Loading them from files or the
//! environment is `till-config`'s job; this module only defines the shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Rescan Policy
// =============================================================================

/// What a session does when a product name is scanned again with a
/// different price or pricing rule.
///
/// ## Policy Behavior
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  scan(Apple @ 30)  then  scan(Apple @ 25)                               │
/// │                                                                         │
/// │  FIRST_SCAN_WINS (Default)          REJECT                              │
/// │  ─────────────────────────          ──────                              │
/// │  • Apple quantity becomes 2         • Apple quantity stays 1           │
/// │  • Both priced at 30                • scan() drops the unit + warns    │
/// │  • scan() warns                     • try_scan() returns an error      │
/// │  • try_scan() succeeds                                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescanPolicy {
    /// Count the unit, keep the first definition's terms.
    #[default]
    FirstScanWins,

    /// Refuse the unit.
    Reject,
}

impl fmt::Display for RescanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RescanPolicy::FirstScanWins => write!(f, "first_scan_wins"),
            RescanPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for RescanPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first_scan_wins" | "first" | "lenient" => Ok(RescanPolicy::FirstScanWins),
            "reject" | "strict" => Ok(RescanPolicy::Reject),
            "" => Err(ValidationError::Required {
                field: "rescan_policy".to_string(),
            }),
            _ => Err(ValidationError::OutOfRange {
                field: "rescan_policy".to_string(),
                min: 0,
                max: 1,
            }),
        }
    }
}

// =============================================================================
// Checkout Settings
// =============================================================================

/// Settings applied to every session opened with them.
///
/// ```toml
/// [checkout]
/// rescan_policy = "reject"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutSettings {
    #[serde(default)]
    pub rescan_policy: RescanPolicy,
}

impl CheckoutSettings {
    pub fn with_rescan_policy(mut self, policy: RescanPolicy) -> Self {
        self.rescan_policy = policy;
        self
    }
}
