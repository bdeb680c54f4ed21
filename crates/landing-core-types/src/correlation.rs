//! Request correlation
//!
//! A RequestId is minted once per engine command and attached to every
//! lifecycle event that command emits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single engine request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh, time-ordered RequestId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an identifier received from an outer layer
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
