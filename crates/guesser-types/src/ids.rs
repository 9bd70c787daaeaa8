//! Identifiers used for log correlation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single matcher instance. Uses `UUIDv7` for time-ordered
/// sorting. Carries no information about the guarded secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MatcherId(pub Uuid);

impl MatcherId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// First 8 hex characters, for compact log lines.
    #[must_use]
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for MatcherId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matcher:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(MatcherId::new(), MatcherId::new());
    }

    #[test]
    fn display_has_prefix() {
        let id = MatcherId::from_bytes([0xab; 16]);
        assert_eq!(id.to_string(), format!("matcher:{}", id.0));
        assert_eq!(id.short(), "abababab");
    }

    #[test]
    fn v7_ids_sort_by_creation() {
        let a = MatcherId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = MatcherId::new();
        assert!(a < b);
    }
}
