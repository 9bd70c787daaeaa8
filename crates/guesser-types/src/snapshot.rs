//! Serializable view of a matcher's public state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MatcherId;

/// Point-in-time state of a matcher, safe to log or return to a caller.
/// Holds no secret material beyond its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherSnapshot {
    pub id: MatcherId,
    /// Attempts left.
    pub remaining: u32,
    /// Attempts the matcher started with.
    pub attempt_budget: u32,
    pub locked: bool,
    /// When the matcher locked, if it has.
    pub locked_at: Option<DateTime<Utc>>,
    /// Length of the stored (truncated) secret, in characters.
    pub secret_len: usize,
}

impl MatcherSnapshot {
    /// Near misses consumed so far.
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.attempt_budget.saturating_sub(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_keeps_state() {
        let snap = MatcherSnapshot {
            id: MatcherId::new(),
            remaining: 1,
            attempt_budget: 3,
            locked: true,
            locked_at: Some(Utc::now()),
            secret_len: 7,
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: MatcherSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
        assert_eq!(back.attempts_used(), 2);
    }
}
