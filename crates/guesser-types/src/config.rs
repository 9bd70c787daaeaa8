//! Configuration for matcher thresholds.

use serde::{Deserialize, Serialize};

use crate::{GuesserError, Result, constants};

/// Thresholds a matcher runs with. The defaults are the standard guard:
/// 32-character secrets, 3 attempts, typos up to distance 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Characters kept from the secret; the rest is discarded.
    pub max_secret_chars: usize,
    /// Near misses allowed before the matcher locks.
    pub attempt_budget: u32,
    /// Largest distance treated as a near miss.
    pub near_miss_threshold: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            max_secret_chars: constants::MAX_SECRET_CHARS,
            attempt_budget: constants::DEFAULT_ATTEMPT_BUDGET,
            near_miss_threshold: constants::NEAR_MISS_THRESHOLD,
        }
    }
}

impl GuardConfig {
    /// Reject configurations that would produce an unusable matcher.
    pub fn validate(&self) -> Result<()> {
        if self.max_secret_chars == 0 {
            return Err(GuesserError::Configuration(
                "max_secret_chars must be > 0".to_string(),
            ));
        }
        if self.attempt_budget == 0 {
            return Err(GuesserError::Configuration(
                "attempt_budget must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GuardConfig::default();
        assert_eq!(cfg.max_secret_chars, 32);
        assert_eq!(cfg.attempt_budget, 3);
        assert_eq!(cfg.near_miss_threshold, 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_budget_rejected() {
        let cfg = GuardConfig {
            attempt_budget: 0,
            ..GuardConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, GuesserError::Configuration(_)));
    }

    #[test]
    fn zero_secret_chars_rejected() {
        let cfg = GuardConfig {
            max_secret_chars: 0,
            ..GuardConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn from_json_partial_fills_defaults() {
        let cfg = GuardConfig::from_json(r#"{ "attempt_budget": 5 }"#).unwrap();
        assert_eq!(cfg.attempt_budget, 5);
        assert_eq!(cfg.max_secret_chars, 32);
        assert_eq!(cfg.near_miss_threshold, 2);
    }

    #[test]
    fn from_json_rejects_invalid() {
        let err = GuardConfig::from_json(r#"{ "max_secret_chars": 0 }"#).unwrap_err();
        assert!(matches!(err, GuesserError::Configuration(_)));

        let err = GuardConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, GuesserError::Configuration(_)));
    }
}
