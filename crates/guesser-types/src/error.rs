//! Error types for the Guesser guard.
//!
//! All errors use the `GS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Guess errors
//! - 9xx: General / internal errors
//!
//! Plain comparison never produces an error. These variants surface only
//! through the `Result`-returning entry points (checked comparison and
//! custom configuration).

use thiserror::Error;

/// Central error enum for all Guesser operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuesserError {
    // =================================================================
    // Guess Errors (1xx)
    // =================================================================
    /// The guess was close to the secret but not equal. The matcher is
    /// still active.
    #[error("GS_ERR_100: Guess rejected: {remaining} attempt(s) remaining")]
    GuessRejected { remaining: u32 },

    /// The matcher is locked; no further guesses can succeed.
    #[error("GS_ERR_101: Matcher locked out")]
    LockedOut,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid thresholds, malformed config file).
    #[error("GS_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GuesserError>;

impl From<serde_json::Error> for GuesserError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
