//! The lockout state machine.
//!
//! A [`Matcher`] has two macro-states, active and locked, with a single
//! irreversible edge between them. While active, each guess is classified
//! by edit distance:
//!
//! - **Exact**: accepted, nothing changes.
//! - **Near** (typo-sized): rejected, one attempt consumed; the matcher
//!   locks when the budget reaches zero.
//! - **Far**: rejected, and the matcher locks at once without touching the
//!   budget. A wildly wrong guess is treated as probing, not a typo.
//!
//! Once locked, every guess is rejected and no state changes again.

use std::fmt;

use chrono::{DateTime, Utc};
use guesser_types::{
    GuardConfig, GuessOutcome, GuesserError, MatchBand, MatcherId, MatcherSnapshot, Result,
};

use crate::distance::edit_distance_chars;

/// Guards one secret with a bounded attempt budget.
///
/// `compare` takes `&mut self`; hosts sharing a matcher between threads
/// must serialize access, e.g. through [`SharedMatcher`](crate::SharedMatcher).
pub struct Matcher {
    id: MatcherId,
    /// Truncated secret. Never modified after construction.
    secret: Vec<char>,
    config: GuardConfig,
    remaining: u32,
    locked: bool,
    locked_at: Option<DateTime<Utc>>,
}

impl Matcher {
    /// Create a matcher with the default thresholds. Never fails: any string
    /// is accepted and silently truncated to the first 32 characters.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self::build(secret, GuardConfig::default())
    }

    /// Create a matcher with custom thresholds.
    ///
    /// # Errors
    /// Returns [`GuesserError::Configuration`] if `config` fails validation.
    pub fn with_config(secret: &str, config: GuardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(secret, config))
    }

    fn build(secret: &str, config: GuardConfig) -> Self {
        let secret: Vec<char> = secret.chars().take(config.max_secret_chars).collect();
        let id = MatcherId::new();
        tracing::debug!(
            matcher = %id.short(),
            secret_len = secret.len(),
            budget = config.attempt_budget,
            "Matcher created"
        );
        Self {
            id,
            secret,
            config,
            remaining: config.attempt_budget,
            locked: false,
            locked_at: None,
        }
    }

    /// Test a guess. Returns `true` only on an exact match while unlocked.
    pub fn compare(&mut self, guess: &str) -> bool {
        self.compare_detailed(guess).is_match()
    }

    /// Test a guess and report how it was classified.
    ///
    /// Performs exactly the same state transition as [`compare`](Self::compare).
    /// A guess that trips the lock reports the miss that caused it;
    /// [`GuessOutcome::Locked`] means the matcher was already locked.
    pub fn compare_detailed(&mut self, guess: &str) -> GuessOutcome {
        if self.locked {
            tracing::trace!(matcher = %self.id.short(), "Guess ignored: matcher locked");
            return GuessOutcome::Locked;
        }

        let guess: Vec<char> = guess.chars().collect();
        let distance = edit_distance_chars(&guess, &self.secret);

        match MatchBand::classify(distance, self.config.near_miss_threshold) {
            MatchBand::Exact => GuessOutcome::Exact,
            MatchBand::Near => {
                self.remaining = self.remaining.saturating_sub(1);
                tracing::debug!(
                    matcher = %self.id.short(),
                    band = %MatchBand::Near,
                    distance,
                    remaining = self.remaining,
                    "Near miss"
                );
                if self.remaining == 0 {
                    self.lock(MatchBand::Near, "attempts exhausted");
                }
                GuessOutcome::NearMiss {
                    distance,
                    remaining: self.remaining,
                }
            }
            MatchBand::Far => {
                self.lock(MatchBand::Far, "far miss");
                GuessOutcome::FarMiss { distance }
            }
        }
    }

    /// Test a guess, mapping rejection onto [`GuesserError`].
    ///
    /// # Errors
    /// - [`GuesserError::GuessRejected`] for a near miss that left the
    ///   matcher active.
    /// - [`GuesserError::LockedOut`] if the matcher was locked, or this
    ///   guess locked it.
    pub fn check(&mut self, guess: &str) -> Result<()> {
        match self.compare_detailed(guess) {
            GuessOutcome::Exact => Ok(()),
            GuessOutcome::NearMiss { remaining, .. } if !self.locked => {
                Err(GuesserError::GuessRejected { remaining })
            }
            _ => Err(GuesserError::LockedOut),
        }
    }

    fn lock(&mut self, band: MatchBand, reason: &'static str) {
        self.locked = true;
        self.locked_at = Some(Utc::now());
        tracing::warn!(
            matcher = %self.id.short(),
            band = %band,
            reason,
            remaining = self.remaining,
            attempts_used = self.snapshot().attempts_used(),
            "Matcher locked"
        );
    }

    /// Attempts left. Frozen once the matcher locks.
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining
    }

    /// Whether the matcher has locked. Never reverts.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// When the matcher locked, if it has.
    #[must_use]
    pub fn locked_at(&self) -> Option<DateTime<Utc>> {
        self.locked_at
    }

    /// Identifier used in log events.
    #[must_use]
    pub fn id(&self) -> MatcherId {
        self.id
    }

    /// Thresholds this matcher runs with.
    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Length of the stored secret in characters (after truncation).
    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Secret-free view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MatcherSnapshot {
        MatcherSnapshot {
            id: self.id,
            remaining: self.remaining,
            attempt_budget: self.config.attempt_budget,
            locked: self.locked,
            locked_at: self.locked_at,
            secret_len: self.secret.len(),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .field("config", &self.config)
            .field("remaining", &self.remaining)
            .field("locked", &self.locked)
            .field("locked_at", &self.locked_at)
            .finish()
    }
}
