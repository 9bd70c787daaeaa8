//! Thread-safe handle for hosts that share one matcher.
//!
//! Every operation takes the mutex for its full duration, so two guesses
//! against the same secret never interleave and no decrement is lost.

use std::sync::{Arc, Mutex, MutexGuard};

use guesser_types::{GuardConfig, GuessOutcome, MatcherSnapshot, Result};

use crate::Matcher;

/// Cloneable, mutex-serialized [`Matcher`].
#[derive(Debug, Clone)]
pub struct SharedMatcher {
    inner: Arc<Mutex<Matcher>>,
}

impl SharedMatcher {
    /// Share a matcher built with the default thresholds.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self::from_matcher(Matcher::new(secret))
    }

    /// Share a matcher built with custom thresholds.
    pub fn with_config(secret: &str, config: GuardConfig) -> Result<Self> {
        Ok(Self::from_matcher(Matcher::with_config(secret, config)?))
    }

    /// Take ownership of an existing matcher.
    #[must_use]
    pub fn from_matcher(matcher: Matcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(matcher)),
        }
    }

    // Poison is recovered: every field write in Matcher leaves a valid state.
    fn guard(&self) -> MutexGuard<'_, Matcher> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// See [`Matcher::compare`].
    pub fn compare(&self, guess: &str) -> bool {
        self.guard().compare(guess)
    }

    /// See [`Matcher::compare_detailed`].
    pub fn compare_detailed(&self, guess: &str) -> GuessOutcome {
        self.guard().compare_detailed(guess)
    }

    /// See [`Matcher::check`].
    pub fn check(&self, guess: &str) -> Result<()> {
        self.guard().check(guess)
    }

    /// Attempts left.
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.guard().remaining_attempts()
    }

    /// Whether the shared matcher has locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.guard().is_locked()
    }

    /// Secret-free view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MatcherSnapshot {
        self.guard().snapshot()
    }
}
