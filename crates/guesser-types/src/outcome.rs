//! Classification of a single guess.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance band of a guess relative to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchBand {
    /// Distance 0.
    Exact,
    /// Distance in `1..=threshold`. Consumes one attempt.
    Near,
    /// Distance above the threshold. Locks without consuming an attempt.
    Far,
}

impl MatchBand {
    /// Classify an edit distance against the near-miss threshold.
    #[must_use]
    pub fn classify(distance: usize, near_miss_threshold: usize) -> Self {
        match distance {
            0 => Self::Exact,
            d if d <= near_miss_threshold => Self::Near,
            _ => Self::Far,
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "EXACT"),
            Self::Near => write!(f, "NEAR"),
            Self::Far => write!(f, "FAR"),
        }
    }
}

/// Result of one comparison, as observed by the caller.
///
/// A call that trips the lock reports the miss that caused it; [`Locked`]
/// is reserved for calls made after the lock was already in place.
///
/// [`Locked`]: GuessOutcome::Locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess equals the secret.
    Exact,
    /// Typo-sized miss. `remaining` is the budget left after this call.
    NearMiss { distance: usize, remaining: u32 },
    /// Large miss. The matcher is now locked.
    FarMiss { distance: usize },
    /// The matcher was already locked; the guess was not evaluated.
    Locked,
}

impl GuessOutcome {
    /// Whether the guess was accepted.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Edit distance, when the guess was evaluated.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::Exact => Some(0),
            Self::NearMiss { distance, .. } | Self::FarMiss { distance } => Some(*distance),
            Self::Locked => None,
        }
    }

    /// Band of the evaluated guess, `None` if the matcher was already locked.
    #[must_use]
    pub fn band(&self) -> Option<MatchBand> {
        match self {
            Self::Exact => Some(MatchBand::Exact),
            Self::NearMiss { .. } => Some(MatchBand::Near),
            Self::FarMiss { .. } => Some(MatchBand::Far),
            Self::Locked => None,
        }
    }
}
