//! # guesser-core
//!
//! The secret-comparison guard: a [`Matcher`] holds one secret and accepts
//! repeated guesses, tolerating small typos but locking for good once
//! guesses are too far off or too numerous.
//!
//! ## Comparison Flow
//!
//! ```text
//! guess → locked? ──yes──→ false
//!           │ no
//!           ▼
//!     edit_distance(guess, secret) → MatchBand::classify
//!           ├─ Exact → true
//!           ├─ Near  → remaining -= 1, lock at 0 → false
//!           └─ Far   → lock (budget untouched)   → false
//! ```
//!
//! [`SharedMatcher`] wraps a matcher for hosts that share it across threads.

pub mod distance;
pub mod matcher;
pub mod shared;

pub use distance::edit_distance;
pub use matcher::Matcher;
pub use shared::SharedMatcher;
