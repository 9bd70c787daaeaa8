//! # guesser-types
//!
//! Shared types, errors, and configuration for the **Guesser**
//! secret-comparison guard.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`MatcherId`]
//! - **Classification**: [`MatchBand`], [`GuessOutcome`]
//! - **State views**: [`MatcherSnapshot`]
//! - **Configuration**: [`GuardConfig`]
//! - **Errors**: [`GuesserError`] with `GS_ERR_` prefix codes
//! - **Constants**: thresholds and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod snapshot;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use outcome::*;
pub use snapshot::*;

// Constants are accessed via `guesser_types::constants::FOO`.
