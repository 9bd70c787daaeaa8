//! Guard-wide constants.

/// Maximum number of characters retained from a secret. Longer inputs are
/// truncated at construction; the tail is never compared against.
pub const MAX_SECRET_CHARS: usize = 32;

/// Initial number of near-miss attempts a fresh matcher allows.
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 3;

/// Largest edit distance still treated as a typo. Anything above locks.
pub const NEAR_MISS_THRESHOLD: usize = 2;
