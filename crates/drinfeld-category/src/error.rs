//! Errors raised while building a base category.

use thiserror::Error;

/// Malformed structure data for a base category.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    /// The multiplication table does not define a group.
    #[error("not a group: {reason}")]
    NotAGroup {
        /// What failed.
        reason: String,
    },

    /// The associator data is not a normalized 3-cocycle.
    #[error("not a normalized 3-cocycle: {reason}")]
    NotACocycle {
        /// What failed.
        reason: String,
    },

    /// Composition Hom(S, x) × Hom(x, S) → End(S) is not a perfect
    /// pairing, so x cannot be split into copies of S.
    #[error("composition pairing for simple {simple} is degenerate")]
    DegeneratePairing {
        /// Position of the simple.
        simple: usize,
    },
}
