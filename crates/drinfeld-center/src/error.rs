//! Errors and warnings of the center computation.

use std::fmt;

use drinfeld_category::CategoryError;
use drinfeld_solve::SolveError;
use thiserror::Error;

/// Errors raised while computing the Drinfeld center.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CenterError {
    /// Half-braidings are only searched for over semisimple categories.
    #[error("base category is not semisimple")]
    NotSemisimple,

    /// An object registered as simple has a larger endomorphism algebra.
    #[error("object is not simple: its endomorphism space has dimension {end_dimension}")]
    NotSimple {
        /// dim End(X) in the center.
        end_dimension: usize,
    },

    /// The polynomial back end failed on the half-braiding ideal of a
    /// candidate object.
    #[error("solving for half-braidings of {object} ({unknowns} unknowns) failed: {source}")]
    Solver {
        /// The candidate carrier, debug-formatted.
        object: String,
        /// Number of unknowns of its ideal.
        unknowns: usize,
        /// The back-end error.
        #[source]
        source: SolveError,
    },

    /// Branching on a positive-dimensional variety visited too many states.
    #[error("branching for {object} ({unknowns} unknowns) exceeded {limit} states")]
    BranchLimitExceeded {
        /// The candidate carrier, debug-formatted.
        object: String,
        /// Number of unknowns of its ideal.
        unknowns: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A half-braiding component has no inverse.
    #[error("half-braiding is not invertible at simple {simple}")]
    NotInvertible {
        /// Position of the simple S whose component γ_S failed to invert.
        /// Central projections invert γ at S_k*, so this is the position
        /// of S_k* there, and of S_k in `CenterCategory::dual`.
        simple: usize,
    },

    /// dim C = Σ dim(S)² vanishes in the scalar field, so the central
    /// projector (which divides by it) does not exist.
    #[error("global dimension of the base category is zero")]
    DegenerateGlobalDimension,

    /// The base category could not decompose an object into simples.
    #[error(transparent)]
    Category(#[from] CategoryError),
}

/// The search ran out of candidates before the dimension budget was used
/// up: some simples of the center were not found.
///
/// This is a value in the search report, never an `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncompleteSearchWarning<K> {
    /// dim Z(C) = dim(C)².
    pub expected: K,
    /// Σ dim(X)² over the simples found.
    pub found: K,
}

impl<K: fmt::Display> fmt::Display for IncompleteSearchWarning<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incomplete center search: found simples of total squared dimension {} out of {}",
            self.found, self.expected
        )
    }
}
