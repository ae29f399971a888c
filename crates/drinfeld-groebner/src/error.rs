//! Failure modes of Gröbner basis computations.

use thiserror::Error;

/// Errors raised while computing a Gröbner basis or a dimension.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroebnerError {
    /// The intermediate basis outgrew `GroebnerConfig::max_basis_size`.
    #[error("Gröbner basis exceeded {limit} polynomials")]
    BasisLimitExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// More critical pairs were reduced than `GroebnerConfig::max_pairs`.
    #[error("Gröbner basis computation exceeded {limit} critical pairs")]
    PairLimitExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// The dimension computation supports at most 128 variables.
    #[error("{found} variables exceed the supported maximum of {max}")]
    TooManyVariables {
        /// Number of variables of the ring.
        found: usize,
        /// Largest supported number of variables.
        max: usize,
    },
}
