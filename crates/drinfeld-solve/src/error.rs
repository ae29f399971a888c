//! Failure modes of point recovery.

use drinfeld_groebner::{GroebnerError, VarietyDimension};
use thiserror::Error;

/// Errors raised while recovering the points of a variety.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The underlying Gröbner basis computation failed.
    #[error("Gröbner basis computation failed: {0}")]
    Groebner(#[from] GroebnerError),

    /// Only finite varieties have a list of points.
    #[error("variety has dimension {dimension}, expected finitely many points")]
    NotZeroDimensional {
        /// The dimension actually found.
        dimension: VarietyDimension,
    },

    /// A rational eliminant has coefficients too large for root search.
    #[error("eliminant coefficients exceed the rational root search range")]
    CoefficientOverflow,
}
