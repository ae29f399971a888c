//! Krull dimension of an affine variety from a Gröbner basis.
//!
//! A set of variables U is independent modulo I when no leading monomial of
//! a Gröbner basis of I is supported inside U. The dimension of V(I) is the
//! largest size of an independent set, i.e. n minus the size of a smallest
//! set of variables meeting every leading-monomial support.

use std::fmt;

use drinfeld_poly::Monomial;

use crate::error::GroebnerError;

/// Largest ring supported by the bitmask search.
const MAX_VARS: usize = 128;

/// The dimension of an affine variety.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarietyDimension {
    /// No points at all: the ideal is the unit ideal.
    Empty,
    /// Finitely many points.
    ZeroDimensional,
    /// A positive-dimensional component of the given dimension.
    Positive(usize),
}

impl VarietyDimension {
    /// Krull dimension, with -1 for the empty variety.
    #[must_use]
    pub fn krull(self) -> i64 {
        match self {
            Self::Empty => -1,
            Self::ZeroDimensional => 0,
            Self::Positive(d) => i64::try_from(d).unwrap_or(i64::MAX),
        }
    }

    /// Returns true for the empty variety.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Returns true for a finite, non-empty variety.
    #[must_use]
    pub fn is_zero_dimensional(self) -> bool {
        self == Self::ZeroDimensional
    }

    fn from_independent(d: usize) -> Self {
        if d == 0 {
            Self::ZeroDimensional
        } else {
            Self::Positive(d)
        }
    }
}

impl fmt::Display for VarietyDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::ZeroDimensional => write!(f, "0"),
            Self::Positive(d) => write!(f, "{d}"),
        }
    }
}

/// Dimension of V(I) from the leading monomials of a Gröbner basis of I.
///
/// A constant leading monomial means I is the unit ideal.
///
/// # Errors
///
/// Returns `TooManyVariables` beyond 128 variables.
pub fn krull_dimension<'a, I>(
    leading: I,
    num_vars: usize,
) -> Result<VarietyDimension, GroebnerError>
where
    I: IntoIterator<Item = &'a Monomial>,
{
    if num_vars > MAX_VARS {
        return Err(GroebnerError::TooManyVariables {
            found: num_vars,
            max: MAX_VARS,
        });
    }

    let mut supports: Vec<u128> = Vec::new();
    for m in leading {
        if m.is_one() {
            return Ok(VarietyDimension::Empty);
        }
        supports.push(m.support().into_iter().fold(0u128, |acc, v| acc | (1u128 << v)));
    }

    // a support containing another one is hit whenever the smaller one is
    supports.sort_by_key(|s| s.count_ones());
    let mut minimal: Vec<u128> = Vec::new();
    for s in supports {
        if !minimal.iter().any(|&t| t & s == t) {
            minimal.push(s);
        }
    }

    let mut best = num_vars;
    min_hitting_set(&minimal, 0, 0, &mut best);
    Ok(VarietyDimension::from_independent(num_vars - best))
}

/// Branch and bound over the first support not yet hit.
fn min_hitting_set(sets: &[u128], chosen: u128, size: usize, best: &mut usize) {
    if size >= *best {
        return;
    }
    let Some(&unhit) = sets
        .iter()
        .filter(|&&s| s & chosen == 0)
        .min_by_key(|s| s.count_ones())
    else {
        *best = size;
        return;
    };

    let mut rest = unhit;
    while rest != 0 {
        let bit = rest & rest.wrapping_neg();
        min_hitting_set(sets, chosen | bit, size + 1, best);
        rest &= rest - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(exps: &[u16]) -> Monomial {
        Monomial::from_exponents(exps)
    }

    #[test]
    fn test_empty() {
        let lms = [mono(&[0, 0])];
        assert_eq!(krull_dimension(&lms, 2), Ok(VarietyDimension::Empty));
        assert_eq!(VarietyDimension::Empty.krull(), -1);
    }

    #[test]
    fn test_zero_dimensional() {
        // pure powers in every variable
        let lms = [mono(&[2, 0]), mono(&[1, 1]), mono(&[0, 3])];
        assert_eq!(krull_dimension(&lms, 2), Ok(VarietyDimension::ZeroDimensional));
    }

    #[test]
    fn test_positive() {
        // <x*y> in K[x, y, z]: the union of two planes
        let lms = [mono(&[1, 1, 0])];
        assert_eq!(krull_dimension(&lms, 3), Ok(VarietyDimension::Positive(2)));
        assert_eq!(VarietyDimension::Positive(2).krull(), 2);

        // zero ideal: whole space
        let none: [Monomial; 0] = [];
        assert_eq!(krull_dimension(&none, 4), Ok(VarietyDimension::Positive(4)));
    }

    #[test]
    fn test_hitting_set_shares_variables() {
        // supports {0,1}, {1,2}, {2,3}: {1,2} hits all, so dim = 4 - 2
        let lms = [mono(&[1, 1, 0, 0]), mono(&[0, 1, 1, 0]), mono(&[0, 0, 1, 1])];
        assert_eq!(krull_dimension(&lms, 4), Ok(VarietyDimension::Positive(2)));
    }

    #[test]
    fn test_too_many_variables() {
        let none: [Monomial; 0] = [];
        assert_eq!(
            krull_dimension(&none, 200),
            Err(GroebnerError::TooManyVariables { found: 200, max: 128 })
        );
    }
}
