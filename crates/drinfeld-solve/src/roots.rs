//! Roots of univariate polynomials in the base field.

use drinfeld_poly::UnivariatePoly;
use drinfeld_rings::finite_field::FiniteField;
use drinfeld_rings::rationals::Q;
use drinfeld_rings::traits::{Field, Ring};

use crate::error::SolveError;

/// Largest |coefficient| whose divisors are enumerated by trial division.
const MAX_DIVISOR_SEARCH: u128 = 1_000_000_000_000;

/// A field in which univariate polynomials can be solved exactly.
pub trait RootField: Field + Send + Sync {
    /// The distinct roots of `p` in this field, in a deterministic order.
    ///
    /// The zero polynomial has no well-defined root set and yields none.
    ///
    /// # Errors
    ///
    /// Returns an error when the search range of the field is exceeded.
    fn roots(p: &UnivariatePoly<Self>) -> Result<Vec<Self>, SolveError>;
}

impl<const P: u64> RootField for FiniteField<P> {
    fn roots(p: &UnivariatePoly<Self>) -> Result<Vec<Self>, SolveError> {
        if p.is_zero() {
            return Ok(Vec::new());
        }
        Ok(Self::elements()
            .into_iter()
            .filter(|x| p.eval(x).is_zero())
            .collect())
    }
}

impl RootField for Q {
    /// Rational root theorem on the squarefree part, cleared of denominators.
    fn roots(p: &UnivariatePoly<Self>) -> Result<Vec<Self>, SolveError> {
        if p.is_zero() {
            return Ok(Vec::new());
        }
        let sqf = p.squarefree_part();

        // factor out x
        let lowest = sqf.coeffs().iter().position(|c| !c.is_zero()).unwrap_or(0);
        let mut roots = if lowest > 0 { vec![Q::zero()] } else { Vec::new() };
        let reduced = UnivariatePoly::new(sqf.coeffs()[lowest..].to_vec());

        let ints = integer_coefficients(reduced.coeffs())?;
        let (Some(&constant), Some(&leading)) = (ints.first(), ints.last()) else {
            return Ok(roots);
        };

        let numerators = divisors(constant.unsigned_abs())?;
        let denominators = divisors(leading.unsigned_abs())?;

        for &num in &numerators {
            for &den in &denominators {
                let (Ok(num), Ok(den)) = (i64::try_from(num), i64::try_from(den)) else {
                    return Err(SolveError::CoefficientOverflow);
                };
                for candidate in [Q::new(num, den), Q::new(-num, den)] {
                    if !roots.contains(&candidate) && reduced.eval(&candidate).is_zero() {
                        roots.push(candidate);
                    }
                }
            }
        }

        roots.sort();
        Ok(roots)
    }
}

/// Scales rational coefficients to integers by the lcm of their
/// denominators.
fn integer_coefficients(coeffs: &[Q]) -> Result<Vec<i128>, SolveError> {
    let parts: Vec<(i128, u128)> = coeffs
        .iter()
        .map(|c| c.to_i128_parts().ok_or(SolveError::CoefficientOverflow))
        .collect::<Result<_, _>>()?;

    let lcm = parts.iter().try_fold(1u128, |acc, &(_, den)| {
        (acc / gcd(acc, den)).checked_mul(den)
    });
    let lcm = lcm.ok_or(SolveError::CoefficientOverflow)?;

    parts
        .iter()
        .map(|&(num, den)| {
            i128::try_from(lcm / den)
                .ok()
                .and_then(|scale| num.checked_mul(scale))
                .ok_or(SolveError::CoefficientOverflow)
        })
        .collect()
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Positive divisors of a non-zero integer, by trial division.
fn divisors(n: u128) -> Result<Vec<u128>, SolveError> {
    if n == 0 || n > MAX_DIVISOR_SEARCH {
        return Err(SolveError::CoefficientOverflow);
    }
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1u128;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    Ok(small)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[Q]) -> UnivariatePoly<Q> {
        UnivariatePoly::new(coeffs.to_vec())
    }

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_rational_roots() {
        // (2x - 1)(x + 3) = 2x^2 + 5x - 3
        let p = poly(&[q(-3), q(5), q(2)]);
        assert_eq!(Q::roots(&p).unwrap(), vec![q(-3), Q::new(1, 2)]);
    }

    #[test]
    fn test_repeated_and_zero_roots() {
        // x^2 (x - 1)^2 = x^4 - 2x^3 + x^2
        let p = poly(&[q(0), q(0), q(1), q(-2), q(1)]);
        assert_eq!(Q::roots(&p).unwrap(), vec![q(0), q(1)]);
    }

    #[test]
    fn test_irrational_roots_are_skipped() {
        // x^2 - 2 has no rational roots; x^3 - x has three
        assert!(Q::roots(&poly(&[q(-2), q(0), q(1)])).unwrap().is_empty());
        assert_eq!(
            Q::roots(&poly(&[q(0), q(-1), q(0), q(1)])).unwrap(),
            vec![q(-1), q(0), q(1)]
        );
    }

    #[test]
    fn test_rational_coefficients() {
        // x - 2/3
        assert_eq!(Q::roots(&poly(&[Q::new(-2, 3), q(1)])).unwrap(), vec![Q::new(2, 3)]);
    }

    #[test]
    fn test_finite_field_roots() {
        type GF7 = FiniteField<7>;
        // x^2 - 2 = (x - 3)(x - 4) over GF(7)
        let p = UnivariatePoly::new(vec![GF7::from_signed(-2), GF7::new(0), GF7::new(1)]);
        assert_eq!(GF7::roots(&p).unwrap(), vec![GF7::new(3), GF7::new(4)]);
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(1).unwrap(), vec![1]);
        assert!(divisors(0).is_err());
    }
}
