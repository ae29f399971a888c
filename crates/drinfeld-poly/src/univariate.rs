//! Dense univariate polynomials.
//!
//! Used for the eliminants produced by a lex Gröbner basis: the last
//! generator of a zero-dimensional lex basis only involves the last
//! variable, and its roots seed the back substitution.

use drinfeld_rings::traits::{Field, Ring};

/// A dense univariate polynomial, coefficients in ascending degree order.
///
/// The zero polynomial has no coefficients; otherwise the last coefficient
/// is non-zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnivariatePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> UnivariatePoly<R> {
    /// Creates a polynomial from ascending coefficients, trimming trailing zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The polynomial x - a.
    #[must_use]
    pub fn linear_root(a: R) -> Self {
        Self::new(vec![-a, R::one()])
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Ascending coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// Evaluates with Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.clone() * R::from_i64(i64::try_from(i).unwrap_or(i64::MAX)))
                .collect(),
        )
    }

    /// Product.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(coeffs)
    }
}

impl<F: Field> UnivariatePoly<F> {
    /// Divides by the leading coefficient.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().and_then(Field::inv) {
            Some(inv) => Self::new(self.coeffs.iter().map(|c| c.clone() * inv.clone()).collect()),
            None => self.clone(),
        }
    }

    /// Euclidean division, returning (quotient, remainder).
    ///
    /// Returns `None` when dividing by zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let lead_inv = divisor.leading_coeff()?.inv()?;
        let d = divisor.coeffs.len();

        if self.coeffs.len() < d {
            return Some((Self::zero(), self.clone()));
        }

        let mut quotient = vec![F::zero(); self.coeffs.len() - d + 1];
        let mut rem = self.coeffs.clone();

        for shift in (0..quotient.len()).rev() {
            let top = rem[shift + d - 1].clone();
            if top.is_zero() {
                continue;
            }
            let factor = top * lead_inv.clone();
            for (k, c) in divisor.coeffs.iter().enumerate() {
                rem[shift + k] = rem[shift + k].clone() - factor.clone() * c.clone();
            }
            quotient[shift] = factor;
        }

        rem.truncate(d - 1);
        Some((Self::new(quotient), Self::new(rem)))
    }

    /// Monic greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let Some((_, r)) = a.div_rem(&b) else {
                break;
            };
            a = b;
            b = r;
        }
        a.monic()
    }

    /// The product of the distinct monic irreducible factors, i.e. p / gcd(p, p').
    ///
    /// Over a prime field a vanishing derivative leaves `p` unchanged.
    #[must_use]
    pub fn squarefree_part(&self) -> Self {
        let d = self.derivative();
        if d.is_zero() {
            return self.monic();
        }
        let g = self.gcd(&d);
        match self.div_rem(&g) {
            Some((q, _)) => q.monic(),
            None => self.monic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drinfeld_rings::finite_field::FiniteField;
    use drinfeld_rings::rationals::Q;

    fn poly(coeffs: &[i64]) -> UnivariatePoly<Q> {
        UnivariatePoly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
    }

    #[test]
    fn test_eval_and_derivative() {
        // x^3 - x
        let p = poly(&[0, -1, 0, 1]);
        assert_eq!(p.eval(&Q::from_integer(2)), Q::from_integer(6));
        assert_eq!(p.derivative(), poly(&[-1, 0, 3]));
        assert_eq!(p.degree(), Some(3));
        assert_eq!(poly(&[0, 0]).degree(), None);
    }

    #[test]
    fn test_div_rem() {
        // (x^2 - 1) / (x - 1) = x + 1
        let (q, r) = poly(&[-1, 0, 1]).div_rem(&poly(&[-1, 1])).unwrap();
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());

        let (q, r) = poly(&[1, 0, 1]).div_rem(&poly(&[0, 1])).unwrap();
        assert_eq!(q, poly(&[0, 1]));
        assert_eq!(r, poly(&[1]));

        assert!(poly(&[1]).div_rem(&UnivariatePoly::zero()).is_none());
    }

    #[test]
    fn test_gcd_and_squarefree() {
        // (x - 1)^2 (x + 2)
        let p = poly(&[-1, 1]).mul(&poly(&[-1, 1])).mul(&poly(&[2, 1]));
        assert_eq!(p.gcd(&p.derivative()), poly(&[-1, 1]));
        assert_eq!(p.squarefree_part(), poly(&[-1, 1]).mul(&poly(&[2, 1])));
    }

    #[test]
    fn test_finite_field_squarefree() {
        type GF5 = FiniteField<5>;
        // x^5 - x splits into distinct linear factors over GF(5)
        let p = UnivariatePoly::new(vec![
            GF5::from_signed(0),
            GF5::from_signed(-1),
            GF5::new(0),
            GF5::new(0),
            GF5::new(0),
            GF5::new(1),
        ]);
        assert_eq!(p.squarefree_part(), p);
    }
}
