//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::{Abs, Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::traits::{Field, OrderedField, Ring};

/// An exact rational number.
///
/// Always stored in lowest terms with a positive denominator, so equality and
/// hashing are structural.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns numerator and denominator as machine integers if they fit.
    #[must_use]
    pub fn to_i128_parts(&self) -> Option<(i128, u128)> {
        let num = i128::try_from(self.0.numerator().clone()).ok()?;
        let den = u128::try_from(self.0.denominator().clone()).ok()?;
        Some((num, den))
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Largest integer not exceeding this value, if it fits in an i64.
    #[must_use]
    pub fn floor_i64(&self) -> Option<i64> {
        let (num, den) = self.to_i128_parts()?;
        let den = i128::try_from(den).ok()?;
        i64::try_from(num.div_euclid(den)).ok()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n as usize))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl OrderedField for Q {
    fn floor(&self) -> Option<i64> {
        self.floor_i64()
    }
}

impl num_traits::Zero for Q {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as Ring>::is_zero(self)
    }
}

impl num_traits::One for Q {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));
        // 2/3 * 3/4 = 1/2
        assert_eq!(a * b, Q::new(1, 2));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Q::new(4, -6), Q::new(-2, 3));
        assert_eq!(Q::new(-4, -6).to_i128_parts(), Some((2, 3)));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(-3, 5);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
        assert!(Q::zero().inv().is_none());
    }

    #[test]
    fn test_floor() {
        assert_eq!(Q::new(7, 2).floor_i64(), Some(3));
        assert_eq!(Q::new(-7, 2).floor_i64(), Some(-4));
        assert_eq!(Q::from_integer(4).floor_i64(), Some(4));
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(Q::new(1, 3) < Q::new(1, 2));
        assert_eq!(Q::new(3, 1).to_string(), "3");
        assert_eq!(Q::new(-2, 3).to_string(), "-2/3");
        assert_eq!(Q::new(-2, 3).signum(), -1);
    }
}
