//! Algebraic structure traits.
//!
//! Scalars flow through every layer of the workspace: polynomial
//! coefficients, matrix entries and the structure constants of a tensor
//! category all implement `Field`.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
///
/// Elements hash consistently with `Eq`, so polynomials over a ring can be
/// deduplicated in hash sets.
pub trait Ring:
    Clone
    + Eq
    + Hash
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of an integer under the canonical map Z -> R.
    fn from_i64(n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = Self::one();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field: every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Returns `None` if `other` is zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}

/// A totally ordered field, compatible with its arithmetic.
pub trait OrderedField: Field + Ord {
    /// Largest integer not exceeding `self`, if it fits in an i64.
    fn floor(&self) -> Option<i64>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::finite_field::FiniteField;
    use crate::rationals::Q;

    fn distinct<R: Ring>(xs: &[R]) -> usize {
        xs.iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let qs = [Q::new(1, 2), Q::new(2, 4), Q::from_integer(3), Q::new(-3, -1)];
        assert_eq!(distinct(&qs), 2);

        let fs = [
            FiniteField::<5>::new(7),
            FiniteField::<5>::new(2),
            FiniteField::<5>::from_signed(-3),
        ];
        assert_eq!(distinct(&fs), 1);
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(<Q as Ring>::from_i64(0), Q::zero());
        assert_eq!(<Q as Ring>::from_i64(13), Q::from_integer(13));
        assert_eq!(<Q as Ring>::from_i64(-6), Q::from_integer(-6));
    }

    #[test]
    fn test_pow() {
        let half = Q::new(1, 2);
        assert_eq!(half.pow(3), Q::new(1, 8));
        assert_eq!(half.pow(0), Q::one());
    }

    #[test]
    fn test_checked_div() {
        let a = Q::new(3, 4);
        assert_eq!(a.checked_div(&Q::new(1, 2)), Some(Q::new(3, 2)));
        assert_eq!(a.checked_div(&Q::zero()), None);
    }
}
