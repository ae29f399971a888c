//! Prime fields Z/pZ.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// The prime field Z/PZ.
///
/// `P` must be prime; the field axioms (in particular `inv`) fail otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a field element, reducing modulo P.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let m = i128::from(value).rem_euclid(i128::from(P));
        // rem_euclid lands in [0, P), which fits in u64
        Self(u64::try_from(m).unwrap_or_default())
    }

    /// Returns the canonical representative in [0, P).
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic.
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    /// All P elements in ascending order of representative.
    #[must_use]
    pub fn elements() -> Vec<Self> {
        (0..P).map(Self).collect()
    }

    fn mul_mod(a: u64, b: u64) -> u64 {
        let product = u128::from(a) * u128::from(b) % u128::from(P);
        // product < P <= u64::MAX
        u64::try_from(product).unwrap_or_default()
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % P)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }

    fn from_i64(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // Fermat: a^(P-2) = a^(-1)
        let mut result = 1u64;
        let mut base = self.0;
        let mut exp = P - 2;
        while exp > 0 {
            if exp & 1 == 1 {
                result = Self::mul_mod(result, base);
            }
            base = Self::mul_mod(base, base);
            exp >>= 1;
        }
        Some(Self(result))
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = u128::from(self.0) + u128::from(rhs.0);
        Self(u64::try_from(sum % u128::from(P)).unwrap_or_default())
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(Self::mul_mod(self.0, rhs.0))
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type GF7 = FiniteField<7>;

    #[test]
    fn test_arithmetic() {
        let a = GF7::new(5);
        let b = GF7::new(4);
        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6);
    }

    #[test]
    fn test_inverse() {
        for x in GF7::elements().into_iter().skip(1) {
            assert!((x * x.inv().unwrap()).is_one());
        }
        assert!(GF7::zero().inv().is_none());
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(GF7::from_signed(-1).value(), 6);
        assert_eq!(GF7::from_i64(-15).value(), 6);
    }
}
