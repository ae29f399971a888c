//! Monomials as exponent vectors.
//!
//! Center ideals routinely have dozens of unknowns, so exponents live in a
//! `SmallVec` that stays inline for small rings and spills to the heap
//! otherwise. The total degree is cached for graded comparisons.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

/// Inline exponent storage.
pub type Exponents = SmallVec<[u16; 8]>;

/// A monomial x_0^e_0 * ... * x_{n-1}^e_{n-1}.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Monomial {
    exps: Exponents,
    degree: u32,
}

impl Monomial {
    /// The monomial 1 in `num_vars` variables.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self {
            exps: SmallVec::from_elem(0, num_vars),
            degree: 0,
        }
    }

    /// The monomial x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index out of range");
        let mut m = Self::one(num_vars);
        m.exps[i] = 1;
        m.degree = 1;
        m
    }

    /// Creates a monomial from its exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u16]) -> Self {
        Self {
            exps: SmallVec::from_slice(exps),
            degree: exps.iter().map(|&e| u32::from(e)).sum(),
        }
    }

    /// Number of variables of the ambient ring.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.exps.len()
    }

    /// Exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u16 {
        self.exps[i]
    }

    /// All exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u16] {
        &self.exps
    }

    /// Total degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.degree == 0
    }

    /// Indices of the variables with non-zero exponent.
    #[must_use]
    pub fn support(&self) -> Vec<usize> {
        self.exps
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Product (exponent-wise sum).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Self {
            exps: self
                .exps
                .iter()
                .zip(other.exps.iter())
                .map(|(a, b)| a + b)
                .collect(),
            degree: self.degree + other.degree,
        }
    }

    /// Quotient `self / other`, if `other` divides `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !other.divides(self) {
            return None;
        }
        Some(Self {
            exps: self
                .exps
                .iter()
                .zip(other.exps.iter())
                .map(|(a, b)| a - b)
                .collect(),
            degree: self.degree - other.degree,
        })
    }

    /// Returns true if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.degree <= other.degree && self.exps.iter().zip(other.exps.iter()).all(|(a, b)| a <= b)
    }

    /// Least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let exps: Exponents = self
            .exps
            .iter()
            .zip(other.exps.iter())
            .map(|(&a, &b)| a.max(b))
            .collect();
        let degree = exps.iter().map(|&e| u32::from(e)).sum();
        Self { exps, degree }
    }

    /// Returns true if the two monomials share no variable.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exps
            .iter()
            .zip(other.exps.iter())
            .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// The same monomial with variable `var` removed (exponent set to 0).
    #[must_use]
    pub fn without(&self, var: usize) -> Self {
        let mut m = self.clone();
        m.degree -= u32::from(m.exps[var]);
        m.exps[var] = 0;
        m
    }
}

/// Lexicographic comparison with x_0 > x_1 > ... .
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.exps.iter().cmp(b.exps.iter())
}

/// Graded reverse lexicographic comparison.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.degree.cmp(&b.degree).then_with(|| {
        for (ea, eb) in a.exps.iter().zip(b.exps.iter()).rev() {
            if ea != eb {
                return eb.cmp(ea);
            }
        }
        Ordering::Equal
    })
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let parts: Vec<String> = self
            .exps
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| if e == 1 { format!("x{i}") } else { format!("x{i}^{e}") })
            .collect();
        write!(f, "{}", parts.join("*"))
    }
}
