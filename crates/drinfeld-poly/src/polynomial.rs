//! Sparse multivariate polynomials.
//!
//! Terms are kept sorted in descending monomial order with no zero
//! coefficients, so the leading term is always the first one and structural
//! equality is polynomial equality.

use std::cmp::Ordering;
use std::fmt;

use drinfeld_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::univariate::UnivariatePoly;

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<R: Ring> {
    /// Terms in descending monomial order.
    terms: Vec<(Monomial, R)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> Polynomial<R> {
    /// Creates a polynomial from arbitrary terms, sorting and combining them.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        if c.is_zero() {
            return Self::zero(num_vars, order);
        }
        Self {
            terms: vec![(Monomial::one(num_vars), c)],
            num_vars,
            order,
        }
    }

    /// The variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: vec![(Monomial::var(i, num_vars), R::one())],
            num_vars,
            order,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is a constant (including zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|(m, _)| m.is_one())
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Terms in descending order.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Everything but the leading term.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            terms: self.terms.iter().skip(1).cloned().collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Returns true for a non-zero constant.
    #[must_use]
    pub fn is_unit_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0.is_one()
    }

    /// Total degree (0 for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms.iter().map(|(m, _)| m.degree()).max().unwrap_or(0)
    }

    /// Sorted indices of the variables that occur.
    #[must_use]
    pub fn variables(&self) -> Vec<usize> {
        let mut seen = vec![false; self.num_vars];
        for (m, _) in &self.terms {
            for v in m.support() {
                seen[v] = true;
            }
        }
        seen.iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(|(i, _)| i)
            .collect()
    }

    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut combined: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            if let Some(last) = combined.last_mut() {
                if last.0 == m {
                    last.1 = last.1.clone() + c;
                    continue;
                }
            }
            combined.push((m, c));
        }
        combined.retain(|(_, c)| !c.is_zero());
        self.terms = combined;
    }

    /// Sum, merging the two sorted term lists.
    ///
    /// # Panics
    ///
    /// Panics if the polynomials live in different rings.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "polynomials in different rings");
        assert_eq!(self.order, other.order, "polynomials with different orders");

        let (a, b) = (&self.terms, &other.terms);
        let mut terms = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match self.order.compare(&a[i].0, &b[j].0) {
                Ordering::Greater => {
                    terms.push(a[i].clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(b[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let c = a[i].1.clone() + b[j].1.clone();
                    if !c.is_zero() {
                        terms.push((a[i].0.clone(), c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend_from_slice(&a[i..]);
        terms.extend_from_slice(&b[j..]);

        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "polynomials in different rings");

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms, self.num_vars, self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        Self::new(
            self.terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .collect(),
            self.num_vars,
            self.order,
        )
    }

    /// Multiplies by the term `c * m`.
    ///
    /// Multiplying by a monomial preserves the order of the terms.
    #[must_use]
    pub fn mul_term(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        let mut terms: Vec<(Monomial, R)> = self
            .terms
            .iter()
            .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
            .collect();
        terms.retain(|(_, c)| !c.is_zero());
        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Evaluates at a point with one coordinate per variable.
    ///
    /// # Panics
    ///
    /// Panics if `point` has the wrong length.
    #[must_use]
    pub fn evaluate(&self, point: &[R]) -> R {
        assert_eq!(point.len(), self.num_vars, "point has wrong dimension");
        self.terms.iter().fold(R::zero(), |acc, (m, c)| {
            let value = m
                .exponents()
                .iter()
                .zip(point)
                .filter(|&(&e, _)| e > 0)
                .fold(c.clone(), |v, (&e, x)| v * x.pow(u32::from(e)));
            acc + value
        })
    }

    /// Substitutes the constant `value` for the variable `var`.
    ///
    /// The result stays in the same ring; `var` simply no longer occurs.
    #[must_use]
    pub fn substitute(&self, var: usize, value: &R) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| {
                let e = m.exponent(var);
                let c = if e == 0 {
                    c.clone()
                } else {
                    c.clone() * value.pow(u32::from(e))
                };
                (m.without(var), c)
            })
            .collect();
        Self::new(terms, self.num_vars, self.order)
    }

    /// The same polynomial sorted under another ordering.
    #[must_use]
    pub fn reorder(&self, order: MonomialOrder) -> Self {
        if order == self.order {
            return self.clone();
        }
        Self::new(self.terms.clone(), self.num_vars, order)
    }

    /// Converts to a univariate polynomial if only `var` occurs.
    #[must_use]
    pub fn univariate_in(&self, var: usize) -> Option<UnivariatePoly<R>> {
        let mut coeffs: Vec<R> = Vec::new();
        for (m, c) in &self.terms {
            if m.degree() != u32::from(m.exponent(var)) {
                return None;
            }
            let e = usize::from(m.exponent(var));
            if coeffs.len() <= e {
                coeffs.resize(e + 1, R::zero());
            }
            coeffs[e] = c.clone();
        }
        Some(UnivariatePoly::new(coeffs))
    }

    /// Embeds a univariate polynomial as a polynomial in x_var.
    #[must_use]
    pub fn from_univariate(
        p: &UnivariatePoly<R>,
        var: usize,
        num_vars: usize,
        order: MonomialOrder,
    ) -> Self {
        let x = Monomial::var(var, num_vars);
        let mut m = Monomial::one(num_vars);
        let mut terms = Vec::with_capacity(p.coeffs().len());
        for c in p.coeffs() {
            if !c.is_zero() {
                terms.push((m.clone(), c.clone()));
            }
            m = m.mul(&x);
        }
        Self::new(terms, num_vars, order)
    }
}

impl<F: Field> Polynomial<F> {
    /// Divides by the leading coefficient.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().and_then(Field::inv) {
            Some(inv) if !inv.is_one() => self.scale(&inv),
            _ => self.clone(),
        }
    }
}

impl<R: Ring + fmt::Display> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .terms
            .iter()
            .map(|(m, c)| {
                if m.is_one() {
                    format!("{c}")
                } else if c.is_one() {
                    format!("{m}")
                } else {
                    format!("{c}*{m}")
                }
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
