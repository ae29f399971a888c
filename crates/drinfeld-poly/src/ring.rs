//! Polynomial rings K[x_0, ..., x_{n-1}].

use std::marker::PhantomData;

use drinfeld_rings::traits::Ring;

use crate::ordering::MonomialOrder;
use crate::polynomial::Polynomial;

/// A polynomial ring with a fixed number of variables and monomial order.
///
/// The ring carries no data beyond its shape; it exists so that every
/// polynomial handed out for one ideal agrees on `num_vars` and `order`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialRing<R> {
    num_vars: usize,
    order: MonomialOrder,
    _scalar: PhantomData<fn() -> R>,
}

impl<R: Ring> PolynomialRing<R> {
    /// Creates the ring K[x_0, ..., x_{n-1}] with the given order.
    #[must_use]
    pub fn new(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            num_vars,
            order,
            _scalar: PhantomData,
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The monomial order.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// The variable x_i.
    #[must_use]
    pub fn var(&self, i: usize) -> Polynomial<R> {
        Polynomial::var(i, self.num_vars, self.order)
    }

    /// All variables in index order.
    #[must_use]
    pub fn vars(&self) -> Vec<Polynomial<R>> {
        (0..self.num_vars).map(|i| self.var(i)).collect()
    }

    /// A constant.
    #[must_use]
    pub fn constant(&self, c: R) -> Polynomial<R> {
        Polynomial::constant(c, self.num_vars, self.order)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(&self) -> Polynomial<R> {
        Polynomial::zero(self.num_vars, self.order)
    }

    /// The constant 1.
    #[must_use]
    pub fn one(&self) -> Polynomial<R> {
        self.constant(R::one())
    }
}
