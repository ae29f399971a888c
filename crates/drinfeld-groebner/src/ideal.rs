//! Polynomial ideals.

use drinfeld_poly::{MonomialOrder, Polynomial};
use drinfeld_rings::traits::Field;

use crate::buchberger::{groebner_basis, normal_form, GroebnerConfig};
use crate::dimension::{krull_dimension, VarietyDimension};
use crate::error::GroebnerError;

/// An ideal of K[x_0, ..., x_{n-1}] given by generators.
///
/// Generators are stored as given; zero polynomials and exact duplicates are
/// dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ideal<F: Field> {
    num_vars: usize,
    generators: Vec<Polynomial<F>>,
}

impl<F: Field + Send + Sync> Ideal<F> {
    /// Creates the ideal generated by `generators` in `num_vars` variables.
    ///
    /// # Panics
    ///
    /// Panics if a generator lives in a ring with a different number of
    /// variables.
    #[must_use]
    pub fn new(num_vars: usize, generators: Vec<Polynomial<F>>) -> Self {
        let mut ideal = Self {
            num_vars,
            generators: Vec::with_capacity(generators.len()),
        };
        for g in generators {
            ideal.push(g);
        }
        ideal
    }

    fn push(&mut self, g: Polynomial<F>) {
        assert_eq!(g.num_vars(), self.num_vars, "generator in a different ring");
        if !g.is_zero() && !self.generators.contains(&g) {
            self.generators.push(g);
        }
    }

    /// Number of variables of the ambient ring.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The generators.
    #[must_use]
    pub fn generators(&self) -> &[Polynomial<F>] {
        &self.generators
    }

    /// The ideal sum I + J.
    #[must_use]
    pub fn sum(&self, other: &Self) -> Self {
        let mut ideal = self.clone();
        for g in &other.generators {
            ideal.push(g.clone());
        }
        ideal
    }

    /// I + <g>.
    #[must_use]
    pub fn with_generator(&self, g: Polynomial<F>) -> Self {
        let mut ideal = self.clone();
        ideal.push(g);
        ideal
    }

    /// Reduced Gröbner basis under `order`.
    ///
    /// # Errors
    ///
    /// Propagates the limits of `config`.
    pub fn groebner_basis(
        &self,
        order: MonomialOrder,
        config: &GroebnerConfig,
    ) -> Result<Vec<Polynomial<F>>, GroebnerError> {
        groebner_basis(&self.generators, order, config)
    }

    /// The ideal generated by its own reduced grevlex basis.
    ///
    /// Sums formed from the result start Buchberger's algorithm from a basis
    /// instead of the raw generators.
    ///
    /// # Errors
    ///
    /// Propagates the limits of `config`.
    pub fn to_groebner(&self, config: &GroebnerConfig) -> Result<Self, GroebnerError> {
        Ok(Self::new(
            self.num_vars,
            self.groebner_basis(MonomialOrder::Grevlex, config)?,
        ))
    }

    /// Dimension of the affine variety V(I).
    ///
    /// # Errors
    ///
    /// Propagates Gröbner basis failures.
    pub fn dimension(&self, config: &GroebnerConfig) -> Result<VarietyDimension, GroebnerError> {
        let gb = self.groebner_basis(MonomialOrder::Grevlex, config)?;
        krull_dimension(gb.iter().filter_map(Polynomial::leading_monomial), self.num_vars)
    }

    /// Ideal membership.
    ///
    /// # Errors
    ///
    /// Propagates Gröbner basis failures.
    pub fn contains(
        &self,
        f: &Polynomial<F>,
        config: &GroebnerConfig,
    ) -> Result<bool, GroebnerError> {
        let gb = self.groebner_basis(MonomialOrder::Grevlex, config)?;
        Ok(normal_form(&f.reorder(MonomialOrder::Grevlex), &gb).is_zero())
    }
}
