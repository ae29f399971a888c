//! The interface of a semisimple pivotal tensor category.
//!
//! Everything the center search needs from a base category goes through
//! `TensorCategory`: the simples, the monoidal structure with its
//! coherence isomorphisms, duality, and linear algebra on Hom spaces in a
//! fixed basis.
//!
//! Conventions:
//! - `compose(f, g)` is "f, then g", i.e. g∘f.
//! - `associator(x, y, z)` maps (x⊗y)⊗z to x⊗(y⊗z).
//! - `left_unitor(x)` maps 1⊗x to x, `right_unitor(x)` maps x⊗1 to x.
//! - `ev(x)` maps x*⊗x to 1, `coev(x)` maps 1 to x⊗x*, and `pivotal_ev(x)`
//!   maps x⊗x* to 1.

use std::fmt::Debug;

use drinfeld_linalg::DenseMatrix;
use drinfeld_rings::traits::{Field, Ring};

use crate::error::CategoryError;

/// A binary direct sum with its structure maps.
///
/// `inclusions[i]` and `projections[i]` belong to the i-th summand:
/// projecting after including is the identity of that summand, and the two
/// idempotents include∘project sum to the identity of `object`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectSum<O, M> {
    /// The sum object.
    pub object: O,
    /// Summand → sum.
    pub inclusions: [M; 2],
    /// Sum → summand.
    pub projections: [M; 2],
}

/// One simple summand in a decomposition of an object X.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleSummand<M> {
    /// Position of the simple in `TensorCategory::simples()`.
    pub index: usize,
    /// S → X.
    pub inclusion: M,
    /// X → S, with `compose(inclusion, projection) = id_S`.
    pub projection: M,
}

/// A semisimple pivotal tensor category over a field.
///
/// Implementations may panic when morphisms with mismatched domains and
/// codomains are composed or added.
pub trait TensorCategory: Send + Sync {
    /// The base field.
    type Scalar: Field + Send + Sync;
    /// Objects.
    type Object: Clone + Debug + PartialEq + Send + Sync;
    /// Morphisms.
    type Morphism: Clone + Debug + PartialEq + Send + Sync;

    /// Returns true when every object is a finite direct sum of simples.
    fn is_semisimple(&self) -> bool;

    /// Representatives of the simple objects, in a fixed order.
    fn simples(&self) -> Vec<Self::Object>;

    /// The tensor unit.
    fn one(&self) -> Self::Object;

    /// The zero object.
    fn zero(&self) -> Self::Object;

    /// x ⊕ y with inclusions and projections.
    fn direct_sum(
        &self,
        x: &Self::Object,
        y: &Self::Object,
    ) -> DirectSum<Self::Object, Self::Morphism>;

    /// x ⊗ y.
    fn tensor(&self, x: &Self::Object, y: &Self::Object) -> Self::Object;

    /// f ⊗ g.
    fn tensor_morphisms(&self, f: &Self::Morphism, g: &Self::Morphism) -> Self::Morphism;

    /// The dual x*.
    fn dual(&self, x: &Self::Object) -> Self::Object;

    /// (x⊗y)⊗z → x⊗(y⊗z).
    fn associator(&self, x: &Self::Object, y: &Self::Object, z: &Self::Object) -> Self::Morphism;

    /// x⊗(y⊗z) → (x⊗y)⊗z.
    fn associator_inverse(
        &self,
        x: &Self::Object,
        y: &Self::Object,
        z: &Self::Object,
    ) -> Self::Morphism;

    /// 1⊗x → x.
    fn left_unitor(&self, x: &Self::Object) -> Self::Morphism;

    /// x → 1⊗x.
    fn left_unitor_inverse(&self, x: &Self::Object) -> Self::Morphism;

    /// x⊗1 → x.
    fn right_unitor(&self, x: &Self::Object) -> Self::Morphism;

    /// x → x⊗1.
    fn right_unitor_inverse(&self, x: &Self::Object) -> Self::Morphism;

    /// x*⊗x → 1.
    fn ev(&self, x: &Self::Object) -> Self::Morphism;

    /// 1 → x⊗x*.
    fn coev(&self, x: &Self::Object) -> Self::Morphism;

    /// x⊗x* → 1, the evaluation twisted by the pivotal structure.
    fn pivotal_ev(&self, x: &Self::Object) -> Self::Morphism;

    /// The identity of x.
    fn id(&self, x: &Self::Object) -> Self::Morphism;

    /// The zero morphism x → y.
    fn zero_morphism(&self, x: &Self::Object, y: &Self::Object) -> Self::Morphism;

    /// f, then g.
    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Self::Morphism;

    /// f + g.
    fn add(&self, f: &Self::Morphism, g: &Self::Morphism) -> Self::Morphism;

    /// c · f.
    fn scale(&self, f: &Self::Morphism, c: &Self::Scalar) -> Self::Morphism;

    /// The inverse of f, or `None` if f is not an isomorphism.
    fn inverse(&self, f: &Self::Morphism) -> Option<Self::Morphism>;

    /// Source object of f.
    fn domain(&self, f: &Self::Morphism) -> Self::Object;

    /// Target object of f.
    fn codomain(&self, f: &Self::Morphism) -> Self::Object;

    /// A basis of Hom(x, y), in a fixed order.
    fn hom_basis(&self, x: &Self::Object, y: &Self::Object) -> Vec<Self::Morphism>;

    /// Coordinates of f in `hom_basis(domain(f), codomain(f))`.
    fn coordinates(&self, f: &Self::Morphism) -> Vec<Self::Scalar>;

    /// Returns true if x ≅ y.
    fn is_isomorphic(&self, x: &Self::Object, y: &Self::Object) -> bool;

    /// dim Hom(x, y).
    fn hom_dim(&self, x: &Self::Object, y: &Self::Object) -> usize {
        self.hom_basis(x, y).len()
    }

    /// Σ coeffs[a] · basis[a] as a morphism x → y.
    fn linear_combination(
        &self,
        x: &Self::Object,
        y: &Self::Object,
        basis: &[Self::Morphism],
        coeffs: &[Self::Scalar],
    ) -> Self::Morphism {
        basis
            .iter()
            .zip(coeffs)
            .filter(|(_, c)| !c.is_zero())
            .fold(self.zero_morphism(x, y), |acc, (b, c)| {
                self.add(&acc, &self.scale(b, c))
            })
    }

    /// `first`, then each of `rest` in order.
    fn compose_all(&self, first: &Self::Morphism, rest: &[&Self::Morphism]) -> Self::Morphism {
        rest.iter()
            .fold(first.clone(), |acc, next| self.compose(&acc, next))
    }

    /// The scalar c with f = c · id, for an endomorphism f of a simple
    /// object.
    ///
    /// Returns `None` when the domain of f is not simple.
    fn end_scalar(&self, f: &Self::Morphism) -> Option<Self::Scalar> {
        let coords = self.coordinates(f);
        let unit = self.coordinates(&self.id(&self.domain(f)));
        match (coords.as_slice(), unit.as_slice()) {
            ([c], [u]) => c.checked_div(u),
            _ => None,
        }
    }

    /// Pivotal trace of an endomorphism: pev ∘ (f ⊗ 1) ∘ coev.
    fn trace(&self, f: &Self::Morphism) -> Self::Scalar {
        let x = self.domain(f);
        let x_dual = self.dual(&x);
        let loop_ = self.compose_all(
            &self.coev(&x),
            &[
                &self.tensor_morphisms(f, &self.id(&x_dual)),
                &self.pivotal_ev(&x),
            ],
        );
        // End(1) is one-dimensional
        self.end_scalar(&loop_).unwrap_or_else(<Self::Scalar as Ring>::zero)
    }

    /// Quantum dimension, the trace of the identity.
    fn dim(&self, x: &Self::Object) -> Self::Scalar {
        self.trace(&self.id(x))
    }

    /// Σ dim(S)² over the simples.
    fn global_dimension(&self) -> Self::Scalar {
        self.simples().iter().fold(<Self::Scalar as Ring>::zero(), |acc, s| {
            let d = self.dim(s);
            acc + d.clone() * d
        })
    }

    /// Position of the tensor unit among the simples.
    fn unit_index(&self) -> Option<usize> {
        let one = self.one();
        self.simples().iter().position(|s| self.is_isomorphic(s, &one))
    }

    /// Splits x into simple summands.
    ///
    /// For each simple S, the inclusions are `hom_basis(S, x)` and the
    /// projections are the dual basis of Hom(x, S) under composition.
    ///
    /// # Errors
    ///
    /// Returns `DegeneratePairing` if composition does not pair Hom(S, x)
    /// and Hom(x, S) perfectly for some simple S.
    fn decompose(
        &self,
        x: &Self::Object,
    ) -> Result<Vec<SimpleSummand<Self::Morphism>>, CategoryError> {
        let mut summands = Vec::new();

        for (index, s) in self.simples().iter().enumerate() {
            let inclusions = self.hom_basis(s, x);
            let projections = self.hom_basis(x, s);
            if inclusions.is_empty() && projections.is_empty() {
                continue;
            }

            let degenerate = CategoryError::DegeneratePairing { simple: index };
            let n = inclusions.len();
            if projections.len() != n {
                return Err(degenerate);
            }
            let rows = inclusions
                .iter()
                .map(|i| {
                    projections
                        .iter()
                        .map(|p| self.end_scalar(&self.compose(i, p)))
                        .collect::<Option<Vec<_>>>()
                })
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| degenerate.clone())?;
            let dual = DenseMatrix::from_rows(rows, n)
                .transpose()
                .inverse()
                .ok_or(degenerate)?;

            for (b, inclusion) in inclusions.into_iter().enumerate() {
                let projection = self.linear_combination(x, s, &projections, dual.row(b));
                summands.push(SimpleSummand {
                    index,
                    inclusion,
                    projection,
                });
            }
        }

        Ok(summands)
    }
}
