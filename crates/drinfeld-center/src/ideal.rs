//! The half-braiding ideal of a candidate object.
//!
//! For a base object Z, a half-braiding is a family γ_k : Z⊗S_k → S_k⊗Z
//! over the simples. Writing γ_k = Σ_a x_{k,a} B_{k,a} in a basis of
//! Hom(Z⊗S_k, S_k⊗Z) turns every coherence condition into polynomials in
//! the unknowns x:
//!
//! ```text
//! a_{i,j,Z} ∘ (t⊗1) ∘ γ_k  =  (1⊗γ_j) ∘ a_{i,Z,j} ∘ (γ_i⊗1) ∘ a⁻¹_{Z,i,j} ∘ (1⊗t)
//! ```
//!
//! for every t in a basis of Hom(S_k, S_i⊗S_j), compared coordinate-wise in
//! Hom(Z⊗S_k, S_i⊗(S_j⊗Z)). The left side is linear in the unknowns of γ_k,
//! the right side bilinear in those of γ_i and γ_j. The component at the
//! unit is pinned to the identity Z⊗1 → 1⊗Z.

use std::ops::Range;

use drinfeld_category::TensorCategory;
use drinfeld_groebner::Ideal;
use drinfeld_poly::{Monomial, MonomialOrder, Polynomial};
use drinfeld_rings::traits::Ring;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::error::CenterError;

/// The unknowns of one half-braiding component.
struct UnknownBlock<C: TensorCategory> {
    source: C::Object,
    target: C::Object,
    basis: Vec<C::Morphism>,
}

/// The ideal I(Z) with the bookkeeping needed to read half-braidings back
/// from its points.
pub struct CenterIdeal<C: TensorCategory> {
    ideal: Ideal<C::Scalar>,
    blocks: Vec<UnknownBlock<C>>,
    /// Unknowns of γ_k are `offsets[k]..offsets[k + 1]`.
    offsets: Vec<usize>,
}

impl<C: TensorCategory> CenterIdeal<C> {
    /// The polynomial ideal.
    #[must_use]
    pub fn ideal(&self) -> &Ideal<C::Scalar> {
        &self.ideal
    }

    /// Total number of unknowns.
    #[must_use]
    pub fn num_unknowns(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// The unknowns of γ_k.
    #[must_use]
    pub fn unknowns(&self, k: usize) -> Range<usize> {
        self.offsets[k]..self.offsets[k + 1]
    }

    /// Basis of Hom(Z⊗S_k, S_k⊗Z) the unknowns of γ_k refer to.
    #[must_use]
    pub fn basis(&self, k: usize) -> &[C::Morphism] {
        &self.blocks[k].basis
    }

    /// Rebuilds the half-braiding at a point of the variety.
    ///
    /// # Panics
    ///
    /// Panics if the point has the wrong number of coordinates.
    #[must_use]
    pub fn half_braiding_at(&self, cat: &C, point: &[C::Scalar]) -> Vec<C::Morphism> {
        assert_eq!(point.len(), self.num_unknowns(), "point has the wrong length");
        self.blocks
            .iter()
            .enumerate()
            .map(|(k, block)| {
                let coeffs = &point[self.unknowns(k)];
                cat.linear_combination(&block.source, &block.target, &block.basis, coeffs)
            })
            .collect()
    }
}

/// Position of the tensor unit among `simples`.
///
/// The representative is expected to be `one()` itself, so that the
/// unitors of Z can be composed with the unit component.
pub(crate) fn unit_position<C: TensorCategory>(cat: &C, simples: &[C::Object]) -> Option<usize> {
    let one = cat.one();
    simples.iter().position(|s| cat.is_isomorphic(s, &one))
}

/// Builds I(Z) over the given simples of `cat`.
///
/// # Errors
///
/// Returns `NotSemisimple` if the base category is not semisimple.
pub fn build_center_ideal<C: TensorCategory>(
    cat: &C,
    z: &C::Object,
    simples: &[C::Object],
) -> Result<CenterIdeal<C>, CenterError> {
    if !cat.is_semisimple() {
        return Err(CenterError::NotSemisimple);
    }

    let blocks: Vec<UnknownBlock<C>> = simples
        .iter()
        .map(|s| {
            let source = cat.tensor(z, s);
            let target = cat.tensor(s, z);
            let basis = cat.hom_basis(&source, &target);
            UnknownBlock {
                source,
                target,
                basis,
            }
        })
        .collect();

    let mut offsets = Vec::with_capacity(blocks.len() + 1);
    offsets.push(0);
    for block in &blocks {
        offsets.push(offsets[offsets.len() - 1] + block.basis.len());
    }
    let num_vars = offsets[offsets.len() - 1];

    let n = simples.len();
    let triples: Vec<(usize, usize, usize)> = (0..n)
        .flat_map(|k| (0..n).flat_map(move |i| (0..n).map(move |j| (k, i, j))))
        .collect();

    let hexagon = Hexagon {
        cat,
        z,
        simples,
        blocks: &blocks,
        offsets: &offsets,
        num_vars,
    };
    let equations: Vec<Vec<Polynomial<C::Scalar>>> = triples
        .par_iter()
        .map(|&(k, i, j)| hexagon.equations(k, i, j))
        .collect();

    let mut seen = FxHashSet::default();
    let mut generators = Vec::new();
    let mut push = |p: Polynomial<C::Scalar>| {
        if !p.is_zero() && seen.insert(p.monic()) {
            generators.push(p);
        }
    };
    for p in equations.into_iter().flatten() {
        push(p);
    }

    if let Some(u) = unit_position(cat, simples) {
        let identity = cat.compose(&cat.right_unitor(z), &cat.left_unitor_inverse(z));
        for (a, c) in cat.coordinates(&identity).into_iter().enumerate() {
            let x = Polynomial::var(offsets[u] + a, num_vars, MonomialOrder::Grevlex);
            push(x.sub(&Polynomial::constant(c, num_vars, MonomialOrder::Grevlex)));
        }
    }

    log::debug!(
        "center ideal of {z:?}: {num_vars} unknowns, {} generators",
        generators.len()
    );

    Ok(CenterIdeal {
        ideal: Ideal::new(num_vars, generators),
        blocks,
        offsets,
    })
}

/// Shared inputs of the hexagon equations of one candidate.
struct Hexagon<'a, C: TensorCategory> {
    cat: &'a C,
    z: &'a C::Object,
    simples: &'a [C::Object],
    blocks: &'a [UnknownBlock<C>],
    offsets: &'a [usize],
    num_vars: usize,
}

impl<C: TensorCategory> Hexagon<'_, C> {
    fn unknown(&self, k: usize, a: usize) -> Monomial {
        Monomial::var(self.offsets[k] + a, self.num_vars)
    }

    /// Equations of the triple (k, i, j), one per coordinate and basis
    /// morphism of Hom(S_k, S_i⊗S_j).
    fn equations(&self, k: usize, i: usize, j: usize) -> Vec<Polynomial<C::Scalar>> {
        let cat = self.cat;
        let z = self.z;
        let (sk, si, sj) = (&self.simples[k], &self.simples[i], &self.simples[j]);
        let (bk, bi, bj) = (
            &self.blocks[k].basis,
            &self.blocks[i].basis,
            &self.blocks[j].basis,
        );

        let fusion = cat.hom_basis(sk, &cat.tensor(si, sj));
        if fusion.is_empty() || (bk.is_empty() && (bi.is_empty() || bj.is_empty())) {
            return Vec::new();
        }

        let id_z = cat.id(z);
        let a_ijz = cat.associator(si, sj, z);
        let a_izj = cat.associator(si, z, sj);
        let a_inv_zij = cat.associator_inverse(z, si, sj);
        let (id_si, id_sj) = (cat.id(si), cat.id(sj));
        let gamma_i_j: Vec<C::Morphism> =
            bi.iter().map(|c| cat.tensor_morphisms(c, &id_sj)).collect();
        let i_gamma_j: Vec<C::Morphism> =
            bj.iter().map(|b| cat.tensor_morphisms(&id_si, b)).collect();

        let mut polys = Vec::new();
        for t in &fusion {
            let t_z = cat.tensor_morphisms(t, &id_z);
            let lhs: Vec<Vec<C::Scalar>> = bk
                .iter()
                .map(|b| cat.coordinates(&cat.compose_all(b, &[&t_z, &a_ijz])))
                .collect();

            let head = cat.compose(&cat.tensor_morphisms(&id_z, t), &a_inv_zij);
            let middles: Vec<C::Morphism> = gamma_i_j
                .iter()
                .map(|g| cat.compose_all(&head, &[g, &a_izj]))
                .collect();
            let mut rhs: Vec<(Monomial, Vec<C::Scalar>)> = Vec::with_capacity(bi.len() * bj.len());
            for (b, tail) in i_gamma_j.iter().enumerate() {
                for (c, middle) in middles.iter().enumerate() {
                    let monomial = self.unknown(j, b).mul(&self.unknown(i, c));
                    rhs.push((monomial, cat.coordinates(&cat.compose(middle, tail))));
                }
            }

            let len = lhs
                .first()
                .or_else(|| rhs.first().map(|(_, coords)| coords))
                .map_or(0, Vec::len);
            for r in 0..len {
                let mut terms = Vec::new();
                for (a, coords) in lhs.iter().enumerate() {
                    if !coords[r].is_zero() {
                        terms.push((self.unknown(k, a), coords[r].clone()));
                    }
                }
                for (monomial, coords) in &rhs {
                    if !coords[r].is_zero() {
                        terms.push((monomial.clone(), -coords[r].clone()));
                    }
                }
                let p = Polynomial::new(terms, self.num_vars, MonomialOrder::Grevlex);
                if !p.is_zero() {
                    polys.push(p);
                }
            }
        }
        polys
    }
}

/// Checks the hexagon and the unit normalization for concrete components.
#[must_use]
pub fn verify_half_braiding<C: TensorCategory>(
    cat: &C,
    z: &C::Object,
    half_braiding: &[C::Morphism],
    simples: &[C::Object],
) -> bool {
    if half_braiding.len() != simples.len() {
        return false;
    }
    if let Some(u) = unit_position(cat, simples) {
        let identity = cat.compose(&cat.right_unitor(z), &cat.left_unitor_inverse(z));
        if half_braiding[u] != identity {
            return false;
        }
    }

    let n = simples.len();
    let id_z = cat.id(z);
    (0..n * n * n).into_par_iter().all(|idx| {
        let (k, i, j) = (idx / (n * n), (idx / n) % n, idx % n);
        let (sk, si, sj) = (&simples[k], &simples[i], &simples[j]);
        cat.hom_basis(sk, &cat.tensor(si, sj)).iter().all(|t| {
            let lhs = cat.compose_all(
                &half_braiding[k],
                &[&cat.tensor_morphisms(t, &id_z), &cat.associator(si, sj, z)],
            );
            let rhs = cat.compose_all(
                &cat.tensor_morphisms(&id_z, t),
                &[
                    &cat.associator_inverse(z, si, sj),
                    &cat.tensor_morphisms(&half_braiding[i], &cat.id(sj)),
                    &cat.associator(si, z, sj),
                    &cat.tensor_morphisms(&cat.id(si), &half_braiding[j]),
                ],
            );
            lhs == rhs
        })
    })
}
