//! Extending half-braidings and projecting onto central morphisms.
//!
//! A base morphism f : X → Y between carriers of central objects is
//! averaged over the simples:
//!
//! ```text
//! P(f) = Σ_s (d_s / dim C) · Φ_s(f)
//! Φ_s(f) = λ ∘ (pev_s⊗1) ∘ a⁻¹ ∘ (1⊗γ^Y_{s*}) ∘ (1⊗(f⊗1))
//!            ∘ (1⊗(γ^X_{s*})⁻¹) ∘ a ∘ (coev_s⊗1) ∘ λ⁻¹
//! ```
//!
//! Φ_s(f) = d_s·f when f commutes with the half-braidings, so P is an
//! idempotent onto the central Hom space.

use drinfeld_category::TensorCategory;
use drinfeld_linalg::row_reduced_basis;
use drinfeld_rings::traits::{Field, Ring};
use rayon::prelude::*;

use crate::error::CenterError;
use crate::object::CenterObject;

/// The half-braiding of `x` at an arbitrary base object y: X⊗Y → Y⊗X.
///
/// Simple y use their component directly; other objects go through a
/// simple decomposition y ≅ ⊕ S, summing (1⊗π)·γ_S·(ι⊗1).
///
/// # Errors
///
/// Returns `Category` if y cannot be decomposed.
pub fn half_braiding_at<C: TensorCategory>(
    cat: &C,
    simples: &[C::Object],
    x: &CenterObject<C>,
    y: &C::Object,
) -> Result<C::Morphism, CenterError> {
    if let Some(k) = simples.iter().position(|s| s == y) {
        return Ok(x.component(k).clone());
    }

    let z = x.object();
    let id_z = cat.id(z);
    let source = cat.tensor(z, y);
    let target = cat.tensor(y, z);
    Ok(cat
        .decompose(y)?
        .iter()
        .fold(cat.zero_morphism(&source, &target), |acc, summand| {
            let piece = cat.compose_all(
                &cat.tensor_morphisms(&id_z, &summand.projection),
                &[
                    x.component(summand.index),
                    &cat.tensor_morphisms(&summand.inclusion, &id_z),
                ],
            );
            cat.add(&acc, &piece)
        }))
}

/// P(f) for a base morphism f between the carriers of `x` and `y`.
///
/// # Errors
///
/// Returns `DegenerateGlobalDimension` if dim C is zero in the scalar
/// field, and `NotInvertible` if a half-braiding component of `x` has no
/// inverse.
pub fn central_projection<C: TensorCategory>(
    cat: &C,
    simples: &[C::Object],
    x: &CenterObject<C>,
    y: &CenterObject<C>,
    f: &C::Morphism,
) -> Result<C::Morphism, CenterError> {
    let (xo, yo) = (x.object(), y.object());
    let dims: Vec<C::Scalar> = simples.iter().map(|s| cat.dim(s)).collect();
    let global = dims
        .iter()
        .fold(<C::Scalar as Ring>::zero(), |acc, d| acc + d.clone() * d.clone());
    let global_inv = global.inv().ok_or(CenterError::DegenerateGlobalDimension)?;

    let loops: Vec<C::Morphism> = simples
        .par_iter()
        .enumerate()
        .map(|(k, s)| {
            let s_dual = cat.dual(s);
            let gx = half_braiding_at(cat, simples, x, &s_dual)?;
            let dual_index = simples.iter().position(|t| t == &s_dual).unwrap_or(k);
            let gx_inv = cat
                .inverse(&gx)
                .ok_or(CenterError::NotInvertible { simple: dual_index })?;
            let gy = half_braiding_at(cat, simples, y, &s_dual)?;
            let id_s = cat.id(s);

            let loop_ = cat.compose_all(
                &cat.left_unitor_inverse(xo),
                &[
                    &cat.tensor_morphisms(&cat.coev(s), &cat.id(xo)),
                    &cat.associator(s, &s_dual, xo),
                    &cat.tensor_morphisms(&id_s, &gx_inv),
                    &cat.tensor_morphisms(&id_s, &cat.tensor_morphisms(f, &cat.id(&s_dual))),
                    &cat.tensor_morphisms(&id_s, &gy),
                    &cat.associator_inverse(s, &s_dual, yo),
                    &cat.tensor_morphisms(&cat.pivotal_ev(s), &cat.id(yo)),
                    &cat.left_unitor(yo),
                ],
            );
            Ok(cat.scale(&loop_, &(dims[k].clone() * global_inv.clone())))
        })
        .collect::<Result<_, CenterError>>()?;

    Ok(loops
        .iter()
        .fold(cat.zero_morphism(xo, yo), |acc, l| cat.add(&acc, l)))
}

/// A basis of the central Hom space Hom_Z(x, y), as base morphisms.
///
/// The projector images of the base Hom basis are row-reduced, so the
/// result does not depend on the order in which images are produced.
///
/// # Errors
///
/// Propagates `central_projection` failures.
pub fn central_hom<C: TensorCategory>(
    cat: &C,
    simples: &[C::Object],
    x: &CenterObject<C>,
    y: &CenterObject<C>,
) -> Result<Vec<C::Morphism>, CenterError> {
    let (xo, yo) = (x.object(), y.object());
    let basis = cat.hom_basis(xo, yo);
    if basis.is_empty() {
        return Ok(Vec::new());
    }

    let images = basis
        .par_iter()
        .map(|b| central_projection(cat, simples, x, y, b).map(|p| cat.coordinates(&p)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(row_reduced_basis(images, basis.len())
        .iter()
        .map(|row| cat.linear_combination(xo, yo, &basis, row))
        .collect())
}

/// Isomorphism test in the center.
///
/// In a semisimple category with multiplicity vectors m, n over simples
/// with endomorphism dimensions e, dim Hom(x, y) = Σ e·m·n, so
/// Σ e·(m - n)² = 0 exactly when End(x), End(y) and Hom(x, y) all have
/// the same dimension.
///
/// # Errors
///
/// Propagates `central_projection` failures.
pub fn is_central_isomorphic<C: TensorCategory>(
    cat: &C,
    simples: &[C::Object],
    x: &CenterObject<C>,
    y: &CenterObject<C>,
) -> Result<bool, CenterError> {
    if !cat.is_isomorphic(x.object(), y.object()) {
        return Ok(false);
    }
    let end_x = central_hom(cat, simples, x, x)?.len();
    if central_hom(cat, simples, y, y)?.len() != end_x {
        return Ok(false);
    }
    Ok(central_hom(cat, simples, x, y)?.len() == end_x)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::category::CenterCategory;
    use drinfeld_category::{FiniteGroup, GradedVectorSpaces};
    use drinfeld_rings::finite_field::FiniteField;
    use drinfeld_rings::rationals::Q;

    /// The unit with its trivial half-braiding, zeroed at `broken`.
    fn unit_braiding<C: TensorCategory>(
        cat: &C,
        z: &C::Object,
        broken: &[usize],
    ) -> CenterObject<C> {
        let half_braiding = cat
            .simples()
            .iter()
            .enumerate()
            .map(|(k, s)| {
                if broken.contains(&k) {
                    cat.zero_morphism(&cat.tensor(z, s), &cat.tensor(s, z))
                } else {
                    cat.compose(&cat.left_unitor(s), &cat.right_unitor_inverse(s))
                }
            })
            .collect();
        CenterObject::new(z.clone(), half_braiding)
    }

    #[test]
    fn test_projection_fixes_identity_of_unit() {
        let cat = GradedVectorSpaces::<Q>::new(FiniteGroup::cyclic(3));
        let simples = cat.simples();
        let one = cat.one();
        let x = unit_braiding(&cat, &one, &[]);
        let p = central_projection(&cat, &simples, &x, &x, &cat.id(&one)).unwrap();
        assert_eq!(p, cat.id(&one));
    }

    #[test]
    fn test_failed_inverse_names_dual_simple() {
        // only the component at δ_2 = δ_1* is singular
        let cat = GradedVectorSpaces::<Q>::new(FiniteGroup::cyclic(3));
        let simples = cat.simples();
        let one = cat.one();
        let x = unit_braiding(&cat, &one, &[2]);

        let err = central_projection(&cat, &simples, &x, &x, &cat.id(&one)).unwrap_err();
        assert!(matches!(err, CenterError::NotInvertible { simple: 2 }));

        let center = CenterCategory::new(Arc::new(cat));
        let err = center.dual(&x).unwrap_err();
        assert!(matches!(err, CenterError::NotInvertible { simple: 2 }));
    }

    #[test]
    fn test_zero_global_dimension() {
        // dim Vec_{Z/6} = 6 vanishes in GF(3)
        let cat = GradedVectorSpaces::<FiniteField<3>>::new(FiniteGroup::cyclic(6));
        let simples = cat.simples();
        let one = cat.one();
        let x = unit_braiding(&cat, &one, &[]);
        let err = central_projection(&cat, &simples, &x, &x, &cat.id(&one)).unwrap_err();
        assert!(matches!(err, CenterError::DegenerateGlobalDimension));
    }
}
