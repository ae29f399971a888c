//! The Drinfeld center as a category.

use std::sync::Arc;

use drinfeld_category::TensorCategory;
use drinfeld_rings::traits::OrderedField;
use drinfeld_solve::RootField;
use parking_lot::RwLock;

use crate::config::SearchConfig;
use crate::error::CenterError;
use crate::object::{CenterMorphism, CenterObject, HalfBraiding};
use crate::projector::{central_hom, central_projection, half_braiding_at, is_central_isomorphic};
use crate::search::{center_simples, SearchReport};

/// Z(C) for a semisimple tensor category C.
///
/// The base category is shared; the simple objects are computed on first
/// use and cached. Every operation takes `&self`, so one instance can be
/// used from several threads.
pub struct CenterCategory<C: TensorCategory> {
    base: Arc<C>,
    base_simples: Vec<C::Object>,
    config: SearchConfig,
    simples: RwLock<Option<Vec<CenterObject<C>>>>,
}

impl<C> CenterCategory<C>
where
    C: TensorCategory,
    C::Scalar: RootField + OrderedField,
{
    /// Center of `base` with the default search limits.
    #[must_use]
    pub fn new(base: Arc<C>) -> Self {
        Self::with_config(base, SearchConfig::default())
    }

    /// Center of `base` with explicit search limits.
    #[must_use]
    pub fn with_config(base: Arc<C>, config: SearchConfig) -> Self {
        let base_simples = base.simples();
        Self {
            base,
            base_simples,
            config,
            simples: RwLock::new(None),
        }
    }

    /// The base category.
    #[must_use]
    pub fn base(&self) -> &C {
        &self.base
    }

    /// The simples of the base, in the order used by half-braidings.
    #[must_use]
    pub fn base_simples(&self) -> &[C::Object] {
        &self.base_simples
    }

    /// The search limits used by `simples`.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Simple objects of the center, searched for on first call.
    ///
    /// # Errors
    ///
    /// Propagates search failures. Nothing is cached on failure.
    pub fn simples(&self) -> Result<Vec<CenterObject<C>>, CenterError> {
        self.simples_with(&self.config)
    }

    /// Like `simples`, but a search triggered by this call uses `config`.
    ///
    /// # Errors
    ///
    /// Propagates search failures.
    pub fn simples_with(&self, config: &SearchConfig) -> Result<Vec<CenterObject<C>>, CenterError> {
        if let Some(cached) = self.simples.read().as_ref() {
            return Ok(cached.clone());
        }
        Ok(self.search(config)?.simples)
    }

    /// Runs the search unconditionally and replaces the cached simples.
    ///
    /// # Errors
    ///
    /// Propagates search failures.
    pub fn search(&self, config: &SearchConfig) -> Result<SearchReport<C>, CenterError> {
        let mut cache = self.simples.write();
        let report = center_simples(self.base.as_ref(), &self.base_simples, config)?;
        *cache = Some(report.simples.clone());
        Ok(report)
    }

    /// Registers a simple object found elsewhere, e.g. one that the
    /// search could not reach.
    ///
    /// Objects isomorphic to an already known simple are ignored.
    ///
    /// # Errors
    ///
    /// Returns `NotSimple` if End(object) is not one-dimensional.
    pub fn add_simple(&self, object: CenterObject<C>) -> Result<(), CenterError> {
        let end_dimension = self.end_dimension(&object)?;
        if end_dimension != 1 {
            return Err(CenterError::NotSimple { end_dimension });
        }
        let mut cache = self.simples.write();
        let known = cache.get_or_insert_with(Vec::new);
        for s in known.iter() {
            if self.is_isomorphic(s, &object)? {
                return Ok(());
            }
        }
        known.push(object);
        Ok(())
    }

    /// The unit, with γ_k = λ_{S_k} then ρ⁻¹_{S_k}.
    #[must_use]
    pub fn one(&self) -> CenterObject<C> {
        let cat = self.base.as_ref();
        let one = cat.one();
        let half_braiding = self
            .base_simples
            .iter()
            .map(|s| cat.compose(&cat.left_unitor(s), &cat.right_unitor_inverse(s)))
            .collect();
        CenterObject::new(one, half_braiding)
    }

    /// X⊕Y with γ_i = Σ_t (1⊗ι_t) ∘ γ^t_i ∘ (π_t⊗1).
    #[must_use]
    pub fn direct_sum(&self, x: &CenterObject<C>, y: &CenterObject<C>) -> CenterObject<C> {
        let cat = self.base.as_ref();
        let sum = cat.direct_sum(x.object(), y.object());
        let half_braiding: HalfBraiding<C> = self
            .base_simples
            .iter()
            .enumerate()
            .map(|(k, s)| {
                let id_s = cat.id(s);
                let source = cat.tensor(&sum.object, s);
                let target = cat.tensor(s, &sum.object);
                let zero = cat.zero_morphism(&source, &target);
                [x, y].iter().enumerate().fold(zero, |acc, (t, part)| {
                    let piece = cat.compose_all(
                        &cat.tensor_morphisms(&sum.projections[t], &id_s),
                        &[part.component(k), &cat.tensor_morphisms(&id_s, &sum.inclusions[t])],
                    );
                    cat.add(&acc, &piece)
                })
            })
            .collect();
        CenterObject::new(sum.object, half_braiding)
    }

    /// X⊗Y with γ_i = a_{S,X,Y} ∘ (γ^X_i⊗1) ∘ a⁻¹_{X,S,Y} ∘ (1⊗γ^Y_i) ∘ a_{X,Y,S}.
    #[must_use]
    pub fn tensor(&self, x: &CenterObject<C>, y: &CenterObject<C>) -> CenterObject<C> {
        let cat = self.base.as_ref();
        let (xo, yo) = (x.object(), y.object());
        let (id_x, id_y) = (cat.id(xo), cat.id(yo));
        let half_braiding = self
            .base_simples
            .iter()
            .enumerate()
            .map(|(k, s)| {
                cat.compose_all(
                    &cat.associator(xo, yo, s),
                    &[
                        &cat.tensor_morphisms(&id_x, y.component(k)),
                        &cat.associator_inverse(xo, s, yo),
                        &cat.tensor_morphisms(x.component(k), &id_y),
                        &cat.associator(s, xo, yo),
                    ],
                )
            })
            .collect();
        CenterObject::new(cat.tensor(xo, yo), half_braiding)
    }

    /// X* with the half-braiding obtained from (γ^X)⁻¹ by bending X around.
    ///
    /// # Errors
    ///
    /// Returns `NotInvertible` if a component of `x` has no inverse.
    pub fn dual(&self, x: &CenterObject<C>) -> Result<CenterObject<C>, CenterError> {
        let cat = self.base.as_ref();
        let xo = x.object();
        let xd = cat.dual(xo);
        let id_xd = cat.id(&xd);
        let half_braiding = self
            .base_simples
            .iter()
            .enumerate()
            .map(|(k, s)| {
                let gamma_inv = cat
                    .inverse(x.component(k))
                    .ok_or(CenterError::NotInvertible { simple: k })?;
                let xd_s = cat.tensor(&xd, s);
                let id_s = cat.id(s);
                Ok(cat.compose_all(
                    &cat.right_unitor_inverse(&xd_s),
                    &[
                        &cat.tensor_morphisms(&cat.id(&xd_s), &cat.coev(xo)),
                        &cat.associator_inverse(&xd_s, xo, &xd),
                        &cat.tensor_morphisms(&cat.associator(&xd, s, xo), &id_xd),
                        &cat.tensor_morphisms(&cat.tensor_morphisms(&id_xd, &gamma_inv), &id_xd),
                        &cat.tensor_morphisms(&cat.associator_inverse(&xd, xo, s), &id_xd),
                        &cat.tensor_morphisms(&cat.tensor_morphisms(&cat.ev(xo), &id_s), &id_xd),
                        &cat.tensor_morphisms(&cat.left_unitor(s), &id_xd),
                    ],
                ))
            })
            .collect::<Result<HalfBraiding<C>, CenterError>>()?;
        Ok(CenterObject::new(xd, half_braiding))
    }

    /// The half-braiding of `x` at any base object.
    ///
    /// # Errors
    ///
    /// Returns `Category` if y cannot be decomposed into simples.
    pub fn half_braiding_at(
        &self,
        x: &CenterObject<C>,
        y: &C::Object,
    ) -> Result<C::Morphism, CenterError> {
        half_braiding_at(self.base.as_ref(), &self.base_simples, x, y)
    }

    /// Projects a base morphism between the carriers onto Hom_Z(x, y).
    ///
    /// # Errors
    ///
    /// Returns `NotInvertible` if a component of `x` has no inverse.
    pub fn central_projection(
        &self,
        x: &CenterObject<C>,
        y: &CenterObject<C>,
        f: &C::Morphism,
    ) -> Result<CenterMorphism<C>, CenterError> {
        let p = central_projection(self.base.as_ref(), &self.base_simples, x, y, f)?;
        Ok(CenterMorphism::new(x.clone(), y.clone(), p))
    }

    /// A basis of Hom_Z(x, y).
    ///
    /// # Errors
    ///
    /// Returns `NotInvertible` if a component of `x` has no inverse.
    pub fn hom(
        &self,
        x: &CenterObject<C>,
        y: &CenterObject<C>,
    ) -> Result<Vec<CenterMorphism<C>>, CenterError> {
        Ok(central_hom(self.base.as_ref(), &self.base_simples, x, y)?
            .into_iter()
            .map(|m| CenterMorphism::new(x.clone(), y.clone(), m))
            .collect())
    }

    /// dim End_Z(x).
    ///
    /// # Errors
    ///
    /// Returns `NotInvertible` if a component of `x` has no inverse.
    pub fn end_dimension(&self, x: &CenterObject<C>) -> Result<usize, CenterError> {
        Ok(central_hom(self.base.as_ref(), &self.base_simples, x, x)?.len())
    }

    /// Isomorphism in the center, not just of the carriers.
    ///
    /// # Errors
    ///
    /// Returns `NotInvertible` if a component of `x` or `y` has no inverse.
    pub fn is_isomorphic(
        &self,
        x: &CenterObject<C>,
        y: &CenterObject<C>,
    ) -> Result<bool, CenterError> {
        is_central_isomorphic(self.base.as_ref(), &self.base_simples, x, y)
    }

    /// f then g.
    #[must_use]
    pub fn compose(&self, f: &CenterMorphism<C>, g: &CenterMorphism<C>) -> CenterMorphism<C> {
        CenterMorphism::new(
            f.domain().clone(),
            g.codomain().clone(),
            self.base.compose(f.morphism(), g.morphism()),
        )
    }

    /// The identity of `x`.
    #[must_use]
    pub fn id(&self, x: &CenterObject<C>) -> CenterMorphism<C> {
        CenterMorphism::new(x.clone(), x.clone(), self.base.id(x.object()))
    }

    /// Pivotal trace of an endomorphism, computed in the base.
    #[must_use]
    pub fn trace(&self, f: &CenterMorphism<C>) -> C::Scalar {
        self.base.trace(f.morphism())
    }

    /// dim x = dim of its carrier.
    #[must_use]
    pub fn dim(&self, x: &CenterObject<C>) -> C::Scalar {
        self.base.dim(x.object())
    }

    /// c_{X,Y} : X⊗Y → Y⊗X, the half-braiding of `x` at the carrier of `y`.
    ///
    /// # Errors
    ///
    /// Returns `Category` if the carrier of `y` cannot be decomposed.
    pub fn braiding(
        &self,
        x: &CenterObject<C>,
        y: &CenterObject<C>,
    ) -> Result<CenterMorphism<C>, CenterError> {
        Ok(CenterMorphism::new(
            self.tensor(x, y),
            self.tensor(y, x),
            self.half_braiding_at(x, y.object())?,
        ))
    }
}
