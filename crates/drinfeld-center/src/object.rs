//! Objects and morphisms of the center.

use std::fmt;

use drinfeld_category::TensorCategory;

/// One component per base simple: γ_k : Z⊗S_k → S_k⊗Z.
pub type HalfBraiding<C> = Vec<<C as TensorCategory>::Morphism>;

/// An object of the Drinfeld center: a base object with a half-braiding.
///
/// Components are indexed like the simples of the base category. The
/// `CenterCategory` that produced the object supplies its operations.
pub struct CenterObject<C: TensorCategory> {
    object: C::Object,
    half_braiding: HalfBraiding<C>,
}

impl<C: TensorCategory> CenterObject<C> {
    /// Pairs a base object with its half-braiding components.
    #[must_use]
    pub fn new(object: C::Object, half_braiding: HalfBraiding<C>) -> Self {
        Self {
            object,
            half_braiding,
        }
    }

    /// The underlying base object.
    #[must_use]
    pub fn object(&self) -> &C::Object {
        &self.object
    }

    /// All components, in the order of the base simples.
    #[must_use]
    pub fn half_braiding(&self) -> &[C::Morphism] {
        &self.half_braiding
    }

    /// γ_k : Z⊗S_k → S_k⊗Z.
    #[must_use]
    pub fn component(&self, k: usize) -> &C::Morphism {
        &self.half_braiding[k]
    }
}

impl<C: TensorCategory> Clone for CenterObject<C> {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
            half_braiding: self.half_braiding.clone(),
        }
    }
}

impl<C: TensorCategory> PartialEq for CenterObject<C> {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object && self.half_braiding == other.half_braiding
    }
}

impl<C: TensorCategory> fmt::Debug for CenterObject<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CenterObject")
            .field("object", &self.object)
            .field("half_braiding", &self.half_braiding)
            .finish()
    }
}

/// A morphism of the center: a base morphism commuting with the
/// half-braidings of its ends.
pub struct CenterMorphism<C: TensorCategory> {
    domain: CenterObject<C>,
    codomain: CenterObject<C>,
    morphism: C::Morphism,
}

impl<C: TensorCategory> CenterMorphism<C> {
    /// Wraps a base morphism between the carriers of two central objects.
    ///
    /// Centrality is not checked; use `CenterCategory::central_projection`
    /// to produce central morphisms.
    #[must_use]
    pub fn new(domain: CenterObject<C>, codomain: CenterObject<C>, morphism: C::Morphism) -> Self {
        Self {
            domain,
            codomain,
            morphism,
        }
    }

    /// Source object.
    #[must_use]
    pub fn domain(&self) -> &CenterObject<C> {
        &self.domain
    }

    /// Target object.
    #[must_use]
    pub fn codomain(&self) -> &CenterObject<C> {
        &self.codomain
    }

    /// The underlying base morphism.
    #[must_use]
    pub fn morphism(&self) -> &C::Morphism {
        &self.morphism
    }
}

impl<C: TensorCategory> Clone for CenterMorphism<C> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            morphism: self.morphism.clone(),
        }
    }
}

impl<C: TensorCategory> PartialEq for CenterMorphism<C> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.codomain == other.codomain
            && self.morphism == other.morphism
    }
}

impl<C: TensorCategory> fmt::Debug for CenterMorphism<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CenterMorphism")
            .field("domain", &self.domain.object)
            .field("codomain", &self.codomain.object)
            .field("morphism", &self.morphism)
            .finish()
    }
}
