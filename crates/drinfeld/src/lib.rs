//! # Drinfeld
//!
//! Computes the Drinfeld center Z(C) of a semisimple pivotal tensor
//! category by turning the hexagon equations of a half-braiding into a
//! polynomial system and solving it.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: rationals and prime fields
//! - **Gröbner Bases**: Buchberger with reduced output, ideal dimension
//! - **Point Recovery**: lex elimination with roots in the base field
//! - **Tensor Categories**: a trait for base categories, and Vec_G^ω
//! - **Center Search**: simple objects bounded by dim Z(C) = dim(C)²
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use drinfeld::prelude::*;
//!
//! let base = GradedVectorSpaces::<Q>::new(FiniteGroup::cyclic(2));
//! let center = CenterCategory::new(Arc::new(base));
//! let simples = center.simples().unwrap();
//! assert_eq!(simples.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use drinfeld_category as category;
pub use drinfeld_center as center;
pub use drinfeld_groebner as groebner;
pub use drinfeld_linalg as linalg;
pub use drinfeld_poly as poly;
pub use drinfeld_rings as rings;
pub use drinfeld_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use drinfeld_category::{FiniteGroup, GradedVectorSpaces, TensorCategory};
    pub use drinfeld_center::{
        center_simples, half_braidings, CenterCategory, CenterError, CenterMorphism, CenterObject,
        SearchConfig, SearchReport,
    };
    pub use drinfeld_groebner::{GroebnerConfig, Ideal, VarietyDimension};
    pub use drinfeld_poly::{MonomialOrder, Polynomial, PolynomialRing};
    pub use drinfeld_rings::{Field, FiniteField, Ring, Q};
}
