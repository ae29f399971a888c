//! # drinfeld-category
//!
//! The interface a base category has to provide for its Drinfeld center to
//! be computed, and one concrete base category.
//!
//! This crate provides:
//! - `TensorCategory`: simples, tensor products, duals, associators, unitors,
//!   (co)evaluations, Hom-space bases and coordinates of a semisimple
//!   pivotal tensor category over a field
//! - `FiniteGroup`: groups given by a multiplication table
//! - `GradedVectorSpaces`: Vec_G^ω, G-graded vector spaces with associator
//!   twisted by a normalized 3-cocycle ω
//!
//! Morphisms compose in diagrammatic order: `compose(f, g)` is "f, then g".

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod graded;
pub mod group;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::CategoryError;
pub use graded::{GradedMorphism, GradedObject, GradedVectorSpaces};
pub use group::FiniteGroup;
pub use traits::{DirectSum, SimpleSummand, TensorCategory};
