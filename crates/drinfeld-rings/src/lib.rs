//! # drinfeld-rings
//!
//! Scalar structures for the Drinfeld center engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedField`
//! - Exact rationals `Q` backed by `dashu`
//! - Prime fields `FiniteField<P>`
//!
//! Every polynomial, matrix and morphism in the workspace is generic over a
//! `Field` from this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::FiniteField;
pub use rationals::Q;
pub use traits::{Field, OrderedField, Ring};
