//! # drinfeld-groebner
//!
//! Gröbner bases and the ideal operations the center search relies on.
//!
//! This crate provides:
//! - Buchberger's algorithm with the product and chain criteria, producing
//!   reduced bases under any `MonomialOrder`
//! - `Ideal`, with ideal sums, membership and the Krull dimension of the
//!   affine variety
//!
//! The dimension is read off the leading monomials of a grevlex basis: it is
//! the size of the largest set of variables containing the support of no
//! leading monomial.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod buchberger;
pub mod dimension;
pub mod error;
pub mod ideal;

#[cfg(test)]
mod proptests;

pub use buchberger::{groebner_basis, normal_form, GroebnerConfig};
pub use dimension::{krull_dimension, VarietyDimension};
pub use error::GroebnerError;
pub use ideal::Ideal;
