//! # drinfeld-poly
//!
//! Polynomial arithmetic for the center ideal.
//!
//! This crate provides:
//! - Exponent-vector monomials with lexicographic and grevlex orders
//! - Sparse multivariate polynomials kept sorted by a monomial order
//! - A `PolynomialRing` handle that hands out variables and constants
//! - Dense univariate polynomials for eliminants and root finding

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod ring;
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use polynomial::Polynomial;
pub use ring::PolynomialRing;
pub use univariate::UnivariatePoly;
