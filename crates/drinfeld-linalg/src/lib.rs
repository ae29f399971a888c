//! # drinfeld-linalg
//!
//! Exact dense linear algebra over a field.
//!
//! Hom-spaces of a semisimple category are finite-dimensional, so every
//! morphism in the workspace is ultimately a block of small dense matrices.
//! This crate provides:
//! - Dense matrices with Gauss-Jordan elimination, rank and inverse
//! - Kronecker products for tensoring morphisms
//! - Row-reduced bases of spans, used for images of projectors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::{row_reduced_basis, DenseMatrix};
