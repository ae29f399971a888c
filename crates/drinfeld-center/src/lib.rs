//! # drinfeld-center
//!
//! Simple objects of the Drinfeld center Z(C) of a semisimple pivotal
//! tensor category C, found by solving for half-braidings.
//!
//! This crate provides:
//! - `build_center_ideal`: the polynomial ideal whose points are the
//!   normalized half-braidings of a base object
//! - `half_braidings` and `guess_solutions`: its points, with branching on
//!   positive-dimensional varieties
//! - `center_simples`: a search over candidate carriers, bounded by
//!   dim Z(C) = dim(C)²
//! - `CenterCategory`: direct sums, tensor products, duals, Hom spaces and
//!   the braiding of Z(C)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use drinfeld_category::{FiniteGroup, GradedVectorSpaces};
//! use drinfeld_center::CenterCategory;
//! use drinfeld_rings::rationals::Q;
//!
//! let base = GradedVectorSpaces::<Q>::new(FiniteGroup::cyclic(2));
//! let center = CenterCategory::new(Arc::new(base));
//! assert_eq!(center.simples().unwrap().len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod category;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod ideal;
pub mod object;
pub mod projector;
pub mod search;

#[cfg(test)]
mod proptests;

pub use assemble::braidings_from_ideal;
pub use category::CenterCategory;
pub use config::{BranchConfig, SearchConfig};
pub use enumerate::{guess_solutions, half_braidings, BranchError};
pub use error::{CenterError, IncompleteSearchWarning};
pub use ideal::{build_center_ideal, verify_half_braiding, CenterIdeal};
pub use object::{CenterMorphism, CenterObject, HalfBraiding};
pub use projector::{central_hom, central_projection, half_braiding_at, is_central_isomorphic};
pub use search::{center_simples, SearchReport};
