//! # drinfeld-solve
//!
//! Recovers the points of a zero-dimensional variety over the base field.
//!
//! A lex Gröbner basis of a zero-dimensional ideal always contains an
//! eliminant in its smallest variable. Its roots in the base field are
//! substituted back one at a time and the remaining system is solved again,
//! so the points come out variable by variable:
//!
//! ```text
//! g(x_{n-1})            -> roots r
//! G|_{x_{n-1} = r}      -> eliminant in x_{n-2} -> ...
//! ```
//!
//! Roots are found by the `RootField` trait: the rational root theorem over
//! `Q` and exhaustive search over prime fields. Roots outside the base field
//! are not recovered; how many were lost is logged at debug level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod roots;
pub mod solve;

#[cfg(test)]
mod proptests;

pub use error::SolveError;
pub use roots::RootField;
pub use solve::solve;
