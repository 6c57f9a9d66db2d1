//! Buchberger Gröbner basis algorithm.
//!
//! This crate provides:
//! - S-polynomials of pairs of generators
//! - `Basis`, an ordered generator collection with normal-form reduction
//! - A staged Buchberger engine producing the reduced Gröbner basis
//!
//! ## Stages
//!
//! ```text
//! Building -> Minimizing -> AutoReducing -> Normalizing -> Sorted
//! ```
//!
//! The result is unique for a given ideal and monomial ordering: minimal,
//! fully reduced, monic and sorted descending by leading term.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod buchberger;
pub mod spoly;

#[cfg(test)]
mod proptests;

pub use basis::Basis;
pub use buchberger::{groebner_basis, Buchberger, BuchbergerConfig, Stage};
pub use spoly::s_polynomial;
