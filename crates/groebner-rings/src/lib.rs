//! # groebner-rings
//!
//! Coefficient fields for Gröbner basis computation.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Concrete implementations: Q (exact rationals) and Z_p (prime residues)
//! - `ArithmeticError`, the only recoverable failure of field arithmetic
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod finite_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, Result};
pub use finite_field::{FiniteField, GF998244353};
pub use rationals::Q;
pub use traits::{Field, Ring};
