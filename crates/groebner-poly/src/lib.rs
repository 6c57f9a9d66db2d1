//! # groebner-poly
//!
//! Canonical sparse multivariate polynomials over a field.
//!
//! This crate provides:
//! - Exponent-vector monomials with divisibility and LCM
//! - Admissible monomial orderings (lex, grlex, grevlex)
//! - Terms and canonically ordered sparse polynomials
//! - Elementary reduction, the building block of normal forms
//!
//! ## Canonical Form
//!
//! Every `Polynomial` keeps its terms strictly descending under its
//! ordering, with no repeated monomial and no zero coefficient. Debug builds
//! check this after every construction step.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use polynomial::Polynomial;
pub use term::Term;
