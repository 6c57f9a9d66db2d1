//! # groebner
//!
//! Reduced Gröbner bases of polynomial ideals over a field.
//!
//! Given generators f_1, ..., f_k and a monomial ordering, Buchberger's
//! algorithm produces the unique reduced Gröbner basis of the ideal they
//! generate. Coefficients may come from any type implementing [`Field`];
//! exact rationals and prime fields are provided.
//!
//! ## Quick Start
//!
//! ```rust
//! use groebner::prelude::*;
//!
//! let order = MonomialOrder::Lex;
//! let x_plus_y = Polynomial::from_exponents(
//!     [(Q::from_integer(1), vec![1u32]), (Q::from_integer(1), vec![0, 1])],
//!     order,
//! );
//! let xy_minus_1 = Polynomial::from_exponents(
//!     [(Q::from_integer(1), vec![1u32, 1]), (Q::from_integer(-1), vec![])],
//!     order,
//! );
//!
//! let basis = groebner_basis([x_plus_y, xy_minus_1], order).unwrap();
//! assert_eq!(basis.to_string(), "x + y\ny^2 + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use groebner_basis as basis;
pub use groebner_poly as poly;
pub use groebner_rings as rings;

pub mod systems;

pub use groebner_rings::Field;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use groebner_basis::{groebner_basis, Basis, Buchberger, BuchbergerConfig, Stage};
    pub use groebner_poly::{Monomial, MonomialOrder, Polynomial, Term};
    pub use groebner_rings::{ArithmeticError, Field, FiniteField, Ring, GF998244353, Q};
}
