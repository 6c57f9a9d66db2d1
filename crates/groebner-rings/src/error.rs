//! Errors raised by field arithmetic.

use thiserror::Error;

/// A failed field operation.
///
/// Field arithmetic is total except for division, so this is the only error
/// that can surface from polynomial arithmetic or a Gröbner basis computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was the additive identity.
    #[error("division by zero")]
    DivisionByZero,

    /// The element has no multiplicative inverse.
    #[error("{0} has no multiplicative inverse")]
    NotInvertible(String),
}

/// Result alias for fallible field arithmetic.
pub type Result<T> = std::result::Result<T, ArithmeticError>;
