//! Algebraic structure traits.
//!
//! This module defines the numeric contract that polynomial coefficients
//! must satisfy. Polynomial and Gröbner basis code is written against these
//! traits only and never branches on a concrete field.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ArithmeticError, Result};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n by binary exponentiation.
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Computes the multiplicative inverse, reporting failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotInvertible`] for the additive identity.
    fn try_inv(&self) -> Result<Self> {
        self.inv()
            .ok_or_else(|| ArithmeticError::NotInvertible(format!("{self:?}")))
    }

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    fn try_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.clone() * other.try_inv()?)
    }
}
