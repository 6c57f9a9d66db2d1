//! Coefficient-monomial pairs.

use std::fmt;

use groebner_rings::error::Result;
use groebner_rings::traits::{Field, Ring};

use crate::monomial::Monomial;

/// A single term c * m.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term<F> {
    coeff: F,
    monomial: Monomial,
}

impl<F> Term<F> {
    /// Creates a new term.
    #[must_use]
    pub fn new(coeff: F, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &F {
        &self.coeff
    }

    /// Returns the monomial.
    #[must_use]
    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    /// Splits the term into its coefficient and monomial.
    #[must_use]
    pub fn into_parts(self) -> (F, Monomial) {
        (self.coeff, self.monomial)
    }

    /// Checks if `other` divides `self`.
    ///
    /// Over a field every nonzero coefficient is a unit, so only the
    /// monomials decide.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        self.monomial.is_divisible_by(&other.monomial)
    }
}

impl<F: Ring> Term<F> {
    /// Creates the constant term c.
    #[must_use]
    pub fn constant(coeff: F) -> Self {
        Self::new(coeff, Monomial::one())
    }

    /// Multiplies two terms.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            coeff: self.coeff.clone() * other.coeff.clone(),
            monomial: self.monomial.mul(&other.monomial),
        }
    }

    /// Multiplies the coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        Self {
            coeff: self.coeff.clone() * c.clone(),
            monomial: self.monomial.clone(),
        }
    }
}

impl<F: Field> Term<F> {
    /// Divides this term by another.
    ///
    /// # Errors
    ///
    /// Propagates the field error if the divisor's coefficient is zero.
    ///
    /// # Panics
    ///
    /// Panics if the monomial of `other` does not divide the monomial of
    /// `self`. Callers check [`Term::is_divisible_by`] first.
    pub fn div(&self, other: &Self) -> Result<Self> {
        let Some(monomial) = self.monomial.div(&other.monomial) else {
            panic!("{:?} does not divide {:?}", other.monomial, self.monomial);
        };
        Ok(Self {
            coeff: self.coeff.try_div(&other.coeff)?,
            monomial,
        })
    }
}

impl<F: Ring> std::ops::Neg for Term<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coeff: -self.coeff,
            monomial: self.monomial,
        }
    }
}

impl<F: Ring + fmt::Display> fmt::Display for Term<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_one() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{}", self.monomial)
        } else {
            write!(f, "{}*{}", self.coeff, self.monomial)
        }
    }
}
