//! Sparse multivariate polynomials in canonical form.
//!
//! A polynomial is a sequence of terms that is strictly descending under its
//! monomial ordering, holds each monomial at most once and never stores a
//! zero coefficient. Every constructor and every arithmetic operation returns
//! a value in this form, so structural equality is polynomial equality.

use std::cmp::Ordering;

use groebner_rings::error::Result;
use groebner_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::term::Term;

/// A sparse multivariate polynomial.
///
/// Terms are stored in sorted order (by the monomial ordering), leading
/// term first.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<F> {
    /// Terms in strictly descending order.
    terms: Vec<Term<F>>,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<F: Ring> Polynomial<F> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms may arrive in any order; they are sorted, like terms are
    /// combined and terms that cancel are dropped.
    #[must_use]
    pub fn new(terms: Vec<Term<F>>, order: MonomialOrder) -> Self {
        let poly = Self {
            terms: canonicalize(terms, order),
            order,
        };
        debug_assert!(poly.is_canonical());
        poly
    }

    /// Creates a polynomial from raw (coefficient, exponent vector) pairs.
    #[must_use]
    pub fn from_exponents<I, E>(pairs: I, order: MonomialOrder) -> Self
    where
        I: IntoIterator<Item = (F, E)>,
        E: AsRef<[u32]>,
    {
        let terms = pairs
            .into_iter()
            .map(|(c, exps)| Term::new(c, Monomial::new(exps.as_ref())))
            .collect();
        Self::new(terms, order)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(order: MonomialOrder) -> Self {
        Self::constant(F::one(), order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: F, order: MonomialOrder) -> Self {
        Self::from_term(Term::constant(c), order)
    }

    /// Creates a single variable x_i.
    #[must_use]
    pub fn var(i: usize, order: MonomialOrder) -> Self {
        Self::from_term(Term::new(F::one(), Monomial::var(i)), order)
    }

    /// Creates a polynomial with a single term.
    #[must_use]
    pub fn from_term(term: Term<F>, order: MonomialOrder) -> Self {
        if term.coeff().is_zero() {
            Self::zero(order)
        } else {
            Self {
                terms: vec![term],
                order,
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[Term<F>] {
        &self.terms
    }

    /// Consumes the polynomial, returning its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term<F>> {
        self.terms
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<F>> {
        self.terms.first()
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(Term::monomial)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&F> {
        self.terms.first().map(Term::coeff)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.terms
            .iter()
            .map(|t| t.monomial().total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Checks the canonical-form invariants: strictly descending monomials
    /// (which also rules out duplicates) and no zero coefficients.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        let sorted = self.terms.windows(2).all(|w| {
            self.order.compare(w[0].monomial(), w[1].monomial()) == Ordering::Greater
        });
        sorted && self.terms.iter().all(|t| !t.coeff().is_zero())
    }

    /// Adds two polynomials by merging their sorted term sequences.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.assert_same_order(other);

        let (a, b) = (&self.terms, &other.terms);
        let mut terms = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match self.order.compare(a[i].monomial(), b[j].monomial()) {
                Ordering::Greater => {
                    terms.push(a[i].clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(b[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let c = a[i].coeff().clone() + b[j].coeff().clone();
                    if !c.is_zero() {
                        terms.push(Term::new(c, a[i].monomial().clone()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend_from_slice(&a[i..]);
        terms.extend_from_slice(&b[j..]);

        let sum = Self {
            terms,
            order: self.order,
        };
        debug_assert!(sum.is_canonical());
        sum
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|t| -t.clone()).collect(),
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.assert_same_order(other);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.order);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for t1 in &self.terms {
            for t2 in &other.terms {
                terms.push(t1.mul(t2));
            }
        }

        Self::new(terms, self.order)
    }

    /// Multiplies by a single term.
    ///
    /// Admissible orders are compatible with multiplication, so the shifted
    /// terms are already sorted.
    #[must_use]
    pub fn mul_term(&self, t: &Term<F>) -> Self {
        if t.coeff().is_zero() {
            return Self::zero(self.order);
        }

        let product = Self {
            terms: self
                .terms
                .iter()
                .map(|s| s.mul(t))
                .filter(|s| !s.coeff().is_zero())
                .collect(),
            order: self.order,
        };
        debug_assert!(product.is_canonical());
        product
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        self.mul_term(&Term::constant(c.clone()))
    }

    /// Compares two polynomials term by term under the ordering, the longer
    /// polynomial winning when one is a prefix of the other.
    ///
    /// Coefficients are not consulted.
    #[must_use]
    pub fn cmp_terms(&self, other: &Self) -> Ordering {
        self.assert_same_order(other);

        for (a, b) in self.terms.iter().zip(&other.terms) {
            match self.order.compare(a.monomial(), b.monomial()) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }

    fn assert_same_order(&self, other: &Self) {
        assert_eq!(
            self.order, other.order,
            "polynomials must share a monomial ordering"
        );
    }
}

impl<F: Field> Polynomial<F> {
    /// Scales the polynomial so its leading coefficient is one.
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates a failure to invert the leading coefficient.
    pub fn monic(&self) -> Result<Self> {
        match self.leading_coeff() {
            None => Ok(self.clone()),
            Some(lc) if lc.is_one() => Ok(self.clone()),
            Some(lc) => Ok(self.scale(&lc.try_inv()?)),
        }
    }

    /// Performs one elementary reduction step by `g`.
    ///
    /// Finds the first term t (in sequence order) divisible by the leading
    /// term of `g` and returns `self - (t / lt(g)) * g`, which no longer
    /// contains the monomial of t. Returns `None` when no term is divisible
    /// or `g` is zero.
    ///
    /// # Errors
    ///
    /// Propagates field errors from the coefficient division.
    pub fn elementary_reduce(&self, g: &Self) -> Result<Option<Self>> {
        let Some(lead) = g.leading_term() else {
            return Ok(None);
        };
        let Some(t) = self.terms.iter().find(|t| t.is_divisible_by(lead)) else {
            return Ok(None);
        };

        let quotient = t.div(lead)?;
        Ok(Some(self.sub(&g.mul_term(&quotient))))
    }

    /// Applies elementary reduction by `g` until no term is divisible by the
    /// leading term of `g`.
    ///
    /// Each step replaces one term by strictly smaller ones, so the loop
    /// terminates under any admissible order. Returns `None` when not even
    /// one step applies.
    ///
    /// # Errors
    ///
    /// Propagates field errors from the coefficient division.
    pub fn reduce_repeatedly_by(&self, g: &Self) -> Result<Option<Self>> {
        let Some(mut current) = self.elementary_reduce(g)? else {
            return Ok(None);
        };
        while let Some(next) = current.elementary_reduce(g)? {
            current = next;
        }
        Ok(Some(current))
    }
}

/// Sorts descending, combines like terms and drops zero coefficients.
fn canonicalize<F: Ring>(mut terms: Vec<Term<F>>, order: MonomialOrder) -> Vec<Term<F>> {
    terms.sort_by(|a, b| order.compare(b.monomial(), a.monomial()));

    let mut merged: Vec<(F, Monomial)> = Vec::with_capacity(terms.len());
    for (coeff, monomial) in terms.into_iter().map(Term::into_parts) {
        if let Some((c, m)) = merged.last_mut() {
            if *m == monomial {
                let prev = std::mem::replace(c, F::zero());
                *c = prev + coeff;
                continue;
            }
        }
        merged.push((coeff, monomial));
    }

    merged
        .into_iter()
        .filter(|(c, _)| !c.is_zero())
        .map(|(c, m)| Term::new(c, m))
        .collect()
}

impl<F: Ring> std::ops::Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<F: Ring> std::ops::Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<F: Ring> std::ops::Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<F: Ring> std::ops::Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl<F: Ring + std::fmt::Display> std::fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self.terms.iter().map(ToString::to_string).collect();
        write!(f, "{}", terms.join(" + "))
    }
}
