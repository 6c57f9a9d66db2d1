//! Ordered generator collections.
//!
//! A `Basis` owns a sequence of nonzero polynomials that share one monomial
//! ordering. Generators are kept in insertion order, which normal-form
//! reduction and the engine stages rely on for determinism.

use std::fmt;

use groebner_poly::{MonomialOrder, Polynomial};
use groebner_rings::error::Result;
use groebner_rings::traits::{Field, Ring};

use crate::buchberger::Buchberger;
use crate::spoly::s_polynomial;

/// An ordered collection of generators of a polynomial ideal.
#[derive(Clone, Debug)]
pub struct Basis<F> {
    /// Generators in iteration order, none of them zero.
    pub(crate) polys: Vec<Polynomial<F>>,
    /// Monomial ordering shared by every generator.
    order: MonomialOrder,
}

impl<F> Basis<F> {
    /// Creates an empty basis.
    #[must_use]
    pub fn new(order: MonomialOrder) -> Self {
        Self {
            polys: Vec::new(),
            order,
        }
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Checks if the basis has no generators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Returns the generators in iteration order.
    #[must_use]
    pub fn polynomials(&self) -> &[Polynomial<F>] {
        &self.polys
    }

    /// Consumes the basis and returns its generators.
    #[must_use]
    pub fn into_polynomials(self) -> Vec<Polynomial<F>> {
        self.polys
    }

    /// Iterates over the generators.
    pub fn iter(&self) -> std::slice::Iter<'_, Polynomial<F>> {
        self.polys.iter()
    }

    /// Removes the generator at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Polynomial<F> {
        self.polys.remove(index)
    }

    /// Removes every generator.
    pub fn clear(&mut self) {
        self.polys.clear();
    }
}

impl<F: Field> Basis<F> {
    /// Creates a basis from generators, skipping zeros and making each
    /// generator monic.
    ///
    /// # Errors
    ///
    /// Propagates a failure to invert a leading coefficient.
    ///
    /// # Panics
    ///
    /// Panics if a generator uses a different monomial ordering.
    pub fn from_polynomials<I>(polys: I, order: MonomialOrder) -> Result<Self>
    where
        I: IntoIterator<Item = Polynomial<F>>,
    {
        let mut basis = Self::new(order);
        for p in polys {
            basis.add(p)?;
        }
        Ok(basis)
    }

    /// Appends a generator.
    ///
    /// The zero polynomial is skipped; anything else is made monic.
    ///
    /// # Errors
    ///
    /// Propagates a failure to invert the leading coefficient.
    ///
    /// # Panics
    ///
    /// Panics if `poly` uses a different monomial ordering.
    pub fn add(&mut self, poly: Polynomial<F>) -> Result<()> {
        assert_eq!(
            poly.order(),
            self.order,
            "generator ordering does not match the basis"
        );
        if poly.is_zero() {
            return Ok(());
        }
        self.polys.push(poly.monic()?);
        Ok(())
    }

    /// Removes the first generator equal to `poly`.
    pub fn remove(&mut self, poly: &Polynomial<F>) -> Option<Polynomial<F>> {
        let index = self.polys.iter().position(|p| p == poly)?;
        Some(self.polys.remove(index))
    }

    /// Computes the normal form of `f` with respect to the generators.
    ///
    /// Generators are scanned in order; the first one that applies is used
    /// to reduce `f` repeatedly and the scan starts over. The result has no
    /// term divisible by the leading term of any generator.
    ///
    /// # Errors
    ///
    /// Propagates field errors from the reduction steps.
    pub fn reduce(&self, f: &Polynomial<F>) -> Result<Polynomial<F>> {
        let mut current = f.clone();
        'scan: loop {
            for g in &self.polys {
                if let Some(reduced) = current.reduce_repeatedly_by(g)? {
                    current = reduced;
                    continue 'scan;
                }
            }
            return Ok(current);
        }
    }

    /// Checks ideal membership by reducing `f` to its normal form.
    ///
    /// The answer is only decisive once the basis is a Gröbner basis.
    ///
    /// # Errors
    ///
    /// Propagates field errors from the reduction steps.
    pub fn contains(&self, f: &Polynomial<F>) -> Result<bool> {
        Ok(self.reduce(f)?.is_zero())
    }

    /// Checks Buchberger's criterion: every S-polynomial of a pair of
    /// generators reduces to zero.
    ///
    /// # Errors
    ///
    /// Propagates field errors from the S-polynomials and reductions.
    pub fn is_groebner(&self) -> Result<bool> {
        for (i, f) in self.polys.iter().enumerate() {
            for g in &self.polys[i + 1..] {
                if !self.contains(&s_polynomial(f, g)?)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Replaces the generators with the reduced Gröbner basis of the ideal
    /// they generate, using the default engine configuration.
    ///
    /// # Errors
    ///
    /// Propagates field errors from the computation.
    pub fn build_groebner(&mut self) -> Result<()> {
        Buchberger::default().run(self)
    }
}

impl<F: Ring> Basis<F> {
    /// Sorts the generators descending by leading term, ties broken by the
    /// remaining terms and then by length. The sort is stable.
    pub fn sort(&mut self) {
        self.polys.sort_by(|a, b| b.cmp_terms(a));
    }

    fn sorted(&self) -> Vec<&Polynomial<F>> {
        let mut polys: Vec<_> = self.polys.iter().collect();
        polys.sort_by(|a, b| b.cmp_terms(a));
        polys
    }
}

impl<F: Ring> PartialEq for Basis<F> {
    /// Two bases are equal when they share an ordering and their generators
    /// agree after sorting.
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.sorted() == other.sorted()
    }
}

impl<F: Ring> Eq for Basis<F> {}

impl<'a, F> IntoIterator for &'a Basis<F> {
    type Item = &'a Polynomial<F>;
    type IntoIter = std::slice::Iter<'a, Polynomial<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polys.iter()
    }
}

impl<F: Ring + fmt::Display> fmt::Display for Basis<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.polys.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
