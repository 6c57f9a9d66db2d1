//! Buchberger's algorithm.
//!
//! The engine runs a fixed sequence of stages over a [`Basis`]:
//!
//! 1. **Building**: add the nonzero remainders of S-polynomials until every
//!    S-polynomial reduces to zero.
//! 2. **Minimizing**: drop generators whose leading monomial is divisible by
//!    that of another generator.
//! 3. **AutoReducing**: replace every generator by its normal form against
//!    the others.
//! 4. **Normalizing**: make every generator monic.
//! 5. **Sorted**: order the generators descending by leading term.
//!
//! After all five stages the basis is the reduced Gröbner basis of the ideal,
//! which is unique for the ideal and the monomial ordering.

use groebner_poly::{MonomialOrder, Polynomial};
use groebner_rings::error::Result;
use groebner_rings::traits::Field;
use tracing::{debug, instrument, trace};

use crate::basis::Basis;
use crate::spoly::s_polynomial;

/// A stage of the engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Stage {
    /// Completing the generators under S-polynomial reduction.
    Building,
    /// Removing generators with redundant leading monomials.
    Minimizing,
    /// Reducing every generator against the others.
    AutoReducing,
    /// Making every generator monic.
    Normalizing,
    /// Sorting the generators.
    Sorted,
}

impl Stage {
    /// Returns the stage after this one, or `None` after `Sorted`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Stage::Building => Some(Stage::Minimizing),
            Stage::Minimizing => Some(Stage::AutoReducing),
            Stage::AutoReducing => Some(Stage::Normalizing),
            Stage::Normalizing => Some(Stage::Sorted),
            Stage::Sorted => None,
        }
    }
}

/// Configuration for the Buchberger engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuchbergerConfig {
    /// Whether to run the Minimizing stage.
    pub minimize: bool,
    /// Whether to run the AutoReducing stage.
    ///
    /// Auto-reduction of a non-minimal basis still yields a Gröbner basis,
    /// but not necessarily the reduced one.
    pub auto_reduce: bool,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            minimize: true,
            auto_reduce: true,
        }
    }
}

/// The Buchberger Gröbner basis engine.
#[derive(Clone, Debug, Default)]
pub struct Buchberger {
    config: BuchbergerConfig,
}

impl Buchberger {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: BuchbergerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BuchbergerConfig {
        &self.config
    }

    /// Runs every stage over `basis`, leaving the reduced Gröbner basis of
    /// the ideal it generates in its place.
    ///
    /// # Errors
    ///
    /// Propagates field errors. The basis is left in an intermediate state.
    #[instrument(skip_all, fields(order = %basis.order(), generators = basis.len()))]
    pub fn run<F: Field>(&self, basis: &mut Basis<F>) -> Result<()> {
        let mut stage = Some(Stage::Building);
        while let Some(current) = stage {
            self.run_stage(current, basis)?;
            debug!(stage = ?current, generators = basis.len(), "stage complete");
            stage = current.next();
        }
        Ok(())
    }

    /// Runs a single stage over `basis`.
    ///
    /// Stages disabled by the configuration do nothing.
    ///
    /// # Errors
    ///
    /// Propagates field errors.
    pub fn run_stage<F: Field>(&self, stage: Stage, basis: &mut Basis<F>) -> Result<()> {
        match stage {
            Stage::Building => build(basis),
            Stage::Minimizing if self.config.minimize => {
                minimize(basis);
                Ok(())
            }
            Stage::AutoReducing if self.config.auto_reduce => auto_reduce(basis),
            Stage::Minimizing | Stage::AutoReducing => {
                debug!(stage = ?stage, "stage disabled");
                Ok(())
            }
            Stage::Normalizing => normalize(basis),
            Stage::Sorted => {
                basis.sort();
                Ok(())
            }
        }
    }
}

/// Computes the reduced Gröbner basis of the ideal generated by
/// `generators` with the default engine.
///
/// # Errors
///
/// Propagates field errors.
///
/// # Panics
///
/// Panics if a generator uses an ordering other than `order`.
pub fn groebner_basis<F, I>(generators: I, order: MonomialOrder) -> Result<Basis<F>>
where
    F: Field,
    I: IntoIterator<Item = Polynomial<F>>,
{
    let mut basis = Basis::from_polynomials(generators, order)?;
    Buchberger::default().run(&mut basis)?;
    Ok(basis)
}

/// Adds S-polynomial remainders until a pass adds nothing.
///
/// Every pair is reduced against the basis as it stood at the start of the
/// pass; the remainders are appended afterwards.
fn build<F: Field>(basis: &mut Basis<F>) -> Result<()> {
    for pass in 1usize.. {
        let n = basis.len();
        let mut remainders = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let s = s_polynomial(&basis.polys[i], &basis.polys[j])?;
                let r = basis.reduce(&s)?;
                if !r.is_zero() {
                    trace!(i, j, terms = r.len(), "nonzero remainder");
                    remainders.push(r);
                }
            }
        }

        debug!(
            pass,
            pairs = n * n.saturating_sub(1) / 2,
            added = remainders.len(),
            "building pass"
        );
        if remainders.is_empty() {
            break;
        }
        for r in remainders {
            basis.add(r)?;
        }
    }
    Ok(())
}

/// Drops every generator whose leading monomial is divisible by the leading
/// monomial of another. Among equal leading monomials the first is kept.
fn minimize<F: Field>(basis: &mut Basis<F>) {
    let leads: Vec<_> = basis
        .polys
        .iter()
        .map(|p| p.leading_monomial().cloned())
        .collect();

    let redundant = |i: usize| {
        let Some(lead) = &leads[i] else {
            return true;
        };
        leads.iter().enumerate().any(|(j, other)| {
            other.as_ref().is_some_and(|other| {
                j != i && lead.is_divisible_by(other) && (other != lead || j < i)
            })
        })
    };

    let mut index = 0;
    basis.polys.retain(|_| {
        let keep = !redundant(index);
        index += 1;
        keep
    });
}

/// Replaces each generator by its normal form against the others, dropping
/// those that reduce to zero, until a pass changes nothing.
fn auto_reduce<F: Field>(basis: &mut Basis<F>) -> Result<()> {
    for pass in 1usize.. {
        let mut changed = false;
        let mut i = 0;

        while i < basis.len() {
            let g = basis.polys.remove(i);
            let r = basis.reduce(&g)?;
            if r.is_zero() {
                changed = true;
                continue;
            }
            changed |= r != g;
            basis.polys.insert(i, r);
            i += 1;
        }

        debug!(pass, changed, generators = basis.len(), "auto-reduction pass");
        if !changed {
            break;
        }
    }
    Ok(())
}

fn normalize<F: Field>(basis: &mut Basis<F>) -> Result<()> {
    for p in &mut basis.polys {
        *p = p.monic()?;
    }
    Ok(())
}
