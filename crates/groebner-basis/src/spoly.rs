//! S-polynomials.
//!
//! For nonzero f and g with m = lcm(LM(f), LM(g)),
//!
//! ```text
//! S(f, g) = (m / LT(f)) * f - (m / LT(g)) * g
//! ```
//!
//! Both scaled leading terms equal m with coefficient one, so they cancel
//! exactly.

use groebner_poly::{Polynomial, Term};
use groebner_rings::error::Result;
use groebner_rings::traits::{Field, Ring};

/// Returns the term multipliers (m / LT(f), m / LT(g)) of the S-polynomial.
///
/// Returns `None` if either polynomial is zero.
///
/// # Errors
///
/// Propagates a failure to invert a leading coefficient.
pub fn cofactors<F: Field>(
    f: &Polynomial<F>,
    g: &Polynomial<F>,
) -> Result<Option<(Term<F>, Term<F>)>> {
    let (Some(lt_f), Some(lt_g)) = (f.leading_term(), g.leading_term()) else {
        return Ok(None);
    };

    let lcm = Term::new(F::one(), lt_f.monomial().lcm(lt_g.monomial()));
    let m_f = lcm.div(lt_f)?;
    let m_g = lcm.div(lt_g)?;
    Ok(Some((m_f, m_g)))
}

/// Computes the S-polynomial of `f` and `g`.
///
/// Zero inputs yield the zero polynomial.
///
/// # Errors
///
/// Propagates a failure to invert a leading coefficient.
///
/// # Panics
///
/// Panics if `f` and `g` use different monomial orderings.
pub fn s_polynomial<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Result<Polynomial<F>> {
    let Some((m_f, m_g)) = cofactors(f, g)? else {
        return Ok(Polynomial::zero(f.order()));
    };

    let scaled_f = f.mul_term(&m_f);
    let scaled_g = g.mul_term(&m_g);
    debug_assert_eq!(scaled_f.leading_term(), scaled_g.leading_term());

    Ok(scaled_f.sub(&scaled_g))
}
