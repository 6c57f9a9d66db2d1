//! Standard polynomial systems used for testing and benchmarking.

use groebner_poly::{Monomial, MonomialOrder, Polynomial, Term};
use groebner_rings::traits::Ring;

/// Returns the cyclic-n system in variables x_0, ..., x_{n-1}.
///
/// For each i in 1..n the i-th generator is the sum over j of the products
/// of i cyclically consecutive variables starting at x_j. The last generator
/// is x_0 * ... * x_{n-1} - 1.
#[must_use]
pub fn cyclic<F: Ring>(n: usize, order: MonomialOrder) -> Vec<Polynomial<F>> {
    let mut system: Vec<_> = (1..n)
        .map(|i| {
            let terms = (0..n)
                .map(|j| {
                    let mut exps = vec![0u32; n];
                    for k in 0..i {
                        exps[(j + k) % n] += 1;
                    }
                    Term::new(F::one(), Monomial::new(&exps))
                })
                .collect();
            Polynomial::new(terms, order)
        })
        .collect();

    let product = Term::new(F::one(), Monomial::new(&vec![1; n]));
    system.push(Polynomial::new(
        vec![product, Term::constant(-F::one())],
        order,
    ));
    system
}
