//! Property-based tests for S-polynomials and the Buchberger engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::basis::Basis;
    use crate::buchberger::groebner_basis;
    use crate::spoly::{cofactors, s_polynomial};
    use groebner_poly::{MonomialOrder, Polynomial};
    use groebner_rings::finite_field::GF998244353;
    use groebner_rings::traits::Ring;

    type Fp = GF998244353;

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Polynomials in two variables, degree at most 2 per variable
    fn small_poly(order: MonomialOrder) -> impl Strategy<Value = Polynomial<Fp>> {
        proptest::collection::vec(
            (-5i64..5, proptest::collection::vec(0u32..3, 0..=2)),
            1..=3,
        )
        .prop_map(move |terms| {
            Polynomial::from_exponents(
                terms.into_iter().map(|(c, e)| (Fp::from_signed(c), e)),
                order,
            )
        })
    }

    fn generators() -> impl Strategy<Value = (MonomialOrder, Vec<Polynomial<Fp>>)> {
        any_order().prop_flat_map(|order| {
            (
                Just(order),
                proptest::collection::vec(small_poly(order), 1..=3),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn s_polynomial_leads_cancel((order, polys) in generators()) {
            let f = &polys[0];
            let g = polys.get(1).unwrap_or(f);
            prop_assume!(!f.is_zero() && !g.is_zero());

            let (m_f, m_g) = cofactors(f, g).unwrap().unwrap();
            let lead_f = f.leading_term().unwrap().mul(&m_f);
            let lead_g = g.leading_term().unwrap().mul(&m_g);
            prop_assert_eq!(&lead_f, &lead_g);
            prop_assert!(lead_f.coeff().is_one());

            // The S-polynomial lies strictly below the cancelled monomial
            let s = s_polynomial(f, g).unwrap();
            if let Some(lead) = s.leading_monomial() {
                prop_assert_eq!(
                    order.compare(lead, lead_f.monomial()),
                    std::cmp::Ordering::Less
                );
            }
        }

        #[test]
        fn engine_output_is_reduced_groebner((order, polys) in generators()) {
            let basis = groebner_basis(polys.clone(), order).unwrap();

            prop_assert!(basis.is_groebner().unwrap());
            for g in &polys {
                prop_assert!(basis.contains(g).unwrap());
            }
            for p in &basis {
                prop_assert!(p.is_canonical());
                prop_assert!(p.leading_coeff().is_some_and(Fp::is_one));
            }

            let mut again = basis.clone();
            again.build_groebner().unwrap();
            prop_assert_eq!(again.polynomials(), basis.polynomials());
        }

        #[test]
        fn engine_ignores_generator_order((order, polys) in generators()) {
            let forward = groebner_basis(polys.clone(), order).unwrap();
            let backward = groebner_basis(polys.into_iter().rev(), order).unwrap();
            prop_assert_eq!(forward.polynomials(), backward.polynomials());
        }

        #[test]
        fn normal_form_is_stable((order, polys) in generators()) {
            let basis = Basis::from_polynomials(polys.clone(), order).unwrap();
            let f = polys.iter().fold(Polynomial::one(order), |acc, p| acc.mul(p));
            let r = basis.reduce(&f).unwrap();
            prop_assert_eq!(basis.reduce(&r).unwrap(), r);
        }
    }
}
