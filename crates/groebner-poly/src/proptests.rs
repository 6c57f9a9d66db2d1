//! Property-based tests for monomial orderings and polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::polynomial::Polynomial;
    use groebner_rings::rationals::Q;

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Monomials in up to 3 variables with exponents 0..4
    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..4, 0..=3).prop_map(|e| Monomial::new(&e))
    }

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    // Raw (unsorted, possibly repeated, possibly zero) term lists
    fn raw_terms() -> impl Strategy<Value = Vec<(Q, Vec<u32>)>> {
        proptest::collection::vec(
            (small_coeff(), proptest::collection::vec(0u32..4, 0..=3)),
            0..=6,
        )
    }

    fn small_poly(order: MonomialOrder) -> impl Strategy<Value = Polynomial<Q>> {
        raw_terms().prop_map(move |terms| Polynomial::from_exponents(terms, order))
    }

    fn ordered_polys(n: usize) -> impl Strategy<Value = Vec<Polynomial<Q>>> {
        any_order().prop_flat_map(move |order| {
            proptest::collection::vec(small_poly(order), n..=n)
        })
    }

    proptest! {
        // Ordering admissibility

        #[test]
        fn order_compatible_with_multiplication(
            order in any_order(),
            a in small_monomial(),
            b in small_monomial(),
            c in small_monomial()
        ) {
            let ab = order.compare(&a, &b);
            prop_assert_eq!(order.compare(&a.mul(&c), &b.mul(&c)), ab);
        }

        #[test]
        fn order_places_multiples_above(
            order in any_order(),
            a in small_monomial(),
            c in small_monomial()
        ) {
            let b = a.mul(&c);
            prop_assume!(a != b);
            prop_assert!(b.is_divisible_by(&a));
            prop_assert_eq!(order.compare(&b, &a), Ordering::Greater);
        }

        #[test]
        fn order_is_antisymmetric(order in any_order(), a in small_monomial(), b in small_monomial()) {
            prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
            prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
        }

        // Monomial arithmetic

        #[test]
        fn monomial_div_inverts_mul(a in small_monomial(), b in small_monomial()) {
            let ab = a.mul(&b);
            prop_assert_eq!(ab.div(&b), Some(a.clone()));
            prop_assert!(ab.lcm(&a) == ab);
        }

        #[test]
        fn monomial_lcm_divisible_by_both(a in small_monomial(), b in small_monomial()) {
            let l = a.lcm(&b);
            prop_assert!(l.is_divisible_by(&a));
            prop_assert!(l.is_divisible_by(&b));
            prop_assert_eq!(
                l.mul(&a.gcd(&b)),
                a.mul(&b)
            );
        }

        // Canonical form

        #[test]
        fn construction_is_canonical(order in any_order(), terms in raw_terms()) {
            let p = Polynomial::from_exponents(terms, order);
            prop_assert!(p.is_canonical());
        }

        #[test]
        fn arithmetic_is_canonical(polys in ordered_polys(2)) {
            let (p, q) = (&polys[0], &polys[1]);
            prop_assert!(p.add(q).is_canonical());
            prop_assert!(p.sub(q).is_canonical());
            prop_assert!(p.mul(q).is_canonical());
        }

        // Ring laws

        #[test]
        fn poly_add_commutative(polys in ordered_polys(2)) {
            prop_assert_eq!(polys[0].add(&polys[1]), polys[1].add(&polys[0]));
        }

        #[test]
        fn poly_add_associative(polys in ordered_polys(3)) {
            let (a, b, c) = (&polys[0], &polys[1], &polys[2]);
            prop_assert_eq!(a.add(b).add(c), a.add(&b.add(c)));
        }

        #[test]
        fn poly_add_identity(polys in ordered_polys(1)) {
            let a = &polys[0];
            let zero = Polynomial::zero(a.order());
            prop_assert_eq!(&a.add(&zero), a);
            prop_assert_eq!(&zero.add(a), a);
        }

        #[test]
        fn poly_sub_self_is_zero(polys in ordered_polys(1)) {
            prop_assert!(polys[0].sub(&polys[0]).is_zero());
        }

        #[test]
        fn poly_mul_commutative(polys in ordered_polys(2)) {
            prop_assert_eq!(polys[0].mul(&polys[1]), polys[1].mul(&polys[0]));
        }

        #[test]
        fn poly_distributive(polys in ordered_polys(3)) {
            let (a, b, c) = (&polys[0], &polys[1], &polys[2]);
            prop_assert_eq!(a.mul(&b.add(c)), a.mul(b).add(&a.mul(c)));
        }

        // Reduction

        #[test]
        fn reduction_leaves_no_divisible_term(polys in ordered_polys(2)) {
            let (f, g) = (&polys[0], &polys[1]);
            prop_assume!(!g.is_zero());

            let reduced = f.reduce_repeatedly_by(g).unwrap().unwrap_or_else(|| f.clone());
            let lead = g.leading_term().unwrap();
            prop_assert!(reduced.terms().iter().all(|t| !t.is_divisible_by(lead)));
            prop_assert!(reduced.is_canonical());
        }

        #[test]
        fn reduction_stays_in_coset(polys in ordered_polys(2)) {
            // f - reduce(f, g) is a multiple of g: it vanishes after reducing by g
            let (f, g) = (&polys[0], &polys[1]);
            prop_assume!(!g.is_zero());

            if let Some(reduced) = f.reduce_repeatedly_by(g).unwrap() {
                let diff = f.sub(&reduced);
                let rest = diff.reduce_repeatedly_by(g).unwrap().unwrap_or(diff);
                prop_assert!(rest.is_zero());
            }
        }
    }
}
