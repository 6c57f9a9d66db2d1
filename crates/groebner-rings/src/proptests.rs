//! Property-based tests for the field contract.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::finite_field::GF998244353;
    use crate::rationals::Q;
    use crate::traits::{Field, Ring};

    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("rational must be non-zero", |q| !q.is_zero())
    }

    fn small_fp() -> impl Strategy<Value = GF998244353> {
        any::<i64>().prop_map(GF998244353::from_signed)
    }

    proptest! {
        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn q_inverse(a in nonzero_q()) {
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn q_sub_is_add_neg(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        #[test]
        fn fp_distributive(a in small_fp(), b in small_fp(), c in small_fp()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn fp_inverse(a in small_fp()) {
            match a.inv() {
                Some(inv) => prop_assert!((a * inv).is_one()),
                None => prop_assert!(a.is_zero()),
            }
        }

        #[test]
        fn fp_div_roundtrip(a in small_fp(), b in small_fp()) {
            prop_assume!(!b.is_zero());
            let q = a.try_div(&b).unwrap();
            prop_assert_eq!(q * b, a);
        }
    }
}
