//! Property-based tests for the scalar fields.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::finite_field::FiniteField;
    use crate::rationals::Q;
    use crate::traits::{Field, Ring};

    type GF101 = FiniteField<101>;

    fn small_rational() -> impl Strategy<Value = Q> {
        (-500i64..500, 1i64..60).prop_map(|(n, d)| Q::new(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Q> {
        (prop_oneof![(-500i64..=-1), (1i64..=500)], 1i64..60).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn rational_distributive(
            a in small_rational(),
            b in small_rational(),
            c in small_rational(),
        ) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_inverse(a in non_zero_rational()) {
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_sub_add_roundtrip(a in small_rational(), b in small_rational()) {
            prop_assert_eq!((a.clone() - b.clone()) + b, a);
        }

        #[test]
        fn rational_from_i64_matches_generic(n in -10_000i64..10_000) {
            let one = <Q as Ring>::one();
            let mut acc = <Q as Ring>::zero();
            for _ in 0..n.unsigned_abs() {
                acc = acc + one.clone();
            }
            if n < 0 {
                acc = -acc;
            }
            prop_assert_eq!(Q::from_i64(n), acc);
        }

        #[test]
        fn finite_field_inverse(v in 1u64..101) {
            let a = GF101::new(v);
            prop_assert!((a * a.inv().unwrap()).is_one());
        }

        #[test]
        fn finite_field_distributive(a in 0u64..101, b in 0u64..101, c in 0u64..101) {
            let (a, b, c) = (GF101::new(a), GF101::new(b), GF101::new(c));
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }
    }
}
