//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::polynomial::Polynomial;
    use crate::univariate::UnivariatePoly;
    use drinfeld_rings::rationals::Q;

    const NUM_VARS: usize = 3;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20).prop_map(Q::from_integer)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(
            (proptest::collection::vec(0u16..3, NUM_VARS), small_coeff()),
            0..5,
        )
        .prop_map(|terms| {
            Polynomial::new(
                terms
                    .into_iter()
                    .map(|(e, c)| (Monomial::from_exponents(&e), c))
                    .collect(),
                NUM_VARS,
                MonomialOrder::Grevlex,
            )
        })
    }

    fn small_point() -> impl Strategy<Value = Vec<Q>> {
        proptest::collection::vec(small_coeff(), NUM_VARS)
    }

    fn small_univariate() -> impl Strategy<Value = UnivariatePoly<Q>> {
        proptest::collection::vec(small_coeff(), 0..5).prop_map(UnivariatePoly::new)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn evaluation_is_a_ring_map(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(
                a.mul(&b).evaluate(&x),
                a.evaluate(&x) * b.evaluate(&x)
            );
            prop_assert_eq!(
                a.add(&b).evaluate(&x),
                a.evaluate(&x) + b.evaluate(&x)
            );
        }

        #[test]
        fn substitution_commutes_with_evaluation(a in small_poly(), x in small_point()) {
            let s = a.substitute(1, &x[1]);
            prop_assert_eq!(s.evaluate(&x), a.evaluate(&x));
            prop_assert!(!s.variables().contains(&1));
        }

        #[test]
        fn reorder_preserves_values(a in small_poly(), x in small_point()) {
            let lex = a.reorder(MonomialOrder::Lex);
            prop_assert_eq!(lex.evaluate(&x), a.evaluate(&x));
            prop_assert_eq!(lex.reorder(MonomialOrder::Grevlex), a);
        }

        #[test]
        fn univariate_division_identity(a in small_univariate(), b in small_univariate()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            let recombined = UnivariatePoly::new(
                {
                    let qb = q.mul(&b);
                    let len = qb.coeffs().len().max(r.coeffs().len());
                    (0..len)
                        .map(|i| {
                            let x = qb.coeffs().get(i).cloned().unwrap_or_default();
                            let y = r.coeffs().get(i).cloned().unwrap_or_default();
                            x + y
                        })
                        .collect()
                },
            );
            prop_assert_eq!(recombined, a);
            prop_assert!(r.degree() < b.degree());
        }
    }
}
