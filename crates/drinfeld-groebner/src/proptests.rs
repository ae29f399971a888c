//! Property-based tests for reduced Gröbner bases.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::buchberger::{groebner_basis, is_reduced, normal_form, GroebnerConfig};
    use drinfeld_poly::{Monomial, MonomialOrder, Polynomial};
    use drinfeld_rings::finite_field::FiniteField;

    type GF7 = FiniteField<7>;

    const NUM_VARS: usize = 2;

    fn small_poly() -> impl Strategy<Value = Polynomial<GF7>> {
        proptest::collection::vec(
            (proptest::collection::vec(0u16..3, NUM_VARS), 1u64..7),
            1..4,
        )
        .prop_map(|terms| {
            Polynomial::new(
                terms
                    .into_iter()
                    .map(|(e, c)| (Monomial::from_exponents(&e), GF7::new(c)))
                    .collect(),
                NUM_VARS,
                MonomialOrder::Grevlex,
            )
        })
    }

    fn generators() -> impl Strategy<Value = Vec<Polynomial<GF7>>> {
        proptest::collection::vec(small_poly(), 1..4)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn reduced_basis_is_a_fixed_point(gens in generators()) {
            let cfg = GroebnerConfig::default();
            let basis = groebner_basis(&gens, MonomialOrder::Grevlex, &cfg).unwrap();
            prop_assert!(is_reduced(&basis));
            prop_assert_eq!(groebner_basis(&basis, MonomialOrder::Grevlex, &cfg).unwrap(), basis);
        }

        #[test]
        fn ideal_elements_reduce_to_zero(
            gens in generators(),
            a in small_poly(),
            b in small_poly(),
        ) {
            let cfg = GroebnerConfig::default();
            let basis = groebner_basis(&gens, MonomialOrder::Grevlex, &cfg).unwrap();
            for g in &gens {
                prop_assert!(normal_form(g, &basis).is_zero());
            }
            let combination = a.mul(&gens[0]).add(&b.mul(&gens[gens.len() - 1]));
            prop_assert!(normal_form(&combination, &basis).is_zero());
        }
    }
}
