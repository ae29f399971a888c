//! Property-based tests for the central projector.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::category::CenterCategory;
    use crate::object::CenterObject;
    use drinfeld_category::{FiniteGroup, GradedVectorSpaces, TensorCategory};
    use drinfeld_rings::rationals::Q;

    type Z2 = GradedVectorSpaces<Q>;

    fn center() -> CenterCategory<Z2> {
        CenterCategory::new(Arc::new(GradedVectorSpaces::new(FiniteGroup::cyclic(2))))
    }

    /// Direct sum of the listed center simples.
    fn sum_of(
        center: &CenterCategory<Z2>,
        simples: &[CenterObject<Z2>],
        picks: &[usize],
    ) -> CenterObject<Z2> {
        picks[1..]
            .iter()
            .fold(simples[picks[0]].clone(), |acc, &i| center.direct_sum(&acc, &simples[i]))
    }

    fn picks() -> impl Strategy<Value = Vec<usize>> {
        proptest::collection::vec(0usize..4, 1..3)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn projection_is_idempotent_and_central(
            xs in picks(),
            ys in picks(),
            coeffs in proptest::collection::vec(-2i64..3, 16),
        ) {
            let center = center();
            let simples = center.simples().unwrap();
            let (x, y) = (sum_of(&center, &simples, &xs), sum_of(&center, &simples, &ys));
            let cat = center.base();

            let basis = cat.hom_basis(x.object(), y.object());
            let coeffs: Vec<Q> =
                coeffs.iter().take(basis.len()).map(|&c| Q::from_integer(c)).collect();
            let f = cat.linear_combination(x.object(), y.object(), &basis[..coeffs.len()], &coeffs);

            let p = center.central_projection(&x, &y, &f).unwrap();
            let pp = center.central_projection(&x, &y, p.morphism()).unwrap();
            prop_assert_eq!(&pp, &p);

            for (k, s) in center.base_simples().iter().enumerate() {
                let id_s = cat.id(s);
                let lhs = cat.compose(x.component(k), &cat.tensor_morphisms(&id_s, p.morphism()));
                let rhs = cat.compose(&cat.tensor_morphisms(p.morphism(), &id_s), y.component(k));
                prop_assert_eq!(lhs, rhs);
            }
        }

        #[test]
        fn hom_dimension_counts_common_simples(xs in picks(), ys in picks()) {
            let center = center();
            let simples = center.simples().unwrap();
            let (x, y) = (sum_of(&center, &simples, &xs), sum_of(&center, &simples, &ys));
            let common: usize = (0..4)
                .map(|i| {
                    xs.iter().filter(|&&a| a == i).count() * ys.iter().filter(|&&b| b == i).count()
                })
                .sum();
            prop_assert_eq!(center.hom(&x, &y).unwrap().len(), common);
        }
    }
}
