//! Property-based tests for the graded vector space category.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::graded::{GradedObject, GradedVectorSpaces};
    use crate::group::FiniteGroup;
    use crate::traits::TensorCategory;
    use drinfeld_rings::finite_field::FiniteField;

    type GF7 = FiniteField<7>;

    /// Vec_{Z/3}^ω with the generator of H^3(Z/3, GF(7)^×) ≅ Z/3.
    fn z3_twisted() -> GradedVectorSpaces<GF7> {
        GradedVectorSpaces::with_cocycle(FiniteGroup::cyclic(3), |a, b, c| {
            if b + c >= 3 {
                [GF7::new(1), GF7::new(2), GF7::new(4)][a]
            } else {
                GF7::new(1)
            }
        })
        .unwrap()
    }

    fn small_object() -> impl Strategy<Value = GradedObject> {
        proptest::collection::vec(0usize..3, 3).prop_map(GradedObject::new)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn tensor_dimension_is_multiplicative(x in small_object(), y in small_object()) {
            let cat = z3_twisted();
            prop_assert_eq!(
                cat.tensor(&x, &y).total_dim(),
                x.total_dim() * y.total_dim()
            );
            prop_assert!(cat.is_isomorphic(&cat.tensor(&x, &y), &cat.tensor(&y, &x)));
        }

        #[test]
        fn pentagon(
            w in small_object(),
            x in small_object(),
            y in small_object(),
            z in small_object(),
        ) {
            let cat = z3_twisted();
            let wx = cat.tensor(&w, &x);
            let yz = cat.tensor(&y, &z);
            let xy = cat.tensor(&x, &y);
            let lhs = cat.compose(&cat.associator(&wx, &y, &z), &cat.associator(&w, &x, &yz));
            let rhs = cat.compose_all(
                &cat.tensor_morphisms(&cat.associator(&w, &x, &y), &cat.id(&z)),
                &[
                    &cat.associator(&w, &xy, &z),
                    &cat.tensor_morphisms(&cat.id(&w), &cat.associator(&x, &y, &z)),
                ],
            );
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn dimension_counts_multiplicities(x in small_object()) {
            let cat = z3_twisted();
            let n = i64::try_from(x.total_dim()).unwrap();
            prop_assert_eq!(cat.dim(&x), GF7::from_signed(n));
        }

        #[test]
        fn decomposition_resolves_identity(x in small_object()) {
            let cat = z3_twisted();
            let summands = cat.decompose(&x).unwrap();
            prop_assert_eq!(summands.len(), x.total_dim());
            let total = summands.iter().fold(cat.zero_morphism(&x, &x), |acc, s| {
                cat.add(&acc, &cat.compose(&s.projection, &s.inclusion))
            });
            prop_assert_eq!(total, cat.id(&x));
        }

        #[test]
        fn tensor_of_morphisms_is_functorial(x in small_object(), y in small_object()) {
            let cat = z3_twisted();
            let two = GF7::new(2);
            let f = cat.scale(&cat.id(&x), &two);
            let g = cat.scale(&cat.id(&y), &two);
            let fg = cat.tensor_morphisms(&f, &g);
            let xy = cat.tensor(&x, &y);
            prop_assert_eq!(cat.compose(&fg, &fg), cat.scale(&cat.id(&xy), &GF7::new(16)));
        }
    }
}
