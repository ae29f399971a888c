//! Property-based tests for point recovery.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::solve::solve;
    use drinfeld_groebner::{GroebnerConfig, Ideal};
    use drinfeld_poly::{MonomialOrder, PolynomialRing};
    use drinfeld_rings::rationals::Q;
    use drinfeld_rings::traits::Ring;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn points_satisfy_every_generator(a in -5i64..5, b in -5i64..5, c in -3i64..3) {
            // (x - a)(x - b) = 0, y = c·x
            let r = PolynomialRing::<Q>::new(2, MonomialOrder::Grevlex);
            let (x, y) = (r.var(0), r.var(1));
            let (qa, qb, qc) = (Q::from_integer(a), Q::from_integer(b), Q::from_integer(c));
            let gens = vec![
                x.sub(&r.constant(qa.clone())).mul(&x.sub(&r.constant(qb.clone()))),
                y.sub(&x.scale(&qc)),
            ];
            let ideal = Ideal::new(2, gens.clone());

            let points = solve(&ideal, &GroebnerConfig::default()).unwrap();
            for p in &points {
                for g in &gens {
                    prop_assert!(g.evaluate(p).is_zero());
                }
            }
            prop_assert_eq!(points.len(), if a == b { 1 } else { 2 });
            prop_assert!(points.contains(&vec![qa.clone(), qa * qc.clone()]));
            prop_assert!(points.contains(&vec![qb.clone(), qb * qc]));
        }
    }
}
