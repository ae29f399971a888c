//! Reading central objects off the points of a zero-dimensional ideal.

use drinfeld_category::TensorCategory;
use drinfeld_groebner::GroebnerConfig;
use drinfeld_solve::{solve, RootField};

use crate::error::CenterError;
use crate::ideal::{verify_half_braiding, CenterIdeal};
use crate::object::CenterObject;

/// One central object per point of V(I(Z)) over the base field.
///
/// Points with a coordinate outside the base field are not recoverable;
/// the solver logs how many roots it lost.
///
/// # Errors
///
/// Returns `Solver` if the ideal is not zero-dimensional or the back end
/// fails.
pub fn braidings_from_ideal<C>(
    cat: &C,
    z: &C::Object,
    center_ideal: &CenterIdeal<C>,
    config: &GroebnerConfig,
) -> Result<Vec<CenterObject<C>>, CenterError>
where
    C: TensorCategory,
    C::Scalar: RootField,
{
    let points = solve(center_ideal.ideal(), config).map_err(|source| CenterError::Solver {
        object: format!("{z:?}"),
        unknowns: center_ideal.num_unknowns(),
        source,
    })?;
    Ok(objects_from_points(cat, z, center_ideal, &points))
}

/// Wraps each point as a central object with carrier `z`.
pub(crate) fn objects_from_points<C: TensorCategory>(
    cat: &C,
    z: &C::Object,
    center_ideal: &CenterIdeal<C>,
    points: &[Vec<C::Scalar>],
) -> Vec<CenterObject<C>> {
    points
        .iter()
        .map(|point| {
            let gamma = center_ideal.half_braiding_at(cat, point);
            debug_assert!(
                verify_half_braiding(cat, z, &gamma, &cat.simples()),
                "point of the center ideal violates the hexagon"
            );
            CenterObject::new(z.clone(), gamma)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideal::build_center_ideal;
    use drinfeld_category::{FiniteGroup, GradedVectorSpaces};
    use drinfeld_rings::rationals::Q;

    #[test]
    fn test_two_braidings_of_a_simple() {
        let cat = GradedVectorSpaces::<Q>::new(FiniteGroup::cyclic(2));
        let simples = cat.simples();
        let z = cat.simple(1);
        let ci = build_center_ideal(&cat, &z, &simples).unwrap();
        let objects = braidings_from_ideal(&cat, &z, &ci, &GroebnerConfig::default()).unwrap();

        assert_eq!(objects.len(), 2);
        let signs: Vec<Q> = objects
            .iter()
            .map(|o| cat.end_scalar(o.component(1)).unwrap())
            .collect();
        assert!(signs.contains(&Q::from_integer(1)));
        assert!(signs.contains(&Q::from_integer(-1)));
        assert!(objects.iter().all(|o| o.component(0) == &cat.id(&z)));
    }

    #[test]
    fn test_positive_dimensional_is_an_error() {
        // Z = δ_0 ⊕ δ_0 has a whole family of half-braidings
        let cat = GradedVectorSpaces::<Q>::new(FiniteGroup::cyclic(2));
        let simples = cat.simples();
        let z = cat.object(&[2, 0]);
        let ci = build_center_ideal(&cat, &z, &simples).unwrap();
        let err = braidings_from_ideal(&cat, &z, &ci, &GroebnerConfig::default()).unwrap_err();
        assert!(matches!(err, CenterError::Solver { unknowns: 8, .. }));
    }
}
