//! End-to-end center computations for small pointed categories.
//!
//! Z(Vec_{Z/2}) is the toric code: four invertible simples 1, e, m, f with
//! e and m bosons whose monodromy is -1. Twisting by the semion cocycle
//! leaves two of the four simples without rational half-braidings.

use std::sync::Arc;

use drinfeld_category::{FiniteGroup, GradedVectorSpaces, TensorCategory};
use drinfeld_center::{
    verify_half_braiding, CenterCategory, CenterObject, IncompleteSearchWarning, SearchConfig,
};
use drinfeld_rings::rationals::Q;
use drinfeld_rings::traits::Ring;

type Vec2 = GradedVectorSpaces<Q>;

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

fn toric_code() -> CenterCategory<Vec2> {
    CenterCategory::new(Arc::new(GradedVectorSpaces::new(FiniteGroup::cyclic(2))))
}

fn semion_double() -> CenterCategory<Vec2> {
    let base = GradedVectorSpaces::with_cocycle(FiniteGroup::cyclic(2), |g, h, l| {
        if g == 1 && h == 1 && l == 1 {
            q(-1)
        } else {
            q(1)
        }
    })
    .unwrap();
    CenterCategory::new(Arc::new(base))
}

/// The simple with carrier δ_grade whose half-braiding at δ_1 is `sign`.
fn find(
    center: &CenterCategory<Vec2>,
    simples: &[CenterObject<Vec2>],
    grade: usize,
    sign: i64,
) -> CenterObject<Vec2> {
    let carrier = center.base().simple(grade);
    simples
        .iter()
        .find(|s| {
            s.object() == &carrier && center.base().coordinates(s.component(1)) == vec![q(sign)]
        })
        .cloned()
        .unwrap_or_else(|| panic!("no simple over δ_{grade} with sign {sign}"))
}

#[test]
fn toric_code_has_four_simples() {
    let center = toric_code();
    let report = center.search(&SearchConfig::default()).unwrap();
    assert_eq!(report.simples.len(), 4);
    assert!(report.warning.is_none());

    for grade in 0..2 {
        for sign in [-1, 1] {
            let s = find(&center, &report.simples, grade, sign);
            assert_eq!(center.end_dimension(&s).unwrap(), 1);
        }
    }
    for (i, a) in report.simples.iter().enumerate() {
        for b in &report.simples[i + 1..] {
            assert!(!center.is_isomorphic(a, b).unwrap());
        }
    }
}

#[test]
fn dimensions_use_up_the_budget() {
    let center = toric_code();
    let total = center
        .simples()
        .unwrap()
        .iter()
        .fold(Q::zero(), |acc, s| acc + center.dim(s) * center.dim(s));
    let global = center.base().global_dimension();
    assert_eq!(total, global.clone() * global);
    assert_eq!(total, q(4));
}

#[test]
fn half_braidings_are_normalized_and_central() {
    let center = toric_code();
    let cat = center.base();
    let unit = cat.unit_index().unwrap();
    for s in center.simples().unwrap() {
        let z = s.object();
        assert_eq!(
            s.component(unit),
            &cat.compose(&cat.right_unitor(z), &cat.left_unitor_inverse(z))
        );
        assert!(verify_half_braiding(cat, z, s.half_braiding(), center.base_simples()));
    }
}

#[test]
fn trivial_group_center_is_trivial() {
    let center = CenterCategory::new(Arc::new(Vec2::new(FiniteGroup::trivial())));
    let simples = center.simples().unwrap();
    assert_eq!(simples.len(), 1);
    let one = center.base().one();
    assert_eq!(simples[0].object(), &one);
    assert_eq!(simples[0].half_braiding(), &[center.base().id(&one)]);
}

#[test]
fn toric_code_fusion_and_monodromy() {
    let center = toric_code();
    let simples = center.simples().unwrap();
    let e = find(&center, &simples, 0, -1);
    let m = find(&center, &simples, 1, 1);
    let f = find(&center, &simples, 1, -1);

    assert!(center.is_isomorphic(&center.tensor(&e, &m), &f).unwrap());
    assert!(center.is_isomorphic(&center.tensor(&e, &e), &center.one()).unwrap());

    let em = center.tensor(&e, &m);
    let monodromy = center.compose(
        &center.braiding(&e, &m).unwrap(),
        &center.braiding(&m, &e).unwrap(),
    );
    let cat = center.base();
    assert_eq!(monodromy.morphism(), &cat.scale(&cat.id(em.object()), &q(-1)));

    for x in [&e, &m] {
        let c_xx = center.braiding(x, x).unwrap();
        let round_trip = center.compose(&c_xx, &c_xx);
        assert_eq!(round_trip, center.id(&center.tensor(x, x)));
    }
}

#[test]
fn constructions_are_central() {
    let center = toric_code();
    let simples = center.simples().unwrap();
    let cat = center.base();
    let e = find(&center, &simples, 0, -1);
    let f = find(&center, &simples, 1, -1);

    let sum = center.direct_sum(&e, &f);
    let product = center.tensor(&sum, &f);
    let dual = center.dual(&sum).unwrap();
    for x in [&sum, &product, &dual] {
        assert!(verify_half_braiding(cat, x.object(), x.half_braiding(), center.base_simples()));
    }
    assert_eq!(center.end_dimension(&sum).unwrap(), 2);
    assert_eq!(center.hom(&sum, &e).unwrap().len(), 1);
    assert!(center.is_isomorphic(&dual, &sum).unwrap());
}

#[test]
fn braiding_is_natural() {
    // c_{X,Y} commutes with central morphisms in the second slot
    let center = toric_code();
    let simples = center.simples().unwrap();
    let cat = center.base();
    let e = find(&center, &simples, 0, -1);
    let m = find(&center, &simples, 1, 1);
    let y = center.direct_sum(&e, &m);

    for g in center.hom(&y, &y).unwrap() {
        let id_e = cat.id(e.object());
        let lhs = cat.compose(
            &cat.tensor_morphisms(&id_e, g.morphism()),
            center.braiding(&e, &y).unwrap().morphism(),
        );
        let rhs = cat.compose(
            center.braiding(&e, &y).unwrap().morphism(),
            &cat.tensor_morphisms(g.morphism(), &id_e),
        );
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn projector_fixes_central_morphisms() {
    let center = toric_code();
    let simples = center.simples().unwrap();
    let x = center.direct_sum(&simples[0], &simples[1]);
    for h in center.hom(&x, &x).unwrap() {
        let p = center.central_projection(&x, &x, h.morphism()).unwrap();
        assert_eq!(p, h);
    }
}

#[test]
fn semion_search_reports_missing_simples() {
    let center = semion_double();
    let report = center.search(&SearchConfig::default()).unwrap();
    assert_eq!(report.simples.len(), 2);
    assert_eq!(
        report.warning,
        Some(IncompleteSearchWarning {
            expected: q(4),
            found: q(2),
        })
    );
    let unit = center.base().one();
    assert!(report.simples.iter().all(|s| s.object() == &unit));
}

#[test]
fn rational_search_over_z3_finds_trivial_characters() {
    // the nontrivial characters of Z/3 need cube roots of unity
    let center = CenterCategory::new(Arc::new(Vec2::new(FiniteGroup::cyclic(3))));
    let report = center.search(&SearchConfig::default()).unwrap();
    assert_eq!(report.simples.len(), 3);
    assert_eq!(report.candidates_tested, 3);
    assert_eq!(
        report.warning,
        Some(IncompleteSearchWarning {
            expected: q(9),
            found: q(3),
        })
    );
}

#[test]
fn explicit_multiplicity_limit() {
    let center = toric_code();
    let config = SearchConfig {
        max_multiplicity: Some(1),
        ..SearchConfig::default()
    };
    assert_eq!(center.simples_with(&config).unwrap().len(), 4);
}
