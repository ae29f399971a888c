//! Search for the simple objects of the center.
//!
//! Candidate carriers X = ⊕ S_i^{c_i} are tried in order of increasing
//! size. Every simple central object found uses up dim(X)² of the budget
//! dim Z(C) = dim(C)², and the search stops once the budget is spent.

use std::fmt;

use drinfeld_category::TensorCategory;
use drinfeld_rings::traits::{OrderedField, Ring};
use drinfeld_solve::RootField;

use crate::config::SearchConfig;
use crate::enumerate::half_braidings_in;
use crate::error::{CenterError, IncompleteSearchWarning};
use crate::ideal::build_center_ideal;
use crate::object::CenterObject;
use crate::projector::{central_hom, is_central_isomorphic};

/// Outcome of `center_simples`.
pub struct SearchReport<C: TensorCategory> {
    /// Pairwise non-isomorphic simple central objects, in discovery order.
    pub simples: Vec<CenterObject<C>>,
    /// Set when the candidates ran out before the budget was spent.
    pub warning: Option<IncompleteSearchWarning<C::Scalar>>,
    /// Candidates whose half-braidings were examined.
    pub candidates_tested: usize,
}

impl<C: TensorCategory> Clone for SearchReport<C> {
    fn clone(&self) -> Self {
        Self {
            simples: self.simples.clone(),
            warning: self.warning.clone(),
            candidates_tested: self.candidates_tested,
        }
    }
}

impl<C: TensorCategory> fmt::Debug for SearchReport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchReport")
            .field("simples", &self.simples)
            .field("warning", &self.warning)
            .field("candidates_tested", &self.candidates_tested)
            .finish()
    }
}

/// Non-zero vectors in {0, ..., max}^n, ordered by total multiplicity, then
/// number of non-zero entries, then lexicographically.
fn multiplicity_vectors(n: usize, max: usize) -> Vec<Vec<usize>> {
    let mut vectors = Vec::new();
    if n == 0 || max == 0 {
        return vectors;
    }
    let mut current = vec![0usize; n];
    loop {
        // odometer increment, last entry fastest
        let Some(pos) = current.iter().rposition(|&c| c < max) else {
            break;
        };
        current[pos] += 1;
        for c in &mut current[pos + 1..] {
            *c = 0;
        }
        vectors.push(current.clone());
    }
    vectors.sort_by(|a, b| {
        let key = |v: &Vec<usize>| (v.iter().sum::<usize>(), v.iter().filter(|&&c| c > 0).count());
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    });
    vectors
}

/// Returns true if `c` is at least `other` in every entry.
fn dominates(c: &[usize], other: &[usize]) -> bool {
    c.iter().zip(other).all(|(a, b)| a >= b)
}

/// ⊕ S_i^{c_i}.
fn carrier<C: TensorCategory>(cat: &C, simples: &[C::Object], mults: &[usize]) -> C::Object {
    let mut object = cat.zero();
    for (s, &m) in simples.iter().zip(mults) {
        for _ in 0..m {
            object = cat.direct_sum(&object, s).object;
        }
    }
    object
}

fn scalar<K: Ring>(n: usize) -> K {
    K::from_i64(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Finds the simple objects of Z(C).
///
/// # Errors
///
/// Returns `NotSemisimple` for a non-semisimple base and propagates
/// back-end failures on any candidate.
pub fn center_simples<C>(
    cat: &C,
    simples: &[C::Object],
    config: &SearchConfig,
) -> Result<SearchReport<C>, CenterError>
where
    C: TensorCategory,
    C::Scalar: RootField + OrderedField,
{
    if !cat.is_semisimple() {
        return Err(CenterError::NotSemisimple);
    }

    let zero = <C::Scalar as Ring>::zero();
    let dims: Vec<C::Scalar> = simples.iter().map(|s| cat.dim(s)).collect();
    let global = dims
        .iter()
        .fold(zero.clone(), |acc, d| acc + d.clone() * d.clone());
    let expected = global.clone() * global.clone();
    let mut remaining = expected.clone();

    let max_multiplicity = config
        .max_multiplicity
        .unwrap_or_else(|| {
            global
                .floor()
                .and_then(|f| usize::try_from(f).ok())
                .unwrap_or(1)
        })
        .max(1);

    let mut found: Vec<CenterObject<C>> = Vec::new();
    let mut covered: Vec<Vec<usize>> = Vec::new();
    let mut candidates_tested = 0usize;

    for mults in multiplicity_vectors(simples.len(), max_multiplicity) {
        if remaining <= zero {
            break;
        }

        let weight = mults.iter().zip(&dims).fold(zero.clone(), |acc, (&m, d)| {
            let md = scalar::<C::Scalar>(m) * d.clone();
            acc + md.clone() * md
        });
        if weight > remaining || covered.iter().any(|c| dominates(&mults, c)) {
            continue;
        }

        candidates_tested += 1;
        let x = carrier(cat, simples, &mults);

        // necessary for a half-braiding to exist
        if !simples
            .iter()
            .all(|s| cat.is_isomorphic(&cat.tensor(&x, s), &cat.tensor(s, &x)))
        {
            log::debug!("candidate {mults:?}: X⊗S and S⊗X differ");
            continue;
        }

        let center_ideal = build_center_ideal(cat, &x, simples)?;
        let dimension = center_ideal
            .ideal()
            .dimension(&config.groebner)
            .map_err(|e| CenterError::Solver {
                object: format!("{x:?}"),
                unknowns: center_ideal.num_unknowns(),
                source: e.into(),
            })?;
        if dimension.is_empty() {
            log::debug!("candidate {mults:?}: no half-braidings");
            continue;
        }

        let mut new_simples = 0usize;
        let objects = half_braidings_in(cat, &x, simples, &center_ideal, dimension, config)?;
        'objects: for object in objects {
            if central_hom(cat, simples, &object, &object)?.len() != 1 {
                continue;
            }
            for known in &found {
                if is_central_isomorphic(cat, simples, known, &object)? {
                    continue 'objects;
                }
            }
            let d = cat.dim(object.object());
            remaining = remaining - d.clone() * d;
            found.push(object);
            new_simples += 1;
        }

        log::debug!(
            "candidate {mults:?}: {new_simples} new simples, {} found, \
             {remaining:?} of {expected:?} left",
            found.len()
        );
        if new_simples > 0 {
            covered.push(mults);
        }
    }

    let warning = if remaining > zero {
        let warning = IncompleteSearchWarning {
            found: expected.clone() - remaining,
            expected,
        };
        log::warn!(
            "center search stopped after {candidates_tested} candidates with {} simples: \
             found {:?} of {:?}",
            found.len(),
            warning.found,
            warning.expected
        );
        Some(warning)
    } else {
        log::info!(
            "center search complete: {} simples after {candidates_tested} candidates",
            found.len()
        );
        None
    };

    Ok(SearchReport {
        simples: found,
        warning,
        candidates_tested,
    })
}
