//! Half-braidings of one candidate object.
//!
//! A zero-dimensional I(Z) is solved directly. A positive-dimensional one
//! is cut down by forcing unknowns into {-1, 0, 1}: each trial adds
//! y·(y² - 1) for one unknown y and asks for the dimension again. Trials
//! that land on finitely many points are solved, trials that stay
//! positive-dimensional become new branch states, and empty ones are
//! dropped.

use drinfeld_category::TensorCategory;
use drinfeld_groebner::{normal_form, Ideal, VarietyDimension};
use drinfeld_poly::{Monomial, MonomialOrder, Polynomial};
use drinfeld_rings::traits::Ring;
use drinfeld_solve::{solve, RootField, SolveError};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::assemble::{braidings_from_ideal, objects_from_points};
use crate::config::SearchConfig;
use crate::error::CenterError;
use crate::ideal::{build_center_ideal, CenterIdeal};
use crate::object::CenterObject;
use crate::projector::is_central_isomorphic;

/// Failure of `guess_solutions`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BranchError {
    /// The back end failed on one of the branch ideals.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// The worklist outgrew `BranchConfig::max_states`.
    #[error("branching exceeded {limit} states")]
    StateLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

/// One node of the branching worklist.
struct BranchState<K: RootField> {
    ideal: Ideal<K>,
    /// Unknowns that may still be forced, in index order.
    remaining: Vec<usize>,
    /// Unknowns already forced into {-1, 0, 1}, sorted.
    forced: Vec<usize>,
}

/// y·(y² - 1) = y³ - y.
fn sign_cubic<K: Ring>(var: usize, num_vars: usize) -> Polynomial<K> {
    let y = Monomial::var(var, num_vars);
    let y3 = y.mul(&y).mul(&y);
    Polynomial::new(vec![(y3, K::one()), (y, -K::one())], num_vars, MonomialOrder::Grevlex)
}

/// Points of a positive-dimensional variety with some unknowns in
/// {-1, 0, 1}.
///
/// Not every point is found: only those reachable by forcing unknowns one
/// at a time until the variety becomes finite. The result is deterministic;
/// trials of one state run in parallel but are consumed in index order.
///
/// # Errors
///
/// Returns `StateLimitExceeded` when more than `config.branch.max_states`
/// states are visited, and propagates back-end failures.
pub fn guess_solutions<K: RootField>(
    ideal: &Ideal<K>,
    config: &SearchConfig,
) -> Result<Vec<Vec<K>>, BranchError> {
    let num_vars = ideal.num_vars();
    let limit = config.branch.max_states;
    let gcfg = &config.groebner;

    let mut points: Vec<Vec<K>> = Vec::new();
    let mut visited: FxHashSet<Vec<usize>> = FxHashSet::default();
    let mut stack = vec![BranchState {
        ideal: ideal.to_groebner(gcfg).map_err(SolveError::from)?,
        remaining: (0..num_vars).collect(),
        forced: Vec::new(),
    }];
    let mut states = 0usize;

    while let Some(state) = stack.pop() {
        states += 1;
        if states > limit {
            return Err(BranchError::StateLimitExceeded { limit });
        }

        // state ideals are reduced grevlex bases, so an unknown already
        // confined to {-1, 0, 1} reduces its cubic to zero
        let trials: Vec<Result<(usize, Ideal<K>, VarietyDimension), SolveError>> = state
            .remaining
            .par_iter()
            .map(|&var| (var, sign_cubic(var, num_vars)))
            .filter(|(_, cubic)| !normal_form(cubic, state.ideal.generators()).is_zero())
            .map(|(var, cubic)| {
                let trial = state.ideal.with_generator(cubic);
                let dim = trial.dimension(gcfg)?;
                Ok((var, trial, dim))
            })
            .collect();

        let mut children = Vec::new();
        for trial in trials {
            let (var, trial, dim) = trial?;
            match dim {
                VarietyDimension::Empty => {}
                VarietyDimension::ZeroDimensional => {
                    for point in solve(&trial, gcfg)? {
                        if !points.contains(&point) {
                            points.push(point);
                        }
                    }
                    break;
                }
                VarietyDimension::Positive(_) => {
                    let mut forced = state.forced.clone();
                    forced.push(var);
                    forced.sort_unstable();
                    // I + <f_a> + <f_b> does not depend on the order of a, b
                    if visited.insert(forced.clone()) {
                        children.push(BranchState {
                            ideal: trial.to_groebner(gcfg).map_err(SolveError::from)?,
                            remaining: state
                                .remaining
                                .iter()
                                .copied()
                                .filter(|&v| v != var)
                                .collect(),
                            forced,
                        });
                    }
                }
            }
        }

        log::debug!(
            "branch state {states}: forced {:?}, {} children, {} points so far",
            state.forced,
            children.len(),
            points.len()
        );
        // lowest forced unknown on top of the stack
        stack.extend(children.into_iter().rev());
    }

    Ok(points)
}

/// All half-braidings of `z`, one per isomorphism class.
///
/// Objects are merged only when isomorphic in the center; non-simple results
/// that share a simple summand stay distinct.
///
/// # Errors
///
/// Returns `NotSemisimple` for a non-semisimple base, and `Solver` or
/// `BranchLimitExceeded` when the back end gives up. Comparing classes
/// needs dim C to be invertible and fails with `DegenerateGlobalDimension`
/// otherwise.
pub fn half_braidings<C>(
    cat: &C,
    z: &C::Object,
    simples: &[C::Object],
    config: &SearchConfig,
) -> Result<Vec<CenterObject<C>>, CenterError>
where
    C: TensorCategory,
    C::Scalar: RootField,
{
    let center_ideal = build_center_ideal(cat, z, simples)?;
    let dimension = center_ideal
        .ideal()
        .dimension(&config.groebner)
        .map_err(|e| solver_error(z, &center_ideal, e.into()))?;
    half_braidings_in(cat, z, simples, &center_ideal, dimension, config)
}

/// `half_braidings` for an ideal whose dimension is already known.
pub(crate) fn half_braidings_in<C>(
    cat: &C,
    z: &C::Object,
    simples: &[C::Object],
    center_ideal: &CenterIdeal<C>,
    dimension: VarietyDimension,
    config: &SearchConfig,
) -> Result<Vec<CenterObject<C>>, CenterError>
where
    C: TensorCategory,
    C::Scalar: RootField,
{
    let objects = match dimension {
        VarietyDimension::Empty => return Ok(Vec::new()),
        VarietyDimension::ZeroDimensional => {
            braidings_from_ideal(cat, z, center_ideal, &config.groebner)?
        }
        VarietyDimension::Positive(d) => {
            log::debug!("half-braidings of {z:?} form a variety of dimension {d}; branching");
            let points = guess_solutions(center_ideal.ideal(), config).map_err(|e| match e {
                BranchError::Solve(source) => solver_error(z, center_ideal, source),
                BranchError::StateLimitExceeded { limit } => CenterError::BranchLimitExceeded {
                    object: format!("{z:?}"),
                    unknowns: center_ideal.num_unknowns(),
                    limit,
                },
            })?;
            objects_from_points(cat, z, center_ideal, &points)
        }
    };

    let mut classes: Vec<CenterObject<C>> = Vec::new();
    for object in objects {
        let mut known = false;
        for rep in &classes {
            if is_central_isomorphic(cat, simples, rep, &object)? {
                known = true;
                break;
            }
        }
        if !known {
            classes.push(object);
        }
    }
    Ok(classes)
}

fn solver_error<C: TensorCategory>(
    z: &C::Object,
    center_ideal: &CenterIdeal<C>,
    source: SolveError,
) -> CenterError {
    CenterError::Solver {
        object: format!("{z:?}"),
        unknowns: center_ideal.num_unknowns(),
        source,
    }
}
