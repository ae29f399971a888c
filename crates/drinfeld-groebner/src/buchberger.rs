//! Buchberger's algorithm.
//!
//! Pairs are selected by the normal strategy (smallest lcm first). Pairs with
//! coprime leading monomials are dropped by the product criterion, and pairs
//! whose lcm is divisible by a third leading monomial are dropped by the chain
//! criterion once both connecting pairs have been treated. The final basis
//! is minimalized and inter-reduced, so it is the unique reduced basis of the
//! ideal under the requested order.

use std::cmp::Ordering;

use drinfeld_poly::{Monomial, MonomialOrder, Polynomial};
use drinfeld_rings::traits::{Field, Ring};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::error::GroebnerError;

/// Configuration for Buchberger's algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroebnerConfig {
    /// Largest intermediate basis before giving up.
    pub max_basis_size: usize,
    /// Largest number of critical pairs reduced before giving up.
    pub max_pairs: usize,
}

impl Default for GroebnerConfig {
    fn default() -> Self {
        Self {
            max_basis_size: 2_000,
            max_pairs: 200_000,
        }
    }
}

/// A critical pair (i < j) together with lcm(lm(g_i), lm(g_j)).
#[derive(Clone, Debug)]
struct CriticalPair {
    i: usize,
    j: usize,
    lcm: Monomial,
}

/// Full reduction of `f` modulo `basis`.
///
/// Every basis element must be monic and sorted under the order of `f`.
/// The result has no term divisible by any leading monomial of `basis`.
#[must_use]
pub fn normal_form<F: Field>(f: &Polynomial<F>, basis: &[Polynomial<F>]) -> Polynomial<F> {
    let mut p = f.clone();
    let mut remainder = Vec::new();

    while let Some((lm, lc)) = p.leading_term().cloned() {
        let reducer = basis.iter().find_map(|g| {
            let glm = g.leading_monomial()?;
            lm.div(glm).map(|q| (g, q))
        });

        match reducer {
            Some((g, q)) => {
                p = p.sub(&g.mul_term(&q, &lc));
            }
            None => {
                remainder.push((lm, lc));
                p = p.tail();
            }
        }
    }

    Polynomial::new(remainder, f.num_vars(), f.order())
}

/// S-polynomial of two monic polynomials.
fn s_polynomial<F: Field>(
    f: &Polynomial<F>,
    g: &Polynomial<F>,
    lcm: &Monomial,
) -> Option<Polynomial<F>> {
    let mf = lcm.div(f.leading_monomial()?)?;
    let mg = lcm.div(g.leading_monomial()?)?;
    Some(f.mul_term(&mf, &F::one()).sub(&g.mul_term(&mg, &F::one())))
}

fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Chain criterion: some g_k with lm(g_k) | lcm whose pairs with i and j are
/// no longer pending.
fn chain_criterion<F: Field>(
    pair: &CriticalPair,
    basis: &[Polynomial<F>],
    pending: &FxHashSet<(usize, usize)>,
) -> bool {
    basis.iter().enumerate().any(|(k, h)| {
        k != pair.i
            && k != pair.j
            && h.leading_monomial().is_some_and(|lm| lm.divides(&pair.lcm))
            && !pending.contains(&pair_key(pair.i, k))
            && !pending.contains(&pair_key(pair.j, k))
    })
}

/// Computes the reduced Gröbner basis of the ideal generated by `generators`
/// under `order`.
///
/// The unit ideal yields `[1]`; the zero ideal yields the empty basis.
///
/// # Errors
///
/// Returns an error if the basis or the number of reduced pairs outgrows the
/// limits in `config`.
pub fn groebner_basis<F>(
    generators: &[Polynomial<F>],
    order: MonomialOrder,
    config: &GroebnerConfig,
) -> Result<Vec<Polynomial<F>>, GroebnerError>
where
    F: Field + Send + Sync,
{
    let Some(num_vars) = generators.first().map(Polynomial::num_vars) else {
        return Ok(Vec::new());
    };
    let unit = || vec![Polynomial::constant(F::one(), num_vars, order)];

    let mut basis: Vec<Polynomial<F>> = Vec::new();
    for g in generators.iter().filter(|g| !g.is_zero()) {
        if g.is_unit_constant() {
            return Ok(unit());
        }
        basis.push(g.reorder(order).monic());
    }

    let mut pairs: Vec<CriticalPair> = Vec::new();
    let mut pending: FxHashSet<(usize, usize)> = FxHashSet::default();
    for j in 0..basis.len() {
        for i in 0..j {
            push_pair(&basis, i, j, &mut pairs, &mut pending);
        }
    }

    let mut reduced_pairs = 0usize;
    while let Some(pos) = select_pair(&pairs, order) {
        let pair = pairs.swap_remove(pos);
        pending.remove(&(pair.i, pair.j));

        if chain_criterion(&pair, &basis, &pending) {
            continue;
        }

        reduced_pairs += 1;
        if reduced_pairs > config.max_pairs {
            return Err(GroebnerError::PairLimitExceeded {
                limit: config.max_pairs,
            });
        }

        let Some(s) = s_polynomial(&basis[pair.i], &basis[pair.j], &pair.lcm) else {
            continue;
        };
        let h = normal_form(&s, &basis);
        if h.is_zero() {
            continue;
        }
        if h.is_unit_constant() {
            return Ok(unit());
        }

        basis.push(h.monic());
        if basis.len() > config.max_basis_size {
            return Err(GroebnerError::BasisLimitExceeded {
                limit: config.max_basis_size,
            });
        }
        let new = basis.len() - 1;
        for i in 0..new {
            push_pair(&basis, i, new, &mut pairs, &mut pending);
        }
    }

    log::debug!(
        "{order} basis in {num_vars} variables: {} polynomials after {reduced_pairs} pairs",
        basis.len()
    );
    Ok(reduce_basis(basis, order))
}

fn push_pair<F: Field>(
    basis: &[Polynomial<F>],
    i: usize,
    j: usize,
    pairs: &mut Vec<CriticalPair>,
    pending: &mut FxHashSet<(usize, usize)>,
) {
    let (Some(a), Some(b)) = (basis[i].leading_monomial(), basis[j].leading_monomial()) else {
        return;
    };
    if a.is_coprime(b) {
        return;
    }
    pairs.push(CriticalPair {
        i,
        j,
        lcm: a.lcm(b),
    });
    pending.insert((i, j));
}

/// Normal strategy: the pair with the smallest lcm.
fn select_pair(pairs: &[CriticalPair], order: MonomialOrder) -> Option<usize> {
    pairs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            order
                .compare(&a.lcm, &b.lcm)
                .then_with(|| (a.i, a.j).cmp(&(b.i, b.j)))
        })
        .map(|(pos, _)| pos)
}

/// Minimalizes and inter-reduces a Gröbner basis.
fn reduce_basis<F>(basis: Vec<Polynomial<F>>, order: MonomialOrder) -> Vec<Polynomial<F>>
where
    F: Field + Send + Sync,
{
    let mut minimal: Vec<Polynomial<F>> = Vec::new();
    for (idx, g) in basis.iter().enumerate() {
        let Some(lm) = g.leading_monomial() else {
            continue;
        };
        let redundant = basis.iter().enumerate().any(|(other, h)| {
            other != idx
                && h.leading_monomial().is_some_and(|hlm| {
                    // equal leading monomials: keep the first occurrence
                    hlm.divides(lm) && (hlm != lm || other < idx)
                })
        });
        if !redundant {
            minimal.push(g.clone());
        }
    }

    let mut reduced: Vec<Polynomial<F>> = (0..minimal.len())
        .into_par_iter()
        .map(|idx| {
            let others: Vec<Polynomial<F>> = minimal
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != idx)
                .map(|(_, g)| g.clone())
                .collect();
            normal_form(&minimal[idx], &others).monic()
        })
        .collect();

    reduced.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
        (Some(x), Some(y)) => order.compare(x, y),
        _ => Ordering::Equal,
    });
    reduced
}

/// Returns true if `basis` is a reduced basis: monic, and no term of any
/// element is divisible by the leading monomial of another.
#[must_use]
pub fn is_reduced<F: Field>(basis: &[Polynomial<F>]) -> bool {
    basis.iter().enumerate().all(|(i, g)| {
        g.leading_coeff().is_some_and(Ring::is_one)
            && basis.iter().enumerate().all(|(j, h)| {
                i == j
                    || h.leading_monomial().is_some_and(|hlm| {
                        g.terms().iter().all(|(m, _)| !hlm.divides(m))
                    })
            })
    })
}
