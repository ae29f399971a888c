//! Point recovery by lex elimination.

use drinfeld_groebner::{groebner_basis, GroebnerConfig, Ideal, VarietyDimension};
use drinfeld_poly::{MonomialOrder, Polynomial};

use crate::error::SolveError;
use crate::roots::RootField;

/// A partially assigned point and the system that remains to be solved.
struct Partial<F: RootField> {
    generators: Vec<Polynomial<F>>,
    values: Vec<Option<F>>,
}

/// All points of a zero-dimensional variety with coordinates in `F`.
///
/// Points are returned in a deterministic order: depth-first over the
/// variables from the last to the first, roots in the order `RootField`
/// produces them. Points with a coordinate outside `F` are not returned.
///
/// # Errors
///
/// Returns `NotZeroDimensional` for positive-dimensional varieties, and
/// propagates Gröbner basis and root search failures.
pub fn solve<F: RootField>(
    ideal: &Ideal<F>,
    config: &GroebnerConfig,
) -> Result<Vec<Vec<F>>, SolveError> {
    match ideal.dimension(config)? {
        VarietyDimension::Empty => return Ok(Vec::new()),
        VarietyDimension::ZeroDimensional => {}
        dimension @ VarietyDimension::Positive(_) => {
            return Err(SolveError::NotZeroDimensional { dimension });
        }
    }

    let num_vars = ideal.num_vars();
    let mut points: Vec<Vec<F>> = Vec::new();
    let mut stack = vec![Partial {
        generators: ideal.generators().to_vec(),
        values: vec![None; num_vars],
    }];

    while let Some(partial) = stack.pop() {
        let lex = groebner_basis(&partial.generators, MonomialOrder::Lex, config)?;
        if lex.iter().any(Polynomial::is_unit_constant) {
            continue;
        }

        // assigned variables no longer occur, so the lex-smallest free one
        // carries the eliminant
        let Some(var) = partial.values.iter().rposition(Option::is_none) else {
            let point: Vec<F> = partial.values.into_iter().flatten().collect();
            if !points.contains(&point) {
                points.push(point);
            }
            continue;
        };

        let eliminant = lex
            .iter()
            .filter(|g| !g.is_constant())
            .find_map(|g| g.univariate_in(var))
            .ok_or(SolveError::NotZeroDimensional {
                dimension: VarietyDimension::Positive(1),
            })?;

        let roots = F::roots(&eliminant)?;
        let expected = eliminant.squarefree_part().degree().unwrap_or(0);
        if roots.len() < expected {
            log::debug!(
                "x{var}: {} of {expected} roots of the eliminant lie outside the base field",
                expected - roots.len()
            );
        }

        // reversed so that the first root is explored first
        for root in roots.into_iter().rev() {
            let generators = lex
                .iter()
                .map(|g| g.substitute(var, &root))
                .filter(|g| !g.is_zero())
                .collect();
            let mut values = partial.values.clone();
            values[var] = Some(root);
            stack.push(Partial { generators, values });
        }
    }

    Ok(points)
}
