//! Pareto dominance for multi-objective best-trial selection.

use crate::types::Direction;

/// Returns `true` if solution `a` Pareto-dominates solution `b`.
///
/// A solution dominates another if it is at least as good in all objectives
/// and strictly better in at least one, respecting the given directions.
pub(crate) fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), directions.len());

    let mut strictly_better = false;
    for ((&av, &bv), dir) in a.iter().zip(b.iter()).zip(directions.iter()) {
        let better = match dir {
            Direction::Minimize => av < bv,
            Direction::Maximize => av > bv,
        };
        let worse = match dir {
            Direction::Minimize => av > bv,
            Direction::Maximize => av < bv,
        };
        if worse {
            return false;
        }
        if better {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Indices of the non-dominated solutions (the Pareto front).
pub(crate) fn non_dominated(values: &[Vec<f64>], directions: &[Direction]) -> Vec<usize> {
    (0..values.len())
        .filter(|&i| {
            values
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || !dominates(other, &values[i], directions))
        })
        .collect()
}
