//! Spearman-rank parameter importance.
//!
//! For each parameter, the absolute Spearman correlation between its values
//! and the target objective values across completed trials, normalized to
//! sum to 1.0 and sorted descending. Degenerate data (fewer than two usable
//! trials, zero variance) yields `None` so the caller can skip the chart
//! instead of handling an error.

use std::collections::{BTreeMap, BTreeSet};

use crate::trial::FrozenTrial;
use crate::types::TrialState;

/// Average ranks (1-based), ties share the mean rank.
#[allow(clippy::float_cmp)]
fn ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut out = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Ranks are 1-based; tied entries share the mean of their span.
        #[allow(clippy::cast_precision_loss)]
        let mean_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            out[idx] = mean_rank;
        }
        i = j + 1;
    }
    out
}

/// Spearman rank correlation, `None` when either side has zero variance.
pub(crate) fn spearman(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return None;
    }

    let rx = ranks(xs);
    let ry = ranks(ys);

    #[allow(clippy::cast_precision_loss)]
    let n = rx.len() as f64;
    let mean_x: f64 = rx.iter().sum::<f64>() / n;
    let mean_y: f64 = ry.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in rx.iter().zip(ry.iter()) {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    let corr = cov / denom;
    corr.is_finite().then_some(corr)
}

/// Importance scores for the objective at `target`, or `None` when the
/// trial data is too degenerate to score anything.
pub(crate) fn param_importance(
    trials: &[&FrozenTrial],
    target: usize,
) -> Option<Vec<(String, f64)>> {
    let complete: Vec<_> = trials
        .iter()
        .filter(|t| t.state == TrialState::Complete && t.value_at(target).is_some())
        .collect();
    if complete.len() < 2 {
        return None;
    }

    let all_names: BTreeSet<&String> = complete.iter().flat_map(|t| t.params.keys()).collect();

    let mut scores: Vec<(String, f64)> = Vec::with_capacity(all_names.len());
    for name in all_names {
        // Categorical strings get stable per-parameter indices so they can
        // be rank-correlated like everything else.
        let mut categories: BTreeMap<&str, f64> = BTreeMap::new();
        for trial in &complete {
            if let Some(crate::param::ParamValue::Str(s)) = trial.params.get(name) {
                let next = categories.len();
                #[allow(clippy::cast_precision_loss)]
                categories.entry(s.as_str()).or_insert(next as f64);
            }
        }

        let mut xs = Vec::with_capacity(complete.len());
        let mut ys = Vec::with_capacity(complete.len());
        for trial in &complete {
            let Some(pv) = trial.params.get(name) else {
                continue;
            };
            let x = match pv {
                crate::param::ParamValue::Str(s) => categories[s.as_str()],
                other => match other.as_f64() {
                    Some(v) => v,
                    None => continue,
                },
            };
            // Filter guarantees the target value exists.
            let Some(y) = trial.value_at(target) else {
                continue;
            };
            xs.push(x);
            ys.push(y);
        }

        if let Some(corr) = spearman(&xs, &ys) {
            scores.push((name.clone(), corr.abs()));
        }
    }

    if scores.is_empty() {
        return None;
    }

    let sum: f64 = scores.iter().map(|(_, s)| *s).sum();
    if sum > 0.0 {
        for entry in &mut scores {
            entry.1 /= sum;
        }
    }
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));
    Some(scores)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::param::ParamValue;
    use crate::types::TrialState;

    fn trial(id: u64, x: f64, value: f64) -> FrozenTrial {
        let mut t = FrozenTrial::new(id, TrialState::Complete);
        t.params.insert("x".into(), ParamValue::Float(x));
        t.values = vec![value];
        t
    }

    #[test]
    fn monotone_relation_scores_one() {
        let trials = [trial(0, 1.0, 1.0), trial(1, 2.0, 4.0), trial(2, 3.0, 9.0)];
        let refs: Vec<_> = trials.iter().collect();
        let scores = param_importance(&refs, 0).unwrap();
        assert_eq!(scores[0].0, "x");
        assert!((scores[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_is_degenerate() {
        let trials = [trial(0, 5.0, 1.0), trial(1, 5.0, 2.0)];
        let refs: Vec<_> = trials.iter().collect();
        assert!(param_importance(&refs, 0).is_none());
    }

    #[test]
    fn fewer_than_two_trials_is_degenerate() {
        let trials = [trial(0, 1.0, 1.0)];
        let refs: Vec<_> = trials.iter().collect();
        assert!(param_importance(&refs, 0).is_none());
    }

    #[test]
    fn tied_ranks_average() {
        assert_eq!(ranks(&[1.0, 1.0, 2.0]), vec![1.5, 1.5, 3.0]);
    }
}
