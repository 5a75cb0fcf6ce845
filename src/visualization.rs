//! Self-contained HTML chart pages with embedded
//! [Plotly.js](https://plotly.com/javascript/).
//!
//! Each chart renders as a single standalone HTML page suitable for
//! attaching to a run as an artifact. The [`ChartRenderer`] trait is the
//! seam for alternative backends; [`PlotlyRenderer`] is the built-in one.
//!
//! # Charts
//!
//! | Chart | Description |
//! |---|---|
//! | **Optimization history** | Objective value vs trial number with best-so-far line |
//! | **Slice** | Objective value vs each parameter (1D scatter per param) |
//! | **Contour** | Pairwise parameter scatter, color = objective |
//! | **Parallel coordinates** | Multi-parameter relationship view (color = objective) |
//! | **Parameter importances** | Horizontal bar chart of Spearman-based importance |
//! | **Intermediate values** | Per-trial learning curves |
//! | **EDF** | Empirical distribution of objective values |
//! | **Pareto front** | Non-dominated trials, 2 or 3 objectives |
//!
//! An internet connection is needed on first load of a page to fetch
//! `Plotly.js` from a CDN.

use core::fmt::Write as _;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::importance;
use crate::param::ParamValue;
use crate::study::Study;
use crate::trial::FrozenTrial;
use crate::types::{Direction, TrialState};

/// The chart families a renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Contour,
    Edf,
    ParallelCoordinate,
    ParamImportances,
    Slice,
    IntermediateValues,
    OptimizationHistory,
}

impl ChartKind {
    /// Path segment and file stem for this chart.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Contour => "plot_contour",
            Self::Edf => "plot_edf",
            Self::ParallelCoordinate => "plot_parallel_coordinate",
            Self::ParamImportances => "plot_param_importances",
            Self::Slice => "plot_slice",
            Self::IntermediateValues => "plot_intermediate_values",
            Self::OptimizationHistory => "plot_optimization_history",
        }
    }
}

/// A finished chart page, ready to attach.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub file_name: String,
    pub html: String,
}

/// Backend that turns study data into chart pages.
///
/// `Ok(None)` means the chart is not producible from the given data and
/// should be skipped silently, per-chart errors are reserved for actual
/// rendering failures.
pub trait ChartRenderer: Send + Sync {
    /// Render `kind` for the objective at `target_index`, labelled
    /// `target_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::Error::Render) when the chart
    /// cannot be produced from renderable data.
    fn render(
        &self,
        study: &Study,
        kind: ChartKind,
        target_index: usize,
        target_name: &str,
    ) -> Result<Option<RenderedChart>>;

    /// Render the Pareto front across all objectives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::Error::Render) when the chart
    /// cannot be produced from renderable data.
    fn render_pareto_front(&self, study: &Study, names: &[String]) -> Result<Option<RenderedChart>>;

    /// Whether this backend can draw a Pareto front at all.
    fn supports_pareto_front(&self) -> bool {
        false
    }
}

/// The built-in Plotly.js renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyRenderer;

impl ChartRenderer for PlotlyRenderer {
    fn render(
        &self,
        study: &Study,
        kind: ChartKind,
        target_index: usize,
        target_name: &str,
    ) -> Result<Option<RenderedChart>> {
        let complete = study.complete_trials();
        let direction = *study
            .directions
            .get(target_index)
            .unwrap_or(&Direction::Minimize);

        let script = match kind {
            ChartKind::OptimizationHistory => {
                history_script(&complete, direction, target_index, target_name)
            }
            ChartKind::Slice => slice_script(&complete, target_index),
            ChartKind::Contour => contour_script(&complete, target_index),
            ChartKind::ParallelCoordinate => {
                parcoords_script(&complete, direction, target_index, target_name)
            }
            ChartKind::ParamImportances => importances_script(study, target_index),
            ChartKind::Edf => edf_script(&complete, target_index, target_name),
            ChartKind::IntermediateValues => intermediate_script(&study.trials),
        };

        Ok(script.map(|script| page(kind.key(), &title_for(kind, target_name), &script)))
    }

    fn render_pareto_front(&self, study: &Study, names: &[String]) -> Result<Option<RenderedChart>> {
        let complete = study.complete_trials();
        let script = pareto_script(study, &complete, names);
        Ok(script.map(|script| page("plot_pareto_front", "Pareto Front", &script)))
    }

    fn supports_pareto_front(&self) -> bool {
        true
    }
}

fn title_for(kind: ChartKind, target_name: &str) -> String {
    let base = match kind {
        ChartKind::Contour => "Contour",
        ChartKind::Edf => "Empirical Distribution",
        ChartKind::ParallelCoordinate => "Parallel Coordinates",
        ChartKind::ParamImportances => "Parameter Importances",
        ChartKind::Slice => "Slice",
        ChartKind::IntermediateValues => "Intermediate Values",
        ChartKind::OptimizationHistory => "Optimization History",
    };
    format!("{base} ({target_name})")
}

/// Wrap a chart script in a standalone HTML page.
fn page(stem: &str, title: &str, script: &str) -> RenderedChart {
    let mut html = String::with_capacity(2048 + script.len());
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            padding: 16px; }}
  .chart-title {{ font-size: 1.1em; font-weight: 600; margin-bottom: 8px; }}
</style>
</head>
<body>
<div class="chart"><div class="chart-title">{escaped}</div><div id="chart"></div></div>
{script}</body>
</html>
"#,
        escaped = escape_js(title),
    );
    RenderedChart {
        file_name: format!("{stem}.html"),
        html,
    }
}

// ---------------------------------------------------------------------------
// Chart scripts
// ---------------------------------------------------------------------------

fn history_script(
    complete: &[&FrozenTrial],
    direction: Direction,
    target: usize,
    target_name: &str,
) -> Option<String> {
    if complete.is_empty() {
        return None;
    }

    let mut ids = Vec::with_capacity(complete.len());
    let mut vals = Vec::with_capacity(complete.len());
    let mut best_vals = Vec::with_capacity(complete.len());
    let mut best = complete[0].value_at(target)?;
    for t in complete {
        let v = t.value_at(target)?;
        ids.push(t.id);
        vals.push(v);
        best = match direction {
            Direction::Minimize => best.min(v),
            Direction::Maximize => best.max(v),
        };
        best_vals.push(best);
    }

    let mut script = String::new();
    let _ = write!(
        script,
        r##"<script>
Plotly.newPlot("chart", [
  {{ x: {ids:?}, y: {vals:?}, mode: "markers", name: "Objective", type: "scatter",
     marker: {{ color: "#3498db", size: 6 }} }},
  {{ x: {ids:?}, y: {best_vals:?}, mode: "lines", name: "Best so far", type: "scatter",
     line: {{ color: "#e74c3c", width: 2 }} }}
], {{ xaxis: {{ title: "Trial" }}, yaxis: {{ title: "{name}" }},
     margin: {{ t: 10 }}, legend: {{ x: 1, xanchor: "right", y: 1 }} }},
   {{ responsive: true }});
</script>
"##,
        name = escape_js(target_name),
    );
    Some(script)
}

fn slice_script(complete: &[&FrozenTrial], target: usize) -> Option<String> {
    if complete.is_empty() {
        return None;
    }
    let params = collect_param_values(complete);
    if params.is_empty() {
        return None;
    }

    let n_params = params.len();
    let cols = if n_params <= 2 { n_params } else { 2 };
    let rows = n_params.div_ceil(cols);

    let mut subplot_titles = Vec::new();
    let mut traces = String::new();
    for (i, (name, values)) in params.iter().enumerate() {
        subplot_titles.push(format!("\"{}\"", escape_js(name)));

        let mut x_vals = Vec::new();
        let mut y_vals = Vec::new();
        for t in complete {
            let (Some(&x), Some(y)) = (values.get(&t.id), t.value_at(target)) else {
                continue;
            };
            x_vals.push(x);
            y_vals.push(y);
        }

        let subplot_idx = i + 1;
        let xa = if subplot_idx == 1 {
            "x".to_string()
        } else {
            format!("x{subplot_idx}")
        };
        let ya = if subplot_idx == 1 {
            "y".to_string()
        } else {
            format!("y{subplot_idx}")
        };
        let _ = write!(
            traces,
            r##"{{ x: {x_vals:?}, y: {y_vals:?}, mode: "markers", type: "scatter",
               xaxis: "{xa}", yaxis: "{ya}",
               marker: {{ color: "#3498db", size: 5 }}, showlegend: false }},"##,
        );
    }

    let mut script = String::new();
    let _ = write!(
        script,
        r#"<script>
Plotly.newPlot("chart", [{traces}],
  {{ grid: {{ rows: {rows}, columns: {cols}, pattern: "independent" }},
     annotations: [{annotations}],
     margin: {{ t: 30 }}, showlegend: false }},
  {{ responsive: true }});
</script>
"#,
        annotations = build_subplot_annotations(&subplot_titles, rows, cols),
    );
    Some(script)
}

fn contour_script(complete: &[&FrozenTrial], target: usize) -> Option<String> {
    if complete.is_empty() {
        return None;
    }
    let params = collect_param_values(complete);
    if params.len() < 2 {
        return None;
    }

    let names: Vec<&String> = params.keys().collect();
    let mut pairs = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            pairs.push((names[i], names[j]));
        }
    }

    let cols = if pairs.len() <= 2 { pairs.len() } else { 2 };
    let rows = pairs.len().div_ceil(cols);

    let mut subplot_titles = Vec::new();
    let mut traces = String::new();
    for (i, (xn, yn)) in pairs.iter().enumerate() {
        subplot_titles.push(format!(
            "\"{} / {}\"",
            escape_js(xn),
            escape_js(yn)
        ));

        let xs = &params[*xn];
        let ys = &params[*yn];
        let mut x_vals = Vec::new();
        let mut y_vals = Vec::new();
        let mut colors = Vec::new();
        for t in complete {
            let (Some(&x), Some(&y), Some(v)) = (xs.get(&t.id), ys.get(&t.id), t.value_at(target))
            else {
                continue;
            };
            x_vals.push(x);
            y_vals.push(y);
            colors.push(v);
        }

        let subplot_idx = i + 1;
        let xa = if subplot_idx == 1 {
            "x".to_string()
        } else {
            format!("x{subplot_idx}")
        };
        let ya = if subplot_idx == 1 {
            "y".to_string()
        } else {
            format!("y{subplot_idx}")
        };
        let _ = write!(
            traces,
            r#"{{ x: {x_vals:?}, y: {y_vals:?}, mode: "markers", type: "scatter",
               xaxis: "{xa}", yaxis: "{ya}",
               marker: {{ color: {colors:?}, colorscale: "Viridis", size: 6, showscale: {showscale} }},
               showlegend: false }},"#,
            showscale = i == 0,
        );
    }

    let mut script = String::new();
    let _ = write!(
        script,
        r#"<script>
Plotly.newPlot("chart", [{traces}],
  {{ grid: {{ rows: {rows}, columns: {cols}, pattern: "independent" }},
     annotations: [{annotations}],
     margin: {{ t: 30 }}, showlegend: false }},
  {{ responsive: true }});
</script>
"#,
        annotations = build_subplot_annotations(&subplot_titles, rows, cols),
    );
    Some(script)
}

fn parcoords_script(
    complete: &[&FrozenTrial],
    direction: Direction,
    target: usize,
    target_name: &str,
) -> Option<String> {
    if complete.is_empty() {
        return None;
    }
    let params = collect_param_values(complete);
    if params.is_empty() {
        return None;
    }

    let mut dimensions = String::new();

    let obj_vals: Vec<f64> = complete.iter().filter_map(|t| t.value_at(target)).collect();
    if obj_vals.len() != complete.len() {
        return None;
    }
    let _ = write!(
        dimensions,
        r#"{{ label: "{name}", values: {obj_vals:?} }},"#,
        name = escape_js(target_name),
    );

    for (name, values) in &params {
        let vals: Vec<f64> = complete
            .iter()
            .map(|t| values.get(&t.id).copied().unwrap_or(f64::NAN))
            .collect();
        let _ = write!(
            dimensions,
            r#"{{ label: "{label}", values: {vals:?} }},"#,
            label = escape_js(name),
        );
    }

    // Color by objective value: green = good, red = bad.
    let (cmin, cmax) = min_max(&obj_vals);
    let colorscale = match direction {
        Direction::Minimize => r##"[[0,"#2ecc71"],[1,"#e74c3c"]]"##,
        Direction::Maximize => r##"[[0,"#e74c3c"],[1,"#2ecc71"]]"##,
    };

    let mut script = String::new();
    let _ = write!(
        script,
        r#"<script>
Plotly.newPlot("chart", [{{
  type: "parcoords",
  line: {{ color: {obj_vals:?}, colorscale: {colorscale},
           cmin: {cmin}, cmax: {cmax}, showscale: true }},
  dimensions: [{dimensions}]
}}], {{ margin: {{ t: 10 }} }}, {{ responsive: true }});
</script>
"#,
    );
    Some(script)
}

fn importances_script(study: &Study, target: usize) -> Option<String> {
    let finished: Vec<&FrozenTrial> = study
        .trials
        .iter()
        .filter(|t| matches!(t.state, TrialState::Complete | TrialState::Pruned))
        .collect();
    let importance = importance::param_importance(&finished, target)?;

    // Horizontal bars read bottom-up, reverse so the top bar is the most
    // important parameter.
    let names: Vec<_> = importance
        .iter()
        .rev()
        .map(|(n, _)| format!("\"{}\"", escape_js(n)))
        .collect();
    let values: Vec<f64> = importance.iter().rev().map(|(_, v)| *v).collect();

    let mut script = String::new();
    let _ = write!(
        script,
        r##"<script>
Plotly.newPlot("chart", [{{
  x: {values:?}, y: [{names}], type: "bar", orientation: "h",
  marker: {{ color: "#9b59b6" }}
}}], {{ xaxis: {{ title: "Importance (|Spearman correlation|)" }},
       yaxis: {{ automargin: true }}, margin: {{ t: 10, l: 120 }} }},
   {{ responsive: true }});
</script>
"##,
        names = names.join(","),
    );
    Some(script)
}

fn edf_script(complete: &[&FrozenTrial], target: usize, target_name: &str) -> Option<String> {
    let mut vals: Vec<f64> = complete.iter().filter_map(|t| t.value_at(target)).collect();
    if vals.is_empty() {
        return None;
    }
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

    #[allow(clippy::cast_precision_loss)]
    let n = vals.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let fracs: Vec<f64> = (1..=vals.len()).map(|i| i as f64 / n).collect();

    let mut script = String::new();
    let _ = write!(
        script,
        r##"<script>
Plotly.newPlot("chart", [{{
  x: {vals:?}, y: {fracs:?}, mode: "lines", type: "scatter",
  line: {{ color: "#3498db", shape: "hv", width: 2 }}
}}], {{ xaxis: {{ title: "{name}" }}, yaxis: {{ title: "Cumulative Probability", range: [0, 1] }},
       margin: {{ t: 10 }} }},
   {{ responsive: true }});
</script>
"##,
        name = escape_js(target_name),
    );
    Some(script)
}

fn intermediate_script(trials: &[FrozenTrial]) -> Option<String> {
    let trials_with_iv: Vec<_> = trials
        .iter()
        .filter(|t| !t.intermediate_values.is_empty())
        .collect();
    if trials_with_iv.is_empty() {
        return None;
    }

    let mut traces = String::new();
    for t in &trials_with_iv {
        let steps: Vec<u64> = t.intermediate_values.iter().map(|(s, _)| *s).collect();
        let values: Vec<f64> = t.intermediate_values.iter().map(|(_, v)| *v).collect();
        let color = match t.state {
            TrialState::Pruned => "#f39c12",
            _ => "#3498db",
        };
        let _ = write!(
            traces,
            r#"{{ x: {steps:?}, y: {values:?}, mode: "lines+markers", name: "Trial {id}",
               line: {{ color: "{color}", width: 1 }}, marker: {{ size: 3 }} }},"#,
            id = t.id,
        );
    }

    let mut script = String::new();
    let _ = write!(
        script,
        r#"<script>
Plotly.newPlot("chart", [{traces}],
  {{ xaxis: {{ title: "Step" }}, yaxis: {{ title: "Intermediate Value" }},
     margin: {{ t: 10 }}, showlegend: true }},
  {{ responsive: true }});
</script>
"#,
    );
    Some(script)
}

fn pareto_script(study: &Study, complete: &[&FrozenTrial], names: &[String]) -> Option<String> {
    let n_obj = study.n_objectives();
    if !(2..=3).contains(&n_obj) || complete.is_empty() {
        return None;
    }

    let best_ids: BTreeSet<u64> =
        study.best_trials().iter().map(|t| t.id).collect();

    let mut front_axes: Vec<Vec<f64>> = vec![Vec::new(); n_obj];
    let mut rest_axes: Vec<Vec<f64>> = vec![Vec::new(); n_obj];
    for t in complete {
        let axes = if best_ids.contains(&t.id) {
            &mut front_axes
        } else {
            &mut rest_axes
        };
        for (i, axis) in axes.iter_mut().enumerate() {
            axis.push(t.value_at(i)?);
        }
    }

    let label = |i: usize| escape_js(names.get(i).map_or("", String::as_str));

    let mut script = String::new();
    if n_obj == 2 {
        let _ = write!(
            script,
            r##"<script>
Plotly.newPlot("chart", [
  {{ x: {rx:?}, y: {ry:?}, mode: "markers", name: "Dominated", type: "scatter",
     marker: {{ color: "#95a5a6", size: 6 }} }},
  {{ x: {fx:?}, y: {fy:?}, mode: "markers", name: "Pareto front", type: "scatter",
     marker: {{ color: "#e74c3c", size: 8 }} }}
], {{ xaxis: {{ title: "{x_label}" }}, yaxis: {{ title: "{y_label}" }},
     margin: {{ t: 10 }}, legend: {{ x: 1, xanchor: "right", y: 1 }} }},
   {{ responsive: true }});
</script>
"##,
            rx = rest_axes[0],
            ry = rest_axes[1],
            fx = front_axes[0],
            fy = front_axes[1],
            x_label = label(0),
            y_label = label(1),
        );
    } else {
        let _ = write!(
            script,
            r##"<script>
Plotly.newPlot("chart", [
  {{ x: {rx:?}, y: {ry:?}, z: {rz:?}, mode: "markers", name: "Dominated", type: "scatter3d",
     marker: {{ color: "#95a5a6", size: 4 }} }},
  {{ x: {fx:?}, y: {fy:?}, z: {fz:?}, mode: "markers", name: "Pareto front", type: "scatter3d",
     marker: {{ color: "#e74c3c", size: 5 }} }}
], {{ scene: {{ xaxis: {{ title: "{x_label}" }}, yaxis: {{ title: "{y_label}" }},
              zaxis: {{ title: "{z_label}" }} }},
     margin: {{ t: 10 }} }},
   {{ responsive: true }});
</script>
"##,
            rx = rest_axes[0],
            ry = rest_axes[1],
            rz = rest_axes[2],
            fx = front_axes[0],
            fy = front_axes[1],
            fz = front_axes[2],
            x_label = label(0),
            y_label = label(1),
            z_label = label(2),
        );
    }
    Some(script)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Numeric value per parameter per trial id. Categorical string values get
/// stable per-parameter indices in first-seen order.
fn collect_param_values(trials: &[&FrozenTrial]) -> BTreeMap<String, BTreeMap<u64, f64>> {
    let mut categories: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
    for trial in trials {
        for (name, pv) in &trial.params {
            if let ParamValue::Str(s) = pv {
                let index = categories.entry(name.as_str()).or_default();
                let next = index.len();
                #[allow(clippy::cast_precision_loss)]
                index.entry(s.as_str()).or_insert(next as f64);
            }
        }
    }

    let mut out: BTreeMap<String, BTreeMap<u64, f64>> = BTreeMap::new();
    for trial in trials {
        for (name, pv) in &trial.params {
            let v = match pv {
                ParamValue::Str(s) => categories[name.as_str()][s.as_str()],
                other => match other.as_f64() {
                    Some(v) => v,
                    None => continue,
                },
            };
            out.entry(name.clone()).or_default().insert(trial.id, v);
        }
    }
    out
}

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn min_max(vals: &[f64]) -> (f64, f64) {
    let mut mn = f64::INFINITY;
    let mut mx = f64::NEG_INFINITY;
    for &v in vals {
        if v.is_nan() {
            continue;
        }
        if v < mn {
            mn = v;
        }
        if v > mx {
            mx = v;
        }
    }
    // If all values were NaN, return 0.0..1.0 as a safe fallback.
    if mn > mx {
        return (0.0, 1.0);
    }
    (mn, mx)
}

/// Build Plotly annotation objects to act as subplot titles.
#[allow(clippy::cast_precision_loss)]
fn build_subplot_annotations(titles: &[String], rows: usize, cols: usize) -> String {
    let mut anns = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        let row = i / cols;
        let col = i % cols;
        // Compute x/y anchor in paper coordinates.
        let x = if cols == 1 {
            0.5
        } else {
            (f64::from(u32::try_from(col).unwrap_or(0))) / (cols as f64 - 1.0)
        };
        let y = 1.0 - (f64::from(u32::try_from(row).unwrap_or(0))) / (rows as f64).max(1.0) + 0.02;
        anns.push(format!(
            r#"{{ text: {title}, x: {x:.3}, y: {y:.3}, xref: "paper", yref: "paper",
               showarrow: false, font: {{ size: 12 }} }}"#,
        ));
    }
    anns.join(",")
}

#[cfg(test)]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn study_with_trials(values: &[f64]) -> Study {
        let mut study = Study::new("viz", vec![Direction::Minimize]);
        for (i, &v) in values.iter().enumerate() {
            let mut t = FrozenTrial::new(i as u64, TrialState::Complete);
            t.params.insert("x".into(), ParamValue::Float(v * 2.0));
            t.values = vec![v];
            study.trials.push(t);
        }
        study
    }

    #[test]
    fn history_embeds_values() {
        let study = study_with_trials(&[3.0, 1.0, 2.0]);
        let chart = PlotlyRenderer
            .render(&study, ChartKind::OptimizationHistory, 0, "objective_value")
            .unwrap()
            .unwrap();
        assert_eq!(chart.file_name, "plot_optimization_history.html");
        assert!(chart.html.contains("Plotly.newPlot"));
        assert!(chart.html.contains("[3.0, 1.0, 1.0]"));
    }

    #[test]
    fn contour_needs_two_params() {
        let study = study_with_trials(&[1.0, 2.0]);
        let chart = PlotlyRenderer
            .render(&study, ChartKind::Contour, 0, "objective_value")
            .unwrap();
        assert!(chart.is_none());
    }

    #[test]
    fn pareto_skips_single_objective() {
        let study = study_with_trials(&[1.0, 2.0]);
        let chart = PlotlyRenderer
            .render_pareto_front(&study, &["objective_value".into()])
            .unwrap();
        assert!(chart.is_none());
    }

    #[test]
    fn edf_is_monotone_page() {
        let study = study_with_trials(&[2.0, 1.0, 3.0]);
        let chart = PlotlyRenderer
            .render(&study, ChartKind::Edf, 0, "objective_value")
            .unwrap()
            .unwrap();
        assert!(chart.html.contains("[1.0, 2.0, 3.0]"));
        assert!(chart.html.contains("Cumulative Probability"));
    }

    #[test]
    fn categorical_params_get_indices() {
        let mut study = Study::new("viz", vec![Direction::Minimize]);
        for (i, cat) in ["a", "b", "a"].iter().enumerate() {
            let mut t = FrozenTrial::new(i as u64, TrialState::Complete);
            t.params.insert("choice".into(), ParamValue::Str((*cat).into()));
            t.values = vec![i as f64];
            study.trials.push(t);
        }
        let refs: Vec<&FrozenTrial> = study.trials.iter().collect();
        let values = collect_param_values(&refs);
        let choice = &values["choice"];
        assert_eq!(choice[&0], choice[&2]);
        assert_ne!(choice[&0], choice[&1]);
    }
}
