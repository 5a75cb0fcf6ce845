//! Chart export gating and attachment.

use crate::error::Result;
use crate::namespace::ObjectiveNames;
use crate::sink::Artifact;
use crate::study::Study;
use crate::trial::FrozenTrial;
use crate::visualization::ChartKind;

use super::StudyMirror;

/// Charts are due when at least one trial has completed and the trial id
/// hits the configured cadence.
pub(super) fn should_log_plots(mirror: &StudyMirror, study: &Study, trial: &FrozenTrial) -> bool {
    study.n_complete() > 0 && mirror.plots_update_freq.due(trial.id)
}

/// The study object is re-written purely on cadence.
pub(super) fn should_log_study(mirror: &StudyMirror, trial: &FrozenTrial) -> bool {
    mirror.study_update_freq.due(trial.id)
}

/// Renders and attaches every enabled chart whose data preconditions hold.
///
/// Charts land under `visualizations/<chart>`, or per objective under
/// `visualizations/<name>/<chart>` for multi-objective studies. A renderer
/// returning `Ok(None)` is a silent skip.
pub(super) fn log_plots(mirror: &StudyMirror, study: &Study, names: &ObjectiveNames) -> Result<()> {
    let toggles = &mirror.toggles;

    for index in 0..names.len() {
        let target_name = names.get(index).to_owned();
        let handle = if names.is_multi() {
            format!("visualizations/{target_name}")
        } else {
            "visualizations".to_owned()
        };

        let charts = [
            (toggles.contour && study.has_params(), ChartKind::Contour),
            (toggles.edf, ChartKind::Edf),
            (toggles.parallel_coordinate, ChartKind::ParallelCoordinate),
            (
                toggles.param_importances && study.n_finished() > 1,
                ChartKind::ParamImportances,
            ),
            (toggles.slice && study.has_params(), ChartKind::Slice),
            (
                toggles.intermediate_values && study.has_intermediate_values(),
                ChartKind::IntermediateValues,
            ),
            (toggles.optimization_history, ChartKind::OptimizationHistory),
        ];

        for (enabled, kind) in charts {
            if !enabled {
                continue;
            }
            let Some(chart) = mirror.renderer.render(study, kind, index, &target_name)? else {
                continue;
            };
            trace_debug!(chart = kind.key(), target = %target_name, "attaching chart");
            mirror.sink.attach(
                &mirror.path(&format!("{handle}/{}", kind.key())),
                Artifact::html(chart.file_name, chart.html),
            )?;
        }
    }

    if toggles.pareto_front
        && study.is_multi_objective()
        && mirror.renderer.supports_pareto_front()
    {
        if let Some(chart) = mirror.renderer.render_pareto_front(study, &names.names())? {
            mirror.sink.attach(
                &mirror.path("visualizations/plot_pareto_front"),
                Artifact::html(chart.file_name, chart.html),
            )?;
        }
    }
    Ok(())
}
