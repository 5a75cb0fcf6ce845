//! The mirroring engine.
//!
//! [`StudyMirror`] is the crate's entry point: construct one over a sink
//! via [`StudyMirror::builder`], then either call
//! [`report_trial`](StudyMirror::report_trial) once per finished trial
//! (callback style) or [`log_study_metadata`](StudyMirror::log_study_metadata)
//! once after optimization (batch style). Both are synchronous and
//! propagate sink errors to the caller.

mod batch;
mod builder;
mod plots;
mod projection;
mod summary;

pub use batch::BatchOptions;
pub use builder::MirrorBuilder;
pub use summary::{load_study_from_run, load_study_from_run_with, StudyLoader};

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ChartToggles, UpdateFreq};
use crate::error::{Error, Result};
use crate::namespace::{self, ObjectiveNames};
use crate::sink::MirrorSink;
use crate::study::Study;
use crate::trial::FrozenTrial;
use crate::visualization::ChartRenderer;

/// Mirrors study state into an experiment-tracking run.
///
/// The mirror is stateless apart from the objective-name mapping, which is
/// resolved on first use and cached for the mirror's lifetime so series
/// keys stay stable across calls. All configuration is set through
/// [`MirrorBuilder`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use study_mirror::prelude::*;
///
/// let sink = Arc::new(InMemorySink::new());
/// let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
///     .base_namespace("training")
///     .plots_update_freq(UpdateFreq::Never)
///     .build()
///     .unwrap();
///
/// let mut study = Study::new("demo", vec![Direction::Minimize]);
/// let mut trial = FrozenTrial::new(0, TrialState::Complete);
/// trial.values = vec![1.5];
/// study.trials.push(trial.clone());
///
/// mirror.report_trial(&study, &trial).unwrap();
/// assert_eq!(sink.series_len("training/trials/values"), 1);
/// ```
#[allow(clippy::module_name_repetitions)]
pub struct StudyMirror {
    pub(crate) sink: Arc<dyn MirrorSink>,
    base_namespace: String,
    plots_update_freq: UpdateFreq,
    study_update_freq: UpdateFreq,
    toggles: ChartToggles,
    renderer: Arc<dyn ChartRenderer>,
    target_names: Option<Vec<String>>,
    names: RwLock<Option<ObjectiveNames>>,
}

impl std::fmt::Debug for StudyMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudyMirror")
            .field("base_namespace", &self.base_namespace)
            .field("plots_update_freq", &self.plots_update_freq)
            .field("study_update_freq", &self.study_update_freq)
            .field("toggles", &self.toggles)
            .field("target_names", &self.target_names)
            .finish_non_exhaustive()
    }
}

impl StudyMirror {
    /// Starts configuring a mirror over `sink`.
    #[must_use]
    pub fn builder(sink: Arc<dyn MirrorSink>) -> MirrorBuilder {
        MirrorBuilder::new(sink)
    }

    /// Mirrors one finished trial and everything due at this point in the
    /// run: the trial record, its distributions, the current best
    /// trial(s), study details on the first trial, and charts/snapshot on
    /// their configured cadence.
    ///
    /// Call this from the optimizer's per-trial callback with the trial
    /// that just finished.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetNamesLength`] when configured target names
    /// do not match the study's objective count, [`Error::Sink`] when a
    /// write fails, and [`Error::Render`] when a chart fails to render.
    pub fn report_trial(&self, study: &Study, trial: &FrozenTrial) -> Result<()> {
        let names = self.objective_names(study)?;
        trace_info!(
            trial_id = trial.id,
            study = %study.study_name,
            "mirroring trial"
        );

        projection::log_trial(self, study, trial, &names, false)?;
        projection::log_trial_distributions(self, trial)?;
        projection::log_best_trials(self, study, &names)?;

        if trial.id == 0 {
            summary::log_study_details(self, study)?;
        }
        if plots::should_log_plots(self, study, trial) {
            plots::log_plots(self, study, &names)?;
        }
        if plots::should_log_study(self, trial) {
            summary::log_study_object(self, study)?;
        }
        Ok(())
    }

    /// Joins `rest` onto the configured base namespace.
    pub(crate) fn path(&self, rest: &str) -> String {
        if self.base_namespace.is_empty() {
            rest.to_owned()
        } else {
            format!("{}/{rest}", self.base_namespace)
        }
    }

    /// The objective-name mapping, resolved once and reused afterwards.
    fn objective_names(&self, study: &Study) -> Result<ObjectiveNames> {
        if let Some(names) = self.names.read().as_ref() {
            return Ok(names.clone());
        }
        let resolved =
            namespace::resolve_objective_names(study.n_objectives(), self.target_names.as_deref())?;
        trace_debug!(?resolved, "resolved objective names");
        *self.names.write() = Some(resolved.clone());
        Ok(resolved)
    }
}

/// Serialize `value` for the sink, reporting failures against `path`.
pub(crate) fn to_json<T: Serialize>(path: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::sink(path, e.to_string()))
}
