//! Trailing batch export of a whole study.

use crate::error::Result;
use crate::study::Study;

use super::{plots, projection, summary, to_json, StudyMirror};

/// Which parts of the study [`log_study_metadata`](StudyMirror::log_study_metadata)
/// replays. Best trials and study details are always written; everything
/// here defaults to enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
pub struct BatchOptions {
    /// Render and attach the chart set.
    pub log_plots: bool,
    /// Write the study object/descriptor.
    pub log_study: bool,
    /// Mirror the full record of every trial.
    pub log_all_trials: bool,
    /// Append every trial's distribution map to `study/distributions`.
    pub log_distributions: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            log_plots: true,
            log_study: true,
            log_all_trials: true,
            log_distributions: true,
        }
    }
}

impl StudyMirror {
    /// Mirrors an entire study in one call, for use after optimization
    /// finishes (or to backfill a run that had no per-trial callback).
    ///
    /// Always writes the best trial(s) and the study details; `options`
    /// controls the rest. Chart export here ignores the update
    /// frequencies, which only pace the per-trial callback.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetNamesLength`](crate::Error::TargetNamesLength)
    /// when configured target names do not match the study,
    /// [`Error::Sink`](crate::Error::Sink) when a write fails, and
    /// [`Error::Render`](crate::Error::Render) when a chart fails.
    pub fn log_study_metadata(&self, study: &Study, options: BatchOptions) -> Result<()> {
        let names = self.objective_names(study)?;
        trace_info!(
            study = %study.study_name,
            trials = study.trials.len(),
            "mirroring study metadata"
        );

        projection::log_best_trials(self, study, &names)?;
        summary::log_study_details(self, study)?;

        if options.log_all_trials {
            for trial in &study.trials {
                projection::log_trial(self, study, trial, &names, false)?;
            }
        }
        if options.log_distributions {
            let path = self.path("study/distributions");
            for trial in &study.trials {
                let value = to_json(&path, &trial.distributions)?;
                self.sink.append(&path, value, None)?;
            }
        }
        if options.log_plots {
            plots::log_plots(self, study, &names)?;
        }
        if options.log_study {
            summary::log_study_object(self, study)?;
        }
        Ok(())
    }
}
