//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use study_mirror::prelude::*;

/// A mirror over `sink` with chart and snapshot cadence disabled, so tests
/// see only the trial/best/study-detail writes.
pub fn quiet_mirror(sink: &Arc<InMemorySink>) -> StudyMirror {
    StudyMirror::builder(Arc::clone(sink) as Arc<dyn MirrorSink>)
        .plots_update_freq(UpdateFreq::Never)
        .study_update_freq(UpdateFreq::Never)
        .build()
        .unwrap()
}

/// A completed single-objective trial with one float parameter.
pub fn complete_trial(id: u64, x: f64, value: f64) -> FrozenTrial {
    let mut trial = FrozenTrial::new(id, TrialState::Complete);
    trial.params.insert("x".into(), ParamValue::Float(x));
    trial
        .distributions
        .insert("x".into(), Distribution::float(-10.0, 10.0));
    trial.values = vec![value];
    trial
}

/// A completed multi-objective trial without parameters.
pub fn multi_trial(id: u64, values: &[f64]) -> FrozenTrial {
    let mut trial = FrozenTrial::new(id, TrialState::Complete);
    trial.values = values.to_vec();
    trial
}

/// A minimize study over `(x, value)` pairs, one completed trial each.
pub fn quadratic_study(points: &[(f64, f64)]) -> Study {
    let mut study = Study::new("quadratic", vec![Direction::Minimize]);
    for (i, &(x, value)) in points.iter().enumerate() {
        study.trials.push(complete_trial(i as u64, x, value));
    }
    study
}

/// Reports every trial of `study` through the mirror, in order.
pub fn report_all(mirror: &StudyMirror, study: &Study) {
    for trial in &study.trials {
        mirror.report_trial(study, trial).unwrap();
    }
}
