//! Best-trial mirroring.

mod common;

use std::sync::Arc;

use serde_json::json;
use study_mirror::prelude::*;

use common::{complete_trial, multi_trial, quadratic_study, quiet_mirror, report_all};

#[test]
fn no_best_writes_without_a_completed_trial() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("s", vec![Direction::Minimize]);
    let failed = FrozenTrial::new(0, TrialState::Failed);
    study.trials.push(failed.clone());

    mirror.report_trial(&study, &failed).unwrap();

    assert!(sink.paths().iter().all(|p| !p.starts_with("best/")));
}

#[test]
fn best_reflects_the_minimum_after_each_trial() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let study = quadratic_study(&[(3.0, 9.0), (1.0, 1.0), (2.0, 4.0), (0.5, 0.25), (4.0, 16.0)]);

    report_all(&mirror, &study);

    assert_eq!(sink.series_len("trials/values"), 5);
    assert_eq!(sink.value("best/value"), Some(json!(0.25)));
    assert_eq!(sink.value("best/params"), Some(json!({ "x": 0.5 })));
    assert!(sink.contains("best/trials/3/value"));
    assert_eq!(
        sink.value("best/value|params"),
        Some(json!("value: 0.25| params: {\"x\":0.5}"))
    );
}

#[test]
fn best_respects_maximize_direction() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("s", vec![Direction::Maximize]);
    study.trials.push(complete_trial(0, 1.0, 0.3));
    study.trials.push(complete_trial(1, 2.0, 0.9));
    study.trials.push(complete_trial(2, 3.0, 0.6));

    report_all(&mirror, &study);

    assert_eq!(sink.value("best/value"), Some(json!(0.9)));
    assert_eq!(sink.value("best/params"), Some(json!({ "x": 2.0 })));
}

#[test]
fn best_is_mirrored_even_when_the_reported_trial_is_worse() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("s", vec![Direction::Minimize]);
    study.trials.push(complete_trial(0, 1.0, 1.0));
    mirror.report_trial(&study, &study.trials[0].clone()).unwrap();

    study.trials.push(complete_trial(1, 5.0, 25.0));
    mirror.report_trial(&study, &study.trials[1].clone()).unwrap();

    // The best record still points at trial 0.
    assert_eq!(sink.value("best/value"), Some(json!(1.0)));
    assert!(sink.contains("best/trials/0/value"));
}

#[test]
fn multi_objective_best_is_the_pareto_set() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("s", vec![Direction::Minimize, Direction::Minimize]);
    study.trials.push(multi_trial(0, &[1.0, 5.0]));
    study.trials.push(multi_trial(1, &[5.0, 1.0]));
    study.trials.push(multi_trial(2, &[6.0, 6.0])); // dominated

    report_all(&mirror, &study);

    assert!(sink.contains("best/trials/0/values"));
    assert!(sink.contains("best/trials/1/values"));
    assert!(!sink.contains("best/trials/2/values"));
    // No scalar best value exists in multi mode.
    assert!(!sink.contains("best/value"));
    assert!(sink.contains("best/values/objective_0"));
}
