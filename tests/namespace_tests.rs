//! Objective namespace resolution and caching.

mod common;

use std::sync::Arc;

use study_mirror::prelude::*;
use study_mirror::{resolve_objective_names, ObjectiveNames};

use common::{multi_trial, quiet_mirror};

#[test]
fn single_objective_default_name() {
    assert_eq!(
        resolve_objective_names(1, None).unwrap(),
        ObjectiveNames::Single("objective_value".into())
    );
}

#[test]
fn multi_objective_default_names_are_indexed() {
    assert_eq!(
        resolve_objective_names(3, None).unwrap(),
        ObjectiveNames::Multi(vec![
            "objective_0".into(),
            "objective_1".into(),
            "objective_2".into(),
        ])
    );
}

#[test]
fn user_names_are_used_verbatim() {
    let names = vec!["flops".to_owned(), "accuracy".to_owned()];
    assert_eq!(
        resolve_objective_names(2, Some(&names)).unwrap(),
        ObjectiveNames::Multi(names.clone())
    );
    assert_eq!(
        resolve_objective_names(1, Some(&["latency_ms".to_owned()])).unwrap(),
        ObjectiveNames::Single("latency_ms".into())
    );
}

#[test]
fn name_count_mismatch_is_fatal() {
    let err = resolve_objective_names(2, Some(&["only_one".to_owned()])).unwrap_err();
    assert!(matches!(
        err,
        Error::TargetNamesLength {
            expected: 2,
            got: 1
        }
    ));
}

#[test]
fn mismatch_surfaces_through_the_mirror() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
        .target_names(vec!["a".into(), "b".into()])
        .build()
        .unwrap();
    let mut study = Study::new("s", vec![Direction::Minimize]);
    let trial = multi_trial(0, &[1.0]);
    study.trials.push(trial.clone());

    assert!(matches!(
        mirror.report_trial(&study, &trial),
        Err(Error::TargetNamesLength { expected: 1, got: 2 })
    ));
}

#[test]
fn resolution_is_cached_for_the_mirror_lifetime() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);

    let mut two = Study::new("two", vec![Direction::Minimize, Direction::Minimize]);
    let trial = multi_trial(0, &[1.0, 2.0]);
    two.trials.push(trial.clone());
    mirror.report_trial(&two, &trial).unwrap();

    // A study with more objectives reported through the same mirror keeps
    // the original two-name mapping; no objective_2 series appears.
    let mut three = Study::new(
        "three",
        vec![
            Direction::Minimize,
            Direction::Minimize,
            Direction::Minimize,
        ],
    );
    let wide = multi_trial(1, &[1.0, 2.0, 3.0]);
    three.trials.push(wide.clone());
    mirror.report_trial(&three, &wide).unwrap();

    assert_eq!(sink.series_len("trials/values/objective_0"), 2);
    assert_eq!(sink.series_len("trials/values/objective_1"), 2);
    assert!(!sink.contains("trials/values/objective_2"));
}

#[test]
fn target_names_key_the_value_series() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
        .plots_update_freq(UpdateFreq::Never)
        .study_update_freq(UpdateFreq::Never)
        .target_names(vec!["flops".into(), "accuracy".into()])
        .build()
        .unwrap();
    let mut study = Study::new("s", vec![Direction::Minimize, Direction::Maximize]);
    let trial = multi_trial(0, &[12.0, 0.9]);
    study.trials.push(trial.clone());

    mirror.report_trial(&study, &trial).unwrap();

    assert_eq!(sink.series_len("trials/values/flops"), 1);
    assert_eq!(sink.series_len("trials/values/accuracy"), 1);
}
