//! Batch export and builder validation.

mod common;

use std::sync::Arc;

use serde_json::json;
use study_mirror::prelude::*;
use study_mirror::INTEGRATION_VERSION_KEY;

use common::{quadratic_study, quiet_mirror};

#[test]
fn batch_defaults_replay_the_whole_study() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let study = quadratic_study(&[(1.0, 1.0), (2.0, 4.0), (0.5, 0.25)]);

    mirror
        .log_study_metadata(&study, BatchOptions::default())
        .unwrap();

    // All trials, best record, details, distributions, charts, snapshot.
    for id in 0..3 {
        assert!(sink.contains(&format!("trials/trials/{id}/value")));
    }
    assert_eq!(sink.value("best/value"), Some(json!(0.25)));
    assert_eq!(sink.value("study/study_name"), Some(json!("quadratic")));
    assert_eq!(sink.series_len("study/distributions"), 3);
    assert!(sink.contains("visualizations/plot_optimization_history"));
    assert!(sink.contains("study/study"));
}

#[test]
fn batch_charts_ignore_the_update_frequency() {
    // quiet_mirror sets both frequencies to Never; the batch call still
    // renders charts and the snapshot.
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let study = quadratic_study(&[(1.0, 1.0)]);

    mirror
        .log_study_metadata(&study, BatchOptions::default())
        .unwrap();

    assert!(sink.contains("visualizations/plot_optimization_history"));
    assert!(sink.contains("study/storage_type"));
}

#[test]
fn disabling_all_trials_keeps_the_best_record() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let study = quadratic_study(&[(1.0, 1.0), (0.5, 0.25)]);

    let options = BatchOptions {
        log_all_trials: false,
        ..BatchOptions::default()
    };
    mirror.log_study_metadata(&study, options).unwrap();

    assert!(!sink.contains("trials/trials/0/value"));
    assert!(sink.contains("best/trials/1/value"));
    assert_eq!(sink.value("best/value"), Some(json!(0.25)));
}

#[test]
fn disabling_distributions_and_study() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let study = quadratic_study(&[(1.0, 1.0)]);

    let options = BatchOptions {
        log_distributions: false,
        log_study: false,
        log_plots: false,
        ..BatchOptions::default()
    };
    mirror.log_study_metadata(&study, options).unwrap();

    assert_eq!(sink.series_len("study/distributions"), 0);
    assert!(!sink.contains("study/storage_type"));
    assert!(sink.paths().iter().all(|p| !p.starts_with("visualizations/")));
}

#[test]
fn builder_records_the_integration_version() {
    let sink = Arc::new(InMemorySink::new());
    let _mirror = quiet_mirror(&sink);
    assert_eq!(
        sink.value(INTEGRATION_VERSION_KEY),
        Some(json!(env!("CARGO_PKG_VERSION")))
    );
}

#[test]
fn zero_update_frequency_is_rejected() {
    let sink: Arc<dyn MirrorSink> = Arc::new(InMemorySink::new());
    let err = StudyMirror::builder(sink)
        .plots_update_freq(UpdateFreq::Every(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUpdateFreq(_)));
}

#[test]
fn update_freq_parses_from_strings() {
    assert_eq!("3".parse::<UpdateFreq>().unwrap(), UpdateFreq::Every(3));
    assert_eq!("never".parse::<UpdateFreq>().unwrap(), UpdateFreq::Never);
    assert!(matches!(
        "sometimes".parse::<UpdateFreq>(),
        Err(Error::InvalidUpdateFreq(_))
    ));
}

#[test]
fn backend_parses_from_strings() {
    assert_eq!(
        "plotly".parse::<VisualizationBackend>().unwrap(),
        VisualizationBackend::Plotly
    );
    assert!(matches!(
        "gnuplot".parse::<VisualizationBackend>(),
        Err(Error::UnrecognizedBackend(_))
    ));
}
