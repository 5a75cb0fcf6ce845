//! Study details and the study object/descriptor.

mod common;

use std::sync::Arc;

use serde_json::json;
use study_mirror::prelude::*;

use common::{complete_trial, multi_trial, quiet_mirror, report_all};

#[test]
fn details_are_written_on_the_first_trial_only() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("detailed", vec![Direction::Minimize]);
    study.user_attrs.insert("owner".into(), AttrValue::from("ml-team"));
    study.trials.push(complete_trial(0, 1.0, 1.0));

    report_all(&mirror, &study);

    assert_eq!(sink.value("study/study_name"), Some(json!("detailed")));
    assert_eq!(sink.value("study/direction"), Some(json!("Minimize")));
    assert_eq!(
        sink.value("study/user_attrs"),
        Some(json!({ "owner": "ml-team" }))
    );
    assert_eq!(sink.value("study/system_attrs"), Some(json!({})));

    // A later trial does not rewrite details.
    let mut study2 = Study::new("renamed", vec![Direction::Minimize]);
    study2.trials.push(complete_trial(0, 1.0, 1.0));
    study2.trials.push(complete_trial(1, 2.0, 4.0));
    mirror
        .report_trial(&study2, &study2.trials[1].clone())
        .unwrap();
    assert_eq!(sink.value("study/study_name"), Some(json!("detailed")));
}

#[test]
fn multi_objective_details_use_directions() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("s", vec![Direction::Minimize, Direction::Maximize]);
    study.trials.push(multi_trial(0, &[1.0, 2.0]));

    report_all(&mirror, &study);

    assert_eq!(
        sink.value("study/directions"),
        Some(json!(["Minimize", "Maximize"]))
    );
    assert!(!sink.contains("study/direction"));
}

#[test]
fn optional_introspection_fields() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = quiet_mirror(&sink);
    let mut study = Study::new("s", vec![Direction::Minimize]);
    study.study_id = Some(42);
    study.trials.push(complete_trial(0, 1.0, 1.0));

    report_all(&mirror, &study);

    assert_eq!(sink.value("study/study_id"), Some(json!(42)));
    assert_eq!(sink.value("study/storage"), Some(json!("InMemoryStorage")));

    let sink2 = Arc::new(InMemorySink::new());
    let mirror2 = quiet_mirror(&sink2);
    let mut anonymous = Study::new("s", vec![Direction::Minimize]);
    anonymous.storage = StorageKind::Unknown;
    anonymous.trials.push(complete_trial(0, 1.0, 1.0));
    report_all(&mirror2, &anonymous);
    assert!(!sink2.contains("study/study_id"));
    assert!(!sink2.contains("study/storage"));
}

#[test]
fn in_memory_study_object_is_a_snapshot_artifact() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
        .plots_update_freq(UpdateFreq::Never)
        .build()
        .unwrap();
    let mut study = Study::new("snapshotted", vec![Direction::Minimize]);
    study.trials.push(complete_trial(0, 1.0, 1.0));

    report_all(&mirror, &study);

    assert_eq!(
        sink.value("study/storage_type"),
        Some(json!("InMemoryStorage"))
    );
    let artifact = sink.artifact("study/study").unwrap();
    assert_eq!(artifact.file_name, "study.json");
    assert_eq!(artifact.media_type, "application/json");
    let decoded: Study = serde_json::from_slice(&artifact.bytes).unwrap();
    assert_eq!(decoded, study);
    assert!(!sink.contains("study/storage_url"));
}

#[test]
fn database_study_object_is_a_descriptor() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
        .plots_update_freq(UpdateFreq::Never)
        .build()
        .unwrap();
    let mut study = Study::new("remote", vec![Direction::Minimize]);
    study.storage = StorageKind::Rdb {
        url: "postgresql://db/studies".into(),
    };
    study.trials.push(complete_trial(0, 1.0, 1.0));

    report_all(&mirror, &study);

    assert_eq!(sink.value("study/storage_type"), Some(json!("RDBStorage")));
    assert_eq!(
        sink.value("study/storage_url"),
        Some(json!("postgresql://db/studies"))
    );
    assert!(!sink.contains("study/study"));
}

#[test]
fn cached_rdb_storage_resolves_to_rdb() {
    let kind = StorageKind::RdbCached {
        url: "mysql://db/studies".into(),
    };
    assert_eq!(kind.descriptor(), ("RDBStorage", Some("mysql://db/studies")));
}

#[test]
fn unknown_storage_gets_placeholder_url() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
        .plots_update_freq(UpdateFreq::Never)
        .build()
        .unwrap();
    let mut study = Study::new("odd", vec![Direction::Minimize]);
    study.storage = StorageKind::Unknown;
    study.trials.push(complete_trial(0, 1.0, 1.0));

    report_all(&mirror, &study);

    assert_eq!(
        sink.value("study/storage_type"),
        Some(json!("unknown storage type"))
    );
    assert_eq!(
        sink.value("study/storage_url"),
        Some(json!("unknown storage url"))
    );
}

#[test]
fn snapshot_cadence_follows_study_update_freq() {
    let sink = Arc::new(InMemorySink::new());
    let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
        .plots_update_freq(UpdateFreq::Never)
        .study_update_freq(UpdateFreq::Every(2))
        .build()
        .unwrap();
    let mut study = Study::new("s", vec![Direction::Minimize]);
    study.trials.push(complete_trial(1, 1.0, 1.0));

    // Trial id 1 is off-cadence for Every(2).
    mirror
        .report_trial(&study, &study.trials[0].clone())
        .unwrap();
    assert!(!sink.contains("study/storage_type"));

    study.trials.push(complete_trial(2, 2.0, 4.0));
    mirror
        .report_trial(&study, &study.trials[1].clone())
        .unwrap();
    assert!(sink.contains("study/storage_type"));
}
