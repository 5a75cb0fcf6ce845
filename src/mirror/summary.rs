//! Study-level details, snapshots, and the reload protocol.

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::sink::{Artifact, MirrorSink};
use crate::storage::{StorageKind, IN_MEMORY_TAG, UNKNOWN_URL};
use crate::study::Study;

use super::{to_json, StudyMirror};

/// Writes the one-time study description under `study/*`.
pub(super) fn log_study_details(mirror: &StudyMirror, study: &Study) -> Result<()> {
    trace_debug!(study = %study.study_name, "mirroring study details");
    mirror.sink.assign(
        &mirror.path("study/study_name"),
        Value::String(study.study_name.clone()),
    )?;

    if study.is_multi_objective() {
        let path = mirror.path("study/directions");
        let directions = to_json(&path, &study.directions)?;
        mirror.sink.assign(&path, directions)?;
    } else {
        let path = mirror.path("study/direction");
        let direction = to_json(&path, &study.directions.first())?;
        mirror.sink.assign(&path, direction)?;
    }

    for (key, attrs) in [
        ("study/user_attrs", &study.user_attrs),
        ("study/system_attrs", &study.system_attrs),
    ] {
        let path = mirror.path(key);
        let value = to_json(&path, attrs)?;
        mirror.sink.assign(&path, value)?;
    }

    // Introspection fields are best-effort: written when known, silently
    // omitted otherwise.
    if let Some(id) = study.study_id {
        mirror
            .sink
            .assign(&mirror.path("study/study_id"), json!(id))?;
    }
    if study.storage != StorageKind::Unknown {
        let (tag, _) = study.storage.descriptor();
        mirror
            .sink
            .assign(&mirror.path("study/storage"), Value::String(tag.to_owned()))?;
    }
    Ok(())
}

/// Records how to get the study back: a serialized snapshot for in-memory
/// storage, a storage descriptor otherwise.
pub(super) fn log_study_object(mirror: &StudyMirror, study: &Study) -> Result<()> {
    mirror.sink.assign(
        &mirror.path("study/study_name"),
        Value::String(study.study_name.clone()),
    )?;
    let (tag, url) = study.storage.descriptor();
    mirror.sink.assign(
        &mirror.path("study/storage_type"),
        Value::String(tag.to_owned()),
    )?;

    if study.storage.is_in_memory() {
        let path = mirror.path("study/study");
        let bytes =
            serde_json::to_vec(study).map_err(|e| Error::sink(path.as_str(), e.to_string()))?;
        mirror
            .sink
            .attach(&path, Artifact::json("study.json", bytes))?;
        trace_debug!(study = %study.study_name, "attached study snapshot");
    } else {
        mirror.sink.assign(
            &mirror.path("study/storage_url"),
            Value::String(url.unwrap_or(UNKNOWN_URL).to_owned()),
        )?;
    }
    Ok(())
}

/// Reconnects to externally stored studies during reload.
///
/// The mirror records only the storage descriptor for database-backed
/// studies; turning a `(study_name, storage_url)` pair back into a live
/// [`Study`] is backend-specific and supplied by the caller through this
/// trait.
pub trait StudyLoader {
    /// Loads the named study from the given storage URL.
    ///
    /// # Errors
    ///
    /// Implementations should return [`Error::Reload`] when the study
    /// cannot be reconstructed.
    fn load_study(&self, study_name: &str, storage_url: &str) -> Result<Study>;
}

/// Reconstructs a previously mirrored study from a run.
///
/// Only works for studies that used in-memory storage (mirrored as a
/// serialized snapshot). For database-backed studies use
/// [`load_study_from_run_with`] and supply a [`StudyLoader`].
///
/// # Errors
///
/// Returns [`Error::Reload`] when the run holds no mirrored study, the
/// snapshot cannot be deserialized, or the study used external storage.
pub fn load_study_from_run(sink: &dyn MirrorSink, base_namespace: &str) -> Result<Study> {
    load_impl(sink, base_namespace, None)
}

/// Reconstructs a previously mirrored study, delegating database-backed
/// storage to `loader`.
///
/// # Errors
///
/// Returns [`Error::Reload`] when the run holds no mirrored study or the
/// snapshot cannot be deserialized; loader failures propagate as-is.
pub fn load_study_from_run_with(
    sink: &dyn MirrorSink,
    base_namespace: &str,
    loader: &dyn StudyLoader,
) -> Result<Study> {
    load_impl(sink, base_namespace, Some(loader))
}

fn load_impl(
    sink: &dyn MirrorSink,
    base_namespace: &str,
    loader: Option<&dyn StudyLoader>,
) -> Result<Study> {
    let join = |rest: &str| {
        let base = base_namespace.trim_matches('/');
        if base.is_empty() {
            rest.to_owned()
        } else {
            format!("{base}/{rest}")
        }
    };
    let fetch_string = |rest: &str| -> Result<String> {
        let path = join(rest);
        let value = sink
            .fetch(&path)
            .map_err(|e| Error::Reload(e.to_string()))?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::Reload(format!("'{path}' is not a string")))
    };

    let storage_type = fetch_string("study/storage_type")?;
    trace_info!(%storage_type, "reloading study from run");

    if storage_type == IN_MEMORY_TAG {
        let path = join("study/study");
        let artifact = sink
            .fetch_artifact(&path)
            .map_err(|e| Error::Reload(e.to_string()))?;
        serde_json::from_slice(&artifact.bytes)
            .map_err(|e| Error::Reload(format!("study snapshot at '{path}': {e}")))
    } else {
        let loader = loader.ok_or_else(|| {
            Error::Reload(format!(
                "study uses '{storage_type}' storage; a StudyLoader is required"
            ))
        })?;
        let study_name = fetch_string("study/study_name")?;
        let storage_url = fetch_string("study/storage_url")?;
        loader.load_study(&study_name, &storage_url)
    }
}
