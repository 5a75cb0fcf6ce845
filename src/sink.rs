//! The tracking-run write surface.
//!
//! The [`MirrorSink`] trait defines how mirrored metadata reaches the
//! experiment-tracking backend. Every [`StudyMirror`](crate::StudyMirror)
//! owns an `Arc<dyn MirrorSink>` so the sink is transparently shared.
//!
//! # Write semantics
//!
//! | Operation | Semantics |
//! |-----------|-----------|
//! | [`assign`](MirrorSink::assign) | Overwrite a value at a path, last-write-wins |
//! | [`append`](MirrorSink::append) | Append to an ordered, optionally stepped series |
//! | [`attach`](MirrorSink::attach) | Store an artifact blob (HTML chart, study snapshot) |
//!
//! No read-modify-write exists; all mirror writes are fire-and-forget and
//! the sink owns its own buffering and retry. The two fetch methods are the
//! read-back half used only by the reload protocol; write-only backends may
//! return [`Error::Sink`] from them.
//!
//! # Implementing a custom sink
//!
//! Implement [`MirrorSink`] to forward writes to a real tracking backend.
//! Implementations must be `Send + Sync`; the mirror itself never writes a
//! path from two threads, but parallel optimizer workers may each hold a
//! mirror over the same sink (last-write-wins applies).

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{Error, Result};

/// A rendered or serialized artifact attached to the run.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    /// File name presented by the tracking backend.
    pub file_name: String,
    /// Media type of the content.
    pub media_type: String,
    /// Raw content.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// An HTML artifact (rendered chart).
    #[must_use]
    pub fn html(file_name: impl Into<String>, html: String) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: "text/html".to_owned(),
            bytes: html.into_bytes(),
        }
    }

    /// A JSON artifact (study snapshot blob).
    #[must_use]
    pub fn json(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: "application/json".to_owned(),
            bytes,
        }
    }
}

/// One appended point in a series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    /// Optional step index (the mirror uses trial ids for value series).
    pub step: Option<u64>,
    /// The appended value.
    pub value: Value,
}

/// Write-only hierarchical key-value sink; the experiment-tracking run.
#[allow(clippy::module_name_repetitions)]
pub trait MirrorSink: Send + Sync {
    /// Overwrite the value at `path` (last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when the write fails or `path` already
    /// holds a series or artifact.
    fn assign(&self, path: &str, value: Value) -> Result<()>;

    /// Append `value` to the series at `path`, optionally at a step index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when the write fails or `path` holds a
    /// non-series entry.
    fn append(&self, path: &str, value: Value, step: Option<u64>) -> Result<()>;

    /// Attach an artifact blob at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when the write fails or `path` holds a
    /// non-artifact entry.
    fn attach(&self, path: &str, artifact: Artifact) -> Result<()>;

    /// Read back the value at `path`. Only used by the reload protocol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when nothing is assigned at `path` or the
    /// backend cannot read.
    fn fetch(&self, path: &str) -> Result<Value>;

    /// Read back the artifact at `path`. Only used by the reload protocol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when no artifact lives at `path` or the
    /// backend cannot read.
    fn fetch_artifact(&self, path: &str) -> Result<Artifact>;
}

/// What lives at one path inside [`InMemorySink`].
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub enum SinkEntry {
    /// An assigned value.
    Value(Value),
    /// An appended series.
    Series(Vec<SeriesPoint>),
    /// An attached artifact.
    Artifact(Artifact),
}

/// In-memory sink (the default for tests and local inspection).
///
/// A `BTreeMap` of entries behind a read-write lock. Assigning over an
/// existing series (or any other kind mismatch) is an error, matching how
/// tracking backends reject type conflicts at a path.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct InMemorySink {
    entries: RwLock<BTreeMap<String, SinkEntry>>,
}

impl InMemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value assigned at `path`, if any.
    #[must_use]
    pub fn value(&self, path: &str) -> Option<Value> {
        match self.entries.read().get(path) {
            Some(SinkEntry::Value(v)) => Some(v.clone()),
            _ => None,
        }
    }

    /// The series at `path`, if any.
    #[must_use]
    pub fn series(&self, path: &str) -> Option<Vec<SeriesPoint>> {
        match self.entries.read().get(path) {
            Some(SinkEntry::Series(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Length of the series at `path` (0 when absent).
    #[must_use]
    pub fn series_len(&self, path: &str) -> usize {
        self.series(path).map_or(0, |s| s.len())
    }

    /// The artifact at `path`, if any.
    #[must_use]
    pub fn artifact(&self, path: &str) -> Option<Artifact> {
        match self.entries.read().get(path) {
            Some(SinkEntry::Artifact(a)) => Some(a.clone()),
            _ => None,
        }
    }

    /// All populated paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Returns `true` when anything lives at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.read().contains_key(path)
    }

    /// Number of populated paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl MirrorSink for InMemorySink {
    fn assign(&self, path: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.get_mut(path) {
            None | Some(SinkEntry::Value(_)) => {
                entries.insert(path.to_owned(), SinkEntry::Value(value));
                Ok(())
            }
            Some(_) => Err(Error::sink(path, "cannot assign over a non-value entry")),
        }
    }

    fn append(&self, path: &str, value: Value, step: Option<u64>) -> Result<()> {
        let mut entries = self.entries.write();
        match entries
            .entry(path.to_owned())
            .or_insert_with(|| SinkEntry::Series(Vec::new()))
        {
            SinkEntry::Series(series) => {
                series.push(SeriesPoint { step, value });
                Ok(())
            }
            _ => Err(Error::sink(path, "cannot append to a non-series entry")),
        }
    }

    fn attach(&self, path: &str, artifact: Artifact) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.get_mut(path) {
            None | Some(SinkEntry::Artifact(_)) => {
                entries.insert(path.to_owned(), SinkEntry::Artifact(artifact));
                Ok(())
            }
            Some(_) => Err(Error::sink(path, "cannot attach over a non-artifact entry")),
        }
    }

    fn fetch(&self, path: &str) -> Result<Value> {
        self.value(path)
            .ok_or_else(|| Error::sink(path, "no value at path"))
    }

    fn fetch_artifact(&self, path: &str) -> Result<Artifact> {
        self.artifact(path)
            .ok_or_else(|| Error::sink(path, "no artifact at path"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn assign_is_last_write_wins() {
        let sink = InMemorySink::new();
        sink.assign("a/b", json!(1)).unwrap();
        sink.assign("a/b", json!(2)).unwrap();
        assert_eq!(sink.value("a/b"), Some(json!(2)));
    }

    #[test]
    fn append_builds_a_series() {
        let sink = InMemorySink::new();
        sink.append("s", json!(0.5), Some(0)).unwrap();
        sink.append("s", json!(0.25), Some(1)).unwrap();
        let series = sink.series("s").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].step, Some(1));
    }

    #[test]
    fn kind_conflicts_are_errors() {
        let sink = InMemorySink::new();
        sink.append("s", json!(1), None).unwrap();
        assert!(sink.assign("s", json!(2)).is_err());
        assert!(sink
            .attach("s", Artifact::html("x.html", String::new()))
            .is_err());
    }
}
