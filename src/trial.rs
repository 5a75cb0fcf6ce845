//! Frozen trial records consumed by the mirror.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::param::ParamValue;
use crate::types::TrialState;

/// A user-defined attribute value attached to a trial or study.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// An integer attribute.
    ///
    /// Declared before `Float` so an integer JSON number deserializes
    /// back as `Int` instead of being absorbed by `f64`.
    Int(i64),
    /// A floating-point attribute.
    Float(f64),
    /// A string attribute.
    String(String),
    /// A boolean attribute.
    Bool(bool),
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

/// A finalized trial as observed by the mirror.
///
/// Trials are created and finalized by the optimizer; the mirror only reads
/// them. All fields are public because this is a passive record, in the
/// same spirit as a completed-trial struct inside an optimizer.
///
/// `values` holds one entry per objective. An empty vector means the
/// objective value is absent (the trial is still running, or failed before
/// returning a value); the mirror skips value writes in that case but still
/// records the available metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct FrozenTrial {
    /// Unique identifier, monotonically assigned by the optimizer.
    pub id: u64,
    /// Terminal (or running) state of the trial.
    pub state: TrialState,
    /// Wallclock time the trial started, if recorded.
    pub datetime_start: Option<DateTime<Utc>>,
    /// Wallclock time the trial finished, if recorded.
    pub datetime_complete: Option<DateTime<Utc>>,
    /// Sampled parameter values, keyed by parameter name.
    pub params: BTreeMap<String, ParamValue>,
    /// Sampling distribution descriptors, keyed by parameter name.
    pub distributions: BTreeMap<String, Distribution>,
    /// Intermediate (step, value) pairs reported during the trial.
    pub intermediate_values: Vec<(u64, f64)>,
    /// Objective value(s); empty when absent.
    pub values: Vec<f64>,
    /// User-defined attributes stored during the trial.
    pub user_attrs: BTreeMap<String, AttrValue>,
}

impl FrozenTrial {
    /// Creates an empty trial record with the given id and state.
    ///
    /// # Examples
    ///
    /// ```
    /// use study_mirror::{FrozenTrial, TrialState};
    ///
    /// let trial = FrozenTrial::new(3, TrialState::Complete);
    /// assert_eq!(trial.id, 3);
    /// assert!(trial.value().is_none());
    /// ```
    #[must_use]
    pub fn new(id: u64, state: TrialState) -> Self {
        Self {
            id,
            state,
            datetime_start: None,
            datetime_complete: None,
            params: BTreeMap::new(),
            distributions: BTreeMap::new(),
            intermediate_values: Vec::new(),
            values: Vec::new(),
            user_attrs: BTreeMap::new(),
        }
    }

    /// The single-objective value, if present.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// The objective value at `index`, if present.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Wallclock duration derived from the start/complete timestamps.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.datetime_start, self.datetime_complete) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Returns `true` when the trial reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}
