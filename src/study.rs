//! Read-only study snapshots consumed by the mirror.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pareto;
use crate::storage::StorageKind;
use crate::trial::{AttrValue, FrozenTrial};
use crate::types::{Direction, TrialState};

/// A read-only snapshot of an optimization study.
///
/// The optimizer mutates the study externally; the mirror treats the value
/// it is handed as frozen at call time. All fields are public because this
/// is a passive record.
///
/// # Examples
///
/// ```
/// use study_mirror::{Direction, FrozenTrial, Study, TrialState};
///
/// let mut study = Study::new("tune-lr", vec![Direction::Minimize]);
/// let mut trial = FrozenTrial::new(0, TrialState::Complete);
/// trial.values = vec![0.12];
/// study.trials.push(trial);
///
/// assert!(!study.is_multi_objective());
/// assert_eq!(study.best_trial().unwrap().id, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Study {
    /// Human-readable study name.
    pub study_name: String,
    /// One optimization direction per objective.
    pub directions: Vec<Direction>,
    /// Backend-assigned study id, when the storage layer exposes one.
    pub study_id: Option<u64>,
    /// User-defined study attributes.
    pub user_attrs: BTreeMap<String, AttrValue>,
    /// Attributes set by the optimization framework itself.
    pub system_attrs: BTreeMap<String, AttrValue>,
    /// Which storage backend the study lives in.
    pub storage: StorageKind,
    /// All trials observed so far, in creation order.
    pub trials: Vec<FrozenTrial>,
}

impl Study {
    /// Creates an empty in-memory study snapshot.
    #[must_use]
    pub fn new(study_name: impl Into<String>, directions: Vec<Direction>) -> Self {
        Self {
            study_name: study_name.into(),
            directions,
            study_id: None,
            user_attrs: BTreeMap::new(),
            system_attrs: BTreeMap::new(),
            storage: StorageKind::InMemory,
            trials: Vec::new(),
        }
    }

    /// Returns the number of objectives.
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.directions.len()
    }

    /// Returns `true` when the study has more than one objective.
    #[must_use]
    pub fn is_multi_objective(&self) -> bool {
        self.directions.len() > 1
    }

    /// Trials that completed successfully with a full set of objective
    /// values.
    #[must_use]
    pub fn complete_trials(&self) -> Vec<&FrozenTrial> {
        self.trials
            .iter()
            .filter(|t| t.state == TrialState::Complete && t.values.len() == self.directions.len())
            .collect()
    }

    /// Number of successfully completed trials.
    #[must_use]
    pub fn n_complete(&self) -> usize {
        self.complete_trials().len()
    }

    /// Number of trials that are complete or pruned.
    #[must_use]
    pub fn n_finished(&self) -> usize {
        self.trials
            .iter()
            .filter(|t| matches!(t.state, TrialState::Complete | TrialState::Pruned))
            .count()
    }

    /// Returns `true` when any trial has recorded a parameter.
    #[must_use]
    pub fn has_params(&self) -> bool {
        self.trials.iter().any(|t| !t.params.is_empty())
    }

    /// Returns `true` when any trial reported intermediate values.
    #[must_use]
    pub fn has_intermediate_values(&self) -> bool {
        self.trials.iter().any(|t| !t.intermediate_values.is_empty())
    }

    /// The trial with the best objective value, or `None` when no trial
    /// has completed successfully.
    ///
    /// Only meaningful for single-objective studies; for multi-objective
    /// studies use [`best_trials()`](Self::best_trials).
    #[must_use]
    pub fn best_trial(&self) -> Option<&FrozenTrial> {
        let direction = *self.directions.first()?;
        self.complete_trials()
            .into_iter()
            .max_by(|a, b| Self::compare_values(a.value(), b.value(), direction))
    }

    /// The best trial(s): the single best for single-objective studies, the
    /// Pareto-optimal set for multi-objective studies.
    ///
    /// Empty when no trial has completed successfully.
    #[must_use]
    pub fn best_trials(&self) -> Vec<&FrozenTrial> {
        if self.is_multi_objective() {
            let complete = self.complete_trials();
            let values: Vec<Vec<f64>> = complete.iter().map(|t| t.values.clone()).collect();
            pareto::non_dominated(&values, &self.directions)
                .into_iter()
                .map(|i| complete[i])
                .collect()
        } else {
            self.best_trial().into_iter().collect()
        }
    }

    /// Compare two optional objective values respecting the direction, for
    /// use with `max_by`. Incomparable values rank equal.
    fn compare_values(
        a: Option<f64>,
        b: Option<f64>,
        direction: Direction,
    ) -> core::cmp::Ordering {
        let ordering = a.partial_cmp(&b);
        match direction {
            Direction::Minimize => {
                ordering.map_or(core::cmp::Ordering::Equal, core::cmp::Ordering::reverse)
            }
            Direction::Maximize => ordering.unwrap_or(core::cmp::Ordering::Equal),
        }
    }
}
