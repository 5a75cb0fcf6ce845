//! Objective namespace resolution.
//!
//! Objective values are mirrored into series keyed by a human-readable
//! name per objective. The mapping is derived once per mirror instance and
//! cached for its lifetime; recomputing it mid-run would fragment series
//! across keys.

use crate::error::{Error, Result};

/// Sentinel name for single-objective studies without user-supplied names.
pub const SINGLE_OBJECTIVE_NAME: &str = "objective_value";

/// Resolved mapping from objective index to display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectiveNames {
    /// One objective, one name.
    Single(String),
    /// One name per objective, in direction order.
    Multi(Vec<String>),
}

impl ObjectiveNames {
    /// Number of objectives covered.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ObjectiveNames::Single(_) => 1,
            ObjectiveNames::Multi(names) => names.len(),
        }
    }

    /// Always false; resolution produces at least one name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for the multi-objective variant.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self, ObjectiveNames::Multi(_))
    }

    /// The name for objective `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; the resolved length always equals
    /// the study's direction count, so an out-of-range index is a bug in
    /// the caller.
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        match self {
            ObjectiveNames::Single(name) => {
                assert_eq!(index, 0, "single-objective namespace indexed at {index}");
                name
            }
            ObjectiveNames::Multi(names) => &names[index],
        }
    }

    /// All names in objective order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        match self {
            ObjectiveNames::Single(name) => vec![name.clone()],
            ObjectiveNames::Multi(names) => names.clone(),
        }
    }
}

/// Resolve the objective namespace for a study.
///
/// Pure function of the direction count and the optional user-supplied
/// names:
///
/// - names given: the length must equal `n_objectives`;
/// - no names, one objective: the sentinel `objective_value`;
/// - no names, k objectives: `objective_0` .. `objective_{k-1}`.
///
/// # Errors
///
/// Returns [`Error::TargetNamesLength`] when user-supplied names do not
/// match the objective count.
///
/// # Examples
///
/// ```
/// use study_mirror::{resolve_objective_names, ObjectiveNames};
///
/// let names = resolve_objective_names(2, None).unwrap();
/// assert_eq!(
///     names,
///     ObjectiveNames::Multi(vec!["objective_0".into(), "objective_1".into()])
/// );
///
/// assert!(resolve_objective_names(2, Some(&["flops".into()])).is_err());
/// ```
pub fn resolve_objective_names(
    n_objectives: usize,
    target_names: Option<&[String]>,
) -> Result<ObjectiveNames> {
    match target_names {
        Some(names) if names.len() != n_objectives => Err(Error::TargetNamesLength {
            expected: n_objectives,
            got: names.len(),
        }),
        Some(names) if n_objectives == 1 => Ok(ObjectiveNames::Single(names[0].clone())),
        Some(names) => Ok(ObjectiveNames::Multi(names.to_vec())),
        None if n_objectives == 1 => Ok(ObjectiveNames::Single(SINGLE_OBJECTIVE_NAME.to_owned())),
        None => Ok(ObjectiveNames::Multi(
            (0..n_objectives).map(|i| format!("objective_{i}")).collect(),
        )),
    }
}
