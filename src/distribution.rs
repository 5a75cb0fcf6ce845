//! Parameter distribution descriptors.
//!
//! These mirror the sampling distributions the optimizer used for each
//! parameter. The mirror never samples from them; it only records them so
//! the tracking run documents the search space.

use serde::{Deserialize, Serialize};

/// Distribution for floating-point parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct FloatDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Whether the parameter was sampled in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<f64>,
}

/// Distribution for integer parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct IntDistribution {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
    /// Whether the parameter was sampled in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<i64>,
}

/// Distribution for categorical parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct CategoricalDistribution {
    /// Number of choices available.
    pub n_choices: usize,
}

/// Enum wrapping all parameter distribution types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Distribution {
    /// A floating-point distribution.
    Float(FloatDistribution),
    /// An integer distribution.
    Int(IntDistribution),
    /// A categorical distribution.
    Categorical(CategoricalDistribution),
}

impl Distribution {
    /// A uniform float distribution without log scale or step.
    #[must_use]
    pub fn float(low: f64, high: f64) -> Self {
        Distribution::Float(FloatDistribution {
            low,
            high,
            log_scale: false,
            step: None,
        })
    }

    /// A uniform integer distribution without log scale or step.
    #[must_use]
    pub fn int(low: i64, high: i64) -> Self {
        Distribution::Int(IntDistribution {
            low,
            high,
            log_scale: false,
            step: None,
        })
    }

    /// A categorical distribution over `n_choices` choices.
    #[must_use]
    pub fn categorical(n_choices: usize) -> Self {
        Distribution::Categorical(CategoricalDistribution { n_choices })
    }
}
