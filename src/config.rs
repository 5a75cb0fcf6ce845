//! Mirror configuration surface.

use core::str::FromStr;

use crate::error::Error;

/// How often a recurring write (charts, study snapshot) happens.
///
/// `Every(k)` fires on trials whose id is divisible by `k`; `Never`
/// disables the write entirely.
///
/// # Examples
///
/// ```
/// use study_mirror::UpdateFreq;
///
/// assert_eq!("5".parse::<UpdateFreq>().unwrap(), UpdateFreq::Every(5));
/// assert_eq!("never".parse::<UpdateFreq>().unwrap(), UpdateFreq::Never);
/// assert!("0".parse::<UpdateFreq>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateFreq {
    /// Fire every `k` trials (on trial ids divisible by `k`).
    Every(u64),
    /// Never fire.
    Never,
}

impl UpdateFreq {
    /// Returns `true` when the write is due for the given trial id.
    #[must_use]
    pub fn due(self, trial_id: u64) -> bool {
        match self {
            UpdateFreq::Every(k) => trial_id % k == 0,
            UpdateFreq::Never => false,
        }
    }
}

impl Default for UpdateFreq {
    fn default() -> Self {
        UpdateFreq::Every(1)
    }
}

impl FromStr for UpdateFreq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "never" {
            return Ok(UpdateFreq::Never);
        }
        match s.parse::<u64>() {
            Ok(k) if k > 0 => Ok(UpdateFreq::Every(k)),
            _ => Err(Error::InvalidUpdateFreq(s.to_owned())),
        }
    }
}

/// Which plotting backend renders chart exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualizationBackend {
    /// Interactive Plotly.js HTML pages (the built-in renderer).
    Plotly,
    /// Static matplotlib-style charts. No renderer ships with the crate;
    /// selecting this requires injecting one via
    /// [`MirrorBuilder::renderer`](crate::MirrorBuilder::renderer).
    Matplotlib,
}

impl VisualizationBackend {
    /// The configuration string for this backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VisualizationBackend::Plotly => "plotly",
            VisualizationBackend::Matplotlib => "matplotlib",
        }
    }
}

impl Default for VisualizationBackend {
    fn default() -> Self {
        VisualizationBackend::Plotly
    }
}

impl FromStr for VisualizationBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plotly" => Ok(VisualizationBackend::Plotly),
            "matplotlib" => Ok(VisualizationBackend::Matplotlib),
            other => Err(Error::UnrecognizedBackend(other.to_owned())),
        }
    }
}

/// Per-chart on/off switches for chart export. All default to enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChartToggles {
    /// Pairwise parameter contour maps.
    pub contour: bool,
    /// Empirical distribution function of objective values.
    pub edf: bool,
    /// Parallel-coordinate view of parameters and objective.
    pub parallel_coordinate: bool,
    /// Parameter importance bars.
    pub param_importances: bool,
    /// Pareto front (multi-objective only).
    pub pareto_front: bool,
    /// Per-parameter slice plots.
    pub slice: bool,
    /// Per-trial intermediate-value curves.
    pub intermediate_values: bool,
    /// Objective value vs trial number with best-so-far line.
    pub optimization_history: bool,
}

impl Default for ChartToggles {
    fn default() -> Self {
        Self {
            contour: true,
            edf: true,
            parallel_coordinate: true,
            param_importances: true,
            pareto_front: true,
            slice: true,
            intermediate_values: true,
            optimization_history: true,
        }
    }
}
