#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Mirror the state of a hyperparameter-optimization study — trials,
//! parameters, objective values, charts, and the study object itself — into
//! an experiment-tracking run, modeled as a hierarchical key-value write
//! sink. The crate is pure glue: it reads a frozen study/trial snapshot and
//! projects a deterministic set of key paths into a namespaced sink, once
//! per completed trial and/or in a trailing batch call.
//!
//! # Getting Started
//!
//! ```
//! use std::sync::Arc;
//!
//! use study_mirror::prelude::*;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let mirror = StudyMirror::builder(Arc::clone(&sink) as Arc<dyn MirrorSink>)
//!     .build()
//!     .unwrap();
//!
//! let mut study = Study::new("quadratic", vec![Direction::Minimize]);
//! let mut trial = FrozenTrial::new(0, TrialState::Complete);
//! trial.params.insert("x".into(), ParamValue::Float(0.5));
//! trial.values = vec![0.25];
//! study.trials.push(trial.clone());
//!
//! mirror.report_trial(&study, &trial).unwrap();
//! assert_eq!(sink.series_len("trials/values"), 1);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`StudyMirror`] | Project a study snapshot into the sink, per trial or in batch. |
//! | [`Study`] | Read-only study snapshot: directions, attributes, storage, trials. |
//! | [`FrozenTrial`] | One finalized evaluation: params, distributions, value(s), timing. |
//! | [`MirrorSink`](sink::MirrorSink) | The tracking-run write surface: assign, append, attach. |
//! | [`ChartRenderer`](visualization::ChartRenderer) | Plotting collaborator; [`PlotlyRenderer`](visualization::PlotlyRenderer) ships built in. |
//! | [`ObjectiveNames`](namespace::ObjectiveNames) | Resolved objective-index → display-name mapping. |
//!
//! # Key paths written
//!
//! | Prefix | Content |
//! |--------|---------|
//! | `trials/*` | Per-trial records plus cross-trial value/param series |
//! | `best/*` | The best trial (single-objective) or Pareto set (multi) |
//! | `study/*` | Name, direction(s), attributes, storage descriptor, snapshot |
//! | `visualizations/*` | Rendered chart artifacts, per objective when multi |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at mirroring points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod config;
mod distribution;
mod error;
mod importance;
mod mirror;
pub mod namespace;
mod param;
mod pareto;
pub mod sink;
mod storage;
mod study;
mod trial;
mod types;
pub mod visualization;

pub use config::{ChartToggles, UpdateFreq, VisualizationBackend};
pub use distribution::{CategoricalDistribution, Distribution, FloatDistribution, IntDistribution};
pub use error::{Error, Result};
pub use mirror::{
    load_study_from_run, load_study_from_run_with, BatchOptions, MirrorBuilder, StudyLoader,
    StudyMirror,
};
pub use namespace::{resolve_objective_names, ObjectiveNames};
pub use param::ParamValue;
pub use sink::{Artifact, InMemorySink, MirrorSink, SeriesPoint};
pub use storage::StorageKind;
pub use study::Study;
pub use trial::{AttrValue, FrozenTrial};
pub use types::{Direction, TrialState};

/// Path written once at construction time to identify the integration.
pub const INTEGRATION_VERSION_KEY: &str = "source_code/integrations/study-mirror";

/// Convenient wildcard import for the most common types.
///
/// ```
/// use study_mirror::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ChartToggles, UpdateFreq, VisualizationBackend};
    pub use crate::distribution::{
        CategoricalDistribution, Distribution, FloatDistribution, IntDistribution,
    };
    pub use crate::error::{Error, Result};
    pub use crate::mirror::{
        load_study_from_run, load_study_from_run_with, BatchOptions, MirrorBuilder, StudyLoader,
        StudyMirror,
    };
    pub use crate::namespace::ObjectiveNames;
    pub use crate::param::ParamValue;
    pub use crate::sink::{Artifact, InMemorySink, MirrorSink};
    pub use crate::storage::StorageKind;
    pub use crate::study::Study;
    pub use crate::trial::{AttrValue, FrozenTrial};
    pub use crate::types::{Direction, TrialState};
    pub use crate::visualization::{ChartKind, ChartRenderer, PlotlyRenderer};
}
