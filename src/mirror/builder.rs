//! Mirror configuration and construction.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::config::{ChartToggles, UpdateFreq, VisualizationBackend};
use crate::error::{Error, Result};
use crate::sink::MirrorSink;
use crate::visualization::{ChartRenderer, PlotlyRenderer};
use crate::INTEGRATION_VERSION_KEY;

use super::StudyMirror;

/// Builder for [`StudyMirror`].
///
/// Obtained from [`StudyMirror::builder`]; every setting has a default, so
/// `build()` can be called immediately.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use study_mirror::prelude::*;
///
/// let sink: Arc<dyn MirrorSink> = Arc::new(InMemorySink::new());
/// let mirror = StudyMirror::builder(sink)
///     .plots_update_freq(UpdateFreq::Every(5))
///     .target_names(vec!["latency_ms".into()])
///     .build()
///     .unwrap();
/// # let _ = mirror;
/// ```
#[allow(clippy::module_name_repetitions)]
pub struct MirrorBuilder {
    sink: Arc<dyn MirrorSink>,
    base_namespace: String,
    plots_update_freq: UpdateFreq,
    study_update_freq: UpdateFreq,
    visualization_backend: VisualizationBackend,
    toggles: ChartToggles,
    target_names: Option<Vec<String>>,
    renderer: Option<Arc<dyn ChartRenderer>>,
}

impl MirrorBuilder {
    pub(super) fn new(sink: Arc<dyn MirrorSink>) -> Self {
        Self {
            sink,
            base_namespace: String::new(),
            plots_update_freq: UpdateFreq::default(),
            study_update_freq: UpdateFreq::default(),
            visualization_backend: VisualizationBackend::default(),
            toggles: ChartToggles::default(),
            target_names: None,
            renderer: None,
        }
    }

    /// Prefix every written path with `namespace`. Default is no prefix.
    #[must_use]
    pub fn base_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.base_namespace = namespace.into().trim_matches('/').to_owned();
        self
    }

    /// How often charts are re-rendered. Default is every trial.
    #[must_use]
    pub fn plots_update_freq(mut self, freq: UpdateFreq) -> Self {
        self.plots_update_freq = freq;
        self
    }

    /// How often the study object/descriptor is re-written. Default is
    /// every trial.
    #[must_use]
    pub fn study_update_freq(mut self, freq: UpdateFreq) -> Self {
        self.study_update_freq = freq;
        self
    }

    /// Which plotting backend `build()` resolves a renderer for. Default
    /// is Plotly.
    #[must_use]
    pub fn visualization_backend(mut self, backend: VisualizationBackend) -> Self {
        self.visualization_backend = backend;
        self
    }

    /// Replace all chart toggles at once.
    #[must_use]
    pub fn chart_toggles(mut self, toggles: ChartToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Toggle the contour chart.
    #[must_use]
    pub fn log_plot_contour(mut self, enabled: bool) -> Self {
        self.toggles.contour = enabled;
        self
    }

    /// Toggle the EDF chart.
    #[must_use]
    pub fn log_plot_edf(mut self, enabled: bool) -> Self {
        self.toggles.edf = enabled;
        self
    }

    /// Toggle the parallel-coordinates chart.
    #[must_use]
    pub fn log_plot_parallel_coordinate(mut self, enabled: bool) -> Self {
        self.toggles.parallel_coordinate = enabled;
        self
    }

    /// Toggle the parameter-importance chart.
    #[must_use]
    pub fn log_plot_param_importances(mut self, enabled: bool) -> Self {
        self.toggles.param_importances = enabled;
        self
    }

    /// Toggle the Pareto-front chart (multi-objective studies only).
    #[must_use]
    pub fn log_plot_pareto_front(mut self, enabled: bool) -> Self {
        self.toggles.pareto_front = enabled;
        self
    }

    /// Toggle the slice chart.
    #[must_use]
    pub fn log_plot_slice(mut self, enabled: bool) -> Self {
        self.toggles.slice = enabled;
        self
    }

    /// Toggle the intermediate-values chart.
    #[must_use]
    pub fn log_plot_intermediate_values(mut self, enabled: bool) -> Self {
        self.toggles.intermediate_values = enabled;
        self
    }

    /// Toggle the optimization-history chart.
    #[must_use]
    pub fn log_plot_optimization_history(mut self, enabled: bool) -> Self {
        self.toggles.optimization_history = enabled;
        self
    }

    /// Display names for the objectives, one per optimization direction.
    /// Validated against the study on first use.
    #[must_use]
    pub fn target_names(mut self, names: Vec<String>) -> Self {
        self.target_names = Some(names);
        self
    }

    /// Inject a custom chart renderer, overriding backend resolution.
    #[must_use]
    pub fn renderer(mut self, renderer: Arc<dyn ChartRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Validates the configuration, resolves the renderer, and records the
    /// integration version on the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUpdateFreq`] for a zero frequency,
    /// [`Error::RendererUnavailable`] when the matplotlib backend is
    /// selected without an injected renderer, and [`Error::Sink`] when the
    /// version write fails.
    pub fn build(self) -> Result<StudyMirror> {
        for freq in [self.plots_update_freq, self.study_update_freq] {
            if freq == UpdateFreq::Every(0) {
                return Err(Error::InvalidUpdateFreq("0".to_owned()));
            }
        }

        let renderer: Arc<dyn ChartRenderer> = match (self.renderer, self.visualization_backend) {
            (Some(renderer), _) => renderer,
            (None, VisualizationBackend::Plotly) => Arc::new(PlotlyRenderer),
            (None, VisualizationBackend::Matplotlib) => {
                return Err(Error::RendererUnavailable("matplotlib"));
            }
        };

        // The version marker sits outside the base namespace so one run
        // with several namespaced mirrors records it once.
        self.sink.assign(
            INTEGRATION_VERSION_KEY,
            Value::String(env!("CARGO_PKG_VERSION").to_owned()),
        )?;
        trace_debug!(namespace = %self.base_namespace, "mirror constructed");

        Ok(StudyMirror {
            sink: self.sink,
            base_namespace: self.base_namespace,
            plots_update_freq: self.plots_update_freq,
            study_update_freq: self.study_update_freq,
            toggles: self.toggles,
            renderer,
            target_names: self.target_names,
            names: RwLock::new(None),
        })
    }
}
