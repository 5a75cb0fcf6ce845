#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when `target_names` does not match the number of objectives.
    #[error(
        "target_names length mismatch: expected {expected} name(s), one per objective, got {got}"
    )]
    TargetNamesLength {
        /// The study's number of optimization directions.
        expected: usize,
        /// The number of user-supplied names.
        got: usize,
    },

    /// Returned when a visualization backend string is not recognized.
    #[error("unrecognized visualization backend '{0}': expected 'plotly' or 'matplotlib'")]
    UnrecognizedBackend(String),

    /// Returned when the selected backend has no chart renderer available.
    #[error("no chart renderer available for the '{0}' backend")]
    RendererUnavailable(&'static str),

    /// Returned when an update frequency is not a positive integer or "never".
    #[error("invalid update frequency '{0}': expected a positive integer or 'never'")]
    InvalidUpdateFreq(String),

    /// Returned when a sink write or read fails.
    #[error("sink error at '{path}': {reason}")]
    Sink {
        /// The key path the operation targeted.
        path: String,
        /// What went wrong, as reported by the sink.
        reason: String,
    },

    /// Returned when a previously mirrored study cannot be reconstructed.
    #[error("study reload failed: {0}")]
    Reload(String),

    /// Returned when chart rendering fails.
    #[error("chart rendering failed for {chart}: {reason}")]
    Render {
        /// The chart that failed to render.
        chart: &'static str,
        /// What went wrong.
        reason: String,
    },
}

impl Error {
    /// Shorthand for a [`Error::Sink`] with an owned path.
    #[must_use]
    pub fn sink(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Sink {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
