//! Error types for bench-plot

use std::path::PathBuf;
use thiserror::Error;

/// Coarse category of a [`PlotError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file could not be read
    Io,
    /// Input is not a valid benchmark results document
    DataFormat,
    /// Input is well-formed but cannot be charted as given
    Validation,
    /// Drawing or writing the chart failed
    Render,
}

/// Library error type
#[derive(Error, Debug)]
pub enum PlotError {
    /// Failed to read the results file
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path of the results file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Results file is not valid JSON or lacks the expected structure
    #[error("invalid benchmark results in '{path}': {source}")]
    DataFormat {
        /// Path of the results file
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Label override does not line up with the results
    #[error("got {labels} labels for {results} benchmark results")]
    LabelCountMismatch {
        /// Number of labels supplied
        labels: usize,
        /// Number of results in the document
        results: usize,
    },

    /// A timing value is negative
    #[error("negative {field} ({value}) for command '{command}'")]
    NegativeValue {
        /// Command the value belongs to
        command: String,
        /// Field name (`mean` or `stddev`)
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// The results array is empty
    #[error("no benchmark results to plot")]
    NoResults,

    /// Output extension has no matching backend
    #[error("unsupported output format for '{path}' (expected png, jpg, jpeg, bmp or svg)")]
    UnsupportedFormat {
        /// Requested output path
        path: PathBuf,
    },

    /// Drawing backend failure
    #[error("failed to render chart: {0}")]
    Render(String),

    /// Terminal setup or drawing failure in the viewer
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl PlotError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::Io { .. } => ErrorKind::Io,
            PlotError::DataFormat { .. } => ErrorKind::DataFormat,
            PlotError::LabelCountMismatch { .. }
            | PlotError::NegativeValue { .. }
            | PlotError::NoResults => ErrorKind::Validation,
            PlotError::UnsupportedFormat { .. }
            | PlotError::Render(_)
            | PlotError::Terminal(_) => ErrorKind::Render,
        }
    }
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PlotError::Render(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlotError>;
