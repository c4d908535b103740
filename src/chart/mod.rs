//! Renderer-independent bar chart model
//!
//! A [`BarChart`] holds one bar per benchmark result: a label, a value (the
//! mean) and an error (the standard deviation). Both the image writer and the
//! terminal viewer draw from it, so they agree on labels and ordering.

use crate::error::{PlotError, Result};
use crate::results::BenchmarkDocument;

/// Horizontal axis description
pub const TIME_AXIS_DESC: &str = "Time (s)";

/// Headroom past the longest error bar
const AXIS_HEADROOM: f64 = 1.05;

/// Settings derived from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    /// Chart title
    pub title: Option<String>,
    /// Explicit labels, positionally matched to results
    pub labels: Option<Vec<String>>,
    /// Image path; `None` opens the interactive viewer
    pub output: Option<std::path::PathBuf>,
}

/// Split a comma-separated label override
///
/// Every comma starts a new label and labels are kept verbatim. An empty
/// string means no override.
pub fn parse_labels(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.split(',').map(str::to_string).collect())
    }
}

/// One bar of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub error: f64,
}

impl Bar {
    /// Lower end of the error bar, clamped at zero
    pub fn error_low(&self) -> f64 {
        (self.value - self.error).max(0.0)
    }

    /// Upper end of the error bar
    pub fn error_high(&self) -> f64 {
        self.value + self.error
    }
}

/// Horizontal bar chart with error bars
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: Option<String>,
    bars: Vec<Bar>,
}

impl BarChart {
    /// Build a chart from a results document
    ///
    /// Labels come from `labels` when given, otherwise from each result's
    /// command. Fails if the label count differs from the result count or the
    /// document does not validate.
    pub fn from_document(
        document: &BenchmarkDocument,
        labels: Option<&[String]>,
        title: Option<&str>,
    ) -> Result<Self> {
        document.validate()?;

        let labels: Vec<String> = match labels {
            Some(labels) => {
                if labels.len() != document.len() {
                    return Err(PlotError::LabelCountMismatch {
                        labels: labels.len(),
                        results: document.len(),
                    });
                }
                labels.to_vec()
            }
            None => document.iter().map(|r| r.command.clone()).collect(),
        };

        let bars = document
            .iter()
            .zip(labels)
            .map(|(result, label)| Bar {
                label,
                value: result.mean,
                error: result.stddev,
            })
            .collect();

        Ok(Self {
            title: title.map(str::to_string),
            bars,
        })
    }

    /// Chart title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Bars in document order
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }

    pub fn errors(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.error).collect()
    }

    /// Vertical slot of the bar at `index`, counted from the bottom
    ///
    /// The axis is inverted: the first result sits in the top slot.
    /// `None` when `index` is past the last bar.
    pub fn slot(&self, index: usize) -> Option<usize> {
        self.bars.len().checked_sub(index)?.checked_sub(1)
    }

    /// Bars paired with their vertical slot, in document order
    pub fn slotted(&self) -> impl Iterator<Item = (usize, &Bar)> {
        let n = self.bars.len();
        self.bars
            .iter()
            .enumerate()
            .map(move |(idx, bar)| (n - 1 - idx, bar))
    }

    /// Bars from top to bottom as they appear on screen
    pub fn top_to_bottom(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Label at a vertical slot, counted from the bottom
    pub fn label_at_slot(&self, slot: usize) -> Option<&str> {
        self.slot(slot)
            .and_then(|idx| self.bars.get(idx))
            .map(|b| b.label.as_str())
    }

    /// Upper bound of the time axis
    pub fn x_max(&self) -> f64 {
        let max = self
            .bars
            .iter()
            .map(Bar::error_high)
            .fold(0.0_f64, f64::max);

        if max > 0.0 {
            max * AXIS_HEADROOM
        } else {
            1.0
        }
    }

    /// Length in characters of the longest label
    pub fn longest_label(&self) -> usize {
        self.bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0)
    }
}
