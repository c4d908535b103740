//! Benchmark results documents
//!
//! Reads the JSON export written by command-line benchmarking tools such as
//! hyperfine. Only `command`, `mean` and `stddev` are used; any other field is
//! ignored.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Timing statistics for one measured command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Command line or name of the benchmark
    pub command: String,
    /// Mean execution time in seconds
    pub mean: f64,
    /// Standard deviation in seconds; `null` for single-run benchmarks
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stddev: f64,
}

/// Ordered list of results, in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDocument {
    pub results: Vec<BenchmarkResult>,
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl BenchmarkDocument {
    /// Load a results document from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document: Self =
            serde_json::from_str(&content).map_err(|source| PlotError::DataFormat {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "Loaded {} benchmark results from {}",
            document.len(),
            path.display()
        );

        Ok(document)
    }

    /// Check that the document can be charted
    pub fn validate(&self) -> Result<()> {
        if self.results.is_empty() {
            return Err(PlotError::NoResults);
        }

        for result in &self.results {
            for (field, value) in [("mean", result.mean), ("stddev", result.stddev)] {
                if value < 0.0 {
                    return Err(PlotError::NegativeValue {
                        command: result.command.clone(),
                        field,
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    /// Get the number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the document has no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over results in document order
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter()
    }
}
