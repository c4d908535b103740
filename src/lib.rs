//! bench-plot - benchmark results as a horizontal bar chart
//!
//! Reads the JSON export of a command benchmarking run and draws one bar per
//! command: the bar length is the mean time, the error bar the standard
//! deviation. The chart is written to an image file or shown in an
//! interactive terminal viewer.
//!
//! # Architecture
//!
//! - **Results**: loading `{"results": [...]}` documents
//! - **Chart**: labels, values and errors in display order
//! - **Visualization**: PNG/JPEG/BMP/SVG output via plotters
//! - **UI**: full-screen terminal viewer
//!
//! # Example
//!
//! ```rust,no_run
//! use bench_plot::chart::BarChart;
//! use bench_plot::results::BenchmarkDocument;
//! use bench_plot::visualization::BarPlotter;
//! use std::path::Path;
//!
//! fn main() -> bench_plot::error::Result<()> {
//!     let document = BenchmarkDocument::from_file(Path::new("results.json"))?;
//!     let chart = BarChart::from_document(&document, None, Some("Startup time"))?;
//!     BarPlotter::plot(&chart, Path::new("chart.png"))?;
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod cli;
pub mod error;
pub mod results;
pub mod ui;
pub mod visualization;

pub use chart::{BarChart, RenderConfig};
pub use error::{ErrorKind, PlotError};
pub use results::{BenchmarkDocument, BenchmarkResult};
pub use visualization::BarPlotter;
