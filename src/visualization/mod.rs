//! Image output for benchmark charts

pub mod bar;

pub use bar::{BarPlotter, ChartLayout, OutputFormat};
