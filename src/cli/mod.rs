//! CLI argument parsing and command dispatch

use crate::chart::{parse_labels, BarChart, RenderConfig};
use crate::results::BenchmarkDocument;
use crate::ui;
use crate::visualization::BarPlotter;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Plot benchmark results as a horizontal bar chart with error bars
#[derive(Parser, Debug)]
#[command(name = "bench-plot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with benchmark results
    pub file: PathBuf,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,

    /// Comma-separated list of entries for the plot legend
    #[arg(long)]
    pub labels: Option<String>,

    /// Save image to the given filename
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings for the renderer
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            title: self.title.clone(),
            labels: self.labels.as_deref().and_then(parse_labels),
            output: self.output.clone(),
        }
    }

    /// Load the results, build the chart and hand it to the selected output
    pub fn run(&self) -> Result<()> {
        let config = self.render_config();

        let document = BenchmarkDocument::from_file(&self.file)?;
        let chart = BarChart::from_document(
            &document,
            config.labels.as_deref(),
            config.title.as_deref(),
        )
        .with_context(|| format!("Cannot plot results from: {}", self.file.display()))?;

        match config.output {
            Some(ref path) => {
                BarPlotter::plot(&chart, path)
                    .with_context(|| format!("Failed to write chart to: {}", path.display()))?;
                tracing::info!("Chart written to {}", path.display());
                println!("✓ Chart written to: {}", path.display());
            }
            None => {
                ui::show(&chart).context("Failed to display chart")?;
            }
        }

        Ok(())
    }
}
