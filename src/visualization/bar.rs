//! Horizontal bar chart with error bars

use crate::chart::{BarChart, TIME_AXIS_DESC};
use crate::error::{PlotError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Canvas size in pixels
pub const CHART_SIZE: (u32, u32) = (1200, 800);

const LABEL_FONT_SIZE: f64 = 20.0;
const CAPTION_FONT_SIZE: f64 = 32.0;
const MARGIN: u32 = 15;
const X_LABEL_AREA: u32 = 50;
const MIN_Y_LABEL_AREA: u32 = 40;
/// Width kept for the bars when a long label widens the canvas
const MIN_PLOT_WIDTH: u32 = 600;
/// Average glyph width relative to font size for a sans-serif face
const GLYPH_WIDTH_RATIO: f64 = 0.6;
/// Fraction of a slot covered by a bar
const BAR_THICKNESS: f64 = 0.8;
/// Error bar cap height, as a fraction of a slot
const CAP_HEIGHT: f64 = 0.2;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Image encoding picked from the output extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG, JPEG or BMP through the bitmap backend
    Bitmap,
    /// SVG document
    Svg,
}

impl OutputFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("png" | "jpg" | "jpeg" | "bmp") => Ok(OutputFormat::Bitmap),
            Some("svg") => Ok(OutputFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Label areas sized to the chart's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub size: (u32, u32),
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl ChartLayout {
    /// Tight layout: the y label area fits the longest label
    ///
    /// The canvas grows wider when the labels would leave less than
    /// `MIN_PLOT_WIDTH` pixels for the bars.
    pub fn tight(chart: &BarChart) -> Self {
        let glyph = LABEL_FONT_SIZE * GLYPH_WIDTH_RATIO;
        let needed = (chart.longest_label() as f64 * glyph).ceil() as u32 + MARGIN;
        let y_label_area = needed.max(MIN_Y_LABEL_AREA);
        let width = CHART_SIZE.0.max(y_label_area + MIN_PLOT_WIDTH + 2 * MARGIN);

        Self {
            size: (width, CHART_SIZE.1),
            x_label_area: X_LABEL_AREA,
            y_label_area,
        }
    }
}

pub struct BarPlotter;

impl BarPlotter {
    /// Write the chart to `path`, encoded according to its extension
    pub fn plot(chart: &BarChart, path: &Path) -> Result<()> {
        let format = OutputFormat::from_path(path)?;
        let layout = ChartLayout::tight(chart);

        tracing::debug!(
            "Rendering {} bars as {:?} ({}x{}, label area {}px)",
            chart.len(),
            format,
            layout.size.0,
            layout.size.1,
            layout.y_label_area
        );

        match format {
            OutputFormat::Bitmap => {
                let root = BitMapBackend::new(path, layout.size).into_drawing_area();
                Self::draw(&root, chart, &layout)
            }
            OutputFormat::Svg => {
                let root = SVGBackend::new(path, layout.size).into_drawing_area();
                Self::draw(&root, chart, &layout)
            }
        }
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &BarChart,
        layout: &ChartLayout,
    ) -> Result<()> {
        root.fill(&WHITE)?;

        let n = chart.len();
        if n == 0 {
            return Err(PlotError::NoResults);
        }

        let mut builder = ChartBuilder::on(root);
        if let Some(title) = chart.title() {
            builder.caption(title, ("sans-serif", CAPTION_FONT_SIZE));
        }

        let mut ctx = builder
            .margin(MARGIN as i32)
            .x_label_area_size(layout.x_label_area as i32)
            .y_label_area_size(layout.y_label_area as i32)
            .build_cartesian_2d(
                0f64..chart.x_max(),
                -0.5f64..(n as f64 - 0.5),
            )?;

        let slot_label = |y: &f64| -> String {
            let slot = y.round();
            if slot < 0.0 || (y - slot).abs() > 1e-6 {
                return String::new();
            }
            chart
                .label_at_slot(slot as usize)
                .unwrap_or_default()
                .to_string()
        };

        ctx.configure_mesh()
            .disable_y_mesh()
            .x_desc(TIME_AXIS_DESC)
            .x_label_formatter(&|x| format!("{:.2}", x))
            // Enough ticks for a step of at most 1, so every slot gets its label
            .y_labels(2 * n + 2)
            .y_label_formatter(&slot_label)
            .label_style(("sans-serif", LABEL_FONT_SIZE))
            .draw()?;

        let half = BAR_THICKNESS / 2.0;
        ctx.draw_series(chart.slotted().map(|(slot, bar)| {
            let y = slot as f64;
            Rectangle::new([(0.0, y - half), (bar.value, y + half)], BAR_COLOR.filled())
        }))?;

        let cap = CAP_HEIGHT / 2.0;
        ctx.draw_series(
            chart
                .slotted()
                .filter(|(_, bar)| bar.error > 0.0)
                .flat_map(|(slot, bar)| {
                    let y = slot as f64;
                    let (low, high) = (bar.error_low(), bar.error_high());
                    [
                        vec![(low, y), (high, y)],
                        vec![(low, y - cap), (low, y + cap)],
                        vec![(high, y - cap), (high, y + cap)],
                    ]
                    .into_iter()
                    .map(|points| PathElement::new(points, BLACK.stroke_width(2)))
                }),
        )?;

        root.present()?;
        Ok(())
    }
}
