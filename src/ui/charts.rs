//! Text rendering of the bar chart for the terminal viewer

use crate::chart::{Bar, BarChart};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const BAR: char = '█';
/// Part of the error bar that overlaps the bar itself
const WHISKER_INSIDE: char = '▓';
const WHISKER: char = '─';
const CAP: char = '┤';

/// Columns taken by the value annotation after each bar
pub const VALUE_COLUMNS: usize = 22;

/// Render one bar as a row of `width` cells, trailing blanks trimmed
///
/// `x_max` maps to the last cell. The error bar spans from `mean - stddev`
/// to `mean + stddev` and ends in a cap.
pub fn bar_row(bar: &Bar, x_max: f64, width: usize) -> String {
    if width == 0 || x_max <= 0.0 {
        return String::new();
    }

    let scale = |v: f64| (((v / x_max) * width as f64).round() as usize).min(width);
    let end = scale(bar.value);
    let low = scale(bar.error_low());
    let high = scale(bar.error_high());

    let mut cells = vec![' '; width];
    for cell in cells.iter_mut().take(end) {
        *cell = BAR;
    }

    if bar.error > 0.0 && high > low {
        for (idx, cell) in cells.iter_mut().enumerate().take(high).skip(low) {
            *cell = if idx < end { WHISKER_INSIDE } else { WHISKER };
        }
        cells[high - 1] = CAP;
    }

    cells.into_iter().collect::<String>().trim_end().to_string()
}

/// Render the whole chart, top bar first, followed by the time axis
pub fn chart_lines(chart: &BarChart, width: usize) -> Vec<Line<'static>> {
    let label_width = chart.longest_label();
    let bar_width = width.saturating_sub(label_width + 3 + VALUE_COLUMNS);
    let x_max = chart.x_max();

    let mut lines: Vec<Line<'static>> = chart
        .top_to_bottom()
        .map(|bar| {
            Line::from(vec![
                Span::styled(
                    format!("{:>w$} │ ", bar.label, w = label_width),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:<w$}", bar_row(bar, x_max, bar_width), w = bar_width),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    format!(" {:.3} ± {:.3}", bar.value, bar.error),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(Span::styled(
        format!("{:>w$} └{}", "", "─".repeat(bar_width + 1), w = label_width),
        Style::default().fg(Color::Gray),
    )));

    let max_tick = format!("{:.2}", x_max);
    lines.push(Line::from(Span::styled(
        format!(
            "{:>w$}   0{:>r$}",
            "",
            max_tick,
            w = label_width,
            r = bar_width.saturating_sub(1)
        ),
        Style::default().fg(Color::Gray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::BenchmarkDocument;

    fn bar(value: f64, error: f64) -> Bar {
        Bar {
            label: "cmd".to_string(),
            value,
            error,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_bar_row_with_error() {
        assert_eq!(bar_row(&bar(1.0, 0.2), 2.0, 20), "████████▓▓─┤");
    }

    #[test]
    fn test_bar_row_without_error() {
        assert_eq!(bar_row(&bar(1.0, 0.0), 2.0, 20), "██████████");
        assert_eq!(bar_row(&bar(0.0, 0.0), 2.0, 20), "");
    }

    #[test]
    fn test_bar_row_clamps_to_width() {
        let row = bar_row(&bar(2.0, 1.0), 2.0, 10);
        assert_eq!(row.chars().count(), 10);
        assert!(row.ends_with(CAP));
        assert_eq!(bar_row(&bar(1.0, 0.1), 2.0, 0), "");
    }

    #[test]
    fn test_chart_lines_top_to_bottom() {
        let doc: BenchmarkDocument = serde_json::from_str(
            r#"{"results":[{"command":"a","mean":1.0,"stddev":0.1},{"command":"b","mean":2.0,"stddev":0.2}]}"#,
        )
        .unwrap();
        let chart = BarChart::from_document(&doc, None, None).unwrap();
        let lines = chart_lines(&chart, 80);

        // two bars, the axis and its ticks
        assert_eq!(lines.len(), 4);
        assert!(line_text(&lines[0]).starts_with("a │ "));
        assert!(line_text(&lines[1]).starts_with("b │ "));
        assert!(line_text(&lines[0]).ends_with("1.000 ± 0.100"));
        assert!(line_text(&lines[3]).trim_end().ends_with("2.31"));
    }
}
