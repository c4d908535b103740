//! Full-screen chart view

use super::charts::chart_lines;
use crate::chart::{BarChart, TIME_AXIS_DESC};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DEFAULT_TITLE: &str = "Benchmark results";

pub struct Viewer<'a> {
    chart: &'a BarChart,
}

impl<'a> Viewer<'a> {
    pub fn new(chart: &'a BarChart) -> Self {
        Self { chart }
    }

    pub fn render(&self, frame: &mut Frame) {
        let size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // chart
                Constraint::Length(3), // footer
            ])
            .split(size);

        // Borders take two columns
        let inner_width = chunks[0].width.saturating_sub(2) as usize;

        let mut lines = chart_lines(self.chart, inner_width);
        lines.push(Line::from(Span::styled(
            TIME_AXIS_DESC,
            Style::default().fg(Color::Gray),
        )).alignment(Alignment::Center));

        let title = self.chart.title().unwrap_or(DEFAULT_TITLE).to_string();
        let body = Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(body, chunks[0]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Press 'q' or 'ESC' to close", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::raw(format!("{} commands", self.chart.len())),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(footer, chunks[1]);
    }
}
