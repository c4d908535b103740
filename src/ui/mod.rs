//! Interactive terminal viewer for benchmark charts
//!
//! Takes over the terminal (raw mode, alternate screen) and shows the chart
//! until the user presses `q` or `Esc`.

mod charts;
mod events;
mod viewer;

pub use charts::{bar_row, chart_lines};
pub use events::EventHandler;
pub use viewer::Viewer;

use crate::chart::BarChart;
use crate::error::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Show the chart and block until it is dismissed
pub fn show(chart: &BarChart) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err.into());
        }
    };

    tracing::debug!("Viewer opened for {} bars", chart.len());
    let outcome = event_loop(&mut terminal, chart);

    // Restore the terminal whatever the loop returned
    let restored = restore(terminal.backend_mut(), disable_raw_mode);

    outcome?;
    restored.map_err(Into::into)
}

/// Undo raw mode, the alternate screen and the hidden cursor
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore<W, F>(out: &mut W, disable_raw: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen);
    let cursor = execute!(out, Show);

    raw.and(screen).and(cursor)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, chart: &BarChart) -> Result<()> {
    let viewer = Viewer::new(chart);
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| viewer.render(f))?;

        if events.should_quit()? {
            return Ok(());
        }
    }
}
