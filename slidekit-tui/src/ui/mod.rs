//! Top-level UI layout — slider frame, event log and status bar.

pub mod event_log;
pub mod slider;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Columns kept free on each side of the track so edge labels can center.
pub const TRACK_PADDING: u16 = 4;

/// Areas produced by one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderAreas {
    pub frame: Rect,
    pub header: Rect,
    pub tooltip: Rect,
    pub track: Rect,
    pub ticks: Rect,
    pub labels: Rect,
    pub log: Rect,
    pub status: Rect,
}

pub fn layout(area: Rect) -> SliderAreas {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let frame = chunks[0];
    let inner = Block::default().borders(Borders::ALL).inner(frame);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1),
            Constraint::Length(1), // tooltip
            Constraint::Length(1), // track
            Constraint::Length(1), // ticks
            Constraint::Length(1), // labels
            Constraint::Length(1),
            Constraint::Min(0), // log
        ])
        .split(inner);

    SliderAreas {
        frame,
        header: rows[0],
        tooltip: rows[2],
        track: inset(rows[3]),
        ticks: inset(rows[4]),
        labels: rows[5],
        log: rows[7],
        status: chunks[1],
    }
}

fn inset(row: Rect) -> Rect {
    let pad = TRACK_PADDING.min(row.width / 2);
    Rect {
        x: row.x + pad,
        width: row.width - 2 * pad,
        ..row
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, areas: &SliderAreas, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(!app.config().disabled))
        .title(" slidekit ")
        .title_style(theme::panel_title(!app.config().disabled))
        .style(theme::surface());
    f.render_widget(block, areas.frame);

    f.render_widget(Paragraph::new(header_line(app)), areas.header);
    slider::render(f, areas, app);
    event_log::render(f, areas.log, app);
    status_bar::render(f, areas.status, app);
}

fn header_line(app: &AppState) -> Line<'static> {
    let c = app.config();
    let step = if c.step == 0.0 {
        "continuous".to_string()
    } else {
        format!("step {}", c.step)
    };
    let mut spans = vec![
        Span::styled(format!(" {} .. {}", c.min, c.max), theme::text()),
        Span::styled(format!("  {step}"), theme::secondary()),
        Span::styled(format!("  value {}", app.value()), theme::accent()),
    ];
    if c.disabled {
        spans.push(Span::styled("  [disabled]", theme::muted()));
    }
    Line::from(spans)
}
