//! Event log pane — most recent `input` / `change` notifications first.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use slidekit_core::SliderEvent;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted())
        .title(format!(" events ({}) ", app.host.events.len()))
        .title_style(theme::secondary());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = app
        .host
        .events
        .iter()
        .rev()
        .take(usize::from(inner.height))
        .map(event_line)
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn event_line(event: &SliderEvent) -> Line<'static> {
    let style = if event.is_change() {
        theme::positive()
    } else {
        theme::neutral()
    };
    Line::from(Span::styled(format!(" {event}"), style))
}
