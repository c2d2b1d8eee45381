//! Slider rows: tooltip, track with handle, tickmarks and labels.
//!
//! Tickmarks and labels are projected onto the current track width at draw
//! time, so a resize never needs the core to regenerate them.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use slidekit_core::tickmarks::{LabelLayout, TickmarkPattern};

use crate::app::AppState;
use crate::theme;

const FILLED: char = '━';
const EMPTY: char = '─';
const HANDLE: char = '●';
const TICK: char = '┴';

pub fn render(f: &mut Frame, areas: &super::SliderAreas, app: &AppState) {
    let config = app.config();
    let track = areas.track;
    let column = handle_column(app.host.rendered_value, config.min, config.max, track);

    if app.host.tooltip_visible {
        let text = format!("{}", app.host.rendered_value);
        let line = centered_text(areas.tooltip, column, &text);
        f.render_widget(Paragraph::new(Span::styled(line, theme::neutral())), areas.tooltip);
    }

    let dragging = app.controller.is_dragging();
    f.render_widget(
        Paragraph::new(track_line(track, column, config.disabled, dragging)),
        track,
    );

    if let Some(pattern) = &app.host.tickmarks {
        let ticks = tick_line(pattern, areas.ticks.width);
        f.render_widget(Paragraph::new(Span::styled(ticks, theme::muted())), areas.ticks);
    }

    if let Some(layout) = &app.host.labels {
        let labels = label_line(areas.labels, track, layout);
        f.render_widget(Paragraph::new(Span::styled(labels, theme::secondary())), areas.labels);
    }
}

/// Column of the handle for `value` on `track`.
pub fn handle_column(value: f64, min: f64, max: f64, track: Rect) -> u16 {
    let span = max - min;
    let last = track.width.saturating_sub(1);
    if span <= 0.0 || last == 0 {
        return track.x;
    }
    let fraction = ((value - min) / span).clamp(0.0, 1.0);
    track.x + (fraction * f64::from(last)).round() as u16
}

fn track_line(track: Rect, column: u16, disabled: bool, dragging: bool) -> Line<'static> {
    let before = usize::from(column.saturating_sub(track.x));
    let after = usize::from(track.width).saturating_sub(before + 1);
    let fill = if disabled { theme::muted() } else { theme::accent() };
    Line::from(vec![
        Span::styled(FILLED.to_string().repeat(before), fill),
        Span::styled(HANDLE.to_string(), theme::handle(disabled, dragging)),
        Span::styled(EMPTY.to_string().repeat(after), theme::muted()),
    ])
}

/// One tick glyph per whole step, spread across `width` columns. Steps
/// finer than a column mark every column.
pub fn tick_line(pattern: &TickmarkPattern, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    if pattern.tick_count() >= f64::from(width - 1) {
        return TICK.to_string().repeat(usize::from(width));
    }
    let mut cells = vec![' '; usize::from(width)];
    for offset in pattern.tick_offsets(f64::from(width), 1.0) {
        let idx = offset.round() as usize;
        if let Some(cell) = cells.get_mut(idx) {
            *cell = TICK;
        }
    }
    cells.into_iter().collect()
}

/// Label texts centered under their marks. `row` may be wider than the
/// track; text falling outside `row` is clipped.
pub fn label_line(row: Rect, track: Rect, layout: &LabelLayout) -> String {
    let mut cells = vec![' '; usize::from(row.width)];
    let last = f64::from(track.width.saturating_sub(1));
    let spacing = if layout.number_of_labels > 0.0 {
        last / layout.number_of_labels
    } else {
        0.0
    };

    for (i, label) in layout.labels.iter().enumerate() {
        let center = f64::from(track.x) + (i as f64 * spacing).round() - f64::from(row.x);
        write_centered(&mut cells, center as i64, &label.text);
    }
    cells.into_iter().collect()
}

fn centered_text(row: Rect, column: u16, text: &str) -> String {
    let mut cells = vec![' '; usize::from(row.width)];
    let center = i64::from(column) - i64::from(row.x);
    write_centered(&mut cells, center, text);
    cells.into_iter().collect()
}

fn write_centered(cells: &mut [char], center: i64, text: &str) {
    let len = text.chars().count() as i64;
    let start = center - len / 2;
    for (k, ch) in text.chars().enumerate() {
        let pos = start + k as i64;
        if pos >= 0 {
            if let Some(cell) = cells.get_mut(pos as usize) {
                *cell = ch;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use slidekit_core::tickmarks::{label_layout, tickmark_pattern};
    use slidekit_core::SliderConfig;

    fn config(step: f64, label_interval: u32) -> SliderConfig {
        SliderConfig {
            max: 10.0,
            step,
            tickmarks: true,
            label_interval,
            ..SliderConfig::default()
        }
    }

    #[test]
    fn handle_spans_first_to_last_column() {
        let track = Rect::new(5, 0, 11, 1);
        assert_eq!(handle_column(0.0, 0.0, 10.0, track), 5);
        assert_eq!(handle_column(10.0, 0.0, 10.0, track), 15);
        assert_eq!(handle_column(5.0, 0.0, 10.0, track), 10);
    }

    #[test]
    fn handle_clamps_out_of_range_values() {
        let track = Rect::new(0, 0, 11, 1);
        assert_eq!(handle_column(-3.0, 0.0, 10.0, track), 0);
        assert_eq!(handle_column(30.0, 0.0, 10.0, track), 10);
    }

    #[test]
    fn ticks_land_on_every_step_column() {
        let pattern = tickmark_pattern(&config(1.0, 0)).unwrap();
        let line = tick_line(&pattern, 11);
        assert_eq!(line.chars().filter(|c| *c == TICK).count(), 11);
    }

    #[test]
    fn coarse_step_leaves_gaps() {
        let pattern = tickmark_pattern(&config(5.0, 0)).unwrap();
        let line: Vec<char> = tick_line(&pattern, 11).chars().collect();
        assert_eq!(line[0], TICK);
        assert_eq!(line[5], TICK);
        assert_eq!(line[10], TICK);
        assert_eq!(line[3], ' ');
    }

    #[test]
    fn sub_column_step_fills_every_column() {
        let pattern = tickmark_pattern(&config(1.0 / 1_048_576.0, 0)).unwrap();
        let line = tick_line(&pattern, 70);
        assert_eq!(line.chars().count(), 70);
        assert!(line.chars().all(|c| c == TICK));
    }

    #[test]
    fn labels_center_under_marks() {
        let layout = label_layout(&config(1.0, 5), 10.0).unwrap();
        let row = Rect::new(0, 0, 20, 1);
        let track = Rect::new(4, 0, 11, 1);
        let line: Vec<char> = label_line(row, track, &layout).chars().collect();

        assert_eq!(line[4], '0');
        assert_eq!(line[9], '5');
        // "10" centered on column 14 starts one column left.
        assert_eq!(line[13], '1');
        assert_eq!(line[14], '0');
    }

    #[test]
    fn labels_outside_row_are_clipped() {
        let layout = label_layout(&config(1.0, 5), 10.0).unwrap();
        let row = Rect::new(4, 0, 11, 1);
        let track = Rect::new(4, 0, 11, 1);
        let line = label_line(row, track, &layout);
        assert_eq!(line.chars().count(), 11);
    }

    #[test]
    fn tooltip_centers_on_handle() {
        let line: Vec<char> = centered_text(Rect::new(2, 0, 10, 1), 6, "25").chars().collect();
        assert_eq!(line[3], '2');
        assert_eq!(line[4], '5');
    }

    // ── Properties ───────────────────────────────────────────────────

    proptest! {
        #[test]
        fn handle_stays_on_track(
            value in -1e4..1e4_f64,
            x in 0u16..100,
            width in 1u16..300,
        ) {
            let track = Rect::new(x, 0, width, 1);
            let col = handle_column(value, 0.0, 50.0, track);
            prop_assert!(col >= track.x && col < track.x + track.width);
        }

        #[test]
        fn tick_line_matches_width(step in 1u32..20, width in 0u16..200) {
            let pattern = tickmark_pattern(&config(f64::from(step) / 2.0, 0)).unwrap();
            prop_assert_eq!(tick_line(&pattern, width).chars().count(), usize::from(width));
        }
    }
}
