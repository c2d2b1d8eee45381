//! Input dispatch — keys toggle config, mouse drives the controller.
//!
//! Press routing is gated on `disabled` here, not in the controller.
//! Moves and releases are routed from anywhere on screen while the host
//! holds a capture, so a drag that leaves the track keeps tracking.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use slidekit_core::{PointerEvent, ValueType};

use crate::app::{AppState, LABEL_INTERVALS};
use crate::host::page_x;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.running = false,
        KeyCode::Esc => {
            if app.controller.cancel(&mut app.host) {
                app.set_warning("drag cancelled");
            }
        }
        KeyCode::Char('t') => toggle_tooltip(app),
        KeyCode::Char('d') => {
            app.host.config.disabled = !app.host.config.disabled;
            if app.host.config.disabled {
                app.set_status("slider disabled");
            } else {
                app.set_status("slider enabled");
            }
        }
        KeyCode::Char('m') => {
            app.host.config.tickmarks = !app.host.config.tickmarks;
            app.refresh_tickmarks();
        }
        KeyCode::Char('l') => cycle_label_interval(app),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let step = app.config().step;
            change_step(app, if step == 0.0 { 1.0 } else { step * 2.0 });
        }
        KeyCode::Char('-') => {
            let step = app.config().step / 2.0;
            if app.fits_track(step) {
                change_step(app, step);
            } else {
                app.set_warning(format!("step {step} is finer than the track"));
            }
        }
        KeyCode::Char('0') => change_step(app, 0.0),
        _ => {}
    }
}

fn toggle_tooltip(app: &mut AppState) {
    let show = !app.host.config.show_tooltip;
    app.host.config.show_tooltip = show;
    if show && app.hovering {
        app.controller.on_hover_enter(&mut app.host);
    } else if !show {
        app.host.tooltip_visible = false;
    }
}

fn cycle_label_interval(app: &mut AppState) {
    let current = app.host.config.label_interval;
    let idx = LABEL_INTERVALS.iter().position(|i| *i == current).unwrap_or(0);
    app.host.config.label_interval = LABEL_INTERVALS[(idx + 1) % LABEL_INTERVALS.len()];
    app.host.clear_labels();
    app.refresh_tickmarks();
    app.set_status(format!("label interval {}", app.host.config.label_interval));
}

fn change_step(app: &mut AppState, step: f64) {
    app.host.clear_tickmarks();
    let validation = app.controller.set_step(&mut app.host, step);
    if validation.corrected {
        app.set_warning(format!("invalid step, using {}", validation.step));
    } else if validation.step == 0.0 {
        app.set_status("continuous mode");
    } else {
        app.set_status(format!("step {}", validation.step));
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let on_track = app.host.hit(mouse.column, mouse.row);
    update_hover(app, on_track);

    let event = PointerEvent::mouse(page_x(mouse.column));
    let (min, max) = (app.host.config.min, app.host.config.max);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if on_track => {
            if app.host.config.disabled {
                return;
            }
            app.controller
                .on_press_start(&mut app.host, &event, ValueType::Single, min, max);
        }
        MouseEventKind::Drag(MouseButton::Left) if app.host.is_captured() => {
            app.controller
                .on_press_move(&mut app.host, &event, ValueType::Single, min, max);
        }
        MouseEventKind::Up(MouseButton::Left) if app.host.is_captured() => {
            if let Some(committed) = app.controller.on_press_end(&mut app.host) {
                app.set_status(format!("committed {}", committed.value()));
            }
        }
        _ => {}
    }
}

/// Terminal focus lost mid-drag: abandon the gesture.
pub fn handle_focus_lost(app: &mut AppState) {
    if app.controller.cancel(&mut app.host) {
        app.set_warning("drag cancelled (focus lost)");
    }
    update_hover(app, false);
}

fn update_hover(app: &mut AppState, on_track: bool) {
    if on_track == app.hovering {
        return;
    }
    app.hovering = on_track;
    if on_track {
        app.controller.on_hover_enter(&mut app.host);
    } else {
        app.controller.on_hover_leave(&mut app.host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use slidekit_core::{SliderConfig, SliderEvent};

    const TRACK_ROW: u16 = 4;

    fn app(config: SliderConfig) -> AppState {
        let mut app = AppState::new(config);
        // Columns 10..=60 map to 0..=50.
        app.host.set_track(Rect::new(10, TRACK_ROW, 51, 1));
        app
    }

    fn stepped() -> SliderConfig {
        SliderConfig {
            step: 5.0,
            show_tooltip: true,
            ..SliderConfig::default()
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_drag_release_commits_snapped_value() {
        let mut app = app(stepped());
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 32, TRACK_ROW));
        assert_eq!(app.value(), 20.0);
        assert!(app.host.is_captured());

        // Drag off the track to the right: keeps tracking, clipped to max.
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 90, TRACK_ROW + 3));
        assert_eq!(app.value(), 50.0);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 90, TRACK_ROW + 3));
        assert!(!app.host.is_captured());
        assert_eq!(
            app.host.events.back(),
            Some(&SliderEvent::Change {
                value: 50.0,
                value_type: ValueType::Single
            })
        );
    }

    #[test]
    fn press_off_track_is_ignored() {
        let mut app = app(stepped());
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 32, TRACK_ROW + 1));
        assert!(!app.controller.is_dragging());
        assert!(app.host.events.is_empty());
    }

    #[test]
    fn drag_without_capture_is_ignored() {
        let mut app = app(stepped());
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 32, TRACK_ROW));
        assert!(app.host.events.is_empty());
    }

    #[test]
    fn disabled_slider_ignores_press() {
        let mut app = app(stepped());
        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 32, TRACK_ROW));
        assert!(!app.controller.is_dragging());
        assert!(app.host.events.is_empty());
    }

    #[test]
    fn hover_shows_and_hides_tooltip() {
        let mut app = app(stepped());
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 20, TRACK_ROW));
        assert!(app.host.tooltip_visible);
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 20, TRACK_ROW + 2));
        assert!(!app.host.tooltip_visible);
    }

    #[test]
    fn escape_cancels_drag_without_change() {
        let mut app = app(stepped());
        app.set_value(10.0);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 42, TRACK_ROW));
        assert_eq!(app.value(), 30.0);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.value(), 10.0);
        assert!(!app.host.is_captured());
        assert!(app.host.events.iter().all(|e| !e.is_change()));
    }

    #[test]
    fn focus_lost_cancels_drag() {
        let mut app = app(stepped());
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 42, TRACK_ROW));
        handle_focus_lost(&mut app);
        assert!(!app.controller.is_dragging());
        assert_eq!(app.value(), 0.0);
        assert!(!app.hovering);
    }

    #[test]
    fn step_keys_double_and_halve() {
        let mut app = app(stepped());
        handle_key(&mut app, key(KeyCode::Char('+')));
        assert_eq!(app.config().step, 10.0);
        handle_key(&mut app, key(KeyCode::Char('-')));
        handle_key(&mut app, key(KeyCode::Char('-')));
        assert_eq!(app.config().step, 2.5);
        handle_key(&mut app, key(KeyCode::Char('0')));
        assert_eq!(app.config().step, 0.0);
        handle_key(&mut app, key(KeyCode::Char('+')));
        assert_eq!(app.config().step, 1.0);
    }

    #[test]
    fn halving_stops_at_one_tick_per_column() {
        let mut app = app(SliderConfig {
            tickmarks: true,
            label_interval: 1,
            ..SliderConfig::default()
        });
        // 50 steps of 1 over 50 columns: halving to 0.5 would double that.
        for _ in 0..20 {
            handle_key(&mut app, key(KeyCode::Char('-')));
        }
        assert_eq!(app.config().step, 1.0);
        assert!(matches!(app.status_message, Some((_, crate::app::StatusLevel::Warning))));
        assert!(app.host.labels.as_ref().map_or(0, |l| l.len()) <= 51);
    }

    #[test]
    fn label_key_cycles_intervals() {
        let mut app = app(SliderConfig {
            tickmarks: true,
            step: 5.0,
            ..SliderConfig::default()
        });
        handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.config().label_interval, 1);
        assert_eq!(app.host.labels.as_ref().map(|l| l.len()), Some(11));
        handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.host.labels.as_ref().map(|l| l.len()), Some(6));
    }

    #[test]
    fn q_stops_the_app() {
        let mut app = app(stepped());
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }
}
