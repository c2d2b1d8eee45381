//! Interaction controller — press/move/release lifecycle, hover tooltip,
//! step configuration, tickmark refresh.
//!
//! The controller owns the drag state and the committed values; everything
//! else comes from the host on each call. For every event the render and
//! the value mutation are applied before the notification is emitted, so an
//! observer reacting to `input`/`change` always sees consistent state.
//!
//! ```text
//!            press                    release / cancel
//!   Idle ─────────────▶ Dragging ───────────────────────▶ Idle
//!                        │    ▲
//!                        └────┘ move
//! ```

pub mod session;

pub use session::{DragState, InteractionSession};

use crate::config::{validate_step, StepCandidate, StepValidation};
use crate::domain::{CommittedValue, PointerEvent, SliderEvent, ValueType};
use crate::host::SliderHost;
use crate::mapper;
use crate::tickmarks;

/// Drives one slider widget.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: DragState,
    values: CommittedValue,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> CommittedValue {
        self.values
    }

    pub fn value(&self, value_type: ValueType) -> f64 {
        self.values.get(value_type)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.state.session()
    }

    // ── Drag lifecycle ────────────────────────────────────────────────

    /// Idle → Dragging. Captures the bounding box, computes the value under
    /// the pointer and subscribes to global move/release.
    ///
    /// The host routes presses here only when interaction is permitted; the
    /// `disabled` flag is not consulted. A press while a session is still
    /// active (a lost release) disposes the old capture first, so at most
    /// one capture is ever held.
    pub fn on_press_start<H: SliderHost>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
        value_type: ValueType,
        min: f64,
        max: f64,
    ) -> f64 {
        if let Some(stale) = self.state.take() {
            tracing::debug!(capture = stale.capture.0, "press during active drag, releasing stale capture");
            host.release(stale.capture);
        }

        let bounds = host.bounding_box();
        let step = host.config().step;
        let new_value = mapper::value_from_interaction(event, step, min, max, &bounds);
        let origin_value = self.values.get(value_type);

        let capture = host.capture();
        self.state = DragState::Dragging(InteractionSession {
            bounds,
            value_type,
            origin_value,
            capture,
        });
        tracing::debug!(%value_type, value = new_value, left = bounds.left, width = bounds.width, "drag start");

        self.commit_input(host, value_type, new_value);
        new_value
    }

    /// Dragging → Dragging. Recomputes against the bounding box captured at
    /// press time and writes the slot the press selected; a differing
    /// `value_type` is ignored. Returns `None` when no drag is active.
    pub fn on_press_move<H: SliderHost>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
        value_type: ValueType,
        min: f64,
        max: f64,
    ) -> Option<f64> {
        let (bounds, session_type) = match self.state.session() {
            Some(session) => (session.bounds, session.value_type),
            None => {
                tracing::trace!("move without active drag ignored");
                return None;
            }
        };
        if value_type != session_type {
            tracing::debug!(requested = %value_type, active = %session_type, "move targets the pressed slot");
        }
        let value_type = session_type;

        let step = host.config().step;
        let new_value = mapper::value_from_interaction(event, step, min, max, &bounds);
        tracing::trace!(%value_type, value = new_value, "drag move");

        self.commit_input(host, value_type, new_value);
        Some(new_value)
    }

    /// Dragging → Idle. Releases the capture and, unless disabled, emits
    /// `change` with the final value. A release with no matching press is a
    /// no-op.
    pub fn on_press_end<H: SliderHost>(&mut self, host: &mut H) -> Option<SliderEvent> {
        let session = self.state.take()?;
        host.release(session.capture);

        if host.config().disabled {
            tracing::debug!("drag end while disabled, no change emitted");
            return None;
        }

        let event = SliderEvent::Change {
            value: self.values.get(session.value_type),
            value_type: session.value_type,
        };
        tracing::debug!(%event, "drag end");
        host.emit(event);
        Some(event)
    }

    /// Abort an active drag without committing: releases the capture and
    /// restores the value held before the press. Emits `input` for the
    /// restored value and no `change`. Returns false when idle.
    pub fn cancel<H: SliderHost>(&mut self, host: &mut H) -> bool {
        let Some(session) = self.state.take() else {
            return false;
        };
        host.release(session.capture);
        tracing::debug!(value_type = %session.value_type, restored = session.origin_value, "drag cancelled");

        self.commit_input(host, session.value_type, session.origin_value);
        true
    }

    fn commit_input<H: SliderHost>(&mut self, host: &mut H, value_type: ValueType, value: f64) {
        host.request_render(value);
        self.values.set(value_type, value);
        host.emit(SliderEvent::Input { value, value_type });
    }

    // ── Programmatic setter ───────────────────────────────────────────

    /// Set a value from code. Clipped to the configured range; renders but
    /// does not emit `input`.
    pub fn set_value<H: SliderHost>(&mut self, host: &mut H, value_type: ValueType, value: f64) -> f64 {
        let config = host.config();
        let clipped = mapper::clip(value, config.min, config.max);
        host.request_render(clipped);
        self.values.set(value_type, clipped);
        clipped
    }

    // ── Hover ─────────────────────────────────────────────────────────

    /// Show the tooltip when enabled and not disabled.
    pub fn on_hover_enter<H: SliderHost>(&self, host: &mut H) {
        let config = host.config();
        if config.disabled || !config.show_tooltip {
            return;
        }
        host.set_tooltip_visibility(true);
    }

    /// Hide the tooltip when enabled, whether disabled or not.
    pub fn on_hover_leave<H: SliderHost>(&self, host: &mut H) {
        if !host.config().show_tooltip {
            return;
        }
        host.set_tooltip_visibility(false);
    }

    // ── Step & tickmarks ──────────────────────────────────────────────

    /// Validate and store a new step, then redraw tickmarks when enabled.
    pub fn set_step<H: SliderHost>(&self, host: &mut H, candidate: impl Into<StepCandidate>) -> StepValidation {
        let validation = validate_step(candidate);
        host.store_step(validation.step);

        if host.config().tickmarks {
            self.refresh_tickmarks(host);
        }
        validation
    }

    /// Redraw the tickmark pattern and, with a label interval, the labels.
    ///
    /// Labels are regenerated only when the rendered count differs from the
    /// count the current config produces, and are skipped when each label
    /// would be narrower than one track unit.
    pub fn refresh_tickmarks<H: SliderHost>(&self, host: &mut H) {
        let config = host.config();
        let Some(pattern) = tickmarks::tickmark_pattern(&config) else {
            tracing::debug!(step = config.step, "no tickmarks in continuous mode");
            return;
        };
        host.set_tickmark_background(&pattern);

        let Some(target) = tickmarks::label_count(&config) else {
            return;
        };
        if host.rendered_label_count() == target {
            tracing::debug!(count = target, "labels already rendered");
            return;
        }

        let width = host.bounding_box().width;
        if !tickmarks::labels_fit(&config, width) {
            tracing::debug!(count = target, width, "labels narrower than one track unit, skipped");
            return;
        }
        if let Some(layout) = tickmarks::label_layout(&config, width) {
            host.render_labels(&layout);
        }
    }
}
