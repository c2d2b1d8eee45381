//! Terminal implementation of the slider collaborator traits.
//!
//! One terminal cell is one track unit. The track's first column maps to
//! `min` and its last column to `max`, so the bounding box is one column
//! narrower than the track rect.

use std::collections::VecDeque;

use ratatui::layout::Rect;

use slidekit_core::host::{
    BoundsProvider, CaptureHandle, ConfigSource, EventSink, PointerCapture, RenderSink,
};
use slidekit_core::tickmarks::{LabelLayout, TickmarkPattern};
use slidekit_core::{BoundingBox, SliderConfig, SliderEvent};

/// Maximum number of events kept for the event log pane.
pub const EVENT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone)]
pub struct TerminalHost {
    pub config: SliderConfig,
    track: Rect,
    pub rendered_value: f64,
    pub tooltip_visible: bool,
    pub tickmarks: Option<TickmarkPattern>,
    pub labels: Option<LabelLayout>,
    pub events: VecDeque<SliderEvent>,
    capture: Option<CaptureHandle>,
    next_handle: u64,
}

impl TerminalHost {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            track: Rect::default(),
            rendered_value: config.min,
            tooltip_visible: false,
            tickmarks: None,
            labels: None,
            events: VecDeque::new(),
            capture: None,
            next_handle: 1,
        }
    }

    /// Track rect from the latest layout pass.
    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn set_track(&mut self, track: Rect) {
        self.track = track;
    }

    /// True while a drag holds the global move/release subscription.
    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether a cell lies on the track row.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        let t = self.track;
        row >= t.y && row < t.y + t.height && column >= t.x && column < t.x + t.width
    }

    /// Drop tickmarks and labels, e.g. after tickmarks were switched off.
    pub fn clear_tickmarks(&mut self) {
        self.tickmarks = None;
        self.labels = None;
    }

    /// Drop only the label row so the next refresh regenerates it.
    pub fn clear_labels(&mut self) {
        self.labels = None;
    }
}

/// Horizontal page coordinate of a terminal column.
pub fn page_x(column: u16) -> f64 {
    f64::from(column)
}

impl BoundsProvider for TerminalHost {
    fn bounding_box(&self) -> BoundingBox {
        let width = self.track.width.saturating_sub(1).max(1);
        BoundingBox::new(f64::from(self.track.x), f64::from(width))
    }
}

impl ConfigSource for TerminalHost {
    fn config(&self) -> SliderConfig {
        self.config
    }

    fn store_step(&mut self, step: f64) {
        self.config.step = step;
    }
}

impl RenderSink for TerminalHost {
    fn request_render(&mut self, value: f64) {
        self.rendered_value = value;
    }

    fn set_tooltip_visibility(&mut self, visible: bool) {
        self.tooltip_visible = visible;
    }

    fn set_tickmark_background(&mut self, pattern: &TickmarkPattern) {
        self.tickmarks = Some(*pattern);
    }

    fn render_labels(&mut self, layout: &LabelLayout) {
        self.labels = Some(layout.clone());
    }

    fn rendered_label_count(&self) -> usize {
        self.labels.as_ref().map_or(0, LabelLayout::len)
    }
}

impl EventSink for TerminalHost {
    fn emit(&mut self, event: SliderEvent) {
        tracing::debug!(%event, "emit");
        if self.events.len() == EVENT_LOG_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

impl PointerCapture for TerminalHost {
    fn capture(&mut self) -> CaptureHandle {
        let handle = CaptureHandle(self.next_handle);
        self.next_handle += 1;
        self.capture = Some(handle);
        handle
    }

    fn release(&mut self, handle: CaptureHandle) {
        if self.capture == Some(handle) {
            self.capture = None;
        }
    }
}
