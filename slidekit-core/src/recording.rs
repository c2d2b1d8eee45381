//! Headless host that records every outbound call.
//!
//! Drives the controller without a UI: tests assert on the call log, the CLI
//! replays scripted gestures through it.

use serde::Serialize;
use std::fmt;

use crate::config::SliderConfig;
use crate::domain::{BoundingBox, SliderEvent};
use crate::host::{BoundsProvider, CaptureHandle, ConfigSource, EventSink, PointerCapture, RenderSink};
use crate::tickmarks::{LabelLayout, TickmarkPattern};

/// One outbound call, in the order the controller made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    Render { value: f64 },
    Tooltip { visible: bool },
    Tickmarks { css: String, tick_count: f64 },
    Labels { texts: Vec<String>, width_fraction: f64 },
    Emit { event: SliderEvent },
    Capture { handle: u64 },
    Release { handle: u64 },
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCall::Render { value } => write!(f, "render {value}"),
            HostCall::Tooltip { visible } => {
                write!(f, "tooltip {}", if *visible { "visible" } else { "hidden" })
            }
            HostCall::Tickmarks { css, .. } => write!(f, "tickmarks {css}"),
            HostCall::Labels { texts, .. } => write!(f, "labels [{}]", texts.join(", ")),
            HostCall::Emit { event } => write!(f, "emit {event}"),
            HostCall::Capture { handle } => write!(f, "capture #{handle}"),
            HostCall::Release { handle } => write!(f, "release #{handle}"),
        }
    }
}

/// In-memory [`SliderHost`](crate::host::SliderHost).
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub config: SliderConfig,
    pub bounds: BoundingBox,
    pub calls: Vec<HostCall>,
    pub tooltip_visible: bool,
    pub rendered_value: Option<f64>,
    pub labels: Vec<String>,
    active_captures: Vec<CaptureHandle>,
    next_handle: u64,
}

impl RecordingHost {
    pub fn new(config: SliderConfig, bounds: BoundingBox) -> Self {
        Self {
            config,
            bounds,
            calls: Vec::new(),
            tooltip_visible: false,
            rendered_value: None,
            labels: Vec::new(),
            active_captures: Vec::new(),
            next_handle: 1,
        }
    }

    /// Emitted notifications only.
    pub fn events(&self) -> Vec<SliderEvent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Emit { event } => Some(*event),
                _ => None,
            })
            .collect()
    }

    /// Captures acquired and not yet released.
    pub fn active_captures(&self) -> &[CaptureHandle] {
        &self.active_captures
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl BoundsProvider for RecordingHost {
    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }
}

impl ConfigSource for RecordingHost {
    fn config(&self) -> SliderConfig {
        self.config
    }

    fn store_step(&mut self, step: f64) {
        self.config.step = step;
    }
}

impl RenderSink for RecordingHost {
    fn request_render(&mut self, value: f64) {
        self.rendered_value = Some(value);
        self.calls.push(HostCall::Render { value });
    }

    fn set_tooltip_visibility(&mut self, visible: bool) {
        self.tooltip_visible = visible;
        self.calls.push(HostCall::Tooltip { visible });
    }

    fn set_tickmark_background(&mut self, pattern: &TickmarkPattern) {
        self.calls.push(HostCall::Tickmarks {
            css: pattern.to_css(),
            tick_count: pattern.tick_count(),
        });
    }

    fn render_labels(&mut self, layout: &LabelLayout) {
        self.labels = layout.labels.iter().map(|l| l.text.clone()).collect();
        let width_fraction = layout.labels.first().map_or(0.0, |l| l.width_fraction);
        self.calls.push(HostCall::Labels {
            texts: self.labels.clone(),
            width_fraction,
        });
    }

    fn rendered_label_count(&self) -> usize {
        self.labels.len()
    }
}

impl EventSink for RecordingHost {
    fn emit(&mut self, event: SliderEvent) {
        self.calls.push(HostCall::Emit { event });
    }
}

impl PointerCapture for RecordingHost {
    fn capture(&mut self) -> CaptureHandle {
        let handle = CaptureHandle(self.next_handle);
        self.next_handle += 1;
        self.active_captures.push(handle);
        self.calls.push(HostCall::Capture { handle: handle.0 });
        handle
    }

    fn release(&mut self, handle: CaptureHandle) {
        self.active_captures.retain(|h| *h != handle);
        self.calls.push(HostCall::Release { handle: handle.0 });
    }
}
