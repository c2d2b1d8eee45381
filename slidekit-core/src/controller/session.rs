//! Drag session state.

use crate::domain::{BoundingBox, ValueType};
use crate::host::CaptureHandle;

/// Ephemeral state of one press → release span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    /// Track geometry captured at press time, reused for every move.
    pub bounds: BoundingBox,
    pub value_type: ValueType,
    /// Committed value of `value_type` before the press. Restored on cancel.
    pub origin_value: f64,
    pub(crate) capture: CaptureHandle,
}

impl InteractionSession {
    pub fn capture(&self) -> CaptureHandle {
        self.capture
    }
}

/// Two-state drag lifecycle. The session (and with it the capture handle)
/// only exists while `Dragging`, so a capture can be released at most once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(InteractionSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Move out the active session, leaving `Idle` behind.
    pub fn take(&mut self) -> Option<InteractionSession> {
        match std::mem::take(self) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}
