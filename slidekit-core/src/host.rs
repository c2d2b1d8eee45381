//! Collaborator traits — the seams between the interaction core and the
//! widget hosting it.
//!
//! The core never touches geometry, rendering or event dispatch directly.
//! A host implements these traits (usually on one struct) and passes itself
//! to every [`InteractionController`](crate::controller::InteractionController)
//! call. [`SliderHost`] is the combined bound the controller takes.

use crate::config::SliderConfig;
use crate::domain::{BoundingBox, SliderEvent};
use crate::tickmarks::{LabelLayout, TickmarkPattern};

/// Current on-screen geometry of the slider track.
pub trait BoundsProvider {
    fn bounding_box(&self) -> BoundingBox;
}

/// Current configuration, read fresh on every call.
pub trait ConfigSource {
    fn config(&self) -> SliderConfig;

    /// Persist a validated step. Called only with finite values `>= 0`.
    fn store_step(&mut self, step: f64);
}

/// Render instructions. Applied before the matching notification is emitted.
pub trait RenderSink {
    /// Move the handle (and tooltip text) to `value`.
    fn request_render(&mut self, value: f64);

    fn set_tooltip_visibility(&mut self, visible: bool);

    fn set_tickmark_background(&mut self, pattern: &TickmarkPattern);

    /// Replace the rendered label row.
    fn render_labels(&mut self, layout: &LabelLayout);

    /// Number of labels currently on screen.
    fn rendered_label_count(&self) -> usize;
}

/// Receiver for `input` / `change` notifications.
pub trait EventSink {
    fn emit(&mut self, event: SliderEvent);
}

/// Opaque handle to an active global move/release subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureHandle(pub u64);

/// Global (not widget-scoped) pointer move/release subscriptions.
///
/// A drag that leaves the track keeps tracking because moves and releases
/// are routed from the whole surface while a capture is held.
pub trait PointerCapture {
    fn capture(&mut self) -> CaptureHandle;

    fn release(&mut self, handle: CaptureHandle);
}

/// Everything the controller needs from its host.
pub trait SliderHost: BoundsProvider + ConfigSource + RenderSink + EventSink + PointerCapture {}

impl<T> SliderHost for T where T: BoundsProvider + ConfigSource + RenderSink + EventSink + PointerCapture {}
