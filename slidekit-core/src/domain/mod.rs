//! Domain types — geometry, pointer events, value slots, emitted notifications.

pub mod event;
pub mod geometry;
pub mod pointer;
pub mod value;

pub use event::SliderEvent;
pub use geometry::BoundingBox;
pub use pointer::{PointerEvent, TouchPoint};
pub use value::{CommittedValue, ValueType};
