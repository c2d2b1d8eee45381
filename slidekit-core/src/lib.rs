//! slidekit core — the interaction core of a draggable range input.
//!
//! This crate turns raw pointer events into a stepped, clipped slider value
//! and keeps the host's visual state in sync with it:
//! - Pure value mapping: pointer position → value, step snapping, clipping
//! - Press/move/release drag state machine with global pointer capture
//! - Hover tooltip visibility
//! - Tickmark pattern and label row geometry
//! - Configuration with fail-soft step validation
//!
//! Rendering, geometry and event dispatch belong to the host, reached
//! through the traits in [`host`].

pub mod config;
pub mod controller;
pub mod domain;
pub mod host;
pub mod mapper;
pub mod recording;
pub mod tickmarks;

pub use config::{validate_step, ConfigError, LoadedConfig, SliderConfig, StepCandidate, StepValidation};
pub use controller::InteractionController;
pub use domain::{BoundingBox, CommittedValue, PointerEvent, SliderEvent, TouchPoint, ValueType};
pub use host::{CaptureHandle, SliderHost};
pub use recording::{HostCall, RecordingHost};
