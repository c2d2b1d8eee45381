use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::ValueType;

/// Semantic notification emitted to the host.
///
/// `Input` fires on every press and move of an active drag. `Change` fires
/// once per completed drag and never while the slider is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SliderEvent {
    Input { value: f64, value_type: ValueType },
    Change { value: f64, value_type: ValueType },
}

impl SliderEvent {
    pub fn value(&self) -> f64 {
        match self {
            SliderEvent::Input { value, .. } | SliderEvent::Change { value, .. } => *value,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, SliderEvent::Change { .. })
    }
}

impl fmt::Display for SliderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderEvent::Input { value, value_type } => write!(f, "input {value_type}={value}"),
            SliderEvent::Change { value, value_type } => {
                write!(f, "change {value_type}={value}")
            }
        }
    }
}
