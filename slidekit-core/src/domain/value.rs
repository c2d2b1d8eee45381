//! Value slots a drag can control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which logical value a drag controls.
///
/// The base interaction core is agnostic: single-handle sliders use
/// `Single`, range sliders route each handle to `Low` or `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Low,
    High,
    Single,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Low => "low",
            ValueType::High => "high",
            ValueType::Single => "single",
        };
        f.write_str(name)
    }
}

/// Values currently held by the widget, one slot per [`ValueType`].
///
/// Persists across drags. Mutated on every press/move and by the
/// programmatic setter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CommittedValue {
    pub low: f64,
    pub high: f64,
    pub single: f64,
}

impl CommittedValue {
    pub fn get(&self, value_type: ValueType) -> f64 {
        match value_type {
            ValueType::Low => self.low,
            ValueType::High => self.high,
            ValueType::Single => self.single,
        }
    }

    pub fn set(&mut self, value_type: ValueType, value: f64) {
        match value_type {
            ValueType::Low => self.low = value,
            ValueType::High => self.high = value,
            ValueType::Single => self.single = value,
        }
    }
}
