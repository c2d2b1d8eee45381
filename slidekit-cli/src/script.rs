//! Gesture scripts — TOML sequences of pointer/hover/config steps replayed
//! against a recording host.
//!
//! ```toml
//! [bounds]
//! left = 0.0
//! width = 50.0
//!
//! [[steps]]
//! kind = "press"
//! page_x = 22.0
//!
//! [[steps]]
//! kind = "move"
//! page_x = 80.0
//!
//! [[steps]]
//! kind = "release"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use slidekit_core::{
    BoundingBox, CommittedValue, HostCall, InteractionController, PointerEvent, RecordingHost,
    SliderConfig, StepCandidate, ValueType,
};

/// Errors from loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid script TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bounds width must be non-zero and finite, got {0}")]
    InvalidBounds(f64),
}

fn default_value_type() -> ValueType {
    ValueType::Single
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Press {
        #[serde(default)]
        page_x: f64,
        #[serde(default)]
        touches: Vec<f64>,
        #[serde(default = "default_value_type")]
        value_type: ValueType,
    },
    Move {
        #[serde(default)]
        page_x: f64,
        #[serde(default)]
        touches: Vec<f64>,
        #[serde(default = "default_value_type")]
        value_type: ValueType,
    },
    Release,
    Enter,
    Leave,
    Cancel,
    SetStep {
        step: StepCandidate,
    },
    SetValue {
        value: f64,
        #[serde(default = "default_value_type")]
        value_type: ValueType,
    },
}

fn pointer(page_x: f64, touches: &[f64]) -> PointerEvent {
    if touches.is_empty() {
        PointerEvent::mouse(page_x)
    } else {
        PointerEvent::touch(touches.iter().copied())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    pub bounds: BoundingBox,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Outbound calls per step plus the final committed values.
#[derive(Debug, Clone)]
pub struct Replay {
    pub steps: Vec<(Step, Vec<HostCall>)>,
    pub values: CommittedValue,
}

pub fn parse(content: &str) -> Result<GestureScript, ScriptError> {
    let script: GestureScript = toml::from_str(content)?;
    let width = script.bounds.width;
    if width == 0.0 || !width.is_finite() {
        return Err(ScriptError::InvalidBounds(width));
    }
    Ok(script)
}

pub fn load(path: &Path) -> Result<GestureScript, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&content)
}

/// Run every step through a fresh controller.
///
/// Press and move use the configured `min`/`max`. Disabled handling follows
/// the host contract: presses are not routed while `config.disabled` is set.
pub fn replay(script: &GestureScript, config: SliderConfig) -> Replay {
    let mut host = RecordingHost::new(config, script.bounds);
    let mut ctl = InteractionController::new();
    let mut steps = Vec::with_capacity(script.steps.len());

    for step in &script.steps {
        host.clear_calls();
        let (min, max) = (host.config.min, host.config.max);

        match step {
            Step::Press {
                page_x,
                touches,
                value_type,
            } => {
                if host.config.disabled {
                    tracing::debug!("press ignored while disabled");
                } else {
                    ctl.on_press_start(&mut host, &pointer(*page_x, touches), *value_type, min, max);
                }
            }
            Step::Move {
                page_x,
                touches,
                value_type,
            } => {
                ctl.on_press_move(&mut host, &pointer(*page_x, touches), *value_type, min, max);
            }
            Step::Release => {
                ctl.on_press_end(&mut host);
            }
            Step::Enter => ctl.on_hover_enter(&mut host),
            Step::Leave => ctl.on_hover_leave(&mut host),
            Step::Cancel => {
                ctl.cancel(&mut host);
            }
            Step::SetStep { step } => {
                ctl.set_step(&mut host, step.clone());
            }
            Step::SetValue { value, value_type } => {
                ctl.set_value(&mut host, *value_type, *value);
            }
        }

        steps.push((step.clone(), host.calls.clone()));
    }

    Replay {
        steps,
        values: ctl.values(),
    }
}
