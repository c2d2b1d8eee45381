//! Slider configuration — runtime config, TOML file layout, step validation.
//!
//! The interaction core reads a [`SliderConfig`] on every call. Loading from
//! disk is the only fallible path; an invalid `step` never fails, it falls
//! back to [`DEFAULT_STEP`] and reports the substitution.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 50.0;
pub const DEFAULT_STEP: f64 = 1.0;

/// Errors from loading a slider config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("empty range: max ({max}) must be greater than min ({min})")]
    EmptyRange { min: f64, max: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Validated runtime configuration.
///
/// `step` is always finite and `>= 0` here (0 = continuous). `max > min` is
/// checked on load; constructing one by hand with `max <= min` is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub disabled: bool,
    pub show_tooltip: bool,
    pub tickmarks: bool,
    pub label_interval: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            disabled: false,
            show_tooltip: false,
            tickmarks: false,
            label_interval: 0,
        }
    }
}

impl SliderConfig {
    /// Width of the value range (`max - min`).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A step value as supplied by configuration, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StepCandidate {
    Number(f64),
    Other(toml::Value),
}

impl From<f64> for StepCandidate {
    fn from(v: f64) -> Self {
        StepCandidate::Number(v)
    }
}

impl From<&str> for StepCandidate {
    fn from(s: &str) -> Self {
        StepCandidate::Other(toml::Value::String(s.to_string()))
    }
}

impl Default for StepCandidate {
    fn default() -> Self {
        StepCandidate::Number(DEFAULT_STEP)
    }
}

/// Outcome of step validation: the step to use, and whether it replaced the
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepValidation {
    pub step: f64,
    pub corrected: bool,
}

/// Accept finite non-negative numbers; anything else becomes [`DEFAULT_STEP`].
pub fn validate_step(candidate: impl Into<StepCandidate>) -> StepValidation {
    let candidate = candidate.into();
    match candidate {
        StepCandidate::Number(v) if v.is_finite() && v >= 0.0 => StepValidation {
            step: v,
            corrected: false,
        },
        other => {
            tracing::warn!(candidate = ?other, fallback = DEFAULT_STEP, "invalid step, using default");
            StepValidation {
                step: DEFAULT_STEP,
                corrected: true,
            }
        }
    }
}

/// On-disk layout of a slider config file. Every field is optional.
///
/// ```toml
/// min = 0
/// max = 100
/// step = 5
/// tickmarks = true
/// label_interval = 2
/// show_tooltip = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SliderFile {
    pub min: f64,
    pub max: f64,
    pub step: StepCandidate,
    pub disabled: bool,
    pub show_tooltip: bool,
    pub tickmarks: bool,
    pub label_interval: u32,
}

impl Default for SliderFile {
    fn default() -> Self {
        let d = SliderConfig::default();
        Self {
            min: d.min,
            max: d.max,
            step: StepCandidate::default(),
            disabled: d.disabled,
            show_tooltip: d.show_tooltip,
            tickmarks: d.tickmarks,
            label_interval: d.label_interval,
        }
    }
}

/// A validated config plus the step validation report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedConfig {
    pub config: SliderConfig,
    pub step: StepValidation,
}

impl SliderFile {
    /// Validate the range and step, producing the runtime config.
    pub fn resolve(self) -> Result<LoadedConfig, ConfigError> {
        for (field, value) in [("min", self.min), ("max", self.max)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.max <= self.min {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }

        let step = validate_step(self.step);
        Ok(LoadedConfig {
            config: SliderConfig {
                min: self.min,
                max: self.max,
                step: step.step,
                disabled: self.disabled,
                show_tooltip: self.show_tooltip,
                tickmarks: self.tickmarks,
                label_interval: self.label_interval,
            },
            step,
        })
    }
}

/// Parse and validate config TOML.
pub fn parse(content: &str) -> Result<LoadedConfig, ConfigError> {
    let file: SliderFile = toml::from_str(content)?;
    file.resolve()
}

/// Read, parse and validate a config file.
pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_properties() {
        let c = SliderConfig::default();
        assert_eq!(c.min, 0.0);
        assert_eq!(c.max, 50.0);
        assert_eq!(c.step, 1.0);
        assert_eq!(c.label_interval, 0);
        assert!(!c.tickmarks && !c.show_tooltip && !c.disabled);
    }

    #[test]
    fn valid_step_used_as_given() {
        let v = validate_step(2.5);
        assert_eq!(v.step, 2.5);
        assert!(!v.corrected);
    }

    #[test]
    fn zero_step_is_valid() {
        let v = validate_step(0.0);
        assert_eq!(v.step, 0.0);
        assert!(!v.corrected);
    }

    #[test]
    fn negative_step_falls_back() {
        let v = validate_step(-3.0);
        assert_eq!(v.step, 1.0);
        assert!(v.corrected);
    }

    #[test]
    fn text_step_falls_back() {
        let v = validate_step("x");
        assert_eq!(v.step, 1.0);
        assert!(v.corrected);
    }

    #[test]
    fn numeric_text_is_still_not_a_number() {
        assert!(validate_step("5").corrected);
    }

    #[test]
    fn nan_step_falls_back() {
        assert!(validate_step(f64::NAN).corrected);
        assert!(validate_step(f64::INFINITY).corrected);
    }

    #[test]
    fn parse_empty_file_gives_defaults() {
        let loaded = parse("").unwrap();
        assert_eq!(loaded.config, SliderConfig::default());
        assert!(!loaded.step.corrected);
    }

    #[test]
    fn parse_full_file() {
        let loaded = parse(
            r#"
            min = 10
            max = 110.0
            step = 5
            tickmarks = true
            label_interval = 2
            show_tooltip = true
            "#,
        )
        .unwrap();
        assert_eq!(loaded.config.min, 10.0);
        assert_eq!(loaded.config.max, 110.0);
        assert_eq!(loaded.config.step, 5.0);
        assert!(loaded.config.tickmarks);
        assert_eq!(loaded.config.label_interval, 2);
    }

    #[test]
    fn parse_string_step_is_corrected_not_rejected() {
        let loaded = parse(r#"step = "wide""#).unwrap();
        assert_eq!(loaded.config.step, 1.0);
        assert!(loaded.step.corrected);
    }

    #[test]
    fn parse_boolean_step_is_corrected() {
        let loaded = parse("step = true").unwrap();
        assert!(loaded.step.corrected);
    }

    #[test]
    fn empty_range_rejected() {
        let err = parse("min = 5\nmax = 5").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRange { .. }));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(parse("min = ").unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/slidekit/slider.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
