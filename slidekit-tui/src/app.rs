//! Application state — single-owner, main-thread only.

use std::path::Path;

use anyhow::Context;

use slidekit_core::{config, InteractionController, SliderConfig, ValueType};

use crate::host::TerminalHost;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Label intervals cycled by the `l` key.
pub const LABEL_INTERVALS: [u32; 5] = [0, 1, 2, 5, 10];

pub struct AppState {
    pub controller: InteractionController,
    pub host: TerminalHost,
    pub running: bool,
    /// Pointer is currently over the track.
    pub hovering: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

/// Result of reading the slider config at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoad {
    /// No file at the path: built-in defaults.
    Missing,
    Loaded(SliderConfig),
    /// Loaded, but the step was replaced with `step`.
    Corrected { config: SliderConfig, step: f64 },
    /// The file exists but was rejected; defaults are used.
    Rejected(String),
}

impl ConfigLoad {
    pub fn read(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return ConfigLoad::Missing;
        }
        match config::load(path).with_context(|| format!("loading {}", path.display())) {
            Ok(loaded) if loaded.step.corrected => ConfigLoad::Corrected {
                config: loaded.config,
                step: loaded.step.step,
            },
            Ok(loaded) => ConfigLoad::Loaded(loaded.config),
            Err(err) => {
                tracing::error!("config rejected, using defaults: {err:#}");
                ConfigLoad::Rejected(format!("{err:#}"))
            }
        }
    }

    pub fn config(&self) -> SliderConfig {
        match self {
            ConfigLoad::Loaded(config) | ConfigLoad::Corrected { config, .. } => *config,
            ConfigLoad::Missing | ConfigLoad::Rejected(_) => SliderConfig::default(),
        }
    }
}

impl AppState {
    /// App for a startup config; corrections and rejections become the
    /// initial status message.
    pub fn from_config_load(load: &ConfigLoad) -> Self {
        let mut app = Self::new(load.config());
        match load {
            ConfigLoad::Corrected { step, .. } => {
                app.set_warning(format!("invalid step in config, using {step}"))
            }
            ConfigLoad::Rejected(reason) => app.set_error(format!("{reason}; using defaults")),
            ConfigLoad::Missing | ConfigLoad::Loaded(_) => {}
        }
        app
    }

    pub fn new(config: SliderConfig) -> Self {
        Self {
            controller: InteractionController::new(),
            host: TerminalHost::new(config),
            running: true,
            hovering: false,
            status_message: None,
        }
    }

    pub fn config(&self) -> SliderConfig {
        self.host.config
    }

    /// Committed single value.
    pub fn value(&self) -> f64 {
        self.controller.value(ValueType::Single)
    }

    pub fn set_value(&mut self, value: f64) -> f64 {
        self.controller.set_value(&mut self.host, ValueType::Single, value)
    }

    /// Whether `step` puts at most one tick per track column.
    pub fn fits_track(&self, step: f64) -> bool {
        if step <= 0.0 {
            return true;
        }
        let columns = f64::from(self.host.track().width.saturating_sub(1).max(1));
        self.host.config.span() / step <= columns
    }

    /// Redraw tickmarks and labels if enabled.
    pub fn refresh_tickmarks(&mut self) {
        if self.host.config.tickmarks {
            self.controller.refresh_tickmarks(&mut self.host);
        } else {
            self.host.clear_tickmarks();
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
