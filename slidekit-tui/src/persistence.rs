//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
///
/// Unset fields fall back to the loaded slider config.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub value: Option<f64>,
    pub show_tooltip: Option<bool>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        value: Some(app.value()),
        show_tooltip: Some(app.config().show_tooltip),
    }
}

/// Apply persisted state. The value goes through the programmatic setter,
/// so it is clipped to the current range and no `input` is emitted.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(show) = state.show_tooltip {
        app.host.config.show_tooltip = show;
    }
    let value = state.value.unwrap_or(app.config().min);
    app.set_value(value);
}
