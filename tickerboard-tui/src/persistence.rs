//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tickerboard_core::TickerTableActions;

use crate::app::App;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub current_bid_unit: String,
    pub selected_market: Option<String>,
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

/// Extract persisted state from App.
pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        current_bid_unit: app.current_bid_unit.clone(),
        selected_market: app.selected_market().map(str::to_string),
    }
}

/// Apply persisted state to App. A bid unit no longer offered is dropped.
pub fn apply(app: &mut App, state: PersistedState) {
    if app.bid_units.contains(&state.current_bid_unit) {
        app.set_current_bid_unit(&state.current_bid_unit);
    }
    if let Some(id) = state.selected_market {
        app.select_market(&id);
    }
}
