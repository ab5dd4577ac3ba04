use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::model::AppState;

/// Fixed slot the store persists itself under.
pub const STORAGE_KEY: &str = "productivity-app-storage";

pub fn encode(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Rebuilds state from a stored document, field by field. Anything missing
/// or unreadable falls back to the default for that field only.
pub fn decode(raw: &str) -> AppState {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "stored snapshot is not valid json, starting from defaults");
            return AppState::default();
        }
    };
    let Some(object) = value.as_object() else {
        warn!("stored snapshot is not a json object, starting from defaults");
        return AppState::default();
    };

    let defaults = AppState::default();
    AppState {
        current_role: field(object, "currentRole", defaults.current_role),
        theme: field(object, "theme", defaults.theme),
        sidebar_collapsed: field(object, "sidebarCollapsed", defaults.sidebar_collapsed),
        background: field(object, "background", defaults.background),
        tasks: field(object, "tasks", defaults.tasks),
        habits: field(object, "habits", defaults.habits),
        pomodoro_sessions: field(object, "pomodoroSessions", defaults.pomodoro_sessions),
        pomodoro_settings: field(object, "pomodoroSettings", defaults.pomodoro_settings),
        check_ins: field(object, "checkIns", defaults.check_ins),
        study_goals: field(object, "studyGoals", defaults.study_goals),
        activity_log: field(object, "activityLog", defaults.activity_log),
        registered_users: field(object, "registeredUsers", defaults.registered_users),
    }
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str, fallback: T) -> T {
    let Some(raw) = object.get(key) else {
        return fallback;
    };
    match serde_json::from_value(raw.clone()) {
        Ok(value) => value,
        Err(err) => {
            warn!(field = key, error = %err, "discarding unreadable snapshot field");
            fallback
        }
    }
}
