use std::sync::{LazyLock, Mutex, PoisonError};

use crate::config::Settings;

/// Launch settings handed from `run` to nannou's `model` function, which
/// takes no arguments of its own
static SETTINGS: LazyLock<Mutex<Settings>> =
    LazyLock::new(|| Mutex::new(Settings::default()));

pub fn settings() -> Settings {
    SETTINGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn set_settings(settings: Settings) {
    *SETTINGS.lock().unwrap_or_else(PoisonError::into_inner) = settings;
}
