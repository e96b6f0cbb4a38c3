//! Persisted client settings (currently only the theme)
//!
//! The page reads settings once at startup and writes them back whenever the
//! user changes something. Stores are injected, so tests and the server can
//! swap the JSON file for memory.

use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    error::{AppError, AppResult},
    models::Theme,
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Load/save interface for [`Settings`]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored settings, or defaults when nothing was saved yet
    fn load(&self) -> AppResult<Settings>;

    fn save(&self, settings: &Settings) -> AppResult<()>;
}

/// Settings kept as a small JSON document on disk: `{"theme": "dark"}`
pub struct JsonFileSettings {
    path: PathBuf,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileSettings {
    fn load(&self) -> AppResult<Settings> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Settings(format!("unreadable settings in {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &Settings) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, raw)?;

        tracing::debug!(path = %self.path.display(), theme = %settings.theme, "Settings saved");
        Ok(())
    }
}

/// In-process store, used when nothing should touch the disk
#[derive(Default)]
pub struct MemorySettings {
    inner: Mutex<Option<Settings>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: Settings) -> Self {
        Self {
            inner: Mutex::new(Some(settings)),
        }
    }

    /// Last saved value, `None` if nothing was ever saved or seeded
    pub fn saved(&self) -> Option<Settings> {
        self.inner.lock().ok().and_then(|guard| *guard)
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> AppResult<Settings> {
        let guard = self
            .inner
            .lock()
            .map_err(|e| AppError::Settings(e.to_string()))?;
        Ok(guard.unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> AppResult<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| AppError::Settings(e.to_string()))?;
        *guard = Some(*settings);
        Ok(())
    }
}
