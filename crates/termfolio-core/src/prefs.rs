use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::Result;

/// Two-valued display mode, persisted between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// Injected persistence capability for small key-value preferences
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// One-file preference store under the user config dir.
/// Each key lives in its own file; the only key today is `theme`.
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.dir.join(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = std::fs::read_to_string(path)?;
        Ok(Some(value.trim().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<std::collections::HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

const THEME_KEY: &str = "theme";

/// Owns the theme flag and its persistence.
/// The mode is read once at startup; `toggle` flips and writes back.
pub struct ThemeController {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Load the saved mode through the store; absent or invalid
    /// values fall back to dark.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(value)) => ThemeMode::parse(&value).unwrap_or(ThemeMode::Dark),
            Ok(None) => ThemeMode::Dark,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                ThemeMode::Dark
            }
        };
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it. A write failure keeps the new
    /// mode for this session and only logs.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggle();
        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_defaults_to_dark() {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        assert_eq!(controller.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_load_invalid_defaults_to_dark() {
        let store = MemoryPreferenceStore::default();
        store.set("theme", "mauve").unwrap();
        let controller = ThemeController::load(Box::new(store));
        assert_eq!(controller.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = Box::new(MemoryPreferenceStore::default());
        let mut controller = ThemeController::load(store);
        assert_eq!(controller.toggle(), ThemeMode::Light);
        // The controller owns the store, so verify via a fresh load
        // against a file store instead.
        let dir = tempfile::tempdir().unwrap();
        let file_store = FilePreferenceStore::new(dir.path().to_path_buf());
        file_store.set("theme", "light").unwrap();
        let reloaded = ThemeController::load(Box::new(FilePreferenceStore::new(
            dir.path().to_path_buf(),
        )));
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested"));
        assert!(store.get("theme").unwrap().is_none());
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_trims_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme"), "dark\n").unwrap();
        let store = FilePreferenceStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
