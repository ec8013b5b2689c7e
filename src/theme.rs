use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::errors::ServiceError;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

/// The only durable state in the system: the operator's theme preference,
/// persisted as the single `"theme"` key in a small JSON file.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the saved preference, if any. A missing or malformed file is
    /// treated as no preference rather than an error.
    pub fn load(&self) -> Option<Theme> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed theme file");
                return None;
            }
        };
        let theme = value.get(THEME_KEY)?;
        serde_json::from_value(theme.clone()).ok()
    }

    pub fn save(&self, theme: Theme) -> Result<(), ServiceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = json!({ THEME_KEY: theme });
        std::fs::write(&self.path, serde_json::to_string_pretty(&payload)?)?;
        debug!(path = %self.path.display(), %theme, "Theme preference saved");
        Ok(())
    }

    /// Restores the saved preference, falling back to the OS-level dark-mode
    /// signal supplied by the caller when nothing is saved.
    pub fn load_or_detect(&self, system_prefers_dark: impl FnOnce() -> bool) -> Theme {
        self.load().unwrap_or_else(|| {
            if system_prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips_under_the_theme_key() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("settings.json"));

        assert_eq!(store.load(), None);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));

        let raw = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["theme"], "dark");
    }

    #[test]
    fn falls_back_to_system_signal_when_nothing_saved() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("settings.json"));

        assert_eq!(store.load_or_detect(|| true), Theme::Dark);
        assert_eq!(store.load_or_detect(|| false), Theme::Light);

        store.save(Theme::Light).unwrap();
        // Saved preference wins over the system signal.
        assert_eq!(store.load_or_detect(|| true), Theme::Light);
    }

    #[test]
    fn malformed_file_reads_as_no_preference() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let store = ThemeStore::new(path);
        assert_eq!(store.load(), None);
    }
}
