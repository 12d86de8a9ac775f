//! Persisted settings (`settings.json` in the working directory)
//!
//! Load is best-effort: a missing file, an unreadable file, or a malformed
//! document all yield defaults; a well-formed document with missing fields
//! gets per-field defaults. Save overwrites wholesale. No versioning.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::constants::timer::{MAX_MINUTES, MIN_MINUTES};
use crate::input::keys::ShortcutKey;

pub const DEFAULT_TIMER_MINUTES: u32 = 1;
pub const DEFAULT_SHORTCUT_KEYS: [ShortcutKey; 4] = [
    ShortcutKey::Ctrl,
    ShortcutKey::Alt,
    ShortcutKey::Shift,
    ShortcutKey::Letter('U'),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_timer_minutes")]
    pub timer_minutes: u32,
    #[serde(default = "default_shortcut_keys")]
    pub shortcut_keys: [ShortcutKey; 4],
}

fn default_timer_minutes() -> u32 {
    DEFAULT_TIMER_MINUTES
}

fn default_shortcut_keys() -> [ShortcutKey; 4] {
    DEFAULT_SHORTCUT_KEYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timer_minutes: DEFAULT_TIMER_MINUTES,
            shortcut_keys: DEFAULT_SHORTCUT_KEYS,
        }
    }
}

impl Settings {
    /// Load settings, substituting defaults for anything missing or malformed
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read settings, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed settings, using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to `path`, overwriting any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json)
            .context(format!("Failed to write settings to {}", path.display()))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    fn clamped(mut self) -> Self {
        self.timer_minutes = self.timer_minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            timer_minutes: 25,
            shortcut_keys: [
                ShortcutKey::Ctrl,
                ShortcutKey::None,
                ShortcutKey::Shift,
                ShortcutKey::Digit('3'),
            ],
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn missing_shortcut_keys_defaults_while_honoring_minutes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "timer_minutes": 30 }"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.timer_minutes, 30);
        assert_eq!(settings.shortcut_keys, DEFAULT_SHORTCUT_KEYS);
    }

    #[test]
    fn malformed_document_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn unknown_key_name_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "timer_minutes": 5, "shortcut_keys": ["CTRL", "HYPER", "SHIFT", "U"] }"#,
        )
        .unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn out_of_range_minutes_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "timer_minutes": 0, "shortcut_keys": ["CTRL", "ALT", "SHIFT", "U"] }"#,
        )
        .unwrap();
        assert_eq!(Settings::load(&path).timer_minutes, MIN_MINUTES);

        fs::write(
            &path,
            r#"{ "timer_minutes": 99999, "shortcut_keys": ["CTRL", "ALT", "SHIFT", "U"] }"#,
        )
        .unwrap();
        assert_eq!(Settings::load(&path).timer_minutes, MAX_MINUTES);
    }
}
