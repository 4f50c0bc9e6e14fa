//! Game settings and preferences
//!
//! Persisted separately from the high score. Out-of-range values are
//! clamped on load, never rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DIFFICULTY_MAX, DIFFICULTY_MIN};

/// Default settings file
pub const SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Starting difficulty level, clamped to [1, 10]
    pub base_difficulty: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_difficulty: DIFFICULTY_MIN,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }
}

impl Settings {
    /// Clamp every field into its valid range
    pub fn sanitize(&mut self) {
        self.base_difficulty = self.base_difficulty.clamp(DIFFICULTY_MIN, DIFFICULTY_MAX);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }

    /// Load settings from disk, falling back to defaults on a missing
    /// or corrupt file
    pub fn load(path: impl AsRef<Path>) -> Self {
        let mut settings = match std::fs::read_to_string(path.as_ref()) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => settings,
                Err(_) => {
                    log::warn!("Corrupt settings file, using defaults");
                    Settings::default()
                }
            },
            Err(_) => {
                log::info!("No settings file, using defaults");
                Settings::default()
            }
        };
        settings.sanitize();
        settings
    }

    /// Save settings to disk; write failures are logged and ignored
    pub fn save(&self, path: impl AsRef<Path>) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(_) => return,
        };
        if let Err(err) = std::fs::write(path.as_ref(), json) {
            log::warn!("Failed to save settings: {err}");
        } else {
            log::debug!("Settings saved");
        }
    }

    /// Conventional settings path in the given directory
    pub fn path_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(SETTINGS_FILE)
    }
}
