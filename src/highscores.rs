//! Best-score persistence
//!
//! A single non-negative integer stored as a one-key JSON record on
//! disk. Load falls back to 0 on a missing or corrupt file; save
//! silently no-ops on write failure. The simulation never sees either
//! failure mode.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default save file, next to the executable's working directory
pub const HIGH_SCORE_FILE: &str = "highscore.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: i64,
}

/// File-backed high score store
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored best score; 0 on missing or corrupt data
    pub fn load_high_score(&self) -> u64 {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No high score file, starting fresh");
                return 0;
            }
        };
        match serde_json::from_str::<HighScoreRecord>(&json) {
            Ok(record) if record.high_score >= 0 => record.high_score as u64,
            Ok(_) | Err(_) => {
                log::warn!("Corrupt high score file, falling back to 0");
                0
            }
        }
    }

    /// Persist a best score, clamping negative input to 0. Write
    /// failures are logged and otherwise ignored.
    pub fn save_high_score(&self, score: i64) {
        let record = HighScoreRecord {
            high_score: score.max(0),
        };
        let json = match serde_json::to_string_pretty(&record) {
            Ok(json) => json,
            Err(_) => return,
        };
        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("Failed to save high score: {err}");
        } else {
            log::debug!("High score saved ({})", record.high_score);
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}
