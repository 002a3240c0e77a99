//! High-score persistence.
//!
//! The score is a single integer kept in a small JSON file in the platform
//! data directory. It is read once at startup and written by the game loop
//! after a tick reports a new best, never from inside the tick.

use crate::core::constants::{APP_NAME, HIGH_SCORE_FILE};
use crate::core::tick::TickResult;
use crate::error::StorageError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Somewhere the best score survives between sessions.
pub trait HighScoreStore {
    /// Stored high score, or 0 if nothing usable is stored.
    fn load(&self) -> u32;

    fn save(&mut self, high_score: u32) -> Result<(), StorageError>;
}

/// On-disk shape of the high score file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

/// Get the data directory for this game, creating it if needed.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let project_dirs = ProjectDirs::from("", "", APP_NAME).ok_or(StorageError::NoDataDir)?;
    let dir = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// High score kept as `{ "high_score": N }` in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    /// Store in the platform data directory.
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self::at(data_dir()?.join(HIGH_SCORE_FILE)))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&self) -> u32 {
        load_json_or_default::<HighScoreRecord>(&self.path).high_score
    }

    fn save(&mut self, high_score: u32) -> Result<(), StorageError> {
        save_json(&self.path, &HighScoreRecord { high_score })
    }
}

/// Keeps the score in memory only. Used when no data directory is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHighScoreStore {
    high_score: u32,
}

impl MemoryHighScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.high_score
    }

    fn save(&mut self, high_score: u32) -> Result<(), StorageError> {
        self.high_score = high_score;
        Ok(())
    }
}

/// Persist the high score if the last tick raised it.
///
/// Failures are logged and swallowed so a broken disk never interrupts a
/// run. Returns `true` if a write succeeded.
pub fn flush_high_score(
    result: &TickResult,
    high_score: u32,
    store: &mut dyn HighScoreStore,
) -> bool {
    if !result.high_score_changed {
        return false;
    }
    match store.save(high_score) {
        Ok(()) => {
            log::info!("saved new high score {}", high_score);
            true
        }
        Err(e) => {
            log::warn!("could not save high score {}: {}", high_score, e);
            false
        }
    }
}
