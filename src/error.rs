//! Error types.
//!
//! The per-tick core has no error paths. Everything here is raised either at
//! startup (bad settings) or by the high-score store, whose failures the game
//! loop logs and otherwise ignores.

use std::io;
use thiserror::Error;

/// Invalid settings record. Raised once, when a `Game` is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("setting `{0}` must be a finite number")]
    NotFinite(&'static str),

    #[error("setting `{name}` must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("minimum pipe height must not be negative, got {0}")]
    NegativePipeHeight(f64),

    #[error("minimum pipe height {min} exceeds maximum pipe height {max}")]
    PipeHeightRange { min: f64, max: f64 },

    #[error("playfield height {height} leaves no room above the ground line {ground_line}")]
    NoFlightRoom { height: f64, ground_line: f64 },
}

/// High-score persistence failure.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,

    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("high score file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
