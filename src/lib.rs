//! Flappy - a terminal Flappy Bird.
//!
//! The library holds the simulation (settings, physics, pipes, collision,
//! scoring and the state machine), high-score persistence, input mapping and
//! the ratatui renderer. `main.rs` only wires them to a terminal and a clock.

pub mod build_info;
pub mod collision;
pub mod core;
pub mod error;
pub mod input;
pub mod physics;
pub mod pipes;
pub mod scoring;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use crate::core::game_state::{Game, GameSnapshot, GameState};
pub use crate::core::settings::{GameSettings, Playfield};
pub use crate::core::tick::{CrashCause, TickEvent, TickResult};
pub use error::{AppError, SettingsError, StorageError};
