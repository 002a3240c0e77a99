//! Tunable game constants and the logical playfield they apply to.
//!
//! Settings are fixed for the whole session. They are checked once when a
//! [`Game`](crate::core::game_state::Game) is built; the tick assumes a valid
//! record and never re-validates.

use super::constants::{DEFAULT_PLAYFIELD_HEIGHT, DEFAULT_PLAYFIELD_WIDTH};
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

/// Pipe geometry, speeds and bird dimensions, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Width of both pipes of a pair.
    pub pipe_width: f64,
    /// Smallest height the top pipe may be drawn with.
    pub min_pipe_height: f64,
    /// Largest height the top pipe may be drawn with.
    pub max_pipe_height: f64,
    /// Vertical gap between the top and bottom pipe.
    pub pipe_spacing: f64,
    /// Leftward pipe speed in units per second.
    pub pipe_speed: f64,
    /// Velocity written on a tap (negative = upward).
    pub jump_velocity: f64,
    /// Downward acceleration in units per second squared.
    pub gravity: f64,
    pub ground_height: f64,
    /// Size the bird is drawn at. Also used for the ground clamp.
    pub bird_size: f64,
    /// Side length of the bird's collision box.
    pub bird_radius: f64,
}

impl GameSettings {
    pub fn default_settings() -> Self {
        Self {
            pipe_width: 100.0,
            min_pipe_height: 100.0,
            max_pipe_height: 500.0,
            pipe_spacing: 100.0,
            pipe_speed: 200.0,
            jump_velocity: -300.0,
            gravity: 1000.0,
            ground_height: 100.0,
            bird_size: 80.0,
            bird_radius: 13.0,
        }
    }

    /// Lowest y the bird may reach before it is standing on the ground.
    pub fn ground_line(&self, playfield: &Playfield) -> f64 {
        playfield.height - self.ground_height - self.bird_size / 2.0
    }

    /// Check the record against itself and the playfield.
    pub fn validate(&self, playfield: &Playfield) -> Result<(), SettingsError> {
        let fields = [
            ("pipe_width", self.pipe_width),
            ("min_pipe_height", self.min_pipe_height),
            ("max_pipe_height", self.max_pipe_height),
            ("pipe_spacing", self.pipe_spacing),
            ("pipe_speed", self.pipe_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("ground_height", self.ground_height),
            ("bird_size", self.bird_size),
            ("bird_radius", self.bird_radius),
            ("playfield.width", playfield.width),
            ("playfield.height", playfield.height),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite(name));
            }
        }

        let positive = [
            ("pipe_width", self.pipe_width),
            ("pipe_spacing", self.pipe_spacing),
            ("bird_size", self.bird_size),
            ("bird_radius", self.bird_radius),
            ("playfield.width", playfield.width),
            ("playfield.height", playfield.height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(SettingsError::NotPositive { name, value });
            }
        }

        if self.min_pipe_height < 0.0 {
            return Err(SettingsError::NegativePipeHeight(self.min_pipe_height));
        }
        if self.min_pipe_height > self.max_pipe_height {
            return Err(SettingsError::PipeHeightRange {
                min: self.min_pipe_height,
                max: self.max_pipe_height,
            });
        }

        let ground_line = self.ground_line(playfield);
        if ground_line <= 0.0 {
            return Err(SettingsError::NoFlightRoom {
                height: playfield.height,
                ground_line,
            });
        }

        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::default_settings()
    }
}

/// The logical screen the simulation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT)
    }
}
