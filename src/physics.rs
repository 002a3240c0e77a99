//! Bird motion: gravity, position integration and the screen boundaries.
//!
//! Coordinates are screen-style: y grows downward, so positive velocity
//! means falling.

use crate::core::constants::{BIRD_START_X, BIRD_START_Y};
use serde::{Deserialize, Serialize};

/// Bird position and vertical velocity. The x coordinate never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub velocity_y: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            velocity_y: 0.0,
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Which boundary, if any, the bird touched this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    None,
    Ceiling,
    Ground,
}

impl BoundaryContact {
    pub fn is_terminal(self) -> bool {
        self != BoundaryContact::None
    }
}

/// `velocity += gravity * dt`. No damping and no terminal velocity.
pub fn apply_gravity(bird: &mut Bird, gravity: f64, elapsed_seconds: f64) {
    bird.velocity_y += gravity * elapsed_seconds;
}

/// `y += velocity * dt`.
pub fn integrate_position(bird: &mut Bird, elapsed_seconds: f64) {
    bird.y += bird.velocity_y * elapsed_seconds;
}

/// Keep the bird within `[0, ground_line]` and report which edge it touched.
///
/// Reaching the ground also zeroes the velocity. Touching either edge is a
/// terminal contact, including the ceiling, which is clamped as well.
pub fn clamp_to_boundaries(bird: &mut Bird, ground_line: f64) -> BoundaryContact {
    if bird.y <= 0.0 {
        bird.y = 0.0;
    }
    if bird.y > ground_line {
        bird.y = ground_line;
        bird.velocity_y = 0.0;
    }

    if bird.y >= ground_line {
        BoundaryContact::Ground
    } else if bird.y <= 0.0 {
        BoundaryContact::Ceiling
    } else {
        BoundaryContact::None
    }
}
