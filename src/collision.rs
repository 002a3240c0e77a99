//! Axis-aligned bounding boxes and the bird-versus-pipe test.

use crate::core::settings::{GameSettings, Playfield};
use crate::physics::Bird;
use crate::pipes::PipeTrack;

/// Rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `side` centered on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, side: f64) -> Self {
        Self::new(cx - side / 2.0, cy - side / 2.0, side, side)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment: the left and top edges are inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict overlap: rectangles that only share an edge do not intersect,
    /// and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Collision box of the bird: a square of side `bird_radius` around its center.
pub fn bird_box(bird: &Bird, settings: &GameSettings) -> Rect {
    Rect::centered(bird.x, bird.y, settings.bird_radius)
}

/// True if the bird overlaps either pipe of the pair.
pub fn check_collision(
    bird: &Bird,
    track: &PipeTrack,
    playfield: &Playfield,
    settings: &GameSettings,
) -> bool {
    let bird_rect = bird_box(bird, settings);
    bird_rect.intersects(&track.top_rect(playfield, settings))
        || bird_rect.intersects(&track.bottom_rect(playfield, settings))
}
