//! The scrolling pipe pair.
//!
//! There is only ever one pair on screen. It scrolls left from the right
//! edge; once fully past the left edge it is moved back and given a new gap.

use crate::collision::Rect;
use crate::core::settings::{GameSettings, Playfield};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Horizontal offset and gap height of the pipe pair.
///
/// `offset` is 0 when the pair's left edge sits on the right edge of the
/// playfield and decreases as it scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeTrack {
    pub offset: f64,
    /// Height of the top pipe, i.e. where the gap begins.
    pub top_gap_height: f64,
    /// Set once the current pair has been scored.
    pub passed: bool,
}

impl PipeTrack {
    /// A fresh pair at the right edge with a random gap height.
    pub fn new<R: Rng>(settings: &GameSettings, rng: &mut R) -> Self {
        Self {
            offset: 0.0,
            top_gap_height: random_gap_height(settings, rng),
            passed: false,
        }
    }

    /// Screen x of the pair's left edge.
    pub fn left_edge(&self, playfield: &Playfield) -> f64 {
        playfield.width + self.offset
    }

    /// Screen x of the pair's right (trailing) edge.
    pub fn right_edge(&self, playfield: &Playfield, settings: &GameSettings) -> f64 {
        self.left_edge(playfield) + settings.pipe_width
    }

    pub fn top_rect(&self, playfield: &Playfield, settings: &GameSettings) -> Rect {
        Rect::new(
            self.left_edge(playfield),
            0.0,
            settings.pipe_width,
            self.top_gap_height,
        )
    }

    pub fn bottom_rect(&self, playfield: &Playfield, settings: &GameSettings) -> Rect {
        let y = self.top_gap_height + settings.pipe_spacing;
        Rect::new(
            self.left_edge(playfield),
            y,
            settings.pipe_width,
            playfield.height - y,
        )
    }
}

/// Draw a gap height uniformly from `[min_pipe_height, max_pipe_height]`.
pub fn random_gap_height<R: Rng>(settings: &GameSettings, rng: &mut R) -> f64 {
    rng.gen_range(settings.min_pipe_height..=settings.max_pipe_height)
}

/// Scroll the pair left by `pipe_speed * dt`.
pub fn advance(track: &mut PipeTrack, pipe_speed: f64, elapsed_seconds: f64) {
    track.offset -= pipe_speed * elapsed_seconds;
}

/// Move the pair back to the right edge once it is fully off screen.
///
/// Returns `true` if the pair was recycled.
pub fn recycle_if_needed<R: Rng>(
    track: &mut PipeTrack,
    playfield: &Playfield,
    settings: &GameSettings,
    rng: &mut R,
) -> bool {
    if track.offset <= -(playfield.width + settings.pipe_width) {
        track.offset = 0.0;
        track.top_gap_height = random_gap_height(settings, rng);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_new_track_starts_at_right_edge() {
        let settings = GameSettings::default();
        let track = PipeTrack::new(&settings, &mut create_test_rng());
        assert_eq!(track.offset, 0.0);
        assert!(!track.passed);
        assert!((100.0..=500.0).contains(&track.top_gap_height));
        assert_eq!(track.left_edge(&Playfield::default()), 800.0);
    }

    #[test]
    fn test_advance_moves_left() {
        let settings = GameSettings::default();
        let mut track = PipeTrack::new(&settings, &mut create_test_rng());
        advance(&mut track, settings.pipe_speed, 0.1);
        assert_eq!(track.offset, -20.0);
        advance(&mut track, settings.pipe_speed, 0.5);
        assert_eq!(track.offset, -120.0);
    }

    #[test]
    fn test_no_recycle_before_threshold() {
        let settings = GameSettings::default();
        let playfield = Playfield::default();
        let mut rng = create_test_rng();
        let mut track = PipeTrack::new(&settings, &mut rng);
        track.offset = -899.9;
        let gap = track.top_gap_height;
        assert!(!recycle_if_needed(&mut track, &playfield, &settings, &mut rng));
        assert_eq!(track.offset, -899.9);
        assert_eq!(track.top_gap_height, gap);
    }

    #[test]
    fn test_recycle_at_exact_threshold() {
        let settings = GameSettings::default();
        let playfield = Playfield::default();
        let mut rng = create_test_rng();
        let mut track = PipeTrack::new(&settings, &mut rng);
        track.offset = -900.0;
        assert!(recycle_if_needed(&mut track, &playfield, &settings, &mut rng));
        assert_eq!(track.offset, 0.0);
        assert!((100.0..=500.0).contains(&track.top_gap_height));
    }

    #[test]
    fn test_recycled_heights_stay_in_range() {
        let settings = GameSettings::default();
        let playfield = Playfield::default();
        let mut rng = create_test_rng();
        let mut track = PipeTrack::new(&settings, &mut rng);
        for _ in 0..500 {
            track.offset = -1000.0;
            assert!(recycle_if_needed(&mut track, &playfield, &settings, &mut rng));
            assert!(track.top_gap_height >= settings.min_pipe_height);
            assert!(track.top_gap_height <= settings.max_pipe_height);
        }
    }

    #[test]
    fn test_fixed_gap_when_min_equals_max() {
        let settings = GameSettings {
            min_pipe_height: 220.0,
            max_pipe_height: 220.0,
            ..GameSettings::default()
        };
        let track = PipeTrack::new(&settings, &mut create_test_rng());
        assert_eq!(track.top_gap_height, 220.0);
    }

    #[test]
    fn test_pipe_rects() {
        let settings = GameSettings::default();
        let playfield = Playfield::default();
        let track = PipeTrack {
            offset: -300.0,
            top_gap_height: 200.0,
            passed: false,
        };
        assert_eq!(
            track.top_rect(&playfield, &settings),
            Rect::new(500.0, 0.0, 100.0, 200.0)
        );
        assert_eq!(
            track.bottom_rect(&playfield, &settings),
            Rect::new(500.0, 300.0, 100.0, 300.0)
        );
        assert_eq!(track.right_edge(&playfield, &settings), 600.0);
    }
}
