//! Run score and high score.

use crate::core::settings::{GameSettings, Playfield};
use crate::pipes::PipeTrack;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Pipes passed in the current run.
    pub current: u32,
    /// Best run so far. Never decreases.
    pub high: u32,
}

impl Score {
    pub fn with_high_score(high: u32) -> Self {
        Self { current: 0, high }
    }

    /// Start a new run. The high score is kept.
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}

/// What the scorer did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpdate {
    Unchanged,
    Scored { new_high_score: bool },
}

/// Count the pair once its trailing edge is behind the bird.
///
/// The `passed` flag latches after scoring and only clears once the pair's
/// leading edge is back in front of the bird (after a recycle), so a pair is
/// never counted twice however many ticks it spends behind the bird.
pub fn update_score(
    score: &mut Score,
    track: &mut PipeTrack,
    bird_x: f64,
    playfield: &Playfield,
    settings: &GameSettings,
) -> ScoreUpdate {
    if track.right_edge(playfield, settings) < bird_x && !track.passed {
        score.current += 1;
        track.passed = true;
        let new_high_score = score.current > score.high;
        if new_high_score {
            score.high = score.current;
        }
        ScoreUpdate::Scored { new_high_score }
    } else {
        if track.left_edge(playfield) > bird_x {
            track.passed = false;
        }
        ScoreUpdate::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRD_X: f64 = 100.0;

    fn track_at(offset: f64, passed: bool) -> PipeTrack {
        PipeTrack {
            offset,
            top_gap_height: 250.0,
            passed,
        }
    }

    #[test]
    fn test_no_score_while_pipe_ahead() {
        let mut score = Score::default();
        let mut track = track_at(-100.0, false);
        let update = update_score(
            &mut score,
            &mut track,
            BIRD_X,
            &Playfield::default(),
            &GameSettings::default(),
        );
        assert_eq!(update, ScoreUpdate::Unchanged);
        assert_eq!(score.current, 0);
    }

    #[test]
    fn test_scores_once_trailing_edge_passes() {
        let mut score = Score::default();
        // Trailing edge at 800 - 801 + 100 = 99
        let mut track = track_at(-801.0, false);
        let update = update_score(
            &mut score,
            &mut track,
            BIRD_X,
            &Playfield::default(),
            &GameSettings::default(),
        );
        assert_eq!(
            update,
            ScoreUpdate::Scored {
                new_high_score: true
            }
        );
        assert_eq!(score.current, 1);
        assert_eq!(score.high, 1);
        assert!(track.passed);
    }

    #[test]
    fn test_trailing_edge_on_bird_does_not_score() {
        let mut score = Score::default();
        let mut track = track_at(-800.0, false);
        update_score(
            &mut score,
            &mut track,
            BIRD_X,
            &Playfield::default(),
            &GameSettings::default(),
        );
        assert_eq!(score.current, 0);
    }

    #[test]
    fn test_flag_suppresses_repeat_scoring() {
        let mut score = Score::default();
        let mut track = track_at(-810.0, false);
        let playfield = Playfield::default();
        let settings = GameSettings::default();
        for _ in 0..20 {
            update_score(&mut score, &mut track, BIRD_X, &playfield, &settings);
            track.offset -= 2.0;
        }
        assert_eq!(score.current, 1);
    }

    #[test]
    fn test_flag_clears_when_pipe_back_in_front() {
        let mut score = Score::default();
        let mut track = track_at(0.0, true);
        update_score(
            &mut score,
            &mut track,
            BIRD_X,
            &Playfield::default(),
            &GameSettings::default(),
        );
        assert!(!track.passed);
        assert_eq!(score.current, 0);
    }

    #[test]
    fn test_flag_kept_while_pipe_overlaps_bird() {
        let mut score = Score::default();
        // Left edge at 50, right edge at 150: bird is between them
        let mut track = track_at(-750.0, true);
        update_score(
            &mut score,
            &mut track,
            BIRD_X,
            &Playfield::default(),
            &GameSettings::default(),
        );
        assert!(track.passed);
    }

    #[test]
    fn test_high_score_not_raised_below_best() {
        let mut score = Score::with_high_score(10);
        let mut track = track_at(-850.0, false);
        let update = update_score(
            &mut score,
            &mut track,
            BIRD_X,
            &Playfield::default(),
            &GameSettings::default(),
        );
        assert_eq!(
            update,
            ScoreUpdate::Scored {
                new_high_score: false
            }
        );
        assert_eq!(score.current, 1);
        assert_eq!(score.high, 10);
    }

    #[test]
    fn test_reset_current_keeps_high() {
        let mut score = Score {
            current: 7,
            high: 9,
        };
        score.reset_current();
        assert_eq!(score, Score::with_high_score(9));
    }
}
