//! Per-frame update.
//!
//! [`game_tick`] advances an `Active` game by a measured amount of time and
//! returns a [`TickResult`] describing what happened. The tick never performs
//! IO: persisting a new high score, logging and drawing are the caller's job.

use super::game_state::{Game, GameState};
use crate::collision::check_collision;
use crate::physics::{self, BoundaryContact};
use crate::pipes;
use crate::scoring::{update_score, ScoreUpdate};
use rand::Rng;
use std::time::Instant;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Ceiling,
    Ground,
    Pipe,
}

/// A single event produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// The pipe pair scrolled off screen and came back with a new gap.
    PipeRecycled { top_gap_height: f64 },

    /// The bird passed a pipe pair.
    Scored { score: u32 },

    /// The current score went above the previous best.
    NewHighScore { high_score: u32 },

    /// The run ended this tick.
    Crashed { cause: CrashCause, score: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Events produced during this tick, in pipeline order.
    pub events: Vec<TickEvent>,

    /// True if the high score rose and should be persisted.
    pub high_score_changed: bool,
}

impl TickResult {
    pub fn crash_cause(&self) -> Option<CrashCause> {
        self.events.iter().find_map(|event| match event {
            TickEvent::Crashed { cause, .. } => Some(*cause),
            _ => None,
        })
    }

    pub fn scored(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, TickEvent::Scored { .. }))
    }
}

/// Advance the game by `elapsed_seconds`.
///
/// Does nothing unless the game is `Active`. A non-positive or non-finite
/// elapsed time is treated as an empty tick. Every stage runs even when an
/// earlier stage ended the run; the transition to `Stopped` happens last.
pub fn game_tick<R: Rng>(game: &mut Game<R>, elapsed_seconds: f64) -> TickResult {
    let mut result = TickResult::default();

    if game.state != GameState::Active {
        return result;
    }
    if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
        return result;
    }

    let settings = game.settings;
    let playfield = game.playfield;

    // ── 1. Bird motion ──────────────────────────────────────────
    physics::apply_gravity(&mut game.bird, settings.gravity, elapsed_seconds);
    physics::integrate_position(&mut game.bird, elapsed_seconds);
    let contact =
        physics::clamp_to_boundaries(&mut game.bird, settings.ground_line(&playfield));

    // ── 2. Pipe scrolling ───────────────────────────────────────
    pipes::advance(&mut game.pipes, settings.pipe_speed, elapsed_seconds);
    if pipes::recycle_if_needed(&mut game.pipes, &playfield, &settings, &mut game.rng) {
        result.events.push(TickEvent::PipeRecycled {
            top_gap_height: game.pipes.top_gap_height,
        });
    }

    // ── 3. Pipe collision ───────────────────────────────────────
    let hit_pipe = check_collision(&game.bird, &game.pipes, &playfield, &settings);

    // ── 4. Scoring ──────────────────────────────────────────────
    if let ScoreUpdate::Scored { new_high_score } = update_score(
        &mut game.score,
        &mut game.pipes,
        game.bird.x,
        &playfield,
        &settings,
    ) {
        result.events.push(TickEvent::Scored {
            score: game.score.current,
        });
        if new_high_score {
            result.events.push(TickEvent::NewHighScore {
                high_score: game.score.high,
            });
            result.high_score_changed = true;
        }
    }

    // ── 5. Terminal conditions ──────────────────────────────────
    let cause = match contact {
        BoundaryContact::Ceiling => Some(CrashCause::Ceiling),
        BoundaryContact::Ground => Some(CrashCause::Ground),
        BoundaryContact::None if hit_pipe => Some(CrashCause::Pipe),
        BoundaryContact::None => None,
    };
    if let Some(cause) = cause {
        game.state = GameState::Stopped;
        game.last_update = None;
        result.events.push(TickEvent::Crashed {
            cause,
            score: game.score.current,
        });
    }

    result
}

impl<R: Rng> Game<R> {
    /// Advance by an explicit elapsed time. See [`game_tick`].
    pub fn tick(&mut self, elapsed_seconds: f64) -> TickResult {
        game_tick(self, elapsed_seconds)
    }

    /// Advance by the wall-clock time since the previous tick (or since
    /// `start`), then move the baseline to `now`.
    ///
    /// Late or missed timer callbacks just produce a larger step, so physics
    /// stays in sync with real time whatever the frame pacing.
    pub fn tick_at(&mut self, now: Instant) -> TickResult {
        if self.state != GameState::Active {
            return TickResult::default();
        }
        let Some(last) = self.last_update else {
            self.last_update = Some(now);
            return TickResult::default();
        };
        let elapsed = now.saturating_duration_since(last).as_secs_f64();
        self.last_update = Some(now);
        game_tick(self, elapsed)
    }
}
