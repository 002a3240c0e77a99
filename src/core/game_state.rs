//! The game state machine and the run-scoped state it owns.
//!
//! ```text
//! Ready --start/tap--> Active --crash--> Stopped --reset--> Ready
//! ```
//!
//! There is no way back from `Stopped` to `Active` without passing through
//! `Ready`. The per-frame update lives in [`crate::core::tick`].

use super::settings::{GameSettings, Playfield};
use crate::collision::Rect;
use crate::error::SettingsError;
use crate::physics::Bird;
use crate::pipes::PipeTrack;
use crate::scoring::Score;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Which phase the game is in. The renderer picks its overlay from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the first tap. Nothing moves.
    #[default]
    Ready,
    /// Ticks advance the simulation.
    Active,
    /// The run has ended. State is frozen until reset.
    Stopped,
}

/// One game session: settings, the bird, the pipe pair and the score.
///
/// `R` is the random source used for gap heights. Production code uses the
/// default `StdRng`; tests inject a seeded generator through [`Game::with_rng`].
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    pub bird: Bird,
    pub pipes: PipeTrack,
    pub score: Score,
    pub(crate) state: GameState,
    pub(crate) settings: GameSettings,
    pub(crate) playfield: Playfield,
    /// Wall-clock time of the previous tick while `Active`.
    pub(crate) last_update: Option<Instant>,
    pub(crate) rng: R,
}

impl Game<StdRng> {
    /// Create a game seeded from OS entropy.
    pub fn new(
        settings: GameSettings,
        playfield: Playfield,
        high_score: u32,
    ) -> Result<Self, SettingsError> {
        Self::with_rng(settings, playfield, high_score, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game with an explicit random source.
    ///
    /// Fails if the settings are inconsistent, so a bad record never reaches
    /// the tick.
    pub fn with_rng(
        settings: GameSettings,
        playfield: Playfield,
        high_score: u32,
        mut rng: R,
    ) -> Result<Self, SettingsError> {
        settings.validate(&playfield)?;
        let pipes = PipeTrack::new(&settings, &mut rng);
        Ok(Self {
            bird: Bird::new(),
            pipes,
            score: Score::with_high_score(high_score),
            state: GameState::Ready,
            settings,
            playfield,
            last_update: None,
            rng,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn ground_line(&self) -> f64 {
        self.settings.ground_line(&self.playfield)
    }

    /// Begin a run using the current time as the tick baseline.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Begin a run with an explicit tick baseline. Only valid from `Ready`.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.state != GameState::Ready {
            return false;
        }
        self.state = GameState::Active;
        self.last_update = Some(now);
        true
    }

    /// The single gameplay input.
    pub fn tap(&mut self) {
        self.tap_at(Instant::now());
    }

    /// Starts the run from `Ready`; while `Active` overwrites the bird's
    /// velocity with the jump velocity; ignored once `Stopped`.
    pub fn tap_at(&mut self, now: Instant) {
        match self.state {
            GameState::Ready => {
                self.start_at(now);
            }
            GameState::Active => {
                self.bird.velocity_y = self.settings.jump_velocity;
            }
            GameState::Stopped => {}
        }
    }

    /// Put a stopped game back to `Ready` with fresh run state.
    ///
    /// The high score is kept. Returns `false` (and changes nothing) unless
    /// the game is `Stopped`.
    pub fn reset(&mut self) -> bool {
        if self.state != GameState::Stopped {
            return false;
        }
        self.bird = Bird::new();
        self.pipes = PipeTrack::new(&self.settings, &mut self.rng);
        self.score.reset_current();
        self.last_update = None;
        self.state = GameState::Ready;
        true
    }

    /// Copy of everything the renderer needs for one frame.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            bird: self.bird,
            pipes: self.pipes,
            score: self.score,
            settings: self.settings,
            playfield: self.playfield,
        }
    }
}

/// Read-only view of a game taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub bird: Bird,
    pub pipes: PipeTrack,
    pub score: Score,
    pub settings: GameSettings,
    pub playfield: Playfield,
}

impl GameSnapshot {
    pub fn top_pipe(&self) -> Rect {
        self.pipes.top_rect(&self.playfield, &self.settings)
    }

    pub fn bottom_pipe(&self) -> Rect {
        self.pipes.bottom_rect(&self.playfield, &self.settings)
    }

    /// y of the ground surface (where the ground strip is drawn).
    pub fn ground_top(&self) -> f64 {
        self.playfield.height - self.settings.ground_height
    }
}
