//! Simulation core: settings, the state machine and the per-frame tick.

pub mod constants;
pub mod game_state;
pub mod settings;
pub mod tick;

pub use constants::*;
pub use game_state::*;
pub use settings::*;
pub use tick::*;
