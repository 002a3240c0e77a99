//! Input handling.
//!
//! Terminal events are first mapped to a [`GameAction`], then applied to the
//! game. The game itself only knows about `tap` and `reset`.

use crate::core::game_state::Game;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use rand::Rng;

/// Logical input, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start the run, or flap while it is running.
    Tap,
    /// Back to the start screen after a crash.
    Reset,
    Quit,
    None,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game.
    Quit,
}

/// Map a key press to an action.
pub fn map_key(key: KeyEvent) -> GameAction {
    if key.kind == KeyEventKind::Release {
        return GameAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameAction::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => GameAction::Tap,
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameAction::Quit,
        _ => GameAction::None,
    }
}

/// Map any terminal event to an action. A left click counts as a tap.
pub fn map_event(event: &Event) -> GameAction {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            GameAction::Tap
        }
        _ => GameAction::None,
    }
}

/// Apply an action to the game.
pub fn handle_action<R: Rng>(game: &mut Game<R>, action: GameAction) -> InputResult {
    match action {
        GameAction::Tap => game.tap(),
        GameAction::Reset => {
            game.reset();
        }
        GameAction::Quit => return InputResult::Quit,
        GameAction::None => {}
    }
    InputResult::Continue
}
