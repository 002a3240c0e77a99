pub mod game_common;
pub mod game_scene;

use crate::core::game_state::{GameSnapshot, GameState};
use game_common::{render_overlay_box, render_status_bar};
use game_scene::render_play_area;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders},
    Frame,
};

/// Draw one frame from a snapshot of the game.
pub fn draw_game(frame: &mut Frame, snapshot: &GameSnapshot) {
    let area = frame.size();

    let score_title = Title::from(Span::styled(
        format!(" {} ", snapshot.score.current),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    let block = Block::default()
        .title(" Flappy Bird ")
        .title(score_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], snapshot);
    render_status(frame, chunks[1], snapshot);

    match snapshot.state {
        GameState::Ready => render_ready_overlay(frame, chunks[0], snapshot),
        GameState::Stopped => render_result_overlay(frame, chunks[0], snapshot),
        GameState::Active => {}
    }
}

fn render_status(frame: &mut Frame, area: ratatui::layout::Rect, snapshot: &GameSnapshot) {
    match snapshot.state {
        GameState::Ready => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up/Click]", "Start"), ("[Q]", "Quit")],
        ),
        GameState::Active => render_status_bar(
            frame,
            area,
            &format!(
                "Score: {}   Best: {}",
                snapshot.score.current, snapshot.score.high
            ),
            Color::Green,
            &[("[Space/Up/Click]", "Flap"), ("[Q]", "Quit")],
        ),
        GameState::Stopped => render_status_bar(
            frame,
            area,
            "Crashed!",
            Color::Red,
            &[("[R]", "Reset"), ("[Q]", "Quit")],
        ),
    }
}

fn render_ready_overlay(frame: &mut Frame, area: ratatui::layout::Rect, snapshot: &GameSnapshot) {
    let lines = vec![
        Line::from(Span::styled(
            "▶  Press Space to play",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Best: {}", snapshot.score.high),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_overlay_box(frame, area, "FLAPPY BIRD", Color::Yellow, lines);
}

fn render_result_overlay(frame: &mut Frame, area: ratatui::layout::Rect, snapshot: &GameSnapshot) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Score: {}", snapshot.score.current),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Best: {}", snapshot.score.high),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Reset",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_overlay_box(frame, area, "Game Over", Color::Red, lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::Game;
    use crate::core::settings::{GameSettings, Playfield};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(snapshot: &GameSnapshot, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| draw_game(frame, snapshot))
            .expect("test backend never fails");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn create_test_game() -> Game<ChaCha8Rng> {
        Game::with_rng(
            GameSettings::default(),
            Playfield::default(),
            12,
            ChaCha8Rng::seed_from_u64(5),
        )
        .expect("default settings are valid")
    }

    #[test]
    fn test_ready_screen_shows_prompt() {
        let game = create_test_game();
        let text = render_to_text(&game.snapshot(), 80, 30);
        assert!(text.contains("FLAPPY BIRD"));
        assert!(text.contains("Best: 12"));
    }

    #[test]
    fn test_result_screen_shows_scores() {
        let mut game = create_test_game();
        game.tap();
        game.score.current = 3;
        game.bird.y = 459.0;
        game.bird.velocity_y = 400.0;
        game.tick(0.1);
        assert_eq!(game.state(), GameState::Stopped);

        let text = render_to_text(&game.snapshot(), 80, 30);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Score: 3"));
        assert!(text.contains("Best: 12"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let game = create_test_game();
        for (w, h) in [(1, 1), (2, 2), (5, 3), (10, 4)] {
            render_to_text(&game.snapshot(), w, h);
        }
    }
}
