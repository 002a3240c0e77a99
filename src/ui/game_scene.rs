//! Play area rendering.
//!
//! The simulation runs in logical units (800 x 600 by default). Each terminal
//! cell samples the logical point at its center, so the scene scales to any
//! terminal size without touching the physics.

use crate::core::game_state::GameSnapshot;
use crate::core::settings::Playfield;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Pipe,
    Ground,
}

/// Maps terminal cells to logical playfield coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    cell_width: f64,
    cell_height: f64,
}

impl Viewport {
    pub fn new(playfield: &Playfield, cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cell_width: playfield.width / cols.max(1) as f64,
            cell_height: playfield.height / rows.max(1) as f64,
        }
    }

    /// Logical point at the center of a cell.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.cell_width,
            (row as f64 + 0.5) * self.cell_height,
        )
    }

    /// Cell containing a logical point, if it is on screen.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_width).floor();
        let row = (y / self.cell_height).floor();
        if col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

/// Classify the logical point `(x, y)`. Ground is drawn over the bottom pipe.
pub fn classify(snapshot: &GameSnapshot, x: f64, y: f64) -> CellKind {
    if y >= snapshot.ground_top() {
        CellKind::Ground
    } else if snapshot.top_pipe().contains(x, y) || snapshot.bottom_pipe().contains(x, y) {
        CellKind::Pipe
    } else {
        CellKind::Sky
    }
}

/// Bird glyph, tilted by vertical velocity.
pub fn bird_glyph(velocity_y: f64) -> &'static str {
    if velocity_y < -50.0 {
        "▲"
    } else if velocity_y > 250.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the bird, pipes and ground into `area`.
pub fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let viewport = Viewport::new(&snapshot.playfield, area.width, area.height);
    let bird_cell = viewport.cell_at(snapshot.bird.x, snapshot.bird.y);

    let pipe_style = Style::default().fg(Color::Green);
    let ground_style = Style::default().fg(Color::Rgb(160, 120, 60));
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            if bird_cell == Some((col, row)) {
                spans.push(Span::styled(bird_glyph(snapshot.bird.velocity_y), bird_style));
                continue;
            }
            let (x, y) = viewport.cell_center(col, row);
            let span = match classify(snapshot, x, y) {
                CellKind::Sky => Span::raw(" "),
                CellKind::Pipe => Span::styled("█", pipe_style),
                CellKind::Ground => Span::styled("▒", ground_style),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
