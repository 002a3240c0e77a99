//! Shared UI pieces: status bar and centered overlay boxes.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area at the bottom of the game panel
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Space]", "Flap"), ("[Q]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a bordered box in the middle of `area` with a bold title line
/// followed by `lines`. The play area stays visible around it.
pub fn render_overlay_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    lines: Vec<Line<'static>>,
) {
    let content_height = lines.len() as u16 + 2;
    let content_width = lines
        .iter()
        .map(|line| line.width() as u16)
        .chain(std::iter::once(title.chars().count() as u16))
        .max()
        .unwrap_or(0);
    let box_area = centered_rect(area, content_width + 6, content_height + 2);
    if box_area.width < 3 || box_area.height < 3 {
        return;
    }

    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(lines);

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered_rect(area, 40, 40), area);
    }
}
