//! Validation alert overlay widget.
//!
//! This module renders the modal overlay shown when a form submission fails
//! validation. The overlay blocks other interactions until dismissed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;

/// The height of the alert overlay panel.
const ALERT_HEIGHT: u16 = 5;

/// Minimum width of the alert overlay panel.
const ALERT_MIN_WIDTH: u16 = 30;

/// Renders a centered alert overlay with a validation message.
///
/// The overlay is rendered on top of the existing content. Any key press
/// dismisses it (handled by the app update loop).
///
/// # Arguments
///
/// * `message` - The validation failure to display
/// * `area` - The full terminal area (the overlay will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use plank_tui::widgets::render_alert_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_alert_overlay("please enter a title", area, &mut buf);
/// ```
pub fn render_alert_overlay(message: &str, area: Rect, buf: &mut Buffer) {
    // Size the panel to the message, never wider than the terminal itself
    let width = (message.len() as u16 + 6)
        .max(ALERT_MIN_WIDTH)
        .min(area.width);
    let popup_area = centered_rect(width, ALERT_HEIGHT, area);

    // Clear the area behind the popup for a clean look
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Invalid input ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .render(popup_area, buf);
}
