//! Project form rendering widget.
//!
//! This module renders the three-field input row used to create projects:
//! title, description, and team size.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::form_state::{FormField, FormState};

/// Renders the project input form to the buffer.
///
/// The three fields are laid out side by side, each in its own bordered
/// block titled with the field name. The focused field (when the form has
/// focus) gets a cyan border and a cursor marker at the input position.
///
/// # Arguments
///
/// * `form` - The form state to render
/// * `has_focus` - Whether the form currently receives keyboard input
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// +- Title -----+- Description -----+- People -+
/// | Build shed  | Weekend project   | 5        |
/// +-------------+-------------------+----------+
/// ```
pub fn render_form(form: &FormState, has_focus: bool, area: Rect, buf: &mut Buffer) {
    let field_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(45),
            Constraint::Percentage(20),
        ])
        .split(area);

    for (field, field_area) in FormField::all().iter().zip(field_areas.iter()) {
        let is_focused = has_focus && form.focused == *field;
        render_field(form, *field, is_focused, *field_area, buf);
    }
}

/// Renders a single form field in a bordered block.
fn render_field(form: &FormState, field: FormField, is_focused: bool, area: Rect, buf: &mut Buffer) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.name()), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let buffer = form.buffer(field);
    let mut spans = vec![Span::styled(
        buffer.value().to_string(),
        Style::default().fg(Color::White),
    )];
    if is_focused {
        // Block cursor at the input position
        spans.push(Span::styled(
            "█",
            Style::default().fg(Color::Cyan),
        ));
    }

    Paragraph::new(Line::from(spans)).block(block).render(area, buf);
}
