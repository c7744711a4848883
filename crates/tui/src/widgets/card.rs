//! Project card rendering widget.
//!
//! This module provides functions for rendering individual project cards
//! showing the title, assigned team size, and a truncated description.

use plank_protocol::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Returns the human-readable team size label for a card.
///
/// # Examples
///
/// ```
/// use plank_tui::widgets::people_label;
///
/// assert_eq!(people_label(1), "1 person assigned");
/// assert_eq!(people_label(5), "5 people assigned");
/// ```
#[must_use]
pub fn people_label(people: u32) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} people assigned")
    }
}

/// Renders a project card to the buffer.
///
/// The card displays the project title, the team size label, and a
/// truncated description within a bordered box. Selected cards get a
/// brighter border and a bold title.
///
/// # Arguments
///
/// * `project` - The project to render
/// * `is_selected` - Whether this card is currently selected
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// +--------------------+
/// | Title              |
/// | 5 people assigned  |
/// | description...     |
/// +--------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use plank_protocol::Project;
/// use plank_tui::widgets::render_project_card;
///
/// let project = Project::new("Build shed", "Weekend project", 5);
/// let area = Rect::new(0, 0, 25, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_project_card(&project, false, area, &mut buf);
/// ```
pub fn render_project_card(project: &Project, is_selected: bool, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style) = if is_selected {
        (
            Color::LightCyan,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Color::Gray, Style::default().fg(Color::White))
    };

    // Truncate text lines to fit available space
    let inner_width = area.width.saturating_sub(2) as usize;
    let title = truncate_string(&project.title, inner_width);
    let description = truncate_string(&project.description, inner_width);

    let content = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(Span::styled(
            people_label(project.people),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            description,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    card.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
