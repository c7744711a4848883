//! Project list rendering widget.
//!
//! This module provides functions for rendering the two project lists with
//! their headers and project cards. A list marked as the current drop target
//! during a drag gesture is highlighted with a green border.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::layout::PROJECT_CARD_HEIGHT;
use crate::state::ListView;

use super::card::render_project_card;

/// Position of a list in the horizontal layout.
///
/// Used to determine which borders to render, enabling collapsed borders
/// between the two adjacent lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPosition {
    /// Left list - has left border with rounded corners, no right border.
    First,
    /// Right list - has both borders, T-connectors on the left edge.
    Last,
}

/// Border set for the left list: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─", // No corner, just continues the line
    bottom_left: "╰",
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the right list: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from the left list
    top_right: "╮",    // Rounded corner on outer edge
    bottom_left: "┴",  // T-connector joining from the left list
    bottom_right: "╯", // Rounded corner on outer edge
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders a single project list to the buffer.
///
/// A list displays its header (partition name and project count) followed by
/// a vertical stack of project cards. Empty lists show a "No projects"
/// placeholder message. The drop-target marking takes precedence over focus
/// for the border color.
///
/// # Arguments
///
/// * `view` - The list view to render
/// * `is_focused` - Whether this list currently has focus
/// * `selected_idx` - Index of the selected card within this list, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The list's position in the horizontal layout
///
/// # Layout
///
/// ```text
/// +------------------+
/// | Active (2)       |  <- Header with partition name and count
/// +------------------+
/// | +--------------+ |
/// | | Project 1    | |  <- Project cards
/// | | 5 people ... | |
/// | +--------------+ |
/// +------------------+
/// ```
pub fn render_list(
    view: &ListView,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: ListPosition,
) {
    // Drop target highlight wins over focus
    let border_style = if view.is_droppable() {
        Style::default().fg(Color::Green)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Create the list header
    let title = format!("{} ({})", view.status().display_name(), view.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse the border shared by the two lists: the left list renders no
    // right border, the right list provides it with T-connectors.
    let (borders, border_set) = match position {
        ListPosition::First => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_FIRST,
        ),
        ListPosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // Handle empty lists
    if view.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    // Calculate how many cards fit in the visible area
    let visible_cards = (inner_area.height / PROJECT_CARD_HEIGHT).max(1) as usize;

    // Determine scroll offset to keep the selected card visible
    let scroll_offset = calculate_scroll_offset(selected_idx, view.len(), visible_cards);

    // Create constraints for visible cards
    let card_count = view.len().min(visible_cards);
    let mut constraints: Vec<Constraint> = (0..card_count)
        .map(|_| Constraint::Length(PROJECT_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let card_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    // Render visible cards
    for (i, card_area) in card_areas.iter().take(card_count).enumerate() {
        let card_idx = scroll_offset + i;
        let Some(project) = view.items().get(card_idx) else {
            break;
        };

        let is_selected = is_focused && selected_idx == Some(card_idx);
        render_project_card(project, is_selected, *card_area, buf);
    }
}

/// Renders a placeholder message for empty lists.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No projects",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected card visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_cards: usize,
    visible_cards: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_cards <= visible_cards {
        return 0;
    }

    // Ensure the selected card is visible
    let max_offset = total_cards.saturating_sub(visible_cards);

    if selected < visible_cards / 2 {
        0
    } else {
        (selected.saturating_sub(visible_cards / 2)).min(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use plank_protocol::{Project, ProjectStatus};

    fn view_with(status: ProjectStatus, count: usize) -> ListView {
        let mut view = ListView::new(status);
        let projects: Vec<Project> = (0..count)
            .map(|i| {
                let mut p = Project::new(format!("Project {i}"), "desc", 5);
                p.set_status(status);
                p
            })
            .collect();
        view.refresh(&projects);
        view
    }

    #[test]
    fn render_empty_list_shows_placeholder() {
        let view = ListView::new(ProjectStatus::Active);
        let area = Rect::new(0, 0, 30, 15);
        let mut buf = Buffer::empty(area);

        render_list(&view, false, None, area, &mut buf, ListPosition::First);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Active (0)"));
        assert!(content.contains("No projects"));
    }

    #[test]
    fn render_list_with_projects() {
        let view = view_with(ProjectStatus::Finished, 2);
        let area = Rect::new(0, 0, 30, 15);
        let mut buf = Buffer::empty(area);

        render_list(&view, true, Some(0), area, &mut buf, ListPosition::Last);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Finished (2)"));
        assert!(content.contains("Project 0"));
        assert!(content.contains("Project 1"));
    }

    #[test]
    fn droppable_list_gets_green_border() {
        let mut view = ListView::new(ProjectStatus::Active);
        view.mark_droppable();

        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        render_list(&view, false, None, area, &mut buf, ListPosition::First);

        let corner = buf.cell((0, 0)).expect("cell should exist");
        assert_eq!(corner.style().fg, Some(Color::Green));
    }

    #[test]
    fn scroll_offset_no_selection() {
        assert_eq!(calculate_scroll_offset(None, 10, 3), 0);
    }

    #[test]
    fn scroll_offset_all_visible() {
        assert_eq!(calculate_scroll_offset(Some(2), 3, 5), 0);
    }

    #[test]
    fn scroll_offset_selection_at_start() {
        assert_eq!(calculate_scroll_offset(Some(0), 10, 3), 0);
    }

    #[test]
    fn scroll_offset_selection_in_middle() {
        let offset = calculate_scroll_offset(Some(5), 10, 3);
        assert!(offset > 0);
        assert!(offset <= 7);
    }

    #[test]
    fn render_list_narrow_area_does_not_panic() {
        let view = view_with(ProjectStatus::Active, 3);
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);

        render_list(&view, true, Some(2), area, &mut buf, ListPosition::First);
    }
}
