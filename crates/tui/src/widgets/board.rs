//! Board rendering widget.
//!
//! This module renders the two project lists side by side: active projects
//! on the left, finished projects on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::state::ListView;

use super::list::{ListPosition, render_list};

/// Renders the two project lists to the buffer.
///
/// The lists are arranged horizontally with equal widths. Card selection is
/// only shown in the focused list.
///
/// # Arguments
///
/// * `active` - The view over active projects (left)
/// * `finished` - The view over finished projects (right)
/// * `selected_list` - Index of the currently focused list (0 or 1)
/// * `selected_card` - Index of the selected card within the focused list, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// +----------------+----------------+
/// | Active (2)     | Finished (1)   |
/// +----------------+----------------+
/// | Project 1      | Project 3      |
/// | Project 2      |                |
/// +----------------+----------------+
/// ```
pub fn render_board(
    active: &ListView,
    finished: &ListView,
    selected_list: usize,
    selected_card: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    // Split into 2 equal columns for the lists
    let list_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, (view, position)) in [
        (active, ListPosition::First),
        (finished, ListPosition::Last),
    ]
    .into_iter()
    .enumerate()
    {
        let is_focused = selected_list == i;
        // Only show card selection in the focused list
        let card_selection = if is_focused { selected_card } else { None };

        render_list(view, is_focused, card_selection, list_areas[i], buf, position);
    }
}
