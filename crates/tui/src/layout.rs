//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components, plus the hit-testing helpers that map mouse
//! coordinates back to lists and cards.

use ratatui::layout::Rect;

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the project input form in rows.
///
/// One bordered row of input fields (border 2 rows, content 1 row).
pub const FORM_HEIGHT: u16 = 3;

/// Height of each project card in rows.
///
/// This includes the border (2 rows) and content (3 rows for title, team
/// size, and description).
pub const PROJECT_CARD_HEIGHT: u16 = 5;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The form
/// needs 3 rows and the lists need at least one card plus borders.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 2 lists; each list needs at least 20 characters for borders
/// and truncated titles to be readable.
pub const MIN_WIDTH: u16 = 40;

/// Number of lists on the board.
pub const LIST_COUNT: usize = 2;

/// Returns the index of the list under the given coordinates.
///
/// The board is split into two equal columns. Returns `None` if the
/// coordinates fall outside `board_area` or the area is degenerate.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use plank_tui::layout::list_at;
///
/// let board = Rect::new(0, 6, 80, 18);
/// assert_eq!(list_at(board, 5, 8), Some(0));
/// assert_eq!(list_at(board, 45, 8), Some(1));
/// assert_eq!(list_at(board, 5, 2), None);
/// ```
#[must_use]
pub fn list_at(board_area: Rect, column: u16, row: u16) -> Option<usize> {
    if !board_area.contains((column, row).into()) {
        return None;
    }
    let list_width = board_area.width / LIST_COUNT as u16;
    if list_width == 0 {
        return None;
    }
    let relative_x = column.saturating_sub(board_area.x);
    Some(((relative_x / list_width) as usize).min(LIST_COUNT - 1))
}

/// Returns the `(list, card)` indices under the given coordinates.
///
/// The card index is computed from the row position within the list body
/// (below the 1-row top border) and is a candidate only: the caller must
/// check it against the list's actual length.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use plank_tui::layout::card_at;
///
/// let board = Rect::new(0, 6, 80, 18);
/// // First card occupies rows 7..12 of the first list
/// assert_eq!(card_at(board, 5, 8), Some((0, 0)));
/// assert_eq!(card_at(board, 45, 13), Some((1, 1)));
/// ```
#[must_use]
pub fn card_at(board_area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let list = list_at(board_area, column, row)?;
    // Rows above the list body (the top border) hit no card
    if row <= board_area.y {
        return None;
    }
    let relative_y = row - board_area.y - 1;
    let card = (relative_y / PROJECT_CARD_HEIGHT) as usize;
    Some((list, card))
}
