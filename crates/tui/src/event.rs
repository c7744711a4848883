//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keyboard events are interpreted according to the
//! current focus (form vs. board); mouse events always drive the drag
//! protocol.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use plank_protocol::Message;

use crate::state::Focus;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Keyboard events are dispatched by focus: the form captures text input,
/// the board handles navigation. Mouse events map to drag messages
/// regardless of focus.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, focus: Focus) -> Option<Message> {
    match event {
        Event::Key(key) => match focus {
            Focus::Form => key_to_form_message(*key),
            Focus::Board => key_to_message(*key),
        },
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to a drag message.
///
/// Only the left button participates in the drag gesture: press starts it,
/// motion-with-button-held moves it, release drops it.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::DragStart {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::DragMove {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::DragDrop {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to a board-mode message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (close overlay or clear selection) |
/// | `Left` | Navigate left |
/// | `Right` | Navigate right |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `Tab` | Focus the project form |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        // Escape (contextual: close overlay or clear selection)
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Focus and overlays
        KeyCode::Tab => Some(Message::FocusForm),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a form-mode message.
///
/// This function is used while the project form has focus, so most printable
/// characters become text input rather than shortcuts.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Leave the form |
/// | `Tab` | Next field |
/// | `Shift+Tab` | Previous field |
/// | `Enter` | Submit |
/// | `Backspace` | Delete character |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first (always works)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::FormNextField),
        KeyCode::BackTab => Some(Message::FormPrevField),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent, MouseEventKind};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        // Only Ctrl+C quits
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        // 'q' is not a quit key
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn escape_key() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn vim_keys_not_mapped() {
        // Vim-style hjkl should NOT be mapped
        assert_eq!(key_to_message(make_key(KeyCode::Char('h'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('j'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('k'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('l'))), None);
    }

    #[test]
    fn tab_focuses_form() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab)),
            Some(Message::FocusForm)
        );
    }

    #[test]
    fn help_key() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn form_mode_captures_text() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('a'))),
            Some(Message::FormInput { ch: 'a' })
        );
        // Even '?' is text input while the form has focus
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('?'))),
            Some(Message::FormInput { ch: '?' })
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Backspace)),
            Some(Message::FormBackspace)
        );
    }

    #[test]
    fn form_mode_field_cycling() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Tab)),
            Some(Message::FormNextField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::BackTab)),
            Some(Message::FormPrevField)
        );
    }

    #[test]
    fn form_mode_submit_and_escape() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Enter)),
            Some(Message::FormSubmit)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn form_mode_ctrl_c_still_quits() {
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
    }

    #[test]
    fn mouse_left_press_starts_drag() {
        let mouse = make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::DragStart { column: 10, row: 5 })
        );
    }

    #[test]
    fn mouse_drag_moves_drag() {
        let mouse = make_mouse(MouseEventKind::Drag(MouseButton::Left), 12, 6);
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::DragMove { column: 12, row: 6 })
        );
    }

    #[test]
    fn mouse_release_drops_drag() {
        let mouse = make_mouse(MouseEventKind::Up(MouseButton::Left), 50, 8);
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::DragDrop { column: 50, row: 8 })
        );
    }

    #[test]
    fn mouse_right_button_ignored() {
        let mouse = make_mouse(MouseEventKind::Down(MouseButton::Right), 10, 5);
        assert_eq!(mouse_to_message(&mouse), None);

        let mouse = make_mouse(MouseEventKind::Drag(MouseButton::Right), 10, 5);
        assert_eq!(mouse_to_message(&mouse), None);
    }

    #[test]
    fn mouse_move_without_button_ignored() {
        let mouse = make_mouse(MouseEventKind::Moved, 10, 5);
        assert_eq!(mouse_to_message(&mouse), None);
    }

    #[test]
    fn event_to_message_respects_focus() {
        let key_event = Event::Key(make_key(KeyCode::Char('?')));

        assert_eq!(
            event_to_message(&key_event, Focus::Board),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            event_to_message(&key_event, Focus::Form),
            Some(Message::FormInput { ch: '?' })
        );
    }

    #[test]
    fn event_to_message_handles_mouse_in_any_focus() {
        let mouse_event = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Left), 15, 8));
        assert_eq!(
            event_to_message(&mouse_event, Focus::Form),
            Some(Message::DragStart { column: 15, row: 8 })
        );
        assert_eq!(
            event_to_message(&mouse_event, Focus::Board),
            Some(Message::DragStart { column: 15, row: 8 })
        );
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(event_to_message(&resize_event, Focus::Board), None);
    }
}
