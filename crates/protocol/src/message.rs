//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use plank_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left list.
    NavigateLeft,
    /// Move selection to the right list.
    NavigateRight,
    /// Move selection up within the current list.
    NavigateUp,
    /// Move selection down within the current list.
    NavigateDown,
    /// Escape: leave the form or clear the selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Move focus to the input form.
    FocusForm,

    // --- Form messages ---
    /// Move to the next form field.
    FormNextField,
    /// Move to the previous form field.
    FormPrevField,
    /// Input a character into the focused form field.
    FormInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the character before the cursor in the focused form field.
    FormBackspace,
    /// Validate the form and create a project.
    FormSubmit,

    // --- Drag gesture messages ---
    /// Mouse button pressed at coordinates (column, row); starts a drag
    /// when the press lands on a project card.
    DragStart {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Mouse moved with the button held at coordinates (column, row).
    DragMove {
        /// Column (x coordinate) of the cursor.
        column: u16,
        /// Row (y coordinate) of the cursor.
        row: u16,
    },
    /// Mouse button released at coordinates (column, row); completes a drop.
    DragDrop {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::FormSubmit.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is a form-related action.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::Message;
    ///
    /// assert!(Message::FormSubmit.is_form());
    /// assert!(Message::FormInput { ch: 'a' }.is_form());
    /// assert!(!Message::NavigateLeft.is_form());
    /// ```
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FocusForm
                | Self::FormNextField
                | Self::FormPrevField
                | Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormSubmit
        )
    }

    /// Returns `true` if this message belongs to the drag gesture protocol.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::Message;
    ///
    /// assert!(Message::DragStart { column: 0, row: 0 }.is_drag());
    /// assert!(!Message::Quit.is_drag());
    /// ```
    #[must_use]
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            Self::DragStart { .. } | Self::DragMove { .. } | Self::DragDrop { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Escape.is_navigation());
        assert!(!Message::FormSubmit.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::ToggleHelp.is_terminating());
    }

    #[test]
    fn message_form_detection() {
        assert!(Message::FocusForm.is_form());
        assert!(Message::FormNextField.is_form());
        assert!(Message::FormPrevField.is_form());
        assert!(Message::FormInput { ch: 'a' }.is_form());
        assert!(Message::FormBackspace.is_form());
        assert!(Message::FormSubmit.is_form());
        assert!(!Message::NavigateLeft.is_form());
        assert!(!Message::Quit.is_form());
    }

    #[test]
    fn message_drag_detection() {
        assert!(Message::DragStart { column: 1, row: 2 }.is_drag());
        assert!(Message::DragMove { column: 1, row: 2 }.is_drag());
        assert!(Message::DragDrop { column: 1, row: 2 }.is_drag());
        assert!(!Message::NavigateLeft.is_drag());
        assert!(!Message::FormSubmit.is_drag());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::NavigateLeft,
            Message::NavigateRight,
            Message::NavigateUp,
            Message::NavigateDown,
            Message::Escape,
            Message::Quit,
            Message::ToggleHelp,
            Message::FocusForm,
            Message::FormNextField,
            Message::FormPrevField,
            Message::FormInput { ch: 'x' },
            Message::FormBackspace,
            Message::FormSubmit,
            Message::DragStart { column: 10, row: 5 },
            Message::DragMove { column: 11, row: 6 },
            Message::DragDrop { column: 12, row: 7 },
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::NavigateLeft).expect("serialize");
        assert_eq!(json, r#""navigate_left""#);

        let json = serde_json::to_string(&Message::FormSubmit).expect("serialize");
        assert_eq!(json, r#""form_submit""#);

        let json = serde_json::to_string(&Message::FocusForm).expect("serialize");
        assert_eq!(json, r#""focus_form""#);
    }
}
