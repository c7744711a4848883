//! Project input form state management.
//!
//! This module provides state management for the project form: field focus
//! cycling, cursor-based text editing, and submit-time validation built on
//! the field descriptors from `plank-protocol`.

use plank_protocol::{NumberField, TextField};

/// The fields of the project form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Project title.
    #[default]
    Title,
    /// Project description.
    Description,
    /// Team size.
    People,
}

impl FormField {
    /// Returns the next field (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::People,
            Self::People => Self::Title,
        }
    }

    /// Returns the previous field (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::People,
            Self::Description => Self::Title,
            Self::People => Self::Description,
        }
    }

    /// Returns the display name for this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }

    /// Returns all fields in tab order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Title, Self::Description, Self::People]
    }
}

/// A single editable text buffer with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    value: String,
    cursor: usize,
}

impl FieldBuffer {
    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position (a byte offset into the value).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            // Find the previous character boundary
            let prev_boundary = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev_boundary);
            self.cursor = prev_boundary;
        }
    }

    /// Clears the buffer and resets the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// A validated form submission, ready to hand to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Trimmed project title.
    pub title: String,
    /// Trimmed project description.
    pub description: String,
    /// Parsed team size.
    pub people: u32,
}

/// Validation failures raised by [`FormState::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The title field is empty.
    #[error("please enter a title")]
    MissingTitle,

    /// The description field is empty.
    #[error("please enter a description")]
    MissingDescription,

    /// The people field does not parse as a non-negative number.
    #[error("people must be a whole number")]
    InvalidPeople,

    /// The team size is below the configured minimum.
    #[error("at least {min} people must be assigned")]
    TeamTooSmall {
        /// The configured minimum.
        min: u32,
    },

    /// The team size is above the configured maximum.
    #[error("at most {max} people can be assigned")]
    TeamTooLarge {
        /// The configured maximum.
        max: u32,
    },
}

/// State for the project input form.
///
/// Tracks three editable buffers and which one holds focus. Validation
/// happens at submit time via [`parse`](Self::parse); the buffers keep
/// their contents on failure so the user can correct them.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// The field that currently has focus.
    pub focused: FormField,
    title: FieldBuffer,
    description: FieldBuffer,
    people: FieldBuffer,
}

impl FormState {
    /// Creates an empty form with focus on the title field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffer for the given field.
    #[must_use]
    pub fn buffer(&self, field: FormField) -> &FieldBuffer {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// Moves focus to the previous field.
    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Inserts a character into the focused field.
    pub fn input_char(&mut self, ch: char) {
        self.focused_buffer_mut().insert_char(ch);
    }

    /// Deletes the character before the cursor in the focused field.
    pub fn backspace(&mut self) {
        self.focused_buffer_mut().backspace();
    }

    /// Clears all fields and returns focus to the title.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.focused = FormField::Title;
    }

    /// Validates the form contents against the configured team size bounds.
    ///
    /// Title and description must be non-empty after trimming; the people
    /// field must parse as a whole number within `[min_people, max_people]`.
    /// On success, returns a draft with trimmed text values. The buffers are
    /// left untouched either way; the caller clears them after a successful
    /// submission.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint, checked in field order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_tui::form_state::{FormError, FormState};
    ///
    /// let mut form = FormState::new();
    /// assert_eq!(form.parse(5, None), Err(FormError::MissingTitle));
    /// ```
    pub fn parse(
        &self,
        min_people: u32,
        max_people: Option<u32>,
    ) -> Result<ProjectDraft, FormError> {
        if !TextField::new(self.title.value()).required().is_valid() {
            return Err(FormError::MissingTitle);
        }
        if !TextField::new(self.description.value())
            .required()
            .is_valid()
        {
            return Err(FormError::MissingDescription);
        }

        let people: u32 = self
            .people
            .value()
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidPeople)?;

        let mut descriptor = NumberField::new(i64::from(people))
            .required()
            .min(i64::from(min_people));
        if let Some(max) = max_people {
            descriptor = descriptor.max(i64::from(max));
        }
        if !descriptor.is_valid() {
            if i64::from(people) < i64::from(min_people) {
                return Err(FormError::TeamTooSmall { min: min_people });
            }
            // The only other present bound is the maximum
            return Err(FormError::TeamTooLarge {
                max: max_people.unwrap_or(people),
            });
        }

        Ok(ProjectDraft {
            title: self.title.value().trim().to_string(),
            description: self.description.value().trim().to_string(),
            people,
        })
    }

    fn focused_buffer_mut(&mut self) -> &mut FieldBuffer {
        match self.focused {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    #[cfg(test)]
    fn type_into(&mut self, field: FormField, text: &str) {
        self.focused = field;
        for ch in text.chars() {
            self.input_char(ch);
        }
    }
}
