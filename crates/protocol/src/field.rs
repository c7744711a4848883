//! Field validation descriptors.
//!
//! This module defines the value-plus-constraints descriptors that the input
//! form builds for each field before submission. A descriptor is a pure value
//! type: it is constructed ad hoc for one validation call and discarded.
//!
//! Constraint presence is modeled with `Option`, so a bound of `0` is a real
//! bound and is enforced like any other. All present constraints must hold
//! (logical AND); bounds are inclusive.

use serde::{Deserialize, Serialize};

/// A text value with optional constraints.
///
/// # Examples
///
/// ```
/// use plank_protocol::TextField;
///
/// assert!(!TextField::new("").required().is_valid());
/// assert!(!TextField::new("ab").min_length(3).is_valid());
/// assert!(TextField::new("abc").min_length(3).is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    /// The value being validated.
    pub value: String,
    /// Whether the trimmed value must be non-empty.
    #[serde(default)]
    pub required: bool,
    /// Minimum length (in characters) of the trimmed value, if constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length (in characters) of the trimmed value, if constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextField {
    /// Creates an unconstrained descriptor for the given value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Requires the trimmed value to be non-empty.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrains the trimmed value to at least `len` characters.
    #[must_use]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Constrains the trimmed value to at most `len` characters.
    #[must_use]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Evaluates every present constraint against the value.
    ///
    /// Returns `true` only if all constraints hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let trimmed = self.value.trim();
        let len = trimmed.chars().count();

        if self.required && trimmed.is_empty() {
            return false;
        }
        if self.min_length.is_some_and(|min| len < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| len > max) {
            return false;
        }
        true
    }
}

/// A numeric value with optional constraints.
///
/// A concrete number is always "present", so `required` is trivially
/// satisfied; the field exists for descriptor parity with [`TextField`].
///
/// # Examples
///
/// ```
/// use plank_protocol::NumberField;
///
/// assert!(!NumberField::new(4).required().min(5).is_valid());
/// assert!(NumberField::new(5).min(5).is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberField {
    /// The value being validated.
    pub value: i64,
    /// Whether a value is required (always satisfied for a concrete number).
    #[serde(default)]
    pub required: bool,
    /// Inclusive lower bound, if constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Inclusive upper bound, if constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl NumberField {
    /// Creates an unconstrained descriptor for the given value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Requires a value to be present.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrains the value to at least `min` (inclusive).
    #[must_use]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Constrains the value to at most `max` (inclusive).
    #[must_use]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Evaluates every present constraint against the value.
    ///
    /// Returns `true` only if all constraints hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.min.is_some_and(|min| self.value < min) {
            return false;
        }
        if self.max.is_some_and(|max| self.value > max) {
            return false;
        }
        true
    }
}
