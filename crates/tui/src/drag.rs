//! Drag-and-drop state machine.
//!
//! Dragging a project card carries a plain-text payload (the stringified
//! project id) from the press position to the release position. The payload
//! is deliberately an opaque string rather than a `ProjectId`: the drop
//! handler re-parses it, so a malformed payload degrades to a no-op instead
//! of a crash.

use plank_protocol::ProjectId;

/// The plain-text payload attached to an in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload(String);

impl DragPayload {
    /// Creates a payload carrying the given project id.
    #[must_use]
    pub fn new(id: ProjectId) -> Self {
        Self(id.to_string())
    }

    /// Creates a payload from raw text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw payload text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the payload back into a project id.
    ///
    /// Returns `None` when the payload is not a well-formed id.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        self.0.parse().ok()
    }
}

/// Tracks whether a drag gesture is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Active {
        /// The payload picked up at drag start.
        payload: DragPayload,
    },
}

impl DragState {
    /// Returns `true` when a drag is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Starts a drag carrying the given payload.
    pub fn begin(&mut self, payload: DragPayload) {
        *self = Self::Active { payload };
    }

    /// Returns the in-flight payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::Idle => None,
            Self::Active { payload } => Some(payload),
        }
    }

    /// Ends the drag, returning the payload that was in flight.
    pub fn take(&mut self) -> Option<DragPayload> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Active { payload } => Some(payload),
        }
    }

    /// Abandons the drag without yielding the payload.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
