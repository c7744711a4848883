//! Project types for the tracker.
//!
//! This module defines the core project types used throughout the plank
//! application, including project identifiers, the status partition, and the
//! project record itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a project.
///
/// Uses UUID v4 for globally unique identification.
pub type ProjectId = uuid::Uuid;

/// The lifecycle status of a project.
///
/// A project is always in exactly one status, which determines which of the
/// two lists it is rendered in.
///
/// # Examples
///
/// ```
/// use plank_protocol::ProjectStatus;
///
/// let status = ProjectStatus::Active;
/// assert_eq!(status.display_name(), "Active");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is being worked on.
    #[default]
    Active,
    /// Project is complete.
    Finished,
}

impl ProjectStatus {
    /// Returns both statuses in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::ProjectStatus;
    ///
    /// let all = ProjectStatus::all();
    /// assert_eq!(all.len(), 2);
    /// assert_eq!(all[0], ProjectStatus::Active);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Active, Self::Finished]
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::Active.display_name(), "Active");
    /// assert_eq!(ProjectStatus::Finished.display_name(), "Finished");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Finished => "Finished",
        }
    }

    /// Returns the index of this status in the board layout (0-1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Active => 0,
            Self::Finished => 1,
        }
    }

    /// Creates a `ProjectStatus` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 2).
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::from_index(0), Some(ProjectStatus::Active));
    /// assert_eq!(ProjectStatus::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Finished),
            _ => None,
        }
    }

    /// Returns the other status.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::Active.opposite(), ProjectStatus::Finished);
    /// assert_eq!(ProjectStatus::Finished.opposite(), ProjectStatus::Active);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }
}

/// A project record.
///
/// Represents one tracked project. Each project has a unique identifier,
/// descriptive content, a team size, and the status that places it in one of
/// the two lists.
///
/// # Examples
///
/// ```
/// use plank_protocol::{Project, ProjectStatus};
///
/// let project = Project::new("Build shed", "Weekend project", 5);
/// assert_eq!(project.status, ProjectStatus::Active);
/// assert_eq!(project.people, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,
    /// Short summary of the project.
    pub title: String,
    /// Longer description of the project.
    pub description: String,
    /// Number of people assigned to the project.
    pub people: u32,
    /// Which list this project currently belongs to.
    pub status: ProjectStatus,
    /// When this project was created.
    pub created_at: DateTime<Utc>,
    /// When this project was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with the given title, description, and team size.
    ///
    /// The project starts in the `Active` status. Timestamps are set to the
    /// current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::Project;
    ///
    /// let project = Project::new("Paint fence", "Front yard only", 2);
    /// assert_eq!(project.title, "Paint fence");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new project with a specific ID.
    ///
    /// Useful for tests that need a known identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::{Project, ProjectId};
    ///
    /// let id = ProjectId::new_v4();
    /// let project = Project::with_id(id, "Test project", "Description", 3);
    /// assert_eq!(project.id, id);
    /// ```
    #[must_use]
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        let mut project = Self::new(title, description, people);
        project.id = id;
        project
    }

    /// Switches the project's status and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::{Project, ProjectStatus};
    ///
    /// let mut project = Project::new("Work item", "Do the thing", 4);
    /// project.set_status(ProjectStatus::Finished);
    /// assert_eq!(project.status, ProjectStatus::Finished);
    /// ```
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Returns `true` if the project belongs to the given partition.
    #[must_use]
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for ProjectStatus {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(ProjectStatus::Active), Just(ProjectStatus::Finished)].boxed()
        }
    }

    prop_compose! {
        fn arb_project()(
            title in "[a-zA-Z][a-zA-Z0-9 ]{0,50}",
            description in "[a-zA-Z0-9 .,!?]{0,200}",
            people in 0u32..1000,
            status in any::<ProjectStatus>(),
        ) -> Project {
            let mut project = Project::new(title, description, people);
            project.status = status;
            project
        }
    }

    proptest! {
        /// Tests that ProjectStatus serialization roundtrips correctly.
        #[test]
        fn status_roundtrip(status in any::<ProjectStatus>()) {
            let json = serde_json::to_string(&status).expect("serialize");
            let parsed: ProjectStatus = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(status, parsed);
        }

        /// Tests that Project serialization roundtrips correctly, preserving all fields.
        #[test]
        fn project_roundtrip(project in arb_project()) {
            let json = serde_json::to_string(&project).expect("serialize");
            let parsed: Project = serde_json::from_str(&json).expect("deserialize");

            prop_assert_eq!(project.id, parsed.id);
            prop_assert_eq!(project.title, parsed.title);
            prop_assert_eq!(project.description, parsed.description);
            prop_assert_eq!(project.people, parsed.people);
            prop_assert_eq!(project.status, parsed.status);
            prop_assert_eq!(project.created_at, parsed.created_at);
            prop_assert_eq!(project.updated_at, parsed.updated_at);
        }

        /// Tests that Project serialization is deterministic.
        #[test]
        fn project_serialization_is_deterministic(project in arb_project()) {
            let json1 = serde_json::to_string(&project).expect("serialize 1");
            let json2 = serde_json::to_string(&project).expect("serialize 2");
            prop_assert_eq!(json1, json2);
        }
    }
}
