//! The observable project collection.
//!
//! This module defines [`ProjectStore`]: the single owner of all project
//! records and the notification hub that fans out state changes to subscribed
//! views. There is deliberately no global instance; the application constructs
//! one store at startup and hands it to whoever needs it.

use plank_protocol::{Project, ProjectId, ProjectStatus};
use tracing::debug;

/// Handle returned by [`ProjectStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&[Project])>;

/// The shared, observable collection of projects.
///
/// Mutations go through [`add_project`](Self::add_project) and
/// [`switch_status`](Self::switch_status); after each one, every subscribed
/// listener receives a fresh snapshot of the whole collection, in
/// subscription order. Notification runs synchronously and completes before
/// the mutating call returns.
///
/// Listeners must not mutate the store they observe; wire them to update
/// their own view state only.
///
/// # Examples
///
/// ```
/// use plank_protocol::ProjectStatus;
/// use plank_store::ProjectStore;
///
/// let mut store = ProjectStore::new();
/// let id = store.add_project("Paint fence", "Front yard only", 5);
///
/// assert!(store.switch_status(id, ProjectStatus::Finished));
/// assert_eq!(store.projects()[0].status, ProjectStatus::Finished);
/// ```
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given projects.
    ///
    /// No notification is fired; call [`broadcast`](Self::broadcast) after
    /// wiring listeners to push the initial snapshot.
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    /// Registers a listener and returns a handle for unsubscribing.
    ///
    /// Listeners are invoked in subscription order. Subscribing does not
    /// replay the current snapshot; the listener first fires on the next
    /// mutation (or an explicit [`broadcast`](Self::broadcast)).
    pub fn subscribe(&mut self, listener: impl FnMut(&[Project]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(listener = id.0, total = self.listeners.len(), "subscribed");
        id
    }

    /// Removes a listener.
    ///
    /// Returns `true` if the handle was registered, `false` if it was already
    /// removed (or never issued by this store).
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(listener = id.0, "unsubscribed");
        }
        removed
    }

    /// Creates a project and appends it to the collection.
    ///
    /// The project starts in the `Active` status. Every listener is notified
    /// with the updated snapshot before this returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_store::ProjectStore;
    ///
    /// let mut store = ProjectStore::new();
    /// let id = store.add_project("Build shed", "Weekend project", 5);
    /// assert_eq!(store.len(), 1);
    /// assert_eq!(store.projects()[0].id, id);
    /// ```
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        debug!(project = %id, title = %project.title, people, "project added");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Switches a project's status.
    ///
    /// Returns `true` if the project exists; the status is changed in place
    /// only when it differs (an already-matching status is left untouched so
    /// its `updated_at` timestamp is preserved). Returns `false` when no
    /// project has the given id.
    ///
    /// In both cases every listener is notified, so views converge on the
    /// store's state even when a stale or foreign id reaches the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_protocol::{ProjectId, ProjectStatus};
    /// use plank_store::ProjectStore;
    ///
    /// let mut store = ProjectStore::new();
    /// let id = store.add_project("Build shed", "Weekend project", 5);
    ///
    /// assert!(store.switch_status(id, ProjectStatus::Finished));
    /// assert!(!store.switch_status(ProjectId::new_v4(), ProjectStatus::Finished));
    /// ```
    pub fn switch_status(&mut self, id: ProjectId, status: ProjectStatus) -> bool {
        let found = match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                if project.status != status {
                    project.set_status(status);
                    debug!(project = %id, status = status.display_name(), "status switched");
                }
                true
            }
            None => {
                debug!(project = %id, "status switch ignored: unknown project");
                false
            }
        };
        self.notify();
        found
    }

    /// Re-sends the current snapshot to all listeners.
    ///
    /// Used after wiring views over a pre-seeded store, where no mutation has
    /// fired yet.
    pub fn broadcast(&mut self) {
        self.notify();
    }

    /// Returns the current collection.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the number of projects in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the store holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Invokes every listener with an owned copy of the collection.
    ///
    /// The snapshot is cloned once and shared by reference across listeners;
    /// listeners that need to keep data past the call clone what they keep.
    fn notify(&mut self) {
        let snapshot = self.projects.clone();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
