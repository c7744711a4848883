//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the two subscribed list views, focus management, and selection tracking.
//! The views are wired to the store at construction time and rebuilt from
//! every snapshot the store publishes.

use std::cell::RefCell;
use std::rc::Rc;

use plank_protocol::{Project, ProjectStatus};
use plank_store::ProjectStore;

use crate::drag::DragState;
use crate::form_state::FormState;
use crate::layout::LIST_COUNT;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the project input form.
    #[default]
    Form,
    /// Focus is on the two project lists.
    Board,
}

/// A view over one partition of the project collection.
///
/// Each view holds the projects whose status matches its partition, in
/// snapshot order, and is rebuilt wholesale on every store notification.
/// The `droppable` flag marks the view as the current drop target during a
/// drag gesture.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    status: ProjectStatus,
    items: Vec<Project>,
    droppable: bool,
}

impl ListView {
    /// Creates an empty view for the given partition.
    #[must_use]
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            items: Vec::new(),
            droppable: false,
        }
    }

    /// Returns the partition this view renders.
    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the projects currently held by this view.
    #[must_use]
    pub fn items(&self) -> &[Project] {
        &self.items
    }

    /// Returns the number of projects in this view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this view holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if this view is marked as the current drop target.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Marks this view as the current drop target.
    pub fn mark_droppable(&mut self) {
        self.droppable = true;
    }

    /// Clears the drop target marking.
    pub fn clear_droppable(&mut self) {
        self.droppable = false;
    }

    /// Rebuilds the view from a full snapshot of the collection.
    ///
    /// Keeps only the projects matching this view's partition, in snapshot
    /// order. A full rebuild rather than an incremental patch: the snapshot
    /// is the source of truth.
    pub fn refresh(&mut self, snapshot: &[Project]) {
        self.items = snapshot
            .iter()
            .filter(|p| p.has_status(self.status))
            .cloned()
            .collect();
    }
}

/// The application state.
///
/// Owns the project store and the two list views subscribed to it, plus all
/// mutable UI state: focus, selection, the input form, overlays, and the
/// drag gesture.
#[derive(Debug)]
pub struct AppState {
    /// The shared project store. Mutations fan out to the list views.
    pub store: ProjectStore,
    /// View over the active partition, refreshed by a store listener.
    pub active: Rc<RefCell<ListView>>,
    /// View over the finished partition, refreshed by a store listener.
    pub finished: Rc<RefCell<ListView>>,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the currently selected list (0 = active, 1 = finished).
    pub selected_list: usize,
    /// Index of the selected card within the current list, if any.
    pub selected_card: Option<usize>,
    /// The project input form.
    pub form: FormState,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Validation failure message, if an alert overlay is showing.
    pub alert: Option<String>,
    /// The drag gesture state machine.
    pub drag: DragState,
}

impl AppState {
    /// Creates a new application state over the given store.
    ///
    /// Subscribes one view per partition, then broadcasts the current
    /// snapshot so pre-seeded stores are reflected immediately. The
    /// listeners only touch their own view; they never call back into the
    /// store.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_store::ProjectStore;
    /// use plank_tui::AppState;
    ///
    /// let state = AppState::new(ProjectStore::new());
    /// assert_eq!(state.selected_list, 0);
    /// ```
    #[must_use]
    pub fn new(mut store: ProjectStore) -> Self {
        let active = Rc::new(RefCell::new(ListView::new(ProjectStatus::Active)));
        let finished = Rc::new(RefCell::new(ListView::new(ProjectStatus::Finished)));

        let handle = Rc::clone(&active);
        store.subscribe(move |snapshot| handle.borrow_mut().refresh(snapshot));
        let handle = Rc::clone(&finished);
        store.subscribe(move |snapshot| handle.borrow_mut().refresh(snapshot));

        // Push the current snapshot through the fresh subscriptions
        store.broadcast();

        Self {
            store,
            active,
            finished,
            focus: Focus::default(),
            selected_list: 0,
            selected_card: None,
            form: FormState::default(),
            help_visible: false,
            alert: None,
            drag: DragState::default(),
        }
    }

    /// Returns the view handle for the given list index (0 = active,
    /// 1 = finished; out-of-range indices map to the finished list).
    #[must_use]
    pub fn list_handle(&self, index: usize) -> &Rc<RefCell<ListView>> {
        if index == 0 { &self.active } else { &self.finished }
    }

    /// Returns the partition rendered by the given list index.
    #[must_use]
    pub fn list_status(index: usize) -> ProjectStatus {
        if index == 0 {
            ProjectStatus::Active
        } else {
            ProjectStatus::Finished
        }
    }

    /// Returns the number of cards in the currently selected list.
    #[must_use]
    pub fn selected_list_len(&self) -> usize {
        self.list_handle(self.selected_list).borrow().len()
    }

    /// Toggles the help overlay visibility.
    ///
    /// When help is shown, other interactions are blocked until
    /// help is dismissed.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed,
    /// `false` if help was not visible.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Moves the list selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        if self.selected_list > 0 {
            self.selected_list -= 1;
        } else {
            self.selected_list = LIST_COUNT - 1;
        }
        self.clamp_card_selection();
    }

    /// Moves the list selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        if self.selected_list < LIST_COUNT - 1 {
            self.selected_list += 1;
        } else {
            self.selected_list = 0;
        }
        self.clamp_card_selection();
    }

    /// Moves the card selection up within the current list.
    pub fn navigate_up(&mut self) {
        let len = self.selected_list_len();
        if len == 0 {
            self.selected_card = None;
            return;
        }

        match self.selected_card {
            Some(idx) if idx > 0 => {
                self.selected_card = Some(idx - 1);
            }
            Some(_) => {
                // Wrap to bottom
                self.selected_card = Some(len - 1);
            }
            None => {
                // Select first card
                self.selected_card = Some(0);
            }
        }
    }

    /// Moves the card selection down within the current list.
    pub fn navigate_down(&mut self) {
        let len = self.selected_list_len();
        if len == 0 {
            self.selected_card = None;
            return;
        }

        let max_idx = len - 1;
        match self.selected_card {
            Some(idx) if idx < max_idx => {
                self.selected_card = Some(idx + 1);
            }
            Some(_) => {
                // Wrap to top
                self.selected_card = Some(0);
            }
            None => {
                // Select first card
                self.selected_card = Some(0);
            }
        }
    }

    /// Returns a copy of the currently selected project, if any.
    ///
    /// Returns `None` if no card is selected or if the selection is stale.
    #[must_use]
    pub fn selected_project(&self) -> Option<Project> {
        let card_idx = self.selected_card?;
        self.list_handle(self.selected_list)
            .borrow()
            .items()
            .get(card_idx)
            .cloned()
    }

    /// Clears the current card selection.
    ///
    /// After calling this, `selected_card` will be `None`.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Clears the drop target marking on both lists.
    pub fn clear_droppable_markings(&mut self) {
        self.active.borrow_mut().clear_droppable();
        self.finished.borrow_mut().clear_droppable();
    }

    /// Marks the given list as the drop target and clears the other.
    pub fn mark_droppable(&mut self, index: usize) {
        for (i, handle) in [&self.active, &self.finished].into_iter().enumerate() {
            let mut view = handle.borrow_mut();
            if i == index {
                view.mark_droppable();
            } else {
                view.clear_droppable();
            }
        }
    }

    /// Ensures the card selection is valid for the current list.
    pub(crate) fn clamp_card_selection(&mut self) {
        let len = self.selected_list_len();
        if len == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= len
        {
            self.selected_card = Some(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plank_protocol::Project;

    fn seeded_store(active: usize, finished: usize) -> ProjectStore {
        let mut projects = Vec::new();
        for i in 0..active {
            projects.push(Project::new(format!("Active {i}"), "desc", 5));
        }
        for i in 0..finished {
            let mut p = Project::new(format!("Finished {i}"), "desc", 5);
            p.set_status(ProjectStatus::Finished);
            projects.push(p);
        }
        ProjectStore::with_projects(projects)
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new(ProjectStore::new());

        assert_eq!(state.focus, Focus::Form);
        assert_eq!(state.selected_list, 0);
        assert_eq!(state.selected_card, None);
        assert!(!state.help_visible);
        assert!(state.alert.is_none());
        assert!(!state.drag.is_active());
    }

    #[test]
    fn new_state_reflects_preseeded_store() {
        let state = AppState::new(seeded_store(2, 1));

        assert_eq!(state.active.borrow().len(), 2);
        assert_eq!(state.finished.borrow().len(), 1);
    }

    #[test]
    fn views_partition_the_collection() {
        let state = AppState::new(seeded_store(2, 1));

        for project in state.active.borrow().items() {
            assert_eq!(project.status, ProjectStatus::Active);
        }
        for project in state.finished.borrow().items() {
            assert_eq!(project.status, ProjectStatus::Finished);
        }
    }

    #[test]
    fn store_mutation_refreshes_views() {
        let mut state = AppState::new(ProjectStore::new());
        assert!(state.active.borrow().is_empty());

        state.store.add_project("New project", "desc", 5);
        assert_eq!(state.active.borrow().len(), 1);
        assert!(state.finished.borrow().is_empty());
    }

    #[test]
    fn switch_moves_project_between_views() {
        let mut state = AppState::new(ProjectStore::new());
        let id = state.store.add_project("Project", "desc", 5);

        assert!(state.store.switch_status(id, ProjectStatus::Finished));

        assert!(state.active.borrow().is_empty());
        assert_eq!(state.finished.borrow().len(), 1);
    }

    #[test]
    fn navigate_left_right_wraps_between_two_lists() {
        let mut state = AppState::new(ProjectStore::new());

        state.navigate_right();
        assert_eq!(state.selected_list, 1);
        state.navigate_right();
        assert_eq!(state.selected_list, 0);

        state.navigate_left();
        assert_eq!(state.selected_list, 1);
    }

    #[test]
    fn navigate_up_down_in_empty_list() {
        let mut state = AppState::new(ProjectStore::new());

        state.navigate_up();
        assert_eq!(state.selected_card, None);

        state.navigate_down();
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn navigate_up_down_with_cards() {
        let mut state = AppState::new(seeded_store(3, 0));

        state.navigate_down();
        assert_eq!(state.selected_card, Some(0));

        state.navigate_down();
        assert_eq!(state.selected_card, Some(1));

        state.navigate_down();
        assert_eq!(state.selected_card, Some(2));

        // Wrap around
        state.navigate_down();
        assert_eq!(state.selected_card, Some(0));

        // Navigate up from top wraps to bottom
        state.navigate_up();
        assert_eq!(state.selected_card, Some(2));
    }

    #[test]
    fn switching_list_clamps_selection() {
        let mut state = AppState::new(seeded_store(3, 1));

        state.navigate_down();
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_card, Some(2));

        // Finished list has only one card
        state.navigate_right();
        assert_eq!(state.selected_card, Some(0));
    }

    #[test]
    fn selected_project_returns_clone() {
        let mut state = AppState::new(seeded_store(1, 0));

        assert!(state.selected_project().is_none());

        state.navigate_down();
        let project = state.selected_project().expect("should have selection");
        assert_eq!(project.title, "Active 0");
    }

    #[test]
    fn selected_project_none_for_stale_selection() {
        let mut state = AppState::new(ProjectStore::new());
        state.selected_card = Some(0);

        assert!(state.selected_project().is_none());
    }

    #[test]
    fn droppable_markings_are_exclusive() {
        let mut state = AppState::new(ProjectStore::new());

        state.mark_droppable(1);
        assert!(!state.active.borrow().is_droppable());
        assert!(state.finished.borrow().is_droppable());

        state.mark_droppable(0);
        assert!(state.active.borrow().is_droppable());
        assert!(!state.finished.borrow().is_droppable());

        state.clear_droppable_markings();
        assert!(!state.active.borrow().is_droppable());
        assert!(!state.finished.borrow().is_droppable());
    }

    #[test]
    fn refresh_preserves_snapshot_order() {
        let mut state = AppState::new(ProjectStore::new());
        state.store.add_project("First", "desc", 5);
        state.store.add_project("Second", "desc", 5);

        let view = state.active.borrow();
        assert_eq!(view.items()[0].title, "First");
        assert_eq!(view.items()[1].title, "Second");
    }

    #[test]
    fn toggle_and_dismiss_help() {
        let mut state = AppState::new(ProjectStore::new());

        state.toggle_help();
        assert!(state.help_visible);

        assert!(state.dismiss_help());
        assert!(!state.help_visible);
        assert!(!state.dismiss_help());
    }

    #[test]
    fn clear_selection_removes_card_selection() {
        let mut state = AppState::new(seeded_store(1, 0));
        state.navigate_down();
        assert!(state.selected_card.is_some());

        state.clear_selection();
        assert!(state.selected_card.is_none());
    }
}
