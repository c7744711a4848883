//! Widget components for the plank TUI.
//!
//! This module provides reusable rendering functions for the project board
//! UI, organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. This enables easy testing
//! and composition.
//!
//! # Modules
//!
//! - [`board`]: Renders the two project lists side by side
//! - [`list`]: Renders individual lists with their project cards
//! - [`card`]: Renders project cards with title, team size, and description
//! - [`form`]: Renders the project input form
//! - [`help`]: Renders the help overlay
//! - [`alert`]: Renders the validation alert overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use plank_store::ProjectStore;
//! use plank_tui::AppState;
//! use plank_tui::widgets;
//!
//! let mut state = AppState::new(ProjectStore::new());
//! state.store.add_project("Example", "A sample project", 5);
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(
//!     &state.active.borrow(),
//!     &state.finished.borrow(),
//!     state.selected_list,
//!     state.selected_card,
//!     area,
//!     &mut buf,
//! );
//! ```

pub mod alert;
pub mod board;
pub mod card;
pub mod form;
pub mod help;
pub mod list;

// Re-export primary rendering functions for convenience
pub use alert::render_alert_overlay;
pub use board::render_board;
pub use card::{people_label, render_project_card};
pub use form::render_form;
pub use help::render_help_overlay;
pub use list::{ListPosition, render_list};
