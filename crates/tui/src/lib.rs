//! Terminal UI for the plank application.
//!
//! This crate provides a Ratatui-based terminal interface for tracking
//! projects: a creation form, two status lists, and a mouse-driven
//! drag-and-drop gesture for moving projects between them.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management and the subscribed list views
//! - [`form_state`]: Project form editing and validation
//! - [`drag`]: Drag-and-drop state machine
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Shared layout constants and hit-testing
//! - [`widgets`]: Functional rendering components
//!
//! # Example
//!
//! ```no_run
//! use plank_store::ProjectStore;
//! use plank_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(ProjectStore::new());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod drag;
pub mod event;
pub mod form_state;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus, ListView};
