//! Shared protocol types for the plank application.
//!
//! This crate defines the core types used across all plank components,
//! including projects, TUI messages, and field validation descriptors.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`project`]: Project identifiers, the status partition, and the `Project` struct
//! - [`field`]: Value-plus-constraints validation descriptors
//! - [`message`]: TUI event messages
//! - [`dummy`]: Sample data for seeding and tests
//!
//! # Examples
//!
//! Creating a project and moving it between lists:
//!
//! ```
//! use plank_protocol::{Project, ProjectStatus};
//!
//! let mut project = Project::new("Rebuild shed", "Before winter", 4);
//! assert_eq!(project.status, ProjectStatus::Active);
//!
//! project.set_status(ProjectStatus::Finished);
//! assert!(project.has_status(ProjectStatus::Finished));
//! ```

pub mod dummy;
pub mod field;
pub mod message;
pub mod project;

// Re-export primary types at crate root for convenience
pub use field::{NumberField, TextField};
pub use message::Message;
pub use project::{Project, ProjectId, ProjectStatus};
