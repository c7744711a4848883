//! Observable project store for the plank application.
//!
//! This crate provides [`ProjectStore`], the single shared collection of
//! projects. Views subscribe to it and receive a fresh snapshot of the whole
//! collection after every mutation.
//!
//! # Examples
//!
//! ```
//! use plank_store::ProjectStore;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut store = ProjectStore::new();
//!
//! let seen = Rc::new(RefCell::new(0usize));
//! let handle = Rc::clone(&seen);
//! store.subscribe(move |projects| {
//!     *handle.borrow_mut() = projects.len();
//! });
//!
//! let id = store.add_project("Rebuild shed", "Before winter", 4);
//! assert_eq!(*seen.borrow(), 1);
//! assert_eq!(store.projects()[0].id, id);
//! ```

mod store;

pub use store::{ListenerId, ProjectStore};
