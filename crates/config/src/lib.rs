//! Configuration management for the plank application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files with sensible defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from the first file found, in this order:
//!
//! 1. Local config (`./plank.json5` or `./plank.json`)
//! 2. User config (`~/.config/plank/config.json5` or `~/.config/plank/config.json`)
//! 3. Built-in defaults
//!
//! # Sample Config
//!
//! ```json5
//! {
//!   // Team size bounds enforced by the project form
//!   "min_people": 2,
//!   "max_people": 10,
//!   // Start with a populated board
//!   "seed_samples": true,
//! }
//! ```
//!
//! # Examples
//!
//! Loading configuration:
//!
//! ```no_run
//! use plank_config::Config;
//!
//! # fn example() -> plank_config::Result<()> {
//! // Load from default locations
//! let config = Config::load()?;
//! println!("Minimum team size: {}", config.min_people);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
