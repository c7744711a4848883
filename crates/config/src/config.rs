//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the plank application.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Default minimum team size for a new project.
const DEFAULT_MIN_PEOPLE: u32 = 5;

fn default_min_people() -> u32 {
    DEFAULT_MIN_PEOPLE
}

/// The main configuration struct for the plank application.
///
/// This struct is the central point for all application configuration:
/// the team size bounds enforced by the input form and whether the store
/// is seeded with sample projects at startup.
///
/// # Examples
///
/// ```
/// use plank_config::Config;
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.min_people, 5);
/// assert!(config.max_people.is_none());
///
/// // Create a custom config
/// let config = Config {
///     min_people: 2,
///     max_people: Some(10),
///     seed_samples: true,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum team size accepted by the project form.
    #[serde(default = "default_min_people")]
    pub min_people: u32,

    /// Optional maximum team size accepted by the project form.
    ///
    /// When unset, the form accepts any team size at or above the minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_people: Option<u32>,

    /// Whether to pre-populate the store with sample projects at startup.
    #[serde(default)]
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_people: DEFAULT_MIN_PEOPLE,
            max_people: None,
            seed_samples: false,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_config::Config;
    ///
    /// let config = Config::new();
    /// assert_eq!(config.min_people, 5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./plank.json5` or `./plank.json`
    /// 2. User: `~/.config/plank/config.json5` or `~/.config/plank/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use plank_config::Config;
    ///
    /// # fn example() -> plank_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Minimum team size: {}", config.min_people);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                let config = read_config_file(&path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use plank_config::Config;
    ///
    /// # fn example() -> plank_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to save to
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use plank_config::Config;
    ///
    /// # fn example() -> plank_config::Result<()> {
    /// let config = Config::default();
    /// config.save_to("my-config.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// The minimum team size must be at least 1, and the maximum (when
    /// present) must not be below the minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.min_people = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.min_people < 1 {
            return Err(ConfigError::InvalidTeamSize {
                reason: "min_people must be at least 1".to_string(),
            });
        }
        if let Some(max) = self.max_people
            && max < self.min_people
        {
            return Err(ConfigError::InvalidTeamSize {
                reason: format!(
                    "max_people ({max}) must not be below min_people ({})",
                    self.min_people
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.min_people, 5);
        assert!(config.max_people.is_none());
        assert!(!config.seed_samples);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        let config = Config::new();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn validate_valid_config() {
        let config = Config {
            min_people: 2,
            max_people: Some(10),
            seed_samples: true,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_zero_minimum() {
        let config = Config {
            min_people: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_max_below_min() {
        let config = Config {
            min_people: 5,
            max_people: Some(3),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_max_equal_to_min() {
        let config = Config {
            min_people: 5,
            max_people: Some(5),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let config = Config {
            min_people: 3,
            max_people: Some(12),
            seed_samples: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn deserialize_with_defaults() {
        let json = "{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"min_people": 2}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_people, 2);
        assert!(config.max_people.is_none());
        assert!(!config.seed_samples);
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // smaller teams for demos
                min_people: 2,
                max_people: 8,
                seed_samples: true,
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.min_people, 2);
        assert_eq!(config.max_people, Some(8));
        assert!(config.seed_samples);
    }

    #[test]
    fn load_from_rejects_invalid_bounds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, r#"{ min_people: 5, max_people: 2 }"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            min_people: 4,
            max_people: Some(9),
            seed_samples: true,
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn max_people_not_serialized_when_none() {
        let config = Config {
            max_people: None,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("max_people"));
    }
}
