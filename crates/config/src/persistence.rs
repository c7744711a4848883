//! Config file discovery, reading, and writing.
//!
//! plank looks for its settings in two places: a project-local file in the
//! working directory, then a per-user file under the platform config
//! directory. Files are parsed as JSON5, so comments and trailing commas
//! are accepted. Saving always emits plain pretty-printed JSON because
//! `serde_json5` only deserializes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// File names tried in the working directory, highest priority first.
const LOCAL_FILE_NAMES: &[&str] = &["plank.json5", "plank.json"];

/// File names tried under the per-user `plank/` config directory.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Locates the configuration file to load, if any exists.
///
/// Checks the working directory first (`plank.json5`, then `plank.json`),
/// falling back to the per-user config directory (`~/.config/plank/` on
/// Linux). The first existing candidate wins.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_config_dir()
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|candidate| candidate.exists())
}

/// The per-user directory searched for `config.json5` / `config.json`.
fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plank"))
}

/// Reads and parses a configuration file.
///
/// The content is parsed as JSON5, which also accepts plain JSON.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes the configuration to a file as pretty-printed JSON.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`ConfigError::WriteFile`] if the directory or file cannot be
/// written and [`ConfigError::SerializeJson`] if serialization fails.
pub fn write_config_file(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_plain_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plank.json");
        fs::write(&path, r#"{"min_people": 3, "seed_samples": true}"#).unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.min_people, 3);
        assert!(config.max_people.is_none());
        assert!(config.seed_samples);
    }

    #[test]
    fn read_json5_with_comments_and_trailing_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plank.json5");
        fs::write(
            &path,
            r#"
            {
                // bigger teams only
                min_people: 8,
                max_people: 20,
            }
            "#,
        )
        .unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.min_people, 8);
        assert_eq!(config.max_people, Some(20));
    }

    #[test]
    fn read_empty_object_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plank.json5");
        fs::write(&path, "{}").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn read_missing_file_is_a_read_error() {
        let err = read_config_file("/nonexistent/plank.json5").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn read_garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plank.json5");
        fs::write(&path, "{ min_people: }").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_then_read_preserves_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plank.json");

        let config = Config {
            min_people: 2,
            max_people: Some(6),
            seed_samples: true,
        };

        write_config_file(&path, &config).unwrap();
        assert_eq!(read_config_file(&path).unwrap(), config);
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("plank.json");

        write_config_file(&path, &Config::default()).unwrap();
        assert!(path.exists());
    }
}
