//! Campus-hub configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIND, DEFAULT_PORT, SEARCH_DEBOUNCE_MS};
use crate::error::{CampusError, CampusResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/campus";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

/// Configuration at ~/.config/campus/config.toml, overridable with
/// `CAMPUS_*` environment variables (e.g. `CAMPUS_PORT=8080`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CampusConfig {
    /// Where durable state (bookmarks) is kept
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for CampusConfig {
    fn default() -> Self {
        CampusConfig {
            data_dir: default_data_dir(),
            bind: default_bind(),
            port: default_port(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

impl CampusConfig {
    pub fn config_path() -> CampusResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CampusError::Config("Could not determine config directory".into()))?
            .join("campus");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default on first run.
    pub fn load() -> CampusResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::build(&config_path, true)
    }

    /// Load from an explicit file, without environment overrides.
    pub fn load_from(path: &Path) -> CampusResult<Self> {
        Self::build(path, false)
    }

    fn build(path: &Path, with_env: bool) -> CampusResult<Self> {
        let mut builder = Config::builder().add_source(File::from(path).required(false));
        if with_env {
            builder = builder.add_source(Environment::with_prefix("CAMPUS"));
        }

        builder
            .build()
            .map_err(|e| CampusError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CampusError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CampusResult<()> {
        let contents = format!(
            "\
# campus-hub configuration

# Where bookmarks are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Address and port for campus-server:
# bind = \"{DEFAULT_BIND}\"
# port = {DEFAULT_PORT}

# Quiet period (ms) before a directory search runs:
# search_debounce_ms = {SEARCH_DEBOUNCE_MS}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CampusError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CampusError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus/config.toml");

        CampusConfig::create_default_config(&path).unwrap();
        let config = CampusConfig::load_from(&path).unwrap();

        assert_eq!(config, CampusConfig::default());
        assert_eq!(config.search_debounce(), Duration::from_millis(180));
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = 8080\ndata_dir = \"/tmp/campus-data\"\n").unwrap();

        let config = CampusConfig::load_from(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.data_path(), PathBuf::from("/tmp/campus-data"));
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CampusConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, CampusConfig::default());
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a port\"\n").unwrap();

        let err = CampusConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CampusError::Config(_)));
    }
}
