//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/superbalanced/superbalanced.toml`, or an explicit `--config` file
//! 3. Environment variables: `SUPERBALANCED_*` prefix
//!
//! Settings only shape how results are reported; the superbalance check itself is not configurable.

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

pub const ENV_PREFIX: &str = "SUPERBALANCED";

/// Output settings for the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Render each tree before its verdict
    pub show_tree: bool,
    /// Print the leaf depths recorded by the check
    pub show_depths: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_tree: false,
            show_depths: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep current).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub show_tree: Option<bool>,
    pub show_depths: Option<bool>,
}

/// Get the XDG config directory for superbalanced.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "superbalanced").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("superbalanced.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })
}

/// A boolean env override: `None` if unset, an error if set to something that is not a bool.
fn env_bool(config: &Config, key: &str) -> Result<Option<bool>, ConfigError> {
    match config.get_bool(key) {
        Ok(val) => Ok(Some(val)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ConfigError::Environment(format!(
            "{}_{}: {}",
            ENV_PREFIX,
            key.to_uppercase(),
            e
        ))),
    }
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_tree: overlay.show_tree.unwrap_or(self.show_tree),
            show_depths: overlay.show_depths.unwrap_or(self.show_depths),
        }
    }

    /// Load settings: defaults, then the global config file if present, then env vars.
    pub fn load() -> Result<Self, ConfigError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Load settings from an explicit file instead of the global one; env vars still win.
    ///
    /// Unlike the global file, an explicit file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!("explicit config: {}", path.display());
        let current = Self::default().merge_with(&load_raw_settings(path)?);
        Self::apply_env_overrides(current)
    }

    /// Apply SUPERBALANCED_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ConfigError::Environment(e.to_string()))?;

        if let Some(val) = env_bool(&config, "show_tree")? {
            settings.show_tree = val;
        }
        if let Some(val) = env_bool(&config, "show_depths")? {
            settings.show_depths = val;
        }

        Ok(settings)
    }
}
