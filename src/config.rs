//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `BINTREE_*` prefix, `__` between sections

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::codec::DEFAULT_MAX_DEPTH;
use crate::errors::SettingsError;

/// How trees are rendered by `bintree show`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Render a placeholder for the absent side of a single-child node
    pub show_missing: bool,
    /// Placeholder text for an absent child
    pub missing_label: String,
    /// Text shown for an empty tree
    pub empty_label: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_missing: true,
            missing_label: "∅".into(),
            empty_label: "(empty)".into(),
        }
    }
}

/// Raw display config; `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplaySettings {
    pub show_missing: Option<bool>,
    pub missing_label: Option<String>,
    pub empty_label: Option<String>,
}

impl DisplaySettings {
    fn merge(&self, overlay: &RawDisplaySettings) -> Self {
        Self {
            show_missing: overlay.show_missing.unwrap_or(self.show_missing),
            missing_label: overlay
                .missing_label
                .clone()
                .unwrap_or_else(|| self.missing_label.clone()),
            empty_label: overlay
                .empty_label
                .clone()
                .unwrap_or_else(|| self.empty_label.clone()),
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_depth: Option<usize>,
    pub display: RawDisplaySettings,
}

/// Unified configuration for bintree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Deepest nesting accepted when decoding a serialized tree
    pub max_depth: usize,
    pub display: DisplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            display: DisplaySettings::default(),
        }
    }
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SettingsError::new(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| SettingsError::new(format!("parse {}: {}", path.display(), e)))
}

impl Settings {
    /// Scalar options: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
            display: self.display.merge(&overlay.display),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file; it must exist when given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
    /// 3. Local config file
    /// 4. Environment variables: `BINTREE_*` prefix
    #[instrument(level = "debug")]
    pub fn load(local: Option<&Path>) -> Result<Self, SettingsError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(SettingsError::new(format!(
                    "config file not found: {}",
                    local_path.display()
                )));
            }
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        current = Self::apply_env_overrides(current, env_source())?;
        current.validate()?;
        Ok(current)
    }

    /// Apply environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get::<usize>("max_depth"), "max_depth") {
            settings.max_depth = val;
        }
        let key = "display.show_missing";
        if let Some(val) = env_value(config.get_bool(key), key) {
            settings.display.show_missing = val;
        }
        let key = "display.missing_label";
        if let Some(val) = env_value(config.get_string(key), key) {
            settings.display.missing_label = val;
        }
        let key = "display.empty_label";
        if let Some(val) = env_value(config.get_string(key), key) {
            settings.display.empty_label = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.max_depth == 0 {
            return Err(SettingsError::new("max_depth must be at least 1"));
        }
        if self.max_depth > DEFAULT_MAX_DEPTH {
            return Err(SettingsError::new(format!(
                "max_depth must not exceed {DEFAULT_MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::new(format!("serialize config: {e}")))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("BINTREE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Unset variables are skipped silently; unparsable ones are skipped with a
/// debug line so a typo does not go unnoticed under `-d`.
fn env_value<T>(result: Result<T, ConfigError>, key: &str) -> Option<T> {
    match result {
        Ok(val) => Some(val),
        Err(ConfigError::NotFound(_)) => None,
        Err(e) => {
            debug!("ignoring env override {}: {}", key, e);
            None
        }
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::new(e.to_string())
}
