//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading engine
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Loads and provides access to engine settings.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/settings.yaml").unwrap();
/// println!("tolerance: {}", loader.settings().conflict_tolerance_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: Settings,
}

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/settings.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `SettingsLoader` on success, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { settings })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for SettingsLoader {
    /// A loader carrying the default settings, for callers without a file.
    fn default() -> Self {
        Self {
            settings: Settings::default(),
        }
    }
}
