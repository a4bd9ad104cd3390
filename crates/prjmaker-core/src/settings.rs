//! Per-project settings document (`project.json`).

use crate::error::{ProjectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings filename inside every project directory
pub const SETTINGS_FILE: &str = "project.json";

/// Attached component entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Resource identifier the component is registered under
    pub resource_path: String,
}

/// Recording options consumed by the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(default = "default_record_directory")]
    pub directory: String,

    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,

    #[serde(default = "default_true")]
    pub record_raw: bool,

    #[serde(default)]
    pub record_detection: bool,
}

fn default_record_directory() -> String {
    "records".to_string()
}

fn default_interval_minutes() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            directory: default_record_directory(),
            interval_minutes: default_interval_minutes(),
            record_raw: true,
            record_detection: false,
        }
    }
}

/// Settings document stored in `<project>/project.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub components: Vec<ComponentConfig>,

    #[serde(default)]
    pub record: RecordConfig,
}

impl ProjectSettings {
    /// Path of the settings file for a project directory.
    pub fn file_path(directory: &Path) -> PathBuf {
        directory.join(SETTINGS_FILE)
    }

    pub fn read(directory: &Path) -> Result<Self> {
        let path = Self::file_path(directory);
        let content =
            std::fs::read_to_string(&path).map_err(|e| ProjectError::from_io(path.clone(), e))?;
        serde_json::from_str(&content).map_err(|e| ProjectError::parse(path, e))
    }

    pub fn write(&self, directory: &Path) -> Result<()> {
        let path = Self::file_path(directory);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| ProjectError::from_io(path, e))?;
        Ok(())
    }

    /// Write default settings unless the file already exists.
    pub(crate) fn write_default_if_missing(directory: &Path) -> Result<()> {
        if Self::file_path(directory).exists() {
            return Ok(());
        }
        Self::default().write(directory)
    }
}
