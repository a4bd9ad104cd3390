//! Configuration for the project manager.

use crate::metadata::{DEFAULT_MAKER, DEFAULT_USER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Directory the base directory is resolved against
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,

    /// Name of the base directory holding all projects
    #[serde(default = "default_base_dir_name")]
    pub base_dir_name: String,

    /// User recorded in new project metadata
    #[serde(default = "default_user")]
    pub user: String,

    /// Creator tag recorded in new project metadata
    #[serde(default = "default_maker")]
    pub maker: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_base_dir_name() -> String {
    ".prj".to_string()
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_maker() -> String {
    DEFAULT_MAKER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            base_dir_name: default_base_dir_name(),
            user: default_user(),
            maker: default_maker(),
            log_level: default_log_level(),
        }
    }
}

impl ManagerConfig {
    /// Config for `working_dir/base_dir_name`, other fields defaulted.
    pub fn new(working_dir: impl Into<PathBuf>, base_dir_name: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            base_dir_name: base_dir_name.into(),
            ..Default::default()
        }
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prjmaker").join("config.yaml"))
    }

    /// Load configuration from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config file: {}", e);
            Self::default()
        })
    }

    /// Load configuration from the default file.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an
    /// error, so callers can report it once logging is set up.
    pub fn try_load() -> Result<Self, std::io::Error> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Base directory holding all projects
    pub fn base_dir(&self) -> PathBuf {
        self.working_dir.join(&self.base_dir_name)
    }
}
