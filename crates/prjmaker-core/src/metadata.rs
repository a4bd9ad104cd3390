//! Hidden per-project metadata file.
//!
//! A directory is a project exactly when it contains this file.

use crate::error::{ProjectError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hidden metadata filename inside every project directory
pub const META_HIDDEN_FILE: &str = ".prj";

/// Default user written when none is supplied
pub const DEFAULT_USER: &str = "No Name";

/// Default creator tag written when none is supplied
pub const DEFAULT_MAKER: &str = "Project Maker";

/// Metadata record stored in `<project>/.prj`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name at the time of writing
    pub name: String,

    /// When the directory was initialized (or copied)
    pub create_date: DateTime<Utc>,

    /// Last time the record was written
    pub update_date: DateTime<Utc>,

    #[serde(default)]
    pub user: String,

    /// Tool or application that created the project
    #[serde(default)]
    pub maker: String,
}

impl ProjectMetadata {
    /// Path of the metadata file for a directory.
    pub fn meta_file_path(directory: &Path) -> PathBuf {
        directory.join(META_HIDDEN_FILE)
    }

    /// Whether `directory` carries the metadata marker.
    pub fn is_project_dir(directory: &Path) -> bool {
        Self::meta_file_path(directory).is_file()
    }

    /// Write a fresh record into `directory`, stamping both dates with now.
    ///
    /// Overwrites an existing record, so the previous creation date is lost.
    pub fn write(
        directory: &Path,
        name: &str,
        user: Option<&str>,
        maker: Option<&str>,
    ) -> Result<Self> {
        let now = Utc::now();
        let meta = Self {
            name: name.to_string(),
            create_date: now,
            update_date: now,
            user: user.unwrap_or(DEFAULT_USER).to_string(),
            maker: maker.unwrap_or(DEFAULT_MAKER).to_string(),
        };
        meta.write_current(directory)?;
        Ok(meta)
    }

    /// Write this record as-is into `directory`.
    pub fn write_current(&self, directory: &Path) -> Result<()> {
        let path = Self::meta_file_path(directory);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| ProjectError::from_io(path, e))?;
        Ok(())
    }

    /// Read the record from `directory`.
    pub fn read(directory: &Path) -> Result<Self> {
        let path = Self::meta_file_path(directory);
        let content =
            std::fs::read_to_string(&path).map_err(|e| ProjectError::from_io(path.clone(), e))?;
        serde_json::from_str(&content).map_err(|e| ProjectError::parse(path, e))
    }
}
