//! Manifest of known project directories.
//!
//! Lives at the base directory root and lets the manager recover projects
//! across restarts, including ones referenced from outside the base
//! directory.

use crate::error::{ProjectError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Manifest filename directly under the base directory
pub const MANIFEST_FILE: &str = "projects.json";

/// Set of absolute project directory paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Project directory paths; duplicates collapse on read
    #[serde(default)]
    pub project_list: BTreeSet<String>,
}

impl ProjectManifest {
    /// Build a manifest from a list of paths.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            project_list: paths
                .into_iter()
                .map(|p| p.as_ref().to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// Paths recorded in the manifest.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.project_list.iter().map(PathBuf::from)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.project_list.contains(&*path.to_string_lossy())
    }

    pub fn len(&self) -> usize {
        self.project_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project_list.is_empty()
    }

    /// Read a manifest file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ProjectError::from_io(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| ProjectError::parse(path, e))
    }

    /// Replace the manifest file at `path` with this manifest.
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        // Atomic write: write to temp file, then rename
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| MANIFEST_FILE.to_string());
        let temp_path = path.with_file_name(format!(".{}.tmp", file_name));
        std::fs::write(&temp_path, &content)?;
        if let Err(e) = std::fs::rename(&temp_path, path) {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                warn!(path = ?temp_path, error = %cleanup, "Failed to remove temp manifest");
            }
            return Err(e.into());
        }

        debug!(path = ?path, projects = self.len(), "Saved manifest");

        Ok(())
    }
}
