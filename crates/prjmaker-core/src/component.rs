//! Attachable project components.
//!
//! Concrete components (detection configs, recorded media, ...) live in the
//! host application. The project only needs a factory and the capability
//! set below.

use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resource owned by a project and stored in its own sub-directory.
pub trait Component {
    /// Populate default on-disk state.
    fn create(&mut self) -> Result<()>;

    /// Whether the existing on-disk state can be reused.
    fn valid(&self) -> bool;

    /// Named resource paths handed to configuration consumers.
    fn resources(&self) -> BTreeMap<String, String>;

    /// Directory holding this component's data.
    fn resource_dir(&self) -> &Path;
}

/// Sub-directory of a project reserved for one component.
///
/// Creating one makes sure the directory exists.
#[derive(Debug, Clone)]
pub struct ResourceDir {
    name: String,
    path: PathBuf,
}

impl ResourceDir {
    pub fn new(folder_name: &str, project_path: &Path) -> Result<Self> {
        let path = project_path.join(folder_name);
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
            debug!(path = ?path, "Created component directory");
        }
        Ok(Self {
            name: folder_name.to_string(),
            path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `file` inside the directory, as a string for resource maps.
    pub fn entry(&self, file: &str) -> String {
        self.path.join(file).to_string_lossy().into_owned()
    }
}
