//! Project handle bound to one directory.

use crate::component::Component;
use crate::error::{ProjectError, Result};
use crate::metadata::ProjectMetadata;
use crate::settings::{ComponentConfig, ProjectSettings};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// A project directory and the components attached to it
pub struct Project {
    /// Location of the project directory
    path: PathBuf,

    /// Project name (final path segment unless overridden)
    name: String,

    /// Attached components keyed by resource identifier
    components: BTreeMap<String, Box<dyn Component>>,
}

impl Project {
    /// Create a handle for `path`, named after its final segment.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            name,
            components: BTreeMap::new(),
        }
    }

    /// Override the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read this project's hidden metadata record.
    pub fn hidden_config(&self) -> Result<ProjectMetadata> {
        ProjectMetadata::read(&self.path)
    }

    /// Attach a component built by `factory(folder_name, project_path)`.
    ///
    /// Existing data under `<project>/<folder_name>` is reused when the
    /// component reports it valid; otherwise the component creates its
    /// default state. Replaces any component registered under
    /// `resource_id`.
    pub fn add_component<C, F>(
        &mut self,
        resource_id: &str,
        folder_name: &str,
        factory: F,
    ) -> Result<(BTreeMap<String, String>, &mut dyn Component)>
    where
        C: Component + 'static,
        F: FnOnce(&str, &Path) -> Result<C>,
    {
        let component_path = self.path.join(folder_name);
        let existed = component_path.exists();

        let mut component = factory(folder_name, &self.path)?;

        if existed && component.valid() {
            info!(path = ?component_path, "Using existing component resources");
        } else {
            info!(path = ?component_path, "Creating component resources");
            component.create()?;
        }

        let resources = component.resources();
        let slot = match self.components.entry(resource_id.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(Box::new(component));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Box::new(component)),
        };

        let component: &mut dyn Component = slot.as_mut();
        Ok((resources, component))
    }

    /// Detach a component. On-disk data is left in place.
    pub fn remove_component(&mut self, resource_id: &str) -> Option<Box<dyn Component>> {
        self.components.remove(resource_id)
    }

    pub fn component(&self, resource_id: &str) -> Option<&dyn Component> {
        self.components.get(resource_id).map(|c| c.as_ref())
    }

    pub fn component_mut(&mut self, resource_id: &str) -> Option<&mut dyn Component> {
        self.components
            .get_mut(resource_id)
            .map(|c| c.as_mut() as &mut dyn Component)
    }

    /// Resource identifiers of attached components, sorted.
    pub fn component_ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Attached components as settings entries.
    pub fn components_config(&self) -> Vec<ComponentConfig> {
        self.components
            .keys()
            .map(|id| ComponentConfig {
                resource_path: id.clone(),
            })
            .collect()
    }

    /// Read `project.json`.
    pub fn settings(&self) -> Result<ProjectSettings> {
        ProjectSettings::read(&self.path)
    }

    /// Rewrite `project.json` with the attached components.
    ///
    /// The stored `record` block is kept; a missing file starts from
    /// defaults.
    pub fn save_settings(&self) -> Result<ProjectSettings> {
        let mut settings = match ProjectSettings::read(&self.path) {
            Ok(settings) => settings,
            Err(ProjectError::NotFound(_)) => ProjectSettings::default(),
            Err(e) => return Err(e),
        };
        settings.components = self.components_config();
        settings.write(&self.path)?;
        Ok(settings)
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}
