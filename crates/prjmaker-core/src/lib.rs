//! prjmaker core components
//!
//! This crate manages named project directories under a base directory:
//! creating, copying, listing and deleting them, tagging each with a hidden
//! metadata file and tracking them in a manifest.

mod component;
mod config;
mod error;
mod manifest;
mod metadata;
mod project;
mod project_manager;
mod settings;

pub use component::{Component, ResourceDir};
pub use config::ManagerConfig;
pub use error::{ProjectError, Result};
pub use manifest::{ProjectManifest, MANIFEST_FILE};
pub use metadata::{ProjectMetadata, DEFAULT_MAKER, DEFAULT_USER, META_HIDDEN_FILE};
pub use project::Project;
pub use project_manager::ProjectManager;
pub use settings::{ComponentConfig, ProjectSettings, RecordConfig, SETTINGS_FILE};
