//! Core error types for prjmaker.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Expected file (metadata, manifest, settings) is absent
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Project directory does not exist under the base directory
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Target already present and overriding was not permitted
    #[error("Project already exists: {0}")]
    AlreadyExists(String),

    /// Name is not tracked by the manager
    #[error("Project not tracked: {0}")]
    NotTracked(String),

    /// Tracked project whose directory vanished out-of-band
    #[error("Project directory is gone: {}", .0.display())]
    DirectoryGone(PathBuf),

    /// Name cannot be used as a single directory component
    #[error("Invalid project name: {0:?}")]
    InvalidName(String),

    /// Malformed JSON in a metadata, manifest or settings file
    #[error("Parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectError {
    /// Map an IO error on `path` to `NotFound` when the file is missing.
    pub(crate) fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ProjectError::NotFound(path)
        } else {
            ProjectError::Io(err)
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        ProjectError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProjectError {
    fn from(e: serde_json::Error) -> Self {
        ProjectError::Serialization(e.to_string())
    }
}

/// Result alias for project operations.
pub type Result<T> = std::result::Result<T, ProjectError>;
