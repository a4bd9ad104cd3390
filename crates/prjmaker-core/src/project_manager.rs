//! Project Manager.
//!
//! Owns the base directory and the set of tracked projects, and keeps the
//! on-disk manifest in step with it.

use crate::error::{ProjectError, Result};
use crate::manifest::{ProjectManifest, MANIFEST_FILE};
use crate::metadata::ProjectMetadata;
use crate::settings::ProjectSettings;
use crate::{ManagerConfig, Project};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Component as PathComponent, Path, PathBuf};
use tracing::{debug, info, warn};

/// Manages project directories under one base directory
pub struct ProjectManager {
    /// Tracked projects keyed by name
    projects: BTreeMap<String, Project>,

    /// Absolute base directory holding the projects and the manifest
    base_dir: PathBuf,

    /// User written into new metadata
    user: String,

    /// Creator tag written into new metadata
    maker: String,

    /// Set once the manifest was persisted through `close`
    closed: bool,
}

impl ProjectManager {
    /// Open the manager for `working_dir/base_dir_name`.
    pub fn new(working_dir: impl Into<PathBuf>, base_dir_name: &str) -> Result<Self> {
        Self::with_config(&ManagerConfig::new(working_dir, base_dir_name))
    }

    /// Open the manager described by `config`.
    ///
    /// Creates the base directory if needed, then tracks every directory
    /// carrying the metadata marker that is either listed in the manifest
    /// or sits directly under the base directory. Writes the manifest when
    /// none existed yet.
    pub fn with_config(config: &ManagerConfig) -> Result<Self> {
        let base_dir = std::path::absolute(config.base_dir())?;
        std::fs::create_dir_all(&base_dir)?;

        let manifest_path = base_dir.join(MANIFEST_FILE);
        let manifest = match ProjectManifest::read(&manifest_path) {
            Ok(manifest) => Some(manifest),
            Err(ProjectError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        // Directories under the base directory are registered last so they
        // win name collisions against external manifest entries
        let local: BTreeSet<PathBuf> = child_dirs(&base_dir)?.into_iter().collect();
        let mut external = BTreeSet::new();
        if let Some(manifest) = &manifest {
            for path in manifest.paths() {
                let path = std::path::absolute(path)?;
                if !local.contains(&path) {
                    external.insert(path);
                }
            }
        }

        let mut projects = BTreeMap::new();
        for path in external.into_iter().chain(local) {
            if !ProjectMetadata::is_project_dir(&path) {
                debug!(path = ?path, "Skipping directory without metadata marker");
                continue;
            }
            let name = dir_name(&path);
            register(&mut projects, &name, path);
        }

        let manager = Self {
            projects,
            base_dir,
            user: config.user.clone(),
            maker: config.maker.clone(),
            closed: false,
        };

        if manifest.is_none() {
            manager.save_manifest()?;
        }

        info!(
            base_dir = ?manager.base_dir,
            projects = manager.projects.len(),
            "Project manager ready"
        );

        Ok(manager)
    }

    /// Absolute base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Location of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(MANIFEST_FILE)
    }

    /// Whether `base_dir/name` exists on disk, marker or not.
    pub fn exists_project(&self, name: &str) -> bool {
        validate_name(name).is_ok() && self.base_dir.join(name).exists()
    }

    /// Whether `name` is tracked by this manager.
    pub fn is_tracked(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    /// Names of tracked projects, sorted.
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Number of tracked projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Create `base_dir/name` and track it.
    ///
    /// With `exist_ok`, an existing directory is adopted and only receives
    /// metadata when its marker is missing; a missing `project.json` is
    /// restored with defaults. Without it, an existing
    /// directory fails with `AlreadyExists`.
    pub fn create_project(&mut self, name: &str, exist_ok: bool) -> Result<&mut Project> {
        validate_name(name)?;
        std::fs::create_dir_all(&self.base_dir)?;

        let path = self.base_dir.join(name);
        match std::fs::create_dir(&path) {
            Ok(()) => {
                self.initialize_dir(&path, name)?;
                info!(project = %name, path = ?path, "Created project");
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !exist_ok || !path.is_dir() {
                    return Err(ProjectError::AlreadyExists(name.to_string()));
                }
                if ProjectMetadata::is_project_dir(&path) {
                    ProjectSettings::write_default_if_missing(&path)?;
                } else {
                    self.initialize_dir(&path, name)?;
                }
                info!(project = %name, path = ?path, "Using existing project");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(register(&mut self.projects, name, path))
    }

    /// Track the existing directory `base_dir/name`.
    ///
    /// The metadata marker is not required.
    pub fn open_project(&mut self, name: &str) -> Result<&mut Project> {
        validate_name(name)?;

        let path = self.base_dir.join(name);
        if !path.is_dir() {
            return Err(ProjectError::ProjectNotFound(name.to_string()));
        }

        debug!(project = %name, path = ?path, "Opened project");
        Ok(register(&mut self.projects, name, path))
    }

    /// Copy the tracked project `source` to `base_dir/new_name`.
    ///
    /// The copy gets a fresh metadata record named `new_name`; user and
    /// creator tag are carried over from the source when readable.
    pub fn copy_project(&mut self, new_name: &str, source: &str) -> Result<&mut Project> {
        validate_name(new_name)?;

        let source_path = self
            .projects
            .get(source)
            .map(|p| p.path().to_path_buf())
            .ok_or_else(|| ProjectError::NotTracked(source.to_string()))?;
        if !source_path.is_dir() {
            return Err(ProjectError::DirectoryGone(source_path));
        }

        let (user, maker) = match ProjectMetadata::read(&source_path) {
            Ok(meta) => (meta.user, meta.maker),
            Err(e) => {
                debug!(source = %source, error = %e, "Source metadata unreadable, using defaults");
                (self.user.clone(), self.maker.clone())
            }
        };

        std::fs::create_dir_all(&self.base_dir)?;
        let path = self.base_dir.join(new_name);
        match std::fs::create_dir(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ProjectError::AlreadyExists(new_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        if let Err(e) = copy_dir_recursive(&source_path, &path) {
            // Leave nothing half-copied behind
            if let Err(cleanup) = std::fs::remove_dir_all(&path) {
                warn!(path = ?path, error = %cleanup, "Failed to clean up partial copy");
            }
            return Err(e.into());
        }

        ProjectMetadata::write(&path, new_name, Some(&user), Some(&maker))?;

        info!(source = %source, project = %new_name, path = ?path, "Copied project");

        Ok(register(&mut self.projects, new_name, path))
    }

    /// Delete a tracked project's directory and stop tracking it.
    pub fn remove_project(&mut self, name: impl AsRef<str>) -> Result<()> {
        let name = name.as_ref();
        let path = self
            .projects
            .get(name)
            .map(|p| p.path().to_path_buf())
            .ok_or_else(|| ProjectError::NotTracked(name.to_string()))?;

        match std::fs::remove_dir_all(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(project = %name, path = ?path, "Project directory already gone");
            }
            Err(e) => return Err(e.into()),
        }

        self.projects.remove(name);
        info!(project = %name, path = ?path, "Removed project");

        Ok(())
    }

    /// Delete the whole base directory and forget every project.
    ///
    /// The manifest is not rewritten; call `save_manifest` to record the
    /// empty state. Projects tracked from outside the base directory are
    /// only forgotten, not deleted.
    pub fn remove_all_projects(&mut self) -> Result<()> {
        match std::fs::remove_dir_all(&self.base_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let forgotten = self.projects.len();
        self.projects.clear();
        info!(base_dir = ?self.base_dir, forgotten, "Removed all projects");

        Ok(())
    }

    /// List project directories under the base directory plus `extra_paths`.
    ///
    /// Only directories carrying the metadata marker are returned. Names
    /// and paths are parallel, sorted by path.
    pub fn list_projects<I, P>(&self, extra_paths: I) -> Result<(Vec<String>, Vec<PathBuf>)>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut candidates = BTreeSet::new();
        if self.base_dir.is_dir() {
            candidates.extend(child_dirs(&self.base_dir)?);
        }
        for path in extra_paths {
            candidates.insert(std::path::absolute(path.as_ref())?);
        }

        Ok(candidates
            .into_iter()
            .filter(|path| ProjectMetadata::is_project_dir(path))
            .map(|path| (dir_name(&path), path))
            .unzip())
    }

    /// Look up a tracked project.
    pub fn get(&self, name: &str) -> Result<&Project> {
        let project = self
            .projects
            .get(name)
            .ok_or_else(|| ProjectError::NotTracked(name.to_string()))?;
        if !project.path().is_dir() {
            return Err(ProjectError::DirectoryGone(project.path().to_path_buf()));
        }
        Ok(project)
    }

    /// Look up a tracked project for attaching components.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Project> {
        let project = self
            .projects
            .get_mut(name)
            .ok_or_else(|| ProjectError::NotTracked(name.to_string()))?;
        if !project.path().is_dir() {
            return Err(ProjectError::DirectoryGone(project.path().to_path_buf()));
        }
        Ok(project)
    }

    /// Rewrite the manifest from the tracked projects.
    pub fn save_manifest(&self) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        let manifest = ProjectManifest::from_paths(self.projects.values().map(Project::path));
        manifest.write(&self.manifest_path())
    }

    /// Persist the manifest and shut the manager down.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.save_manifest()
    }

    fn initialize_dir(&self, path: &Path, name: &str) -> Result<()> {
        ProjectMetadata::write(path, name, Some(&self.user), Some(&self.maker))?;
        ProjectSettings::write_default_if_missing(path)
    }
}

impl Drop for ProjectManager {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if !self.base_dir.exists() {
            debug!(base_dir = ?self.base_dir, "Base directory removed, skipping manifest save");
            return;
        }
        if let Err(e) = self.save_manifest() {
            warn!(error = %e, "Failed to save manifest on shutdown");
        }
    }
}

/// Track `path` under `name`, keeping an entry already bound to the same path.
fn register<'a>(
    projects: &'a mut BTreeMap<String, Project>,
    name: &str,
    path: PathBuf,
) -> &'a mut Project {
    match projects.entry(name.to_string()) {
        Entry::Occupied(mut entry) => {
            if entry.get().path() != path {
                warn!(
                    project = %name,
                    previous = ?entry.get().path(),
                    path = ?path,
                    "Replacing tracked project with the same name"
                );
                entry.insert(Project::new(path).with_name(name));
            }
            entry.into_mut()
        }
        Entry::Vacant(entry) => entry.insert(Project::new(path).with_name(name)),
    }
}

/// Reject names that are not a single normal path component.
fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(PathComponent::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(ProjectError::InvalidName(name.to_string())),
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Directories directly under `dir`.
fn child_dirs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

/// Recursively copy a directory.
///
/// Symlinks are followed: linked directories and files are copied as
/// regular content.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if std::fs::metadata(&src_path)?.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::META_HIDDEN_FILE;
    use tempfile::tempdir;

    fn test_manager(temp_dir: &Path) -> ProjectManager {
        ProjectManager::new(temp_dir, "projects").unwrap()
    }

    #[test]
    fn test_new_creates_base_dir_and_manifest() {
        let temp_dir = tempdir().unwrap();
        let manager = test_manager(temp_dir.path());

        assert!(temp_dir.path().join("projects").is_dir());
        assert!(manager.manifest_path().is_file());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_create_project() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let project = manager.create_project("NewCompany", true).unwrap();
        assert_eq!(project.name(), "NewCompany");
        assert_eq!(project.hidden_config().unwrap().name, "NewCompany");
        assert!(project.settings().is_ok());

        assert!(manager.exists_project("NewCompany"));
        assert!(manager.is_tracked("NewCompany"));
        assert!(temp_dir
            .path()
            .join("projects/NewCompany")
            .join(META_HIDDEN_FILE)
            .is_file());
    }

    #[test]
    fn test_create_project_uses_configured_user() {
        let temp_dir = tempdir().unwrap();
        let config = ManagerConfig {
            user: "alice".to_string(),
            maker: "Inspector".to_string(),
            ..ManagerConfig::new(temp_dir.path(), "projects")
        };
        let mut manager = ProjectManager::with_config(&config).unwrap();

        let meta = manager
            .create_project("Line1", true)
            .unwrap()
            .hidden_config()
            .unwrap();
        assert_eq!(meta.user, "alice");
        assert_eq!(meta.maker, "Inspector");
    }

    #[test]
    fn test_create_project_idempotent() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let first = manager.create_project("NewCompany", true).unwrap().path().to_path_buf();
        let created = manager.get("NewCompany").unwrap().hidden_config().unwrap();

        let second = manager.create_project("NewCompany", true).unwrap().path().to_path_buf();
        let again = manager.get("NewCompany").unwrap().hidden_config().unwrap();

        assert_eq!(first, second);
        assert_eq!(created, again);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_create_project_strict_fails_when_present() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        manager.create_project("NewCompany", true).unwrap();
        let result = manager.create_project("NewCompany", false);
        assert!(matches!(result, Err(ProjectError::AlreadyExists(name)) if name == "NewCompany"));
    }

    #[test]
    fn test_create_project_adopts_unmarked_dir() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());
        let raw = manager.base_dir().join("Imported");
        std::fs::create_dir_all(&raw).unwrap();
        std::fs::write(raw.join("frame.png"), "png").unwrap();

        manager.create_project("Imported", true).unwrap();

        assert!(ProjectMetadata::is_project_dir(&raw));
        assert!(raw.join("frame.png").exists());
    }

    #[test]
    fn test_create_project_restores_missing_settings() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let path = manager.create_project("Marked", true).unwrap().path().to_path_buf();
        let created = ProjectMetadata::read(&path).unwrap();
        std::fs::remove_file(ProjectSettings::file_path(&path)).unwrap();

        let project = manager.create_project("Marked", true).unwrap();
        assert!(project.settings().is_ok());
        assert_eq!(project.hidden_config().unwrap(), created);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        for name in ["", ".", "..", "a/b", "../escape", "a\\b"] {
            let result = manager.create_project(name, true);
            assert!(
                matches!(result, Err(ProjectError::InvalidName(_))),
                "name {name:?} should be rejected"
            );
        }
        assert!(!manager.exists_project(".."));
    }

    #[test]
    fn test_open_project() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let result = manager.open_project("Missing");
        assert!(matches!(result, Err(ProjectError::ProjectNotFound(_))));

        std::fs::create_dir_all(manager.base_dir().join("Plain")).unwrap();
        let project = manager.open_project("Plain").unwrap();
        assert_eq!(project.name(), "Plain");
        assert!(manager.is_tracked("Plain"));
    }

    #[test]
    fn test_copy_project() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let source = manager.create_project("NewCompany", true).unwrap();
        let source_path = source.path().to_path_buf();
        std::fs::create_dir_all(source_path.join("crops")).unwrap();
        std::fs::write(source_path.join("crops/a.png"), "a").unwrap();

        let copy = manager.copy_project("AnotherCompany", "NewCompany").unwrap();
        assert_eq!(copy.name(), "AnotherCompany");
        assert!(copy.path().join("crops/a.png").is_file());
        assert!(copy.path().join("project.json").is_file());

        let meta = copy.hidden_config().unwrap();
        assert_eq!(meta.name, "AnotherCompany");
        assert_eq!(
            ProjectMetadata::read(&source_path).unwrap().name,
            "NewCompany"
        );
    }

    #[test]
    fn test_copy_project_errors() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let result = manager.copy_project("Copy", "Unknown");
        assert!(matches!(result, Err(ProjectError::NotTracked(_))));

        manager.create_project("A", true).unwrap();
        manager.create_project("B", true).unwrap();
        let result = manager.copy_project("B", "A");
        assert!(matches!(result, Err(ProjectError::AlreadyExists(_))));

        std::fs::remove_dir_all(manager.base_dir().join("A")).unwrap();
        let result = manager.copy_project("C", "A");
        assert!(matches!(result, Err(ProjectError::DirectoryGone(_))));
        assert!(!manager.exists_project("C"));
    }

    #[test]
    fn test_remove_project() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let path = manager.create_project("Gone", true).unwrap().path().to_path_buf();
        manager.remove_project("Gone").unwrap();

        assert!(!path.exists());
        assert!(!manager.is_tracked("Gone"));

        let result = manager.remove_project("Gone");
        assert!(matches!(result, Err(ProjectError::NotTracked(_))));
    }

    #[test]
    fn test_remove_untracked_dir_fails() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());
        std::fs::create_dir_all(manager.base_dir().join("Stray")).unwrap();

        let result = manager.remove_project("Stray");
        assert!(matches!(result, Err(ProjectError::NotTracked(_))));
        assert!(manager.exists_project("Stray"));
    }

    #[test]
    fn test_remove_all_projects() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        manager.create_project("A", true).unwrap();
        manager.create_project("B", true).unwrap();
        manager.remove_all_projects().unwrap();

        assert!(!temp_dir.path().join("projects").exists());
        assert!(manager.is_empty());

        // Missing base directory is not an error
        manager.remove_all_projects().unwrap();

        drop(manager);
        assert!(!temp_dir.path().join("projects").exists());
    }

    #[test]
    fn test_list_projects() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        manager.create_project("B", true).unwrap();
        manager.create_project("A", true).unwrap();
        std::fs::create_dir_all(manager.base_dir().join("Unmarked")).unwrap();

        let external = temp_dir.path().join("elsewhere/Outside");
        std::fs::create_dir_all(&external).unwrap();
        ProjectMetadata::write(&external, "Outside", None, None).unwrap();

        let (names, paths) = manager.list_projects([&external]).unwrap();
        assert_eq!(names.len(), paths.len());
        assert!(names.contains(&"A".to_string()));
        assert!(names.contains(&"B".to_string()));
        assert!(names.contains(&"Outside".to_string()));
        assert!(!names.contains(&"Unmarked".to_string()));

        for (name, path) in names.iter().zip(&paths) {
            assert_eq!(&dir_name(path), name);
        }
    }

    #[test]
    fn test_get_detects_vanished_directory() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let path = manager.create_project("Stale", true).unwrap().path().to_path_buf();
        std::fs::remove_dir_all(&path).unwrap();

        assert!(matches!(manager.get("Stale"), Err(ProjectError::DirectoryGone(_))));
        assert!(matches!(manager.get("Nope"), Err(ProjectError::NotTracked(_))));
    }

    #[test]
    fn test_register_replaces_entry_with_other_path() {
        let mut projects = BTreeMap::new();
        register(&mut projects, "a", PathBuf::from("/base/a"));
        register(&mut projects, "a", PathBuf::from("/elsewhere/a"));

        assert_eq!(projects.len(), 1);
        assert_eq!(projects["a"].path(), Path::new("/elsewhere/a"));
    }

    #[test]
    fn test_copy_dir_recursive() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        std::fs::create_dir_all(src.join("nested/deeper")).unwrap();
        std::fs::write(src.join("top.txt"), "top").unwrap();
        std::fs::write(src.join("nested/deeper/leaf.txt"), "leaf").unwrap();

        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("nested/deeper/leaf.txt")).unwrap(),
            "leaf"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_project_follows_symlinked_dirs() {
        let temp_dir = tempdir().unwrap();
        let mut manager = test_manager(temp_dir.path());

        let shared = temp_dir.path().join("shared_media");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("clip.mp4"), "clip").unwrap();

        let source = manager.create_project("Src", true).unwrap().path().to_path_buf();
        std::os::unix::fs::symlink(&shared, source.join("media")).unwrap();
        std::os::unix::fs::symlink(shared.join("clip.mp4"), source.join("latest.mp4")).unwrap();

        let copy = manager.copy_project("Dst", "Src").unwrap().path().to_path_buf();

        let media = copy.join("media");
        assert!(std::fs::symlink_metadata(&media).unwrap().is_dir());
        assert_eq!(std::fs::read_to_string(media.join("clip.mp4")).unwrap(), "clip");
        assert_eq!(std::fs::read_to_string(copy.join("latest.mp4")).unwrap(), "clip");
        assert!(shared.join("clip.mp4").exists());
    }

    #[test]
    fn test_base_dir_project_wins_name_collision() {
        let temp_dir = tempdir().unwrap();
        let external = temp_dir.path().join("shared/Twin");
        std::fs::create_dir_all(&external).unwrap();
        ProjectMetadata::write(&external, "Twin", None, None).unwrap();

        let mut manager = test_manager(temp_dir.path());
        let local = manager.create_project("Twin", true).unwrap().path().to_path_buf();
        let manifest_path = manager.manifest_path();
        manager.close().unwrap();

        ProjectManifest::from_paths([&external, &local])
            .write(&manifest_path)
            .unwrap();

        let mut reloaded = test_manager(temp_dir.path());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("Twin").unwrap().path(), local.as_path());

        reloaded.remove_project("Twin").unwrap();
        assert!(!local.exists());
        assert!(external.join(META_HIDDEN_FILE).exists());
    }
}
