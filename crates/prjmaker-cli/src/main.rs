//! prjmaker CLI
//!
//! Command-line interface for managing project directories.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prjmaker_core::{ManagerConfig, ProjectError, ProjectManager};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prjmaker")]
#[command(about = "prjmaker - Per-session project directories without a database")]
#[command(version)]
struct Cli {
    /// Working directory the base directory is resolved against
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Base directory name
    #[arg(long, global = true)]
    base: Option<String>,

    /// Config file (default: <config dir>/prjmaker/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List project directories
    List {
        /// Additional project paths to include
        #[arg(long = "extra")]
        extra: Vec<PathBuf>,
    },

    /// Create a project (reuses an existing directory unless --strict)
    Create {
        name: String,

        /// Fail if the directory already exists
        #[arg(long)]
        strict: bool,
    },

    /// Track an existing project directory
    Open { name: String },

    /// Copy a project under a new name
    Copy { source: String, name: String },

    /// Delete a project directory
    Remove { name: String },

    /// Delete the whole base directory
    RemoveAll {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Check whether a project directory exists
    Exists { name: String },

    /// Show project metadata
    Info { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_err) = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_err {
        tracing::warn!(error = %e, "Failed to load config file, using defaults");
    }

    let mut manager = ProjectManager::with_config(&config).with_context(|| {
        format!(
            "Failed to open base directory {}",
            config.base_dir().display()
        )
    })?;

    match cli.command {
        Commands::List { extra } => cmd_list(&manager, &extra)?,
        Commands::Create { name, strict } => cmd_create(&mut manager, &name, strict)?,
        Commands::Open { name } => cmd_open(&mut manager, &name)?,
        Commands::Copy { source, name } => cmd_copy(&mut manager, &source, &name)?,
        Commands::Remove { name } => cmd_remove(&mut manager, &name)?,
        Commands::RemoveAll { yes } => return cmd_remove_all(manager, yes),
        Commands::Exists { name } => cmd_exists(&manager, &name),
        Commands::Info { name } => cmd_info(&manager, &name)?,
    }

    manager.close().context("Failed to save manifest")
}

/// Resolve the config. A broken default config file falls back to defaults
/// and its error is handed back so it can be logged once tracing is up.
fn load_config(cli: &Cli) -> Result<(ManagerConfig, Option<std::io::Error>)> {
    let (mut config, config_err) = match &cli.config {
        Some(path) => (
            ManagerConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None,
        ),
        None => match ManagerConfig::try_load() {
            Ok(config) => (config, None),
            Err(e) => (ManagerConfig::default(), Some(e)),
        },
    };

    if let Some(root) = &cli.root {
        config.working_dir = root.clone();
    }
    if let Some(base) = &cli.base {
        config.base_dir_name = base.clone();
    }

    Ok((config, config_err))
}

fn cmd_list(manager: &ProjectManager, extra: &[PathBuf]) -> Result<()> {
    let (names, paths) = manager.list_projects(extra)?;

    if names.is_empty() {
        println!("No projects in {}", manager.base_dir().display());
        return Ok(());
    }

    for (name, path) in names.iter().zip(&paths) {
        println!("{:<24} {}", name, path.display());
    }

    Ok(())
}

fn cmd_create(manager: &mut ProjectManager, name: &str, strict: bool) -> Result<()> {
    match manager.create_project(name, !strict) {
        Ok(project) => {
            println!("✓ Project ready: {}", project.path().display());
            Ok(())
        }
        Err(ProjectError::AlreadyExists(name)) => {
            anyhow::bail!("Project {} already exists (drop --strict to reuse it)", name)
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_open(manager: &mut ProjectManager, name: &str) -> Result<()> {
    let project = manager.open_project(name)?;
    println!("✓ Tracking {}", project.path().display());
    Ok(())
}

fn cmd_copy(manager: &mut ProjectManager, source: &str, name: &str) -> Result<()> {
    let project = manager
        .copy_project(name, source)
        .with_context(|| format!("Failed to copy {} to {}", source, name))?;
    println!("✓ Copied {} to {}", source, project.path().display());
    Ok(())
}

fn cmd_remove(manager: &mut ProjectManager, name: &str) -> Result<()> {
    manager
        .remove_project(name)
        .with_context(|| format!("Failed to remove {}", name))?;
    println!("✓ Removed {}", name);
    Ok(())
}

fn cmd_remove_all(mut manager: ProjectManager, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "This deletes {} and every project in it. Re-run with --yes to confirm.",
            manager.base_dir().display()
        );
        return manager.close().context("Failed to save manifest");
    }

    manager.remove_all_projects()?;
    println!("✓ Removed {}", manager.base_dir().display());
    Ok(())
}

fn cmd_exists(manager: &ProjectManager, name: &str) {
    if manager.exists_project(name) {
        println!("✓ {} exists", name);
    } else {
        println!("✗ {} does not exist", name);
    }
}

fn cmd_info(manager: &ProjectManager, name: &str) -> Result<()> {
    let project = manager.get(name)?;
    let meta = project.hidden_config()?;

    println!("Project: {}", meta.name);
    println!("  Path:     {}", project.path().display());
    println!("  Created:  {}", meta.create_date.format("%Y/%m/%d %H:%M:%S"));
    println!("  Updated:  {}", meta.update_date.format("%Y/%m/%d %H:%M:%S"));
    println!("  User:     {}", meta.user);
    println!("  Maker:    {}", meta.maker);

    match project.settings() {
        Ok(settings) => {
            println!("  Components: {}", settings.components.len());
            println!(
                "  Recording:  every {} min into {}",
                settings.record.interval_minutes, settings.record.directory
            );
        }
        Err(ProjectError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
