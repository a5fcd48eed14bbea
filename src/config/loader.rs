//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::DockhandConfig;
use crate::error::{DockhandError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".dockhand";

/// Paths to configuration files in merge order (later overrides earlier).
///
/// 1. Project config (`.dockhand/config.yml`, or the `--config` file)
/// 2. Local overrides (`.dockhand/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config: .dockhand/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .dockhand/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// A `.dockhand` directory wins; a `.git` directory is the fallback.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value for merging.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DockhandError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DockhandError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| DockhandError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a `DockhandConfig`.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DockhandConfig> {
    if content.trim().is_empty() {
        return Ok(DockhandConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DockhandError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the configuration for a project.
///
/// Both files are optional; with neither present the defaults apply.
/// `config_override` replaces the project file and must exist.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DockhandConfig> {
    let mut paths = ConfigPaths::discover(project_root);

    if let Some(path) = config_override {
        if !path.exists() {
            return Err(DockhandError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        paths.project = Some(path.to_path_buf());
    }

    let files = paths.all_existing();
    if files.is_empty() {
        tracing::debug!("No config files under {}", project_root.display());
        return Ok(DockhandConfig::default());
    }

    let mut values = Vec::with_capacity(files.len());
    for path in &files {
        tracing::debug!("Loading config from {}", path.display());
        values.push(load_config_value(path)?);
    }

    let merged = merge_configs(&values);
    let source = files.last().map(|p| p.to_path_buf()).unwrap_or_default();

    serde_yaml::from_value(merged).map_err(|e| DockhandError::ConfigParseError {
        path: source,
        message: format!("Failed to parse merged config: {}", e),
    })
}
