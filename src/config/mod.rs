//! Configuration loading, parsing, and validation for Dockhand.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Variable interpolation in [`interpolation`]
//!
//! # Example
//!
//! ```
//! use dockhand::config::{load_config, validate, ContextType};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".dockhand");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "compose:\n  context_type: aci").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.compose.context_type, ContextType::Aci);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.dockhand/config.yml`, or `--config <path>`)
//! 2. Local overrides (`.dockhand/config.local.yml`)

pub mod interpolation;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use interpolation::{
    extract_variables, parse_interpolation, resolve_string, Segment, Variables,
};
pub use loader::{
    find_project_root, load_config, load_config_value, parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ComposeSettings, ContextType, DockhandConfig, ScaffoldSettings};
pub use validator::{validate, validate_config, ValidationError};
