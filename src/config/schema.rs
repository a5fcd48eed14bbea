//! Configuration schema for `.dockhand/config.yml`.
//!
//! Every field has a default, so an empty or missing file is a valid
//! configuration.

use crate::scaffold::Platform;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockhandConfig {
    /// Settings for `dockhand compose`
    pub compose: ComposeSettings,

    /// Pre-supplied answers for `dockhand scaffold`
    pub scaffold: ScaffoldSettings,
}

/// Docker Compose command settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeSettings {
    /// Pass `--build` to `up`
    #[serde(default = "default_true")]
    pub build: bool,

    /// Pass `-d` to `up`
    #[serde(default = "default_true")]
    pub detached: bool,

    /// Docker context flavour the commands run against
    pub context_type: ContextType,

    /// Custom template for `up`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_template: Option<String>,

    /// Custom template for `down`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_template: Option<String>,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            build: true,
            detached: true,
            context_type: ContextType::default(),
            up_template: None,
            down_template: None,
        }
    }
}

/// Kind of Docker context.
///
/// Cloud (`aci`) contexts only understand the newer `docker compose`
/// syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    #[default]
    Moby,
    Aci,
}

/// Answers supplied to the scaffolding wizard up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_compose: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

fn default_true() -> bool {
    true
}
