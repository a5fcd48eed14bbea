//! Wizard context shared by the scaffolding steps.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldSettings;
use crate::error::{DockhandError, Result};
use crate::ui::UserInterface;

use super::Platform;

/// Which group of files a scaffolding run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldType {
    /// Dockerfile and .dockerignore
    All,
    /// Compose files only
    Compose,
}

/// Answers collected (or supplied up front) for a scaffolding run.
///
/// Every answer is optional because prompt steps fill them in as the
/// wizard runs. Steps that depend on an earlier answer read it through a
/// `require_*` accessor, which fails loudly instead of defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScaffoldContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folder: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_compose: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaffold_type: Option<ScaffoldType>,

    /// Overwrite existing files without asking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,

    /// Files written by this run, in write order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written_files: Vec<PathBuf>,
}

impl ScaffoldContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the answers stored in configuration.
    pub fn from_settings(settings: &ScaffoldSettings) -> Self {
        Self {
            platform: settings.platform,
            include_compose: settings.include_compose,
            port: settings.port,
            ..Self::default()
        }
    }

    /// Copy every answer this context lacks from a prior run.
    ///
    /// Answers already present win. `scaffold_type` and `written_files`
    /// describe a single run and are never inherited.
    pub fn inherit(&mut self, prior: &ScaffoldContext) {
        fn fill<T: Clone>(slot: &mut Option<T>, prior: &Option<T>) {
            if slot.is_none() {
                slot.clone_from(prior);
            }
        }

        fill(&mut self.workspace_folder, &prior.workspace_folder);
        fill(&mut self.platform, &prior.platform);
        fill(&mut self.include_compose, &prior.include_compose);
        fill(&mut self.port, &prior.port);
        fill(&mut self.service_name, &prior.service_name);
        fill(&mut self.overwrite, &prior.overwrite);
    }

    pub fn require_workspace_folder(&self) -> Result<&Path> {
        self.workspace_folder
            .as_deref()
            .ok_or(DockhandError::MissingContextField {
                field: "workspace_folder",
            })
    }

    pub fn require_platform(&self) -> Result<Platform> {
        self.platform
            .ok_or(DockhandError::MissingContextField { field: "platform" })
    }

    pub fn require_service_name(&self) -> Result<&str> {
        self.service_name
            .as_deref()
            .ok_or(DockhandError::MissingContextField {
                field: "service_name",
            })
    }

    /// Whether the compose follow-up should run.
    pub fn wants_compose(&self) -> bool {
        self.include_compose.unwrap_or(false)
    }
}

/// Context handed to scaffolding steps: the answers plus the UI to ask
/// and report through.
pub struct ScaffoldWizardContext<'a> {
    pub ui: &'a mut dyn UserInterface,
    pub answers: ScaffoldContext,
}

impl<'a> ScaffoldWizardContext<'a> {
    pub fn new(ui: &'a mut dyn UserInterface, answers: ScaffoldContext) -> Self {
        Self { ui, answers }
    }
}
