//! Prompt steps of the scaffolding wizards.

use std::path::PathBuf;

use crate::error::{DockhandError, Result};
use crate::scaffold::context::ScaffoldWizardContext;
use crate::scaffold::detection::detect_platform;
use crate::scaffold::Platform;
use crate::ui::{Prompt, PromptOption};
use crate::wizard::PromptStep;

/// Asks which folder to scaffold into.
pub struct ChooseWorkspaceFolderStep;

impl<'a> PromptStep<ScaffoldWizardContext<'a>> for ChooseWorkspaceFolderStep {
    fn id(&self) -> &str {
        "choose-workspace-folder"
    }

    fn should_prompt(&self, ctx: &ScaffoldWizardContext<'a>) -> bool {
        ctx.answers.workspace_folder.is_none()
    }

    fn prompt(&self, ctx: &mut ScaffoldWizardContext<'a>) -> Result<()> {
        let answer = ctx
            .ui
            .prompt(&Prompt::input(
                "workspace_folder",
                "Workspace folder",
                Some("."),
            ))?
            .as_string();

        let folder = PathBuf::from(answer.trim());
        if !folder.is_dir() {
            return Err(DockhandError::WorkspaceNotFound { path: folder });
        }

        ctx.answers.workspace_folder = Some(folder);
        Ok(())
    }
}

/// Asks whether Compose files should be added as well.
pub struct ChooseComposeStep;

impl<'a> PromptStep<ScaffoldWizardContext<'a>> for ChooseComposeStep {
    fn id(&self) -> &str {
        "choose-compose"
    }

    fn should_prompt(&self, ctx: &ScaffoldWizardContext<'a>) -> bool {
        ctx.answers.include_compose.is_none()
    }

    fn prompt(&self, ctx: &mut ScaffoldWizardContext<'a>) -> Result<()> {
        let include = ctx
            .ui
            .prompt(&Prompt::confirm(
                "include_compose",
                "Include optional Docker Compose files?",
                false,
            ))?
            .as_bool();

        ctx.answers.include_compose = Some(include);
        Ok(())
    }
}

/// Asks for the application platform, suggesting the detected one.
pub struct ChoosePlatformStep;

impl<'a> PromptStep<ScaffoldWizardContext<'a>> for ChoosePlatformStep {
    fn id(&self) -> &str {
        "choose-platform"
    }

    fn should_prompt(&self, ctx: &ScaffoldWizardContext<'a>) -> bool {
        ctx.answers.platform.is_none()
    }

    fn prompt(&self, ctx: &mut ScaffoldWizardContext<'a>) -> Result<()> {
        let detected = ctx
            .answers
            .workspace_folder
            .as_deref()
            .and_then(detect_platform);

        let options = Platform::ALL
            .iter()
            .map(|p| PromptOption::new(p.label(), p.id()))
            .collect();

        let answer = ctx
            .ui
            .prompt(&Prompt::select(
                "platform",
                "Application platform",
                options,
                detected.map(|p| p.id()),
            ))?
            .as_string();

        let platform = answer
            .parse::<Platform>()
            .map_err(|message| DockhandError::StepFailed {
                step: self.id().to_string(),
                message,
            })?;

        ctx.answers.platform = Some(platform);
        Ok(())
    }
}

/// Asks which port the application listens on.
///
/// Skipped when a port is already known or the platform serves nothing.
pub struct ChoosePortStep;

impl<'a> PromptStep<ScaffoldWizardContext<'a>> for ChoosePortStep {
    fn id(&self) -> &str {
        "choose-port"
    }

    fn should_prompt(&self, ctx: &ScaffoldWizardContext<'a>) -> bool {
        ctx.answers.port.is_none() && ctx.answers.platform.is_none_or(|p| p.exposes_port())
    }

    fn prompt(&self, ctx: &mut ScaffoldWizardContext<'a>) -> Result<()> {
        let platform = ctx.answers.require_platform()?;
        let default = platform.default_port().map(|p| p.to_string());

        let answer = ctx
            .ui
            .prompt(&Prompt::input(
                "port",
                "Port the application listens on",
                default.as_deref(),
            ))?
            .as_string();

        let port = answer
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| DockhandError::StepFailed {
                step: self.id().to_string(),
                message: format!("'{}' is not a valid port", answer.trim()),
            })?;

        ctx.answers.port = Some(port);
        Ok(())
    }
}
