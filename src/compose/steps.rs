//! Steps of the compose wizard.

use std::path::PathBuf;

use crate::config::ComposeSettings;
use crate::error::{DockhandError, Result};
use crate::shell::{execute, CommandOptions};
use crate::ui::{DockhandTheme, Prompt, PromptOption, UserInterface};
use crate::wizard::{ExecuteStep, PromptStep};

use super::command::{build_command, rewrite_for_new_cli, ComposeAction, ComposeCommandKind};
use super::discovery::discover_compose_files;

/// Context shared by the compose steps.
pub struct ComposeContext<'a> {
    pub ui: &'a mut dyn UserInterface,
    pub action: ComposeAction,
    pub workspace_folder: PathBuf,
    pub settings: ComposeSettings,

    /// Compose files relative to the workspace folder. An empty list runs
    /// without `-f`, letting Compose pick its default file.
    pub files: Option<Vec<String>>,

    /// Print commands instead of running them
    pub dry_run: bool,

    /// Command lines issued so far, in order
    pub commands: Vec<String>,
}

impl<'a> ComposeContext<'a> {
    pub fn new(
        ui: &'a mut dyn UserInterface,
        action: ComposeAction,
        workspace_folder: PathBuf,
        settings: ComposeSettings,
    ) -> Self {
        Self {
            ui,
            action,
            workspace_folder,
            settings,
            files: None,
            dry_run: false,
            commands: Vec::new(),
        }
    }

    pub fn require_files(&self) -> Result<&[String]> {
        self.files
            .as_deref()
            .ok_or(DockhandError::MissingContextField {
                field: "compose_files",
            })
    }
}

/// Picks the compose file to act on.
pub struct ChooseComposeFilesStep;

impl<'a> PromptStep<ComposeContext<'a>> for ChooseComposeFilesStep {
    fn id(&self) -> &str {
        "choose-compose-files"
    }

    fn should_prompt(&self, ctx: &ComposeContext<'a>) -> bool {
        ctx.files.is_none()
    }

    fn prompt(&self, ctx: &mut ComposeContext<'a>) -> Result<()> {
        if !ctx.workspace_folder.is_dir() {
            return Err(DockhandError::WorkspaceNotFound {
                path: ctx.workspace_folder.clone(),
            });
        }

        let found = discover_compose_files(&ctx.workspace_folder)?;

        let files = match found.len() {
            0 => {
                tracing::warn!(
                    "No compose files in {}, running without -f",
                    ctx.workspace_folder.display()
                );
                Vec::new()
            }
            1 => found,
            _ => {
                let options = found.iter().map(|f| PromptOption::new(f, f)).collect();
                let choice = ctx
                    .ui
                    .prompt(&Prompt::select(
                        "compose_file",
                        ctx.action.file_question(),
                        options,
                        found.first().map(String::as_str),
                    ))?
                    .as_string();

                if !found.contains(&choice) {
                    return Err(DockhandError::StepFailed {
                        step: self.id().to_string(),
                        message: format!("'{}' is not one of the compose files found", choice),
                    });
                }
                vec![choice]
            }
        };

        ctx.files = Some(files);
        Ok(())
    }
}

/// Runs one compose subcommand against every selected file.
pub struct RunComposeCommandStep {
    kind: ComposeCommandKind,
    priority: i32,
    id: String,
}

impl RunComposeCommandStep {
    pub fn new(kind: ComposeCommandKind, priority: i32) -> Self {
        Self {
            kind,
            priority,
            id: format!("compose-{}", kind),
        }
    }

    fn run_one(&self, ctx: &mut ComposeContext<'_>, command: &str) -> Result<()> {
        let show_output = ctx.ui.output_mode().shows_command_output();
        let options = CommandOptions {
            cwd: Some(ctx.workspace_folder.clone()),
            capture: !show_output,
            ..Default::default()
        };

        if show_output {
            ctx.ui.message(&DockhandTheme::new().format_command(command));
            let result = execute(command, &options)?;
            return if result.success {
                Ok(())
            } else {
                Err(DockhandError::CommandFailed {
                    command: command.to_string(),
                    code: result.exit_code,
                })
            };
        }

        let mut spinner = ctx.ui.start_spinner(command);
        let result = execute(command, &options)?;
        if result.success {
            spinner.finish_success(&format!("docker compose {} finished", self.kind));
            Ok(())
        } else {
            spinner.finish_error(&format!("docker compose {} failed", self.kind));
            let stderr = result.stderr.trim();
            if !stderr.is_empty() {
                ctx.ui.error(stderr);
            }
            Err(DockhandError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            })
        }
    }
}

impl<'a> ExecuteStep<ComposeContext<'a>> for RunComposeCommandStep {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn execute(&self, ctx: &mut ComposeContext<'a>) -> Result<()> {
        let files = ctx.require_files()?.to_vec();
        let targets: Vec<Option<&str>> = if files.is_empty() {
            vec![None]
        } else {
            files.iter().map(|f| Some(f.as_str())).collect()
        };

        for file in targets {
            let command = build_command(self.kind, file, &ctx.settings)?;
            let command = rewrite_for_new_cli(&command, ctx.settings.context_type);

            if ctx.dry_run {
                ctx.ui.message(&command);
            } else {
                self.run_one(ctx, &command)?;
            }
            ctx.commands.push(command);
        }

        Ok(())
    }
}
