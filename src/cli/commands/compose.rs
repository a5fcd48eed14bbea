//! The `dockhand compose` command.

use std::path::PathBuf;

use crate::cli::args::ComposeArgs;
use crate::compose::{run_compose, ComposeAction, ComposeContext};
use crate::config::DockhandConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The compose command implementation.
pub struct ComposeCommand {
    workspace: PathBuf,
    config: DockhandConfig,
    args: ComposeArgs,
}

impl ComposeCommand {
    /// Create a new compose command.
    pub fn new(workspace: PathBuf, config: DockhandConfig, args: ComposeArgs) -> Self {
        Self {
            workspace,
            config,
            args,
        }
    }
}

impl Command for ComposeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let action = ComposeAction::from(self.args.action);
        tracing::debug!("compose {} in {}", action, self.workspace.display());

        let mut context = ComposeContext::new(
            ui,
            action,
            self.workspace.clone(),
            self.config.compose.clone(),
        );
        context.dry_run = self.args.dry_run;
        if !self.args.files.is_empty() {
            context.files = Some(self.args.files.clone());
        }

        let commands = run_compose(context)?;
        if !self.args.dry_run {
            ui.success(&format!("docker compose {} done ({} command(s))", action, commands.len()));
        }

        Ok(CommandResult::success())
    }
}
