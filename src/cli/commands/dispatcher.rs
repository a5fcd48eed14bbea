//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, validate, DockhandConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// A cancelled wizard surfaces as
    /// [`DockhandError::Cancelled`](crate::DockhandError::Cancelled), which
    /// the binary turns into a silent exit.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    workspace: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            workspace: None,
            config_path: None,
        }
    }

    /// Use a workspace folder given explicitly on the command line.
    pub fn with_workspace(mut self, workspace: Option<PathBuf>) -> Self {
        self.workspace = workspace;
        self
    }

    /// Use a config file other than `.dockhand/config.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the project configuration.
    pub fn load_config(&self) -> Result<DockhandConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;
        Ok(config)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Scaffold(args) => {
                let config = self.load_config()?;
                let cmd = super::scaffold::ScaffoldCommand::new(
                    self.workspace.clone(),
                    config,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Compose(args) => {
                let config = self.load_config()?;
                let workspace = self
                    .workspace
                    .clone()
                    .unwrap_or_else(|| self.project_root.clone());
                let cmd = super::compose::ComposeCommand::new(workspace, config, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn invalid_config_stops_dispatch() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".dockhand");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "compose:\n  up_template: \"docker-compose up ${nope}\"",
        )
        .unwrap();

        let cli = Cli::parse_from(["dockhand", "compose", "up", "--dry-run"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
        assert!(err.to_string().contains("${nope}"));
    }

    #[test]
    fn compose_defaults_to_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("compose.yaml"), "").unwrap();

        let cli = Cli::parse_from(["dockhand", "compose", "down", "--dry-run"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("docker-compose -f \"compose.yaml\" down"));
    }
}
