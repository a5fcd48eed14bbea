//! The `dockhand scaffold` command.

use std::path::PathBuf;

use crate::cli::args::ScaffoldArgs;
use crate::config::DockhandConfig;
use crate::error::Result;
use crate::scaffold::{configure_compose, scaffold, ScaffoldContext};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scaffold command implementation.
pub struct ScaffoldCommand {
    workspace: Option<PathBuf>,
    config: DockhandConfig,
    args: ScaffoldArgs,
}

impl ScaffoldCommand {
    /// Create a new scaffold command.
    pub fn new(workspace: Option<PathBuf>, config: DockhandConfig, args: ScaffoldArgs) -> Self {
        Self {
            workspace,
            config,
            args,
        }
    }

    /// Answers known before any prompt: config first, command line on top.
    pub fn initial_answers(&self) -> ScaffoldContext {
        let mut answers = ScaffoldContext::from_settings(&self.config.scaffold);

        if let Some(workspace) = &self.workspace {
            answers.workspace_folder = Some(workspace.clone());
        }
        if let Some(platform) = self.args.platform {
            answers.platform = Some(platform);
        }
        if let Some(port) = self.args.port {
            answers.port = Some(port);
        }
        if let Some(include) = self.args.include_compose() {
            answers.include_compose = Some(include);
        }
        if self.args.overwrite {
            answers.overwrite = Some(true);
        }

        answers
    }
}

impl Command for ScaffoldCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let first = scaffold(ui, self.initial_answers(), None)?;
        let mut written = first.written_files.clone();

        let mut last = first;
        if last.wants_compose() {
            let follow_up = configure_compose(ui, &last)?;
            written.extend(follow_up.written_files.iter().cloned());
            last = follow_up;
        }

        if self.args.json {
            last.written_files = written;
            let json = serde_json::to_string_pretty(&last).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            ui.success(&format!("Added {} file(s)", written.len()));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldSettings;
    use crate::scaffold::Platform;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn command_line_overrides_config() {
        let config = DockhandConfig {
            scaffold: ScaffoldSettings {
                platform: Some(Platform::Node),
                include_compose: Some(true),
                port: Some(3000),
            },
            ..Default::default()
        };
        let args = ScaffoldArgs {
            platform: Some(Platform::Python),
            no_compose: true,
            ..Default::default()
        };

        let cmd = ScaffoldCommand::new(Some(PathBuf::from("/work")), config, args);
        let answers = cmd.initial_answers();

        assert_eq!(answers.platform, Some(Platform::Python));
        assert_eq!(answers.include_compose, Some(false));
        assert_eq!(answers.port, Some(3000));
        assert_eq!(answers.workspace_folder, Some(PathBuf::from("/work")));
        assert!(answers.overwrite.is_none());
    }

    #[test]
    fn runs_compose_follow_up_when_requested() {
        let temp = TempDir::new().unwrap();
        let args = ScaffoldArgs {
            platform: Some(Platform::Go),
            compose: true,
            ..Default::default()
        };
        let cmd = ScaffoldCommand::new(
            Some(temp.path().to_path_buf()),
            DockhandConfig::default(),
            args,
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        for file in [
            ".dockerignore",
            "Dockerfile",
            "docker-compose.yml",
            "docker-compose.debug.yml",
        ] {
            assert!(temp.path().join(file).exists(), "{} missing", file);
        }
        assert!(ui.has_success("Added 4 file(s)"));
        assert_eq!(ui.headers().len(), 2);
    }

    #[test]
    fn skips_compose_when_declined() {
        let temp = TempDir::new().unwrap();
        let args = ScaffoldArgs {
            platform: Some(Platform::Other),
            ..Default::default()
        };
        let cmd = ScaffoldCommand::new(
            Some(temp.path().to_path_buf()),
            DockhandConfig::default(),
            args,
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(!temp.path().join("docker-compose.yml").exists());
        assert!(ui.has_success("Added 2 file(s)"));
    }

    #[test]
    fn cancellation_propagates() {
        let temp = TempDir::new().unwrap();
        let cmd = ScaffoldCommand::new(
            Some(temp.path().to_path_buf()),
            DockhandConfig::default(),
            ScaffoldArgs::default(),
        );
        let mut ui = MockUI::new();
        ui.cancel_prompt("include_compose");

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(err.is_cancelled());
        assert!(!temp.path().join("Dockerfile").exists());
    }
}
