//! Execute step that writes one scaffolded file.

use std::fs;

use crate::config::Variables;
use crate::error::{DockhandError, Result};
use crate::scaffold::context::ScaffoldWizardContext;
use crate::scaffold::detection::service_name_for;
use crate::scaffold::template::{render_template, template_variables};
use crate::ui::Prompt;
use crate::wizard::ExecuteStep;

/// A file the scaffolder can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldFile {
    DockerIgnore,
    Dockerfile,
    Compose,
    ComposeDebug,
}

impl ScaffoldFile {
    /// Name of the file in the workspace folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            ScaffoldFile::DockerIgnore => ".dockerignore",
            ScaffoldFile::Dockerfile => "Dockerfile",
            ScaffoldFile::Compose => "docker-compose.yml",
            ScaffoldFile::ComposeDebug => "docker-compose.debug.yml",
        }
    }
}

/// Renders a template into the workspace folder.
///
/// An existing file is only replaced when `overwrite` is set or the user
/// confirms; declining cancels the wizard.
pub struct ScaffoldFileStep {
    file: ScaffoldFile,
    priority: i32,
    id: String,
}

impl ScaffoldFileStep {
    pub fn new(file: ScaffoldFile, priority: i32) -> Self {
        Self {
            file,
            priority,
            id: format!("scaffold-{}", file.file_name()),
        }
    }

    pub fn file(&self) -> ScaffoldFile {
        self.file
    }

    fn render(&self, ctx: &ScaffoldWizardContext<'_>) -> Result<String> {
        if self.file == ScaffoldFile::DockerIgnore {
            return render_template("dockerignore", &Variables::new());
        }

        let platform = ctx.answers.require_platform()?;
        let service_name = ctx.answers.require_service_name()?;
        let vars = template_variables(service_name, platform, ctx.answers.port);

        let template = match self.file {
            ScaffoldFile::Dockerfile => platform.dockerfile_template(),
            ScaffoldFile::Compose => "compose/docker-compose.yml".to_string(),
            ScaffoldFile::ComposeDebug => "compose/docker-compose.debug.yml".to_string(),
            ScaffoldFile::DockerIgnore => "dockerignore".to_string(),
        };
        render_template(&template, &vars)
    }

    fn confirm_overwrite(&self, ctx: &mut ScaffoldWizardContext<'_>) -> Result<()> {
        match ctx.answers.overwrite {
            Some(true) => Ok(()),
            Some(false) => Err(DockhandError::Cancelled),
            None => {
                let question = format!("{} already exists. Overwrite?", self.file.file_name());
                let mut prompt = Prompt::confirm("overwrite", &question, false);

                // Headless runs must answer explicitly; a default "no" is not a cancellation
                let interactive = ctx.ui.is_interactive();
                if !interactive {
                    prompt.default = None;
                }

                let confirmed = match ctx.ui.prompt(&prompt) {
                    Ok(answer) => answer.as_bool(),
                    Err(e) if interactive || e.is_cancelled() => return Err(e),
                    Err(_) => {
                        return Err(DockhandError::StepFailed {
                            step: self.id.clone(),
                            message: format!(
                                "{} already exists; pass --overwrite or set DOCKHAND_PROMPT_OVERWRITE",
                                self.file.file_name()
                            ),
                        })
                    }
                };
                if confirmed {
                    Ok(())
                } else {
                    Err(DockhandError::Cancelled)
                }
            }
        }
    }
}

impl<'a> ExecuteStep<ScaffoldWizardContext<'a>> for ScaffoldFileStep {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn execute(&self, ctx: &mut ScaffoldWizardContext<'a>) -> Result<()> {
        let folder = ctx.answers.require_workspace_folder()?.to_path_buf();
        if !folder.is_dir() {
            return Err(DockhandError::WorkspaceNotFound { path: folder });
        }

        if ctx.answers.service_name.is_none() {
            ctx.answers.service_name = Some(service_name_for(&folder));
        }

        let target = folder.join(self.file.file_name());
        if target.exists() {
            self.confirm_overwrite(ctx)?;
        }

        let content = self.render(ctx)?;
        fs::write(&target, content)?;
        tracing::debug!("Wrote {}", target.display());

        ctx.ui.success(&format!("Wrote {}", self.file.file_name()));
        ctx.answers.written_files.push(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::{Platform, ScaffoldContext};
    use crate::ui::{MockUI, NonInteractiveUI, OutputMode};
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn answers(temp: &TempDir) -> ScaffoldContext {
        ScaffoldContext {
            workspace_folder: Some(temp.path().to_path_buf()),
            platform: Some(Platform::Node),
            port: Some(3000),
            service_name: Some("web".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn writes_dockerfile_and_records_it() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers(&temp));

        ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200)
            .execute(&mut ctx)
            .unwrap();

        let target = temp.path().join("Dockerfile");
        let content = fs::read_to_string(&target).unwrap();
        assert!(content.contains("EXPOSE 3000"));
        assert_eq!(ctx.answers.written_files, vec![target]);
    }

    #[test]
    fn dockerignore_needs_no_platform() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let answers = ScaffoldContext {
            workspace_folder: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers);

        ScaffoldFileStep::new(ScaffoldFile::DockerIgnore, 100)
            .execute(&mut ctx)
            .unwrap();

        assert!(temp.path().join(".dockerignore").exists());
    }

    #[test]
    fn dockerfile_without_platform_is_contract_violation() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let answers = ScaffoldContext {
            workspace_folder: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers);

        let err = ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200)
            .execute(&mut ctx)
            .unwrap_err();

        assert!(matches!(
            err,
            DockhandError::MissingContextField { field: "platform" }
        ));
        assert!(!temp.path().join("Dockerfile").exists());
    }

    #[test]
    fn fills_in_service_name_from_folder() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("shop-api");
        fs::create_dir_all(&folder).unwrap();
        let mut ui = MockUI::new();
        let answers = ScaffoldContext {
            workspace_folder: Some(folder.clone()),
            platform: Some(Platform::Go),
            port: Some(8080),
            ..Default::default()
        };
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers);

        ScaffoldFileStep::new(ScaffoldFile::Compose, 100)
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(ctx.answers.service_name.as_deref(), Some("shop-api"));
        let content = fs::read_to_string(folder.join("docker-compose.yml")).unwrap();
        assert!(content.contains("  shop-api:"));
    }

    #[test]
    fn declined_overwrite_cancels_and_keeps_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("overwrite", "no");
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers(&temp));

        let err = ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200)
            .execute(&mut ctx)
            .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(
            fs::read_to_string(temp.path().join("Dockerfile")).unwrap(),
            "FROM scratch\n"
        );
    }

    #[test]
    fn headless_run_without_overwrite_answer_fails_loudly() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Silent, HashMap::new());
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers(&temp));

        let err = ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200)
            .execute(&mut ctx)
            .unwrap_err();

        assert!(!err.is_cancelled());
        assert!(matches!(
            err,
            DockhandError::StepFailed { ref step, .. } if step == "scaffold-Dockerfile"
        ));
        assert!(err.to_string().contains("Dockerfile already exists"));
        assert_eq!(
            fs::read_to_string(temp.path().join("Dockerfile")).unwrap(),
            "FROM scratch\n"
        );
    }

    #[test]
    fn headless_explicit_no_still_cancels() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        let overrides =
            HashMap::from([("DOCKHAND_PROMPT_OVERWRITE".to_string(), "no".to_string())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Silent, overrides);
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers(&temp));

        let err = ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200)
            .execute(&mut ctx)
            .unwrap_err();

        assert!(err.is_cancelled());
    }

    #[test]
    fn confirmed_overwrite_replaces_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("overwrite", "yes");
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers(&temp));

        ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200)
            .execute(&mut ctx)
            .unwrap();

        let content = fs::read_to_string(temp.path().join("Dockerfile")).unwrap();
        assert!(content.starts_with("FROM node:"));
    }

    #[test]
    fn overwrite_answer_skips_the_question() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".dockerignore"), "").unwrap();
        let mut ui = MockUI::new();
        let mut answers = answers(&temp);
        answers.overwrite = Some(true);
        let mut ctx = ScaffoldWizardContext::new(&mut ui, answers);

        ScaffoldFileStep::new(ScaffoldFile::DockerIgnore, 100)
            .execute(&mut ctx)
            .unwrap();
        drop(ctx);

        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_success("Wrote .dockerignore"));
    }

    #[test]
    fn failing_step_reports_its_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let answers = ScaffoldContext {
            workspace_folder: Some(temp.path().join("missing")),
            ..Default::default()
        };
        let ctx = ScaffoldWizardContext::new(&mut ui, answers);
        let mut wizard = crate::wizard::Wizard::builder(ctx)
            .execute_step(ScaffoldFileStep::new(ScaffoldFile::ComposeDebug, 200))
            .build();

        let err = wizard.execute().unwrap_err();

        assert!(matches!(err, DockhandError::WorkspaceNotFound { .. }));
        assert_eq!(
            wizard.failed_step(),
            Some("scaffold-docker-compose.debug.yml")
        );
    }
}
