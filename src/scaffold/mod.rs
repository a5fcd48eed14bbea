//! Scaffolding of Docker files into a workspace.
//!
//! [`scaffold`] asks for whatever answers are missing, then writes
//! `.dockerignore` and a platform-specific `Dockerfile`. When the user
//! opted into Compose, the caller follows up with [`configure_compose`],
//! which inherits the answers and writes the Compose files.
//!
//! # Example
//!
//! ```
//! use dockhand::scaffold::{scaffold, Platform, ScaffoldContext};
//! use dockhand::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let mut ui = MockUI::new();
//! let answers = ScaffoldContext {
//!     workspace_folder: Some(temp.path().to_path_buf()),
//!     platform: Some(Platform::Go),
//!     include_compose: Some(false),
//!     ..Default::default()
//! };
//!
//! let done = scaffold(&mut ui, answers, None).unwrap();
//! assert_eq!(done.port, Some(8080));
//! assert!(temp.path().join("Dockerfile").exists());
//! ```

pub mod context;
pub mod detection;
pub mod platform;
pub mod steps;
pub mod template;

pub use context::{ScaffoldContext, ScaffoldType, ScaffoldWizardContext};
pub use detection::{detect_platform, service_name_for};
pub use platform::Platform;
pub use steps::{
    ChooseComposeStep, ChoosePlatformStep, ChoosePortStep, ChooseWorkspaceFolderStep,
    ScaffoldFile, ScaffoldFileStep,
};
pub use template::{render_template, template_names, template_source, template_variables};

use crate::error::Result;
use crate::ui::UserInterface;
use crate::wizard::Wizard;

/// Title of the Dockerfile wizard.
pub const SCAFFOLD_TITLE: &str = "Add Docker Files";

/// Title of the Compose follow-up wizard.
pub const COMPOSE_TITLE: &str = "Add Docker Compose Files";

/// Build the wizard that writes `.dockerignore` and `Dockerfile`.
///
/// Answers from `prior` fill in whatever `answers` leaves open.
pub fn scaffold_wizard<'a>(
    ui: &'a mut dyn UserInterface,
    mut answers: ScaffoldContext,
    prior: Option<&ScaffoldContext>,
) -> Wizard<ScaffoldWizardContext<'a>> {
    if let Some(prior) = prior {
        answers.inherit(prior);
    }
    answers.scaffold_type = Some(ScaffoldType::All);

    Wizard::builder(ScaffoldWizardContext::new(ui, answers))
        .title(SCAFFOLD_TITLE)
        .prompt_step(ChooseWorkspaceFolderStep)
        .prompt_step(ChooseComposeStep)
        .prompt_step(ChoosePlatformStep)
        .prompt_step(ChoosePortStep)
        .execute_step(ScaffoldFileStep::new(ScaffoldFile::DockerIgnore, 100))
        .execute_step(ScaffoldFileStep::new(ScaffoldFile::Dockerfile, 200))
        .build()
}

/// Build the wizard that writes the Compose files.
pub fn compose_wizard<'a>(
    ui: &'a mut dyn UserInterface,
    prior: &ScaffoldContext,
) -> Wizard<ScaffoldWizardContext<'a>> {
    let mut answers = ScaffoldContext {
        scaffold_type: Some(ScaffoldType::Compose),
        ..Default::default()
    };
    answers.inherit(prior);

    Wizard::builder(ScaffoldWizardContext::new(ui, answers))
        .title(COMPOSE_TITLE)
        .prompt_step(ChooseWorkspaceFolderStep)
        .prompt_step(ChoosePlatformStep)
        .prompt_step(ChoosePortStep)
        .execute_step(ScaffoldFileStep::new(ScaffoldFile::Compose, 100))
        .execute_step(ScaffoldFileStep::new(ScaffoldFile::ComposeDebug, 200))
        .build()
}

/// Scaffold `.dockerignore` and `Dockerfile`, returning the final answers.
///
/// Whether to follow up with [`configure_compose`] is the caller's call,
/// based on [`ScaffoldContext::wants_compose`].
pub fn scaffold(
    ui: &mut dyn UserInterface,
    answers: ScaffoldContext,
    prior: Option<&ScaffoldContext>,
) -> Result<ScaffoldContext> {
    ui.show_header(SCAFFOLD_TITLE);
    let mut wizard = scaffold_wizard(ui, answers, prior);
    wizard.run()?;
    Ok(wizard.into_context().answers)
}

/// Write the Compose files, inheriting the answers of an earlier run.
pub fn configure_compose(
    ui: &mut dyn UserInterface,
    prior: &ScaffoldContext,
) -> Result<ScaffoldContext> {
    ui.show_header(COMPOSE_TITLE);
    let mut wizard = compose_wizard(ui, prior);
    wizard.run()?;
    Ok(wizard.into_context().answers)
}
