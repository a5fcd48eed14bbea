//! Docker Compose commands.
//!
//! `up`, `down` and `restart` run as a wizard: one prompt step picks the
//! compose file, then one execute step per subcommand issues it. A failing
//! subcommand stops the ones after it, so a failed `down` during a restart
//! never brings the stack back `up`.

pub mod command;
pub mod discovery;
pub mod steps;

pub use command::{
    build_command, rewrite_for_new_cli, ComposeAction, ComposeCommandKind,
    COMPOSE_DOWN_VARIABLES, COMPOSE_UP_VARIABLES,
};
pub use discovery::{discover_compose_files, is_compose_file};
pub use steps::{ChooseComposeFilesStep, ComposeContext, RunComposeCommandStep};

use crate::error::Result;
use crate::wizard::Wizard;

/// Build the wizard for a compose action.
///
/// Subcommands get priorities 100, 200, ... in the order the action lists
/// them.
pub fn compose_wizard(context: ComposeContext<'_>) -> Wizard<ComposeContext<'_>> {
    let title = format!("Docker Compose {}", context.action);
    let commands = context.action.commands();

    let mut builder = Wizard::builder(context)
        .title(title)
        .prompt_step(ChooseComposeFilesStep);

    for (index, kind) in commands.iter().enumerate() {
        let priority = (index as i32 + 1) * 100;
        builder = builder.execute_step(RunComposeCommandStep::new(*kind, priority));
    }

    builder.build()
}

/// Run a compose action and return the command lines issued.
pub fn run_compose(context: ComposeContext<'_>) -> Result<Vec<String>> {
    let mut wizard = compose_wizard(context);
    wizard.run()?;
    Ok(wizard.into_context().commands)
}
