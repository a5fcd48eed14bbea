//! The wizard engine.

use tracing::debug;

use crate::error::DockhandError;

use super::state::{Phase, WizardError, WizardState};
use super::step::{ExecuteStep, PromptStep};

/// Boxed prompt step for a context `C`.
pub type BoxedPromptStep<C, E = DockhandError> = Box<dyn PromptStep<C, E>>;

/// Boxed execute step for a context `C`.
pub type BoxedExecuteStep<C, E = DockhandError> = Box<dyn ExecuteStep<C, E>>;

/// Runs an ordered list of prompt steps, then a priority-ordered list of
/// execute steps, against one exclusively owned context.
///
/// The step lists are fixed at construction. Only the context changes while
/// the wizard runs, and it can be recovered with [`Wizard::into_context`]
/// to drive a follow-up operation.
pub struct Wizard<C, E = DockhandError> {
    title: Option<String>,
    context: C,
    prompt_steps: Vec<BoxedPromptStep<C, E>>,
    execute_steps: Vec<BoxedExecuteStep<C, E>>,
    state: WizardState,
    failed_step: Option<String>,
}

impl<C, E> Wizard<C, E> {
    /// Create a wizard from a (possibly partially filled) context and its
    /// step lists.
    pub fn new(
        context: C,
        prompt_steps: Vec<BoxedPromptStep<C, E>>,
        execute_steps: Vec<BoxedExecuteStep<C, E>>,
    ) -> Self {
        Self {
            title: None,
            context,
            prompt_steps,
            execute_steps,
            state: WizardState::Created,
            failed_step: None,
        }
    }

    /// Start building a wizard around the given context.
    pub fn builder(context: C) -> WizardBuilder<C, E> {
        WizardBuilder::new(context)
    }

    /// Get the wizard title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the current lifecycle state.
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Get the id of the step that failed, if the wizard failed.
    pub fn failed_step(&self) -> Option<&str> {
        self.failed_step.as_deref()
    }

    /// Borrow the shared context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Consume the wizard, returning the context it produced.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Number of prompt steps.
    pub fn prompt_step_count(&self) -> usize {
        self.prompt_steps.len()
    }

    /// Number of execute steps.
    pub fn execute_step_count(&self) -> usize {
        self.execute_steps.len()
    }
}

impl<C, E> Wizard<C, E>
where
    E: From<WizardError>,
{
    /// Run the prompt phase.
    ///
    /// Steps run in declared order. A step whose `should_prompt` is false is
    /// skipped. The first failing step stops the phase and its error is
    /// returned as-is.
    pub fn prompt(&mut self) -> Result<(), E> {
        if self.state != WizardState::Created {
            return Err(WizardError::InvalidTransition {
                action: "prompt",
                state: self.state,
            }
            .into());
        }

        self.state = WizardState::Prompting;
        let total = self.prompt_steps.len();

        for (index, step) in self.prompt_steps.iter().enumerate() {
            if !step.should_prompt(&self.context) {
                debug!(step = step.id(), "Prompt step not needed, skipping");
                continue;
            }

            debug!(step = step.id(), "Prompting ({}/{})", index + 1, total);
            if let Err(e) = step.prompt(&mut self.context) {
                debug!(step = step.id(), "Prompt step failed");
                self.state = WizardState::Failed {
                    phase: Phase::Prompt,
                };
                self.failed_step = Some(step.id().to_string());
                return Err(e);
            }
        }

        self.state = WizardState::Prompted;
        Ok(())
    }

    /// Run the execute phase.
    ///
    /// Allowed after a successful [`Wizard::prompt`], or straight from a
    /// fresh wizard whose context was filled in by the caller. Steps run in
    /// ascending priority; equal priorities keep their declared order. The
    /// first failing step stops the phase and its error is returned as-is.
    /// Effects of steps that already ran are left in place.
    pub fn execute(&mut self) -> Result<(), E> {
        if !matches!(self.state, WizardState::Created | WizardState::Prompted) {
            return Err(WizardError::InvalidTransition {
                action: "execute",
                state: self.state,
            }
            .into());
        }

        self.state = WizardState::Executing;

        // sort_by_key is stable: ties keep declaration order
        let mut ordered: Vec<&dyn ExecuteStep<C, E>> =
            self.execute_steps.iter().map(|s| s.as_ref()).collect();
        ordered.sort_by_key(|s| s.priority());
        let total = ordered.len();

        for (index, step) in ordered.into_iter().enumerate() {
            if !step.should_execute(&self.context) {
                debug!(step = step.id(), "Execute step not applicable, skipping");
                continue;
            }

            debug!(
                step = step.id(),
                priority = step.priority(),
                "Executing ({}/{})",
                index + 1,
                total
            );
            if let Err(e) = step.execute(&mut self.context) {
                debug!(step = step.id(), "Execute step failed");
                self.state = WizardState::Failed {
                    phase: Phase::Execute,
                };
                self.failed_step = Some(step.id().to_string());
                return Err(e);
            }
        }

        self.state = WizardState::Done;
        debug!(
            wizard = self.title.as_deref().unwrap_or("wizard"),
            "Wizard completed"
        );
        Ok(())
    }

    /// Run the prompt phase, then the execute phase.
    pub fn run(&mut self) -> Result<(), E> {
        self.prompt()?;
        self.execute()
    }
}

/// Builder for [`Wizard`].
pub struct WizardBuilder<C, E = DockhandError> {
    title: Option<String>,
    context: C,
    prompt_steps: Vec<BoxedPromptStep<C, E>>,
    execute_steps: Vec<BoxedExecuteStep<C, E>>,
}

impl<C, E> WizardBuilder<C, E> {
    /// Create a builder around the given context.
    pub fn new(context: C) -> Self {
        Self {
            title: None,
            context,
            prompt_steps: Vec::new(),
            execute_steps: Vec::new(),
        }
    }

    /// Set the wizard title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a prompt step.
    pub fn prompt_step(mut self, step: impl PromptStep<C, E> + 'static) -> Self {
        self.prompt_steps.push(Box::new(step));
        self
    }

    /// Append an execute step.
    pub fn execute_step(mut self, step: impl ExecuteStep<C, E> + 'static) -> Self {
        self.execute_steps.push(Box::new(step));
        self
    }

    /// Finish building.
    pub fn build(self) -> Wizard<C, E> {
        Wizard {
            title: self.title,
            ..Wizard::new(self.context, self.prompt_steps, self.execute_steps)
        }
    }
}
