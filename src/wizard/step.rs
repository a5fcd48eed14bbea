//! Step traits for the wizard engine.
//!
//! A wizard is made of two kinds of steps that share one mutable context:
//!
//! - [`PromptStep`] gathers input and may be skipped when the context
//!   already holds the answer.
//! - [`ExecuteStep`] applies an effect once every input is known, ordered
//!   by [`ExecuteStep::priority`].
//!
//! Both traits are generic over the context type `C` and the error type
//! `E`, so new steps can be added without touching the engine.

use crate::error::DockhandError;

/// A pipeline stage that gathers or validates input.
pub trait PromptStep<C, E = DockhandError> {
    /// Identity used in logs and failure reports.
    fn id(&self) -> &str;

    /// Whether this step needs to run for the given context.
    ///
    /// Returning `false` skips the step entirely: [`PromptStep::prompt`] is
    /// never called for it.
    fn should_prompt(&self, context: &C) -> bool;

    /// Collect input, writing answers into the context.
    fn prompt(&self, context: &mut C) -> Result<(), E>;
}

/// A pipeline stage that applies a concrete effect.
pub trait ExecuteStep<C, E = DockhandError> {
    /// Identity used in logs and failure reports.
    fn id(&self) -> &str;

    /// Ordering key. Lower values run first.
    fn priority(&self) -> i32;

    /// Whether this step applies to the given context.
    fn should_execute(&self, _context: &C) -> bool {
        true
    }

    /// Apply the step's effect.
    ///
    /// The engine performs no compensation if a later step fails, so the
    /// effect must be safe to leave applied on its own.
    fn execute(&self, context: &mut C) -> Result<(), E>;
}

/// A prompt step built from closures.
///
/// Handy for one-off steps and tests where a dedicated type would be noise.
pub struct FnPromptStep<C, E> {
    id: String,
    should_prompt: Box<dyn Fn(&C) -> bool>,
    prompt: Box<dyn Fn(&mut C) -> Result<(), E>>,
}

impl<C, E> FnPromptStep<C, E> {
    /// Create a step that always prompts.
    pub fn new(id: &str, prompt: impl Fn(&mut C) -> Result<(), E> + 'static) -> Self {
        Self {
            id: id.to_string(),
            should_prompt: Box::new(|_: &C| true),
            prompt: Box::new(prompt),
        }
    }

    /// Replace the predicate deciding whether the step runs.
    pub fn when(mut self, should_prompt: impl Fn(&C) -> bool + 'static) -> Self {
        self.should_prompt = Box::new(should_prompt);
        self
    }
}

impl<C, E> PromptStep<C, E> for FnPromptStep<C, E> {
    fn id(&self) -> &str {
        &self.id
    }

    fn should_prompt(&self, context: &C) -> bool {
        (self.should_prompt)(context)
    }

    fn prompt(&self, context: &mut C) -> Result<(), E> {
        (self.prompt)(context)
    }
}

/// An execute step built from a closure.
pub struct FnExecuteStep<C, E> {
    id: String,
    priority: i32,
    execute: Box<dyn Fn(&mut C) -> Result<(), E>>,
}

impl<C, E> FnExecuteStep<C, E> {
    /// Create a step with the given priority.
    pub fn new(
        id: &str,
        priority: i32,
        execute: impl Fn(&mut C) -> Result<(), E> + 'static,
    ) -> Self {
        Self {
            id: id.to_string(),
            priority,
            execute: Box::new(execute),
        }
    }
}

impl<C, E> ExecuteStep<C, E> for FnExecuteStep<C, E> {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn execute(&self, context: &mut C) -> Result<(), E> {
        (self.execute)(context)
    }
}
