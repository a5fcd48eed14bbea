//! Generic multi-step wizard engine.
//!
//! A [`Wizard`] owns a context and two step pipelines:
//!
//! 1. **Prompt phase**: [`PromptStep`]s run in declared order. Each one
//!    checks whether its answer is already in the context and is skipped if
//!    so.
//! 2. **Execute phase**: [`ExecuteStep`]s run in ascending priority (ties in
//!    declared order) and apply effects.
//!
//! Either phase stops at the first failing step and hands the step's error
//! back unchanged. Nothing is rolled back.
//!
//! # Example
//!
//! ```
//! use dockhand::wizard::{FnExecuteStep, FnPromptStep, Wizard, WizardState};
//! use dockhand::DockhandError;
//!
//! #[derive(Default)]
//! struct Answers {
//!     name: Option<String>,
//!     written: Vec<String>,
//! }
//!
//! let mut wizard: Wizard<Answers, DockhandError> = Wizard::builder(Answers::default())
//!     .prompt_step(
//!         FnPromptStep::new("name", |a: &mut Answers| {
//!             a.name = Some("web".to_string());
//!             Ok(())
//!         })
//!         .when(|a: &Answers| a.name.is_none()),
//!     )
//!     .execute_step(FnExecuteStep::new("dockerfile", 200, |a: &mut Answers| {
//!         a.written.push("Dockerfile".to_string());
//!         Ok(())
//!     }))
//!     .execute_step(FnExecuteStep::new("ignore", 100, |a: &mut Answers| {
//!         a.written.push(".dockerignore".to_string());
//!         Ok(())
//!     }))
//!     .build();
//!
//! wizard.run().unwrap();
//! assert_eq!(wizard.state(), WizardState::Done);
//! assert_eq!(wizard.context().written, vec![".dockerignore", "Dockerfile"]);
//! ```

pub mod engine;
pub mod state;
pub mod step;

pub use engine::{BoxedExecuteStep, BoxedPromptStep, Wizard, WizardBuilder};
pub use state::{Phase, WizardError, WizardState};
pub use step::{ExecuteStep, FnExecuteStep, FnPromptStep, PromptStep};
