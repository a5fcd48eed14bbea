//! Dockhand - Docker scaffolding and Compose helper built on a wizard engine.
//!
//! Every interactive flow in Dockhand is a [`wizard::Wizard`]: prompt steps
//! gather answers in declared order, then execute steps apply effects in
//! priority order against the same context.
//!
//! # Modules
//!
//! - [`wizard`] - Generic two-phase wizard engine
//! - [`scaffold`] - Dockerfile and Compose file scaffolding
//! - [`compose`] - Docker Compose up/down/restart
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use dockhand::wizard::{FnExecuteStep, FnPromptStep, Wizard};
//! use dockhand::{DockhandError, Result};
//!
//! #[derive(Default)]
//! struct Answers {
//!     name: Option<String>,
//!     greeting: Option<String>,
//! }
//!
//! let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
//!     .prompt_step(FnPromptStep::new("name", |a: &mut Answers| -> Result<()> {
//!         a.name = Some("world".to_string());
//!         Ok(())
//!     }))
//!     .execute_step(FnExecuteStep::new("greet", 100, |a: &mut Answers| -> Result<()> {
//!         let name = a
//!             .name
//!             .as_deref()
//!             .ok_or(DockhandError::MissingContextField { field: "name" })?;
//!         a.greeting = Some(format!("hello {}", name));
//!         Ok(())
//!     }))
//!     .build();
//!
//! wizard.run().unwrap();
//! assert_eq!(wizard.context().greeting.as_deref(), Some("hello world"));
//! ```

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod shell;
pub mod ui;
pub mod wizard;

pub use error::{DockhandError, Result};
