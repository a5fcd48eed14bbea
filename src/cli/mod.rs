//! Command-line interface for Dockhand.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ComposeActionArg, ComposeArgs, ScaffoldArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
