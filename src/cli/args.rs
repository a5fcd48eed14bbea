//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::compose::ComposeAction;
use crate::scaffold::Platform;

/// Dockhand - Docker scaffolding and Compose helper.
#[derive(Debug, Parser)]
#[command(name = "dockhand")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .dockhand/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace folder (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; use defaults and DOCKHAND_PROMPT_* overrides
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a Dockerfile and .dockerignore (and optionally Compose files)
    Scaffold(ScaffoldArgs),

    /// Run docker compose up, down or restart
    Compose(ComposeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scaffold` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScaffoldArgs {
    /// Application platform (node, python, go, dotnet, java, ruby, other)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Port the application listens on
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Also add Docker Compose files
    #[arg(long, conflicts_with = "no_compose")]
    pub compose: bool,

    /// Do not add Docker Compose files
    #[arg(long)]
    pub no_compose: bool,

    /// Overwrite existing files without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Print the final answers as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScaffoldArgs {
    /// The compose answer given on the command line, if any.
    pub fn include_compose(&self) -> Option<bool> {
        if self.compose {
            Some(true)
        } else if self.no_compose {
            Some(false)
        } else {
            None
        }
    }
}

/// Compose action as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComposeActionArg {
    /// Create and start containers
    Up,
    /// Stop and remove containers
    Down,
    /// Down, then up
    Restart,
}

impl From<ComposeActionArg> for ComposeAction {
    fn from(arg: ComposeActionArg) -> Self {
        match arg {
            ComposeActionArg::Up => ComposeAction::Up,
            ComposeActionArg::Down => ComposeAction::Down,
            ComposeActionArg::Restart => ComposeAction::Restart,
        }
    }
}

/// Arguments for the `compose` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ComposeArgs {
    /// What to do
    #[arg(value_enum)]
    pub action: ComposeActionArg,

    /// Compose file(s) to use, relative to the workspace (repeatable)
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Print commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
