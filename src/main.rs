//! Dockhand CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use dockhand::cli::{Cli, CommandDispatcher, Commands};
use dockhand::config::find_project_root;
use dockhand::shell::is_ci;
use dockhand::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for a run the user cancelled (128 + SIGINT).
const EXIT_CANCELLED: u8 = 130;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dockhand=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dockhand=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Dockhand starting with args: {:?}", cli);

    // JSON goes to stdout, so nothing else may
    let json_output = matches!(&cli.command, Commands::Scaffold(args) if args.json);

    let output_mode = if json_output {
        OutputMode::Silent
    } else {
        OutputMode::from_flags(cli.quiet, cli.verbose)
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| find_project_root(&cwd).unwrap_or(cwd));

    let is_interactive = !cli.non_interactive && !is_ci() && std::io::stdin().is_terminal();
    let mut ui = create_ui(is_interactive, output_mode);

    let dispatcher = CommandDispatcher::new(project_root)
        .with_workspace(cli.project.clone())
        .with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) if e.is_cancelled() => {
            tracing::debug!("Cancelled by user");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
