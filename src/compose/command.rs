//! Building `docker-compose` command lines.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::config::{resolve_string, ComposeSettings, ContextType, Variables};
use crate::error::Result;

/// Variables an `up` template may use.
pub const COMPOSE_UP_VARIABLES: &[&str] = &["configurationFile", "detached", "build"];

/// Variables a `down` template may use.
pub const COMPOSE_DOWN_VARIABLES: &[&str] = &["configurationFile"];

const DEFAULT_UP_TEMPLATE: &str = "docker-compose ${configurationFile} up ${detached} ${build}";
const DEFAULT_DOWN_TEMPLATE: &str = "docker-compose ${configurationFile} down";

/// Legacy standalone binary at the start of a command line.
static LEGACY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^docker-compose ").expect("LEGACY_PREFIX must compile"));

static BUILD_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--build").expect("BUILD_FLAG must compile"));

/// A single compose subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeCommandKind {
    Up,
    Down,
}

impl fmt::Display for ComposeCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeCommandKind::Up => write!(f, "up"),
            ComposeCommandKind::Down => write!(f, "down"),
        }
    }
}

/// What the user asked `dockhand compose` to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    Up,
    Down,
    Restart,
}

impl ComposeAction {
    /// The subcommands this action runs, in order.
    pub fn commands(&self) -> &'static [ComposeCommandKind] {
        match self {
            ComposeAction::Up => &[ComposeCommandKind::Up],
            ComposeAction::Down => &[ComposeCommandKind::Down],
            ComposeAction::Restart => &[ComposeCommandKind::Down, ComposeCommandKind::Up],
        }
    }

    /// Question shown when picking a compose file.
    pub fn file_question(&self) -> &'static str {
        match self {
            ComposeAction::Up => "Choose Docker Compose file to bring up",
            ComposeAction::Down => "Choose Docker Compose file to take down",
            ComposeAction::Restart => "Choose Docker Compose file to restart",
        }
    }
}

impl fmt::Display for ComposeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeAction::Up => write!(f, "up"),
            ComposeAction::Down => write!(f, "down"),
            ComposeAction::Restart => write!(f, "restart"),
        }
    }
}

impl FromStr for ComposeAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(ComposeAction::Up),
            "down" => Ok(ComposeAction::Down),
            "restart" => Ok(ComposeAction::Restart),
            _ => Err(format!("unknown compose action: {}", s)),
        }
    }
}

/// Build the command line for one subcommand and (optionally) one file.
///
/// Placeholders that resolve to nothing leave no stray whitespace behind.
pub fn build_command(
    kind: ComposeCommandKind,
    file: Option<&str>,
    settings: &ComposeSettings,
) -> Result<String> {
    let mut vars = Variables::new();
    vars.set(
        "configurationFile",
        file.map(|f| format!("-f \"{}\"", f)).unwrap_or_default(),
    );

    let template = match kind {
        ComposeCommandKind::Up => {
            vars.set("detached", if settings.detached { "-d" } else { "" })
                .set("build", if settings.build { "--build" } else { "" });
            settings.up_template.as_deref().unwrap_or(DEFAULT_UP_TEMPLATE)
        }
        ComposeCommandKind::Down => settings
            .down_template
            .as_deref()
            .unwrap_or(DEFAULT_DOWN_TEMPLATE),
    };

    Ok(collapse_whitespace(&resolve_string(template, &vars)?))
}

/// Adapt a command line to the Docker context it will run against.
///
/// Cloud (`aci`) contexts need the `docker compose` plugin syntax and do
/// not support `--build`.
pub fn rewrite_for_new_cli(command: &str, context_type: ContextType) -> String {
    if context_type != ContextType::Aci {
        return command.to_string();
    }

    let rewritten = LEGACY_PREFIX.replace(command, "docker compose ");
    let rewritten = BUILD_FLAG.replace(&rewritten, "");
    collapse_whitespace(&rewritten)
}

fn collapse_whitespace(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ComposeSettings {
        ComposeSettings::default()
    }

    #[test]
    fn default_up_with_file() {
        let cmd = build_command(ComposeCommandKind::Up, Some("docker-compose.yml"), &settings())
            .unwrap();
        assert_eq!(cmd, "docker-compose -f \"docker-compose.yml\" up -d --build");
    }

    #[test]
    fn default_up_without_file_or_flags() {
        let settings = ComposeSettings {
            build: false,
            detached: false,
            ..ComposeSettings::default()
        };

        let cmd = build_command(ComposeCommandKind::Up, None, &settings).unwrap();
        assert_eq!(cmd, "docker-compose up");
    }

    #[test]
    fn default_down() {
        let cmd = build_command(ComposeCommandKind::Down, Some("compose.yaml"), &settings())
            .unwrap();
        assert_eq!(cmd, "docker-compose -f \"compose.yaml\" down");
    }

    #[test]
    fn custom_template_is_used() {
        let settings = ComposeSettings {
            down_template: Some("docker compose ${configurationFile} down -v".to_string()),
            ..ComposeSettings::default()
        };

        let cmd = build_command(ComposeCommandKind::Down, None, &settings).unwrap();
        assert_eq!(cmd, "docker compose down -v");
    }

    #[test]
    fn unknown_template_variable_fails() {
        let settings = ComposeSettings {
            up_template: Some("docker-compose up ${profile}".to_string()),
            ..ComposeSettings::default()
        };

        assert!(build_command(ComposeCommandKind::Up, None, &settings).is_err());
    }

    #[test]
    fn aci_context_uses_new_cli() {
        let cmd = rewrite_for_new_cli(
            "docker-compose -f \"docker-compose.yml\" up -d --build",
            ContextType::Aci,
        );
        assert_eq!(cmd, "docker compose -f \"docker-compose.yml\" up -d");
    }

    #[test]
    fn moby_context_is_unchanged() {
        let original = "docker-compose up -d --build";
        assert_eq!(rewrite_for_new_cli(original, ContextType::Moby), original);
    }

    #[test]
    fn rewrite_only_touches_leading_prefix() {
        let cmd = rewrite_for_new_cli("echo docker-compose up", ContextType::Aci);
        assert_eq!(cmd, "echo docker-compose up");
    }

    #[test]
    fn restart_runs_down_then_up() {
        assert_eq!(
            ComposeAction::Restart.commands(),
            &[ComposeCommandKind::Down, ComposeCommandKind::Up]
        );
        assert_eq!(ComposeAction::Up.commands(), &[ComposeCommandKind::Up]);
    }

    #[test]
    fn action_from_str() {
        assert_eq!("Restart".parse::<ComposeAction>(), Ok(ComposeAction::Restart));
        assert!("stop".parse::<ComposeAction>().is_err());
    }

    #[test]
    fn default_templates_only_use_known_variables() {
        use crate::config::extract_variables;

        for var in extract_variables(DEFAULT_UP_TEMPLATE) {
            assert!(COMPOSE_UP_VARIABLES.contains(&var.as_str()));
        }
        for var in extract_variables(DEFAULT_DOWN_TEMPLATE) {
            assert!(COMPOSE_DOWN_VARIABLES.contains(&var.as_str()));
        }
    }
}
