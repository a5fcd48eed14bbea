//! Error types for Dockhand operations.
//!
//! This module defines [`DockhandError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `Cancelled` means the user backed out. Callers abort silently.
//! - Every other variant is an operational failure and is shown to the user.
//! - `MissingContextField` flags a wizard whose steps were composed wrongly;
//!   it is never replaced by a default value.
//! - Use `anyhow::Error` (via `DockhandError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::WizardError;

/// Core error type for Dockhand operations.
#[derive(Debug, Error)]
pub enum DockhandError {
    /// The user dismissed a prompt or declined to continue.
    #[error("Operation cancelled")]
    Cancelled,

    /// A wizard step could not produce its effect.
    #[error("Step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// A step read a context field that no earlier step filled in.
    #[error("Wizard context field '{field}' was read before it was set")]
    MissingContextField { field: &'static str },

    /// The wizard engine was driven out of order.
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// No embedded scaffolding template with this name.
    #[error("Unknown template: {name}")]
    TemplateNotFound { name: String },

    /// The selected workspace folder does not exist.
    #[error("Workspace folder not found: {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DockhandError {
    /// Check if this error means the user cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for Dockhand operations.
pub type Result<T> = std::result::Result<T, DockhandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardState;

    #[test]
    fn cancelled_is_classified() {
        assert!(DockhandError::Cancelled.is_cancelled());
        assert!(!DockhandError::TemplateNotFound { name: "x".into() }.is_cancelled());
    }

    #[test]
    fn step_failed_displays_step_and_message() {
        let err = DockhandError::StepFailed {
            step: "scaffold-dockerfile".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("scaffold-dockerfile"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn missing_context_field_names_field() {
        let err = DockhandError::MissingContextField { field: "platform" };
        assert!(err.to_string().contains("platform"));
    }

    #[test]
    fn wizard_error_is_transparent() {
        let err: DockhandError = WizardError::InvalidTransition {
            action: "execute",
            state: WizardState::Done,
        }
        .into();
        assert_eq!(err.to_string(), "Cannot execute a wizard that is done");
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DockhandError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn workspace_not_found_displays_path() {
        let err = DockhandError::WorkspaceNotFound {
            path: PathBuf::from("/nowhere"),
        };
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DockhandError::CommandFailed {
            command: "docker-compose up".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker-compose up"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DockhandError = io_err.into();
        assert!(matches!(err, DockhandError::Io(_)));
    }
}
