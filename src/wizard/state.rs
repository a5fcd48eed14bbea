//! Wizard lifecycle states.

use std::fmt;

use thiserror::Error;

/// One of the two pipelines a wizard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Input gathering.
    Prompt,
    /// Effect application.
    Execute,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::Execute => write!(f, "execute"),
        }
    }
}

/// Lifecycle of a single wizard run.
///
/// ```text
/// Created -> Prompting -> Prompted -> Executing -> Done
///               |                         |
///               +--------> Failed <-------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardState {
    /// Constructed, nothing has run yet.
    #[default]
    Created,
    /// Prompt steps are running.
    Prompting,
    /// Every prompt step completed.
    Prompted,
    /// Execute steps are running.
    Executing,
    /// Every execute step completed.
    Done,
    /// A step failed during the given phase.
    Failed { phase: Phase },
}

impl WizardState {
    /// Check if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed { .. })
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Prompting => write!(f, "prompting"),
            Self::Prompted => write!(f, "prompted"),
            Self::Executing => write!(f, "executing"),
            Self::Done => write!(f, "done"),
            Self::Failed { phase } => write!(f, "failed during {}", phase),
        }
    }
}

/// Errors raised by the engine itself rather than by a step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A phase was requested from a state that does not allow it.
    #[error("Cannot {action} a wizard that is {state}")]
    InvalidTransition {
        action: &'static str,
        state: WizardState,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_created() {
        assert_eq!(WizardState::default(), WizardState::Created);
    }

    #[test]
    fn terminal_states() {
        assert!(WizardState::Done.is_terminal());
        assert!(WizardState::Failed {
            phase: Phase::Prompt
        }
        .is_terminal());
        assert!(!WizardState::Created.is_terminal());
        assert!(!WizardState::Prompted.is_terminal());
        assert!(!WizardState::Executing.is_terminal());
    }

    #[test]
    fn failed_state_names_phase() {
        let state = WizardState::Failed {
            phase: Phase::Execute,
        };
        assert_eq!(state.to_string(), "failed during execute");
    }

    #[test]
    fn invalid_transition_displays_action_and_state() {
        let err = WizardError::InvalidTransition {
            action: "prompt",
            state: WizardState::Done,
        };
        assert_eq!(err.to_string(), "Cannot prompt a wizard that is done");
    }
}
