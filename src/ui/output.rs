//! Output verbosity.

/// How much a UI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including the output of `docker compose` itself.
    Verbose,
    /// Headers, spinners and status lines.
    #[default]
    Normal,
    /// Spinners and final status lines.
    Quiet,
    /// Errors only. Used when stdout carries machine-readable output.
    Silent,
}

impl OutputMode {
    /// Pick a mode from the global `--quiet` / `--verbose` flags.
    ///
    /// The flags conflict at the argument level; quiet wins if both arrive.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Whether child process output goes straight to the terminal.
    pub fn shows_command_output(&self) -> bool {
        *self == Self::Verbose
    }

    pub fn shows_spinners(&self) -> bool {
        *self != Self::Silent
    }

    pub fn shows_status(&self) -> bool {
        *self != Self::Silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_pick_mode() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
    }

    #[test]
    fn only_verbose_streams_command_output() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(!OutputMode::Quiet.shows_command_output());
    }

    #[test]
    fn silent_hides_status_and_spinners() {
        assert!(OutputMode::Quiet.shows_status());
        assert!(OutputMode::Quiet.shows_spinners());
        assert!(!OutputMode::Silent.shows_status());
        assert!(!OutputMode::Silent.shows_spinners());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
