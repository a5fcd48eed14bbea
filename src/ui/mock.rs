//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses, or told to cancel specific prompts.
//!
//! # Example
//!
//! ```
//! use dockhand::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("platform", "go");
//!
//! let answer = ui
//!     .prompt(&Prompt::input("platform", "Platform?", None))
//!     .unwrap();
//! assert_eq!(answer.as_string(), "go");
//!
//! ui.cancel_prompt("port");
//! assert!(ui
//!     .prompt(&Prompt::input("port", "Port?", Some("3000")))
//!     .unwrap_err()
//!     .is_cancelled());
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::{DockhandError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    cancelled_prompts: HashSet<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Make the prompt with this key behave as if the user dismissed it.
    pub fn cancel_prompt(&mut self, key: &str) {
        self.cancelled_prompts.insert(key.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn typed(prompt: &Prompt, response: &str) -> PromptResult {
        if matches!(prompt.prompt_type, PromptType::Confirm) {
            PromptResult::Bool(super::parse_bool(response))
        } else {
            PromptResult::String(response.to_string())
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if self.cancelled_prompts.contains(&prompt.key) {
            return Err(DockhandError::Cancelled);
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::typed(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::typed(prompt, default));
        }

        // Type-appropriate empty answer as a last resort
        Ok(Self::typed(prompt, ""))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    succeeded: Option<bool>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Whether the spinner finished successfully, if it finished.
    pub fn succeeded(&self) -> Option<bool> {
        self.succeeded
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(true);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn mock_ui_prompt_with_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("port", "8080");

        let result = ui.prompt(&Prompt::input("port", "Port?", None)).unwrap();

        assert_eq!(result.as_string(), "8080");
        assert_eq!(ui.prompts_shown(), &["port"]);
    }

    #[test]
    fn mock_ui_confirm_response_is_boolean() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("overwrite", "yes");

        let result = ui
            .prompt(&Prompt::confirm("overwrite", "Overwrite?", false))
            .unwrap();

        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn mock_ui_prompt_falls_back_to_default() {
        let mut ui = MockUI::new();

        let result = ui
            .prompt(&Prompt::input("folder", "Folder?", Some(".")))
            .unwrap();

        assert_eq!(result.as_string(), ".");
    }

    #[test]
    fn mock_ui_cancelled_prompt() {
        let mut ui = MockUI::new();
        ui.cancel_prompt("platform");

        let err = ui
            .prompt(&Prompt::input("platform", "Platform?", Some("node")))
            .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(ui.prompts_shown(), &["platform"]);
    }

    #[test]
    fn mock_ui_captures_spinners_and_headers() {
        let mut ui = MockUI::new();

        ui.show_header("Add Docker Files");
        let _spinner = ui.start_spinner("docker-compose up");

        assert_eq!(ui.headers(), &["Add Docker Files"]);
        assert_eq!(ui.spinners(), &["docker-compose up"]);
    }

    #[test]
    fn mock_spinner_records_outcome() {
        let mut spinner = MockSpinner::new();
        spinner.set_message("working");
        spinner.finish_error("failed");

        assert_eq!(spinner.messages(), &["working"]);
        assert_eq!(spinner.finish_message(), Some("failed"));
        assert_eq!(spinner.succeeded(), Some(false));
    }
}
