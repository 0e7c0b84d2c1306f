//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped or headless runs
//! - [`MockUI`] for tests
//! - The confirmation prompt, spinner, theme, and publish summary
//!
//! # Example
//!
//! ```
//! use blogship::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Publishing blog");
//! ui.success("Site built");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod summary;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{is_affirmative, prompt_confirm};
pub use spinner::ProgressSpinner;
pub use summary::{format_duration, PublishSummary, StepOutcome, StepReport};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BlogshipTheme};

use crate::error::Result;
use crate::shell::OutputCallback;

/// Trait for user interface interactions.
///
/// The pipeline only talks to the console through this trait, which allows
/// mocking the UI (and the confirmation prompt) in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a failed command and its captured output.
    fn show_error_block(&mut self, command: &str, output: &str);

    /// Show the end-of-run summary.
    fn show_summary(&mut self, summary: &PublishSummary);
}

/// Handle for controlling a spinner.
///
/// Spinners only show activity. Outcomes go through the event log.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Remove the spinner; the outcome is reported separately.
    fn finish_clear(&mut self);

    /// Callback that shows command output under the spinner, if it can.
    fn output_callback(&self) -> Option<OutputCallback> {
        None
    }
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key (used for `BLOGSHIP_PROMPT_<KEY>` overrides and mocks).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }

    /// Environment variable that answers this prompt without input.
    pub fn env_key(&self) -> String {
        format!("BLOGSHIP_PROMPT_{}", self.key.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_env_key_is_uppercased() {
        let prompt = Prompt::new("continue", "No changes detected. Continue anyway?");
        assert_eq!(prompt.env_key(), "BLOGSHIP_PROMPT_CONTINUE");
    }

    #[test]
    fn prompt_keeps_question() {
        let prompt = Prompt::new("continue", "Continue?");
        assert_eq!(prompt.key, "continue");
        assert_eq!(prompt.question, "Continue?");
    }
}
