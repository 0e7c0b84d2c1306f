//! Non-interactive UI for piped or headless runs.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crate::error::Result;

use super::theme::BlogshipTheme;
use super::{
    is_affirmative, OutputMode, Prompt, PublishSummary, SpinnerHandle, UserInterface,
};

/// UI implementation used when stdout is not a terminal.
///
/// Lines are written without color. The confirmation prompt is answered by a
/// `BLOGSHIP_PROMPT_<KEY>` environment variable when one is set, otherwise by
/// one line read from stdin (EOF counts as "no").
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: BlogshipTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("BLOGSHIP_PROMPT_"))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: BlogshipTheme::plain(),
        }
    }

    /// Answer `prompt` from overrides or from `input`, writing the question
    /// as one line to `output`.
    pub fn confirm_from(
        &self,
        prompt: &Prompt,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<bool> {
        if let Some(value) = self.env_overrides.get(&prompt.env_key()) {
            return Ok(is_affirmative(value));
        }

        writeln!(output, "{} [y/N]", prompt.question)?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", self.theme.format_info(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let stdin = io::stdin();
        let mut lock = stdin.lock();
        self.confirm_from(prompt, &mut lock, &mut io::stdout())
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
    }

    fn show_summary(&mut self, summary: &PublishSummary) {
        for line in summary.render(&self.theme) {
            println!("{}", line);
        }
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt() -> Prompt {
        Prompt::new("continue", "No changes detected. Continue anyway?")
    }

    #[test]
    fn reads_answer_from_input() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        assert!(ui.confirm_from(&prompt(), &mut Cursor::new("yes\n"), &mut io::sink()).unwrap());
        assert!(ui.confirm_from(&prompt(), &mut Cursor::new("Y\n"), &mut io::sink()).unwrap());
        assert!(!ui.confirm_from(&prompt(), &mut Cursor::new("n\n"), &mut io::sink()).unwrap());
        assert!(!ui.confirm_from(&prompt(), &mut Cursor::new("\n"), &mut io::sink()).unwrap());
    }

    #[test]
    fn question_is_one_line_without_trailing_blank() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let mut shown = Vec::new();

        ui.confirm_from(&prompt(), &mut Cursor::new("n\n"), &mut shown)
            .unwrap();

        assert_eq!(
            String::from_utf8(shown).unwrap(),
            "No changes detected. Continue anyway? [y/N]\n"
        );
    }

    #[test]
    fn override_shows_no_question() {
        let mut overrides = HashMap::new();
        overrides.insert("BLOGSHIP_PROMPT_CONTINUE".to_string(), "n".to_string());
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let mut shown = Vec::new();

        assert!(!ui.confirm_from(&prompt(), &mut Cursor::new("y\n"), &mut shown).unwrap());
        assert!(shown.is_empty());
    }

    #[test]
    fn end_of_input_declines() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.confirm_from(&prompt(), &mut Cursor::new(""), &mut io::sink()).unwrap());
    }

    #[test]
    fn env_override_wins_over_input() {
        let mut overrides = HashMap::new();
        overrides.insert("BLOGSHIP_PROMPT_CONTINUE".to_string(), "y".to_string());
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        assert!(ui.confirm_from(&prompt(), &mut Cursor::new("n\n"), &mut io::sink()).unwrap());
    }

    #[test]
    fn keeps_output_mode() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
