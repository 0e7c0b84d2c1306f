//! Confirmation prompt.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{PublishError, Result};

use super::Prompt;

/// Convert dialoguer errors to PublishError.
fn map_dialoguer_err(e: dialoguer::Error) -> PublishError {
    PublishError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Only `y` and `yes` (any case, surrounding whitespace ignored) confirm.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask a yes/no question on the terminal. Empty input means no.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    let answer = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(format!("{} [y/N]", prompt.question))
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(is_affirmative(&answer))
}
