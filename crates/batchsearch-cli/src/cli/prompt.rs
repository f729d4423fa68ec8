//! Console prompts (dialoguer).

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// Yes/no question, defaulting to no. `assume_yes` skips the prompt.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Free-text line, trimmed. May be empty.
pub fn line(prompt: &str) -> Result<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text.trim().to_string())
}

/// Pick one of `items`; returns its index.
pub fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// Between search batches: Enter continues, `q` stops.
pub fn continue_batch(remaining: usize) -> Result<bool> {
    let answer = line(&format!(
        "Press Enter to open more tabs ({remaining} left), or q to stop"
    ))?;
    Ok(!answer.eq_ignore_ascii_case("q"))
}
