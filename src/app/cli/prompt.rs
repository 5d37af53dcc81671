//! Terminal prompts.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect};

use crate::domain::AppError;

/// Whether both stdin and stderr are attached to a terminal.
pub(super) fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

fn prompt_error(what: &str, err: DialoguerError) -> Result<Option<()>, AppError> {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => Ok(None),
        err => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

/// Ask a yes/no question. `assume_yes` answers yes without asking.
///
/// Without a terminal the question cannot be asked, so `--yes` is required.
pub(super) fn confirm(message: &str, default: bool, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    if !is_interactive() {
        return Err(AppError::Prompt(format!(
            "{} (no terminal available; pass --yes to proceed)",
            message
        )));
    }

    match Confirm::new().with_prompt(message).default(default).interact_opt() {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(err) => prompt_error("confirmation", err).map(|_| false),
    }
}

/// Pick any number of `items`. `None` means the user cancelled.
pub(super) fn multi_select(message: &str, items: &[String]) -> Result<Option<Vec<usize>>, AppError> {
    if !is_interactive() {
        return Err(AppError::Prompt(format!("{} (no terminal available)", message)));
    }

    match MultiSelect::new()
        .with_prompt(format!("{} (space to toggle, enter to confirm)", message))
        .items(items)
        .max_length(10)
        .interact_opt()
    {
        Ok(selection) => Ok(selection),
        Err(err) => prompt_error("selection", err).map(|_| None),
    }
}

/// Read one line of text. `None` means the user cancelled.
pub(super) fn text(message: &str) -> Result<Option<String>, AppError> {
    if !is_interactive() {
        return Err(AppError::Prompt(format!("{} (no terminal available)", message)));
    }

    match Input::<String>::new().with_prompt(message).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(err) => prompt_error(message, err).map(|_| None),
    }
}
