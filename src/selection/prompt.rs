//! Human single-choice prompts
//!
//! A prompter answers a [`SelectionRequest`] with the raw 1-based number the
//! user chose, or `None` when they backed out. Range checking is left to the
//! selector.

use std::fmt::Write as _;
use std::io::{BufRead, IsTerminal, Write};

use inquire::{InquireError, Select};

use super::SelectionRequest;
use crate::error::{self, Result};

/// Asks a human to choose one of several labelled options
pub trait Prompter {
    /// Returns the chosen 1-based number, or `None` if cancelled.
    fn prompt(&self, request: &SelectionRequest) -> Result<Option<i64>>;
}

/// Arrow-key list selection for interactive terminals
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn prompt(&self, request: &SelectionRequest) -> Result<Option<i64>> {
        let answer = Select::new(&request.prompt_title, request.labels())
            .with_starting_cursor(0)
            .with_page_size(10)
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select, ESC/q to cancel")
            .raw_prompt_skippable();

        match answer {
            Ok(Some(choice)) => Ok(i64::try_from(choice.index + 1).ok()),
            Ok(None)
            | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Numbered-list prompt over stderr/stdin for non-interactive hosts
///
/// Prints the title and `N: label` lines, then reads one line. An empty,
/// non-numeric, zero or negative answer cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinePrompter;

impl Prompter for LinePrompter {
    fn prompt(&self, request: &SelectionRequest) -> Result<Option<i64>> {
        let mut stderr = std::io::stderr().lock();
        stderr
            .write_all(render_request(request).as_bytes())
            .and_then(|()| stderr.flush())
            .map_err(|e| error::prompt_failed(e.to_string()))?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| error::prompt_failed(e.to_string()))?;

        Ok(parse_response(&line))
    }
}

/// The prompter suited to the current stdin: interactive list on a
/// terminal, numbered lines otherwise.
pub fn default_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(InquirePrompter)
    } else {
        Box::new(LinePrompter)
    }
}

/// Render a request as the title followed by numbered options.
pub fn render_request(request: &SelectionRequest) -> String {
    let mut out = format!("{}:\n", request.prompt_title);
    for option in &request.options {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}: {}", option.number, option.label);
    }
    out.push_str("Choice (empty to cancel): ");
    out
}

/// Parse one answer line. Anything that is not an integer cancels.
pub fn parse_response(line: &str) -> Option<i64> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
