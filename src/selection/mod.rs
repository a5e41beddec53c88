//! Candidate selection
//!
//! Every decision point of a resolution (which project, which framework
//! build) goes through [`CandidateSelector`]:
//!
//! 1. `allow_multiple` hands back every candidate without prompting
//! 2. no candidates: a notice is emitted and nothing is selected
//! 3. one candidate: selected without asking
//! 4. several: the user picks one through the [`Prompter`]
//!
//! The prompt and the notice are collaborators so that the policy can be
//! exercised without a terminal.

pub mod notice;
pub mod prompt;

#[cfg(test)]
pub mod testing;

use tracing::debug;

use crate::error::Result;

pub use notice::{ConsoleNotifier, Notifier};
pub use prompt::{InquirePrompter, LinePrompter, Prompter, default_prompter};

/// One numbered entry of a selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOption {
    /// 1-based position, as shown to the user
    pub number: usize,
    pub label: String,
}

/// What the human is asked to choose from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub prompt_title: String,
    pub options: Vec<SelectionOption>,
}

impl SelectionRequest {
    pub fn new(prompt_title: impl Into<String>, labels: impl IntoIterator<Item = String>) -> Self {
        let options = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| SelectionOption {
                number: i + 1,
                label,
            })
            .collect();

        Self {
            prompt_title: prompt_title.into(),
            options,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|o| o.label.clone()).collect()
    }
}

/// Outcome of [`CandidateSelector::select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// Nothing selected: no candidates, or the user cancelled
    None,
    /// Exactly one candidate selected
    One(T),
    /// All candidates, returned untouched when multiple selection is allowed
    All(Vec<T>),
}

impl<T> Selection<T> {
    /// The single selected candidate, if any
    pub fn into_one(self) -> Option<T> {
        match self {
            Selection::One(item) => Some(item),
            Selection::None | Selection::All(_) => None,
        }
    }
}

/// Titles and messages for one selection
#[derive(Debug, Clone, Copy)]
pub struct SelectOptions<'a> {
    pub prompt_title: &'a str,
    pub empty_message: &'a str,
    pub allow_multiple: bool,
}

impl<'a> SelectOptions<'a> {
    pub fn single(prompt_title: &'a str, empty_message: &'a str) -> Self {
        Self {
            prompt_title,
            empty_message,
            allow_multiple: false,
        }
    }
}

/// Applies the disambiguation policy over a prompter and a notifier
pub struct CandidateSelector<'a> {
    prompter: &'a dyn Prompter,
    notifier: &'a dyn Notifier,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(prompter: &'a dyn Prompter, notifier: &'a dyn Notifier) -> Self {
        Self { prompter, notifier }
    }

    /// Select among `candidates` according to `options`.
    pub fn select<T, F>(
        &self,
        candidates: Vec<T>,
        label_fn: F,
        options: SelectOptions<'_>,
    ) -> Result<Selection<T>>
    where
        F: Fn(&T) -> String,
    {
        if options.allow_multiple {
            return Ok(Selection::All(candidates));
        }

        if candidates.is_empty() {
            self.notifier.notify(options.empty_message);
            return Ok(Selection::None);
        }

        let mut candidates = candidates;
        if candidates.len() == 1 {
            return Ok(candidates.pop().map_or(Selection::None, Selection::One));
        }

        let request = SelectionRequest::new(options.prompt_title, candidates.iter().map(label_fn));
        let response = self.prompter.prompt(&request)?;
        debug!(title = options.prompt_title, ?response, "selection answered");

        Ok(match pick_index(response, candidates.len()) {
            Some(index) => Selection::One(candidates.swap_remove(index)),
            None => Selection::None,
        })
    }

    /// Select exactly one candidate, or nothing.
    pub fn select_one<T, F>(
        &self,
        candidates: Vec<T>,
        label_fn: F,
        prompt_title: &str,
        empty_message: &str,
    ) -> Result<Option<T>>
    where
        F: Fn(&T) -> String,
    {
        self.select(
            candidates,
            label_fn,
            SelectOptions::single(prompt_title, empty_message),
        )
        .map(Selection::into_one)
    }
}

/// Map a raw 1-based prompt response to a 0-based index.
///
/// Cancelled, non-positive and out-of-range responses select nothing.
fn pick_index(response: Option<i64>, len: usize) -> Option<usize> {
    let number = usize::try_from(response?).ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}
