//! Scripted collaborators for exercising selection without a terminal

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{Notifier, Prompter, SelectionRequest};
use crate::error::Result;

/// Answers prompts from a fixed script and records every request.
///
/// Once the script runs out, further prompts are treated as cancelled.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: RefCell<VecDeque<Option<i64>>>,
    requests: RefCell<Vec<SelectionRequest>>,
}

impl ScriptedPrompter {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Option<i64>>,
    {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SelectionRequest> {
        self.requests.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&self, request: &SelectionRequest) -> Result<Option<i64>> {
        self.requests.borrow_mut().push(request.clone());
        Ok(self.responses.borrow_mut().pop_front().flatten())
    }
}

/// Collects notices instead of printing them
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
