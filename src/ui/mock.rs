//! Scripted input and buffered output for testing

use super::input::{InputError, Result, UserInput};
use super::output::{MessageLevel, OutputWriter};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One canned answer for a [`ScriptedInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Answer a single-choice prompt with the entry carrying this label
    Select(String),
    /// Answer a multi-choice prompt with the entries carrying these labels
    MultiSelect(Vec<String>),
    /// Answer a confirmation prompt
    Confirm(bool),
    /// Cancel whichever prompt comes next
    Cancel,
}

/// User input that replays predetermined answers
///
/// Answers are matched by label rather than index so scripts stay readable.
/// Running out of answers behaves like a cancel.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    responses: RefCell<VecDeque<ScriptedResponse>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }

    fn next(&self, prompt: &str) -> Option<ScriptedResponse> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.responses.borrow_mut().pop_front()
    }
}

fn position(items: &[String], label: &str) -> Result<usize> {
    items
        .iter()
        .position(|item| item == label)
        .ok_or_else(|| InputError::Invalid(format!("'{label}' is not one of {items:?}")))
}

impl UserInput for ScriptedInput {
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        match self.next(prompt) {
            Some(ScriptedResponse::Select(label)) => position(items, &label).map(Some),
            Some(ScriptedResponse::Cancel) | None => Ok(None),
            Some(other) => Err(InputError::Invalid(format!("{other:?} cannot answer '{prompt}'"))),
        }
    }

    fn prompt_multi_select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        match self.next(prompt) {
            Some(ScriptedResponse::MultiSelect(labels)) => labels
                .iter()
                .map(|label| position(items, label))
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(ScriptedResponse::Cancel) | None => Ok(None),
            Some(other) => Err(InputError::Invalid(format!("{other:?} cannot answer '{prompt}'"))),
        }
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt) {
            Some(ScriptedResponse::Confirm(answer)) => Ok(Some(answer)),
            Some(ScriptedResponse::Cancel) | None => Ok(None),
            Some(other) => Err(InputError::Invalid(format!("{other:?} cannot answer '{prompt}'"))),
        }
    }
}

/// Output writer that records messages instead of printing them
#[derive(Debug, Default)]
pub struct BufferedWriter {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl BufferedWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Recorded messages of one level
    #[must_use]
    pub fn messages_at(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for BufferedWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
