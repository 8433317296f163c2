//! Yes/no confirmation prompts.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::cell::RefCell;
use std::collections::VecDeque;

/// A blocking yes/no dialog.
pub trait Prompt {
    /// Show `message` and wait for the answer. `true` means confirmed.
    fn confirm(&self, message: &str) -> bool;
}

/// Ask the user to confirm `message`.
pub fn confirm_action<P: Prompt + ?Sized>(prompt: &P, message: &str) -> bool {
    let answer = prompt.confirm(message);
    log::debug!("confirm {message:?} -> {answer}");
    answer
}

/// Prompt with pre-recorded answers, for tests and headless runs.
///
/// Answers are consumed in order; once exhausted every prompt is declined,
/// the same as a user dismissing the dialog.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self { answers: RefCell::new(answers.into_iter().collect()), asked: RefCell::default() }
    }

    /// Messages shown so far, oldest first.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_owned());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}
