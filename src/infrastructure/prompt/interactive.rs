//! Interactive operator prompt
//!
//! Asks on stderr via dialoguer. Ctrl+C while a prompt is open surfaces as
//! `LaunchpadError::Interrupted`.

use dialoguer::{Confirm, Input};

use crate::domain::ports::OperatorPrompt;
use crate::error::{LaunchpadError, LaunchpadResult};

pub struct InteractivePrompt;

impl InteractivePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(err: dialoguer::Error) -> LaunchpadError {
    match err {
        dialoguer::Error::IO(e) => LaunchpadError::from_prompt(e),
    }
}

impl OperatorPrompt for InteractivePrompt {
    fn can_prompt(&self) -> bool {
        true
    }

    fn confirm(&self, question: &str, default: bool) -> LaunchpadResult<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&self, prompt: &str) -> LaunchpadResult<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }
}
