//! Operator Prompt Port
//!
//! Blocking questions to the operator. Implementations:
//! - `InteractivePrompt`: dialoguer on the terminal
//! - `NonInteractivePrompt`: no terminal; callers must not ask

use crate::error::{LaunchpadError, LaunchpadResult};

pub trait OperatorPrompt {
    /// Whether questions can actually reach an operator
    fn can_prompt(&self) -> bool;

    /// Yes/no question
    fn confirm(&self, question: &str, default: bool) -> LaunchpadResult<bool>;

    /// Free-form line of text
    fn input(&self, prompt: &str) -> LaunchpadResult<String>;
}

/// Prompt used when stdin is not a terminal
pub struct NonInteractivePrompt;

impl OperatorPrompt for NonInteractivePrompt {
    fn can_prompt(&self) -> bool {
        false
    }

    fn confirm(&self, question: &str, _default: bool) -> LaunchpadResult<bool> {
        Err(LaunchpadError::Prompt {
            message: format!("cannot ask '{}' without a terminal", question),
        })
    }

    fn input(&self, prompt: &str) -> LaunchpadResult<String> {
        Err(LaunchpadError::Prompt {
            message: format!("cannot ask '{}' without a terminal", prompt),
        })
    }
}
