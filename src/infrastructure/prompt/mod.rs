//! Operator prompt implementations
//!
//! - `InteractivePrompt`: dialoguer prompts on the terminal
//!
//! The non-interactive fallback lives next to the port.

mod interactive;

pub use interactive::InteractivePrompt;
