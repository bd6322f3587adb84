//! Value Objects
//!
//! Immutable values derived from configuration and operator input.

mod bootstrap;
mod commit_message;
mod host_key_policy;
mod poll_policy;

pub use bootstrap::{shell_quote, BootstrapScript, BootstrapSpec, SshAccess};
pub use commit_message::CommitMessage;
pub use host_key_policy::HostKeyPolicy;
pub use poll_policy::PollPolicy;
