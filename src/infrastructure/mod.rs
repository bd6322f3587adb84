//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O: child processes, HTTP and the terminal.
//!
//! ## Structure
//!
//! - `git/` - Version control via the `git` CLI
//! - `ssh/` - Remote shell via the OpenSSH client
//! - `digitalocean/` - Cloud provider over the DigitalOcean v2 API
//! - `prompt/` - Operator prompts (dialoguer)
//! - `public_ip` - Operator IP lookup
//! - `events/` - NDJSON event sinks

pub mod digitalocean;
pub mod events;
pub mod git;
pub mod prompt;
pub mod public_ip;
pub mod ssh;

// Re-export for convenience
pub use digitalocean::DigitalOceanClient;
pub use events::{JsonEventSink, JsonProvisionSink};
pub use git::GitCli;
pub use prompt::InteractivePrompt;
pub use public_ip::IpifyResolver;
pub use ssh::{OutputMode, SshOptions, SshShell};
