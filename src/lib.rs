//! Launchpad - deploy and provisioning orchestrator for a single host
//!
//! Launchpad ships a web app to one Linux host and creates that host in the
//! first place:
//!
//! - `deploy` checks the working tree, pushes to the upstream and runs one
//!   composite script over ssh (pull, restart, status).
//! - `provision` registers an SSH key with DigitalOcean, creates a droplet
//!   with a first-boot script and waits until it is active.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    DeployOptions, DeployResult, DeployUseCase, ProvisionOptions, ProvisionResult,
    ProvisionUseCase,
};
pub use config::Config;
pub use error::{ErrorCategory, LaunchpadError, LaunchpadResult};
pub use presentation::ColorWhen;
