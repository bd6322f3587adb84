//! Deploy Module
//!
//! Orchestrates the deploy flow for Launchpad.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use launchpad::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(GitCli::new(), SshShell::new(policy), prompt);
//! let result = use_case.execute(&DeployOptions::from_config(&config));
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
