//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! Rendering lives in the binary's `ui` module.
//!
//! ## Usage
//!
//! ```ignore
//! use launchpad::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, OutputMode::Stream);
//! let result = use_case.execute(&options);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_deploy_use_case, create_provision_use_case};
