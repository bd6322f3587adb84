//! Configuration module for Launchpad
//!
//! Configuration hierarchy:
//! 1. Environment variables (LAUNCHPAD_*)
//! 2. Explicit `--config` file, else `./launchpad.toml`
//! 3. User config (`<config dir>/launchpad/config.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! The API token is a secret and never lives in the TOML file; it is read
//! from the environment (optionally seeded from a dotenv file).

mod loader;
mod token;
mod types;

pub use loader::{
    load_layered, load_with_warnings, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use token::{resolve_api_token, ApiToken};
pub use types::{BootstrapConfig, Config, DropletConfig, GitConfig, ProviderConfig, TargetConfig};
