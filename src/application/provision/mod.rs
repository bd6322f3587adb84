//! Provision Module
//!
//! First-time setup of a droplet for Launchpad.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`ProvisionOptions`)
//! - `result` - Result types (`ProvisionResult`)
//! - `use_case` - Core use case logic (`ProvisionUseCase`)

mod options;
mod result;
mod use_case;

pub use options::ProvisionOptions;
pub use result::ProvisionResult;
pub use use_case::ProvisionUseCase;
