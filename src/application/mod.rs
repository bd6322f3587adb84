//! Application Layer
//!
//! Use cases that orchestrate the two operator flows.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT talk to git, ssh or HTTP directly (those are in Infrastructure)
//! - Stops at the first failing step; nothing is retried or rolled back
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Guard, push gate, then one composite remote script
//! - `ProvisionUseCase` - Ensure SSH key, create droplet, wait until active
//!
//! ## Steps
//!
//! - `WorkingTreeGuard` - Clean check and the commit-or-abort decision
//! - `PushGate` - Publishes local commits before any host-side action

pub mod deploy;
pub mod guard;
pub mod provision;
pub mod push_gate;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use guard::{CommitPolicy, WorkingTreeGuard};
pub use provision::{ProvisionOptions, ProvisionResult, ProvisionUseCase};
pub use push_gate::PushGate;
