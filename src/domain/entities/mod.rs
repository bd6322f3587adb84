//! Domain Entities

mod deployment_attempt;
mod droplet;
mod remote_command;
mod repository_state;
mod ssh_key;

pub use deployment_attempt::{DeployStep, DeploymentAttempt, StepOutcome, StepRecord};
pub use droplet::{DropletRecord, DropletSpec, DropletStatus, NetworkAddress};
pub use remote_command::{DeployScriptSpec, RemoteCommand};
pub use repository_state::RepositoryState;
pub use ssh_key::{find_reserved, reserved_key_name, SshKeyRecord};
