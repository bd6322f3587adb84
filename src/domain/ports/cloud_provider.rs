//! Cloud Provider Port
//!
//! The handful of provider calls the provisioner issues. Every method is a
//! single request; retries are never attempted here.

use crate::domain::entities::{DropletRecord, DropletSpec, SshKeyRecord};
use crate::error::LaunchpadResult;

pub trait CloudProvider {
    fn list_ssh_keys(&self) -> LaunchpadResult<Vec<SshKeyRecord>>;

    fn create_ssh_key(&self, name: &str, public_key: &str) -> LaunchpadResult<SshKeyRecord>;

    /// Existing droplets with exactly this name
    fn find_droplets_by_name(&self, name: &str) -> LaunchpadResult<Vec<DropletRecord>>;

    fn create_droplet(&self, spec: &DropletSpec) -> LaunchpadResult<DropletRecord>;

    fn get_droplet(&self, id: u64) -> LaunchpadResult<DropletRecord>;
}
