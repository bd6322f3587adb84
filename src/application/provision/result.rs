//! Provision Result

use std::net::Ipv4Addr;

use crate::domain::entities::SshKeyRecord;

/// Result of a successful provision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionResult {
    pub key: SshKeyRecord,
    /// Whether the key record was created by this run
    pub key_created: bool,
    pub droplet_id: u64,
    /// First IPv4 address in the droplet's network list
    pub ip: String,
    pub domain: String,
    /// Set when ssh was restricted to the operator's address
    pub operator_ip: Option<Ipv4Addr>,
    /// Status queries made before the droplet became active
    pub poll_attempts: u64,
}
