//! Host key verification policy for the ssh client

use serde::{Deserialize, Serialize};

/// Value passed to `ssh -o StrictHostKeyChecking=<policy>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HostKeyPolicy {
    /// Accept any host key, including changed ones
    #[default]
    No,
    /// Accept unknown hosts, reject changed keys
    AcceptNew,
    /// Only connect to hosts already in known_hosts
    Yes,
}

impl HostKeyPolicy {
    pub fn as_ssh_option(&self) -> &'static str {
        match self {
            HostKeyPolicy::No => "no",
            HostKeyPolicy::AcceptNew => "accept-new",
            HostKeyPolicy::Yes => "yes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "no" | "off" | "false" => Some(Self::No),
            "accept-new" | "accept_new" => Some(Self::AcceptNew),
            "yes" | "strict" | "true" => Some(Self::Yes),
            _ => None,
        }
    }
}
