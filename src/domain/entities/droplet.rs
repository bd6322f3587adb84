//! Compute instance (droplet) records

use std::fmt;

/// Droplet lifecycle status as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropletStatus {
    New,
    Active,
    Off,
    Archive,
    /// Explicit provisioning failure reported by the provider
    Failed(String),
    /// Anything we don't recognise; treated as transitional
    Other(String),
}

impl DropletStatus {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "new" => Self::New,
            "active" => Self::Active,
            "off" => Self::Off,
            "archive" => Self::Archive,
            "errored" | "error" | "failed" => Self::Failed(s.to_string()),
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Off => "off",
            Self::Archive => "archive",
            Self::Failed(s) | Self::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// A freshly created droplet in one of these states will never become active
    pub fn is_terminal_failure(&self) -> bool {
        matches!(self, Self::Off | Self::Archive | Self::Failed(_))
    }
}

impl fmt::Display for DropletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One IPv4 interface of a droplet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddress {
    pub ip_address: String,
    /// `public` or `private`
    pub kind: String,
}

/// A provider-managed virtual machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletRecord {
    pub id: u64,
    pub name: String,
    pub status: DropletStatus,
    pub region: Option<String>,
    pub size: Option<String>,
    pub image: Option<String>,
    /// IPv4 addresses in provider order
    pub ipv4: Vec<NetworkAddress>,
}

impl DropletRecord {
    /// First address in the provider's list, if any has been assigned
    pub fn first_ipv4(&self) -> Option<&str> {
        self.ipv4.first().map(|n| n.ip_address.as_str())
    }
}

/// Creation request for a new droplet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletSpec {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
    pub ssh_key_ids: Vec<u64>,
    pub user_data: String,
    pub backups: bool,
    pub ipv6: bool,
    pub monitoring: bool,
}
