//! DigitalOcean request and response bodies
//!
//! Only the fields Launchpad reads are modelled; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    DropletRecord, DropletSpec, DropletStatus, NetworkAddress, SshKeyRecord,
};

#[derive(Debug, Deserialize)]
pub(super) struct SshKeyList {
    #[serde(default)]
    pub ssh_keys: Vec<SshKeyRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SshKeyEnvelope {
    pub ssh_key: SshKeyRecord,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateSshKey<'a> {
    pub name: &'a str,
    pub public_key: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct DropletList {
    #[serde(default)]
    pub droplets: Vec<WireDroplet>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DropletEnvelope {
    pub droplet: WireDroplet,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireDroplet {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub region: Option<Slugged>,
    #[serde(default)]
    pub size_slug: Option<String>,
    #[serde(default)]
    pub image: Option<Slugged>,
    #[serde(default)]
    pub networks: Networks,
}

#[derive(Debug, Deserialize)]
pub(super) struct Slugged {
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Networks {
    #[serde(default)]
    pub v4: Vec<WireAddress>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireAddress {
    pub ip_address: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl From<WireDroplet> for DropletRecord {
    fn from(d: WireDroplet) -> Self {
        DropletRecord {
            id: d.id,
            name: d.name,
            status: DropletStatus::from_wire(&d.status),
            region: d.region.and_then(|r| r.slug),
            size: d.size_slug,
            image: d.image.and_then(|i| i.slug),
            ipv4: d
                .networks
                .v4
                .into_iter()
                .map(|a| NetworkAddress {
                    ip_address: a.ip_address,
                    kind: a.kind,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateDroplet<'a> {
    pub name: &'a str,
    pub region: &'a str,
    pub size: &'a str,
    pub image: &'a str,
    pub ssh_keys: &'a [u64],
    pub backups: bool,
    pub ipv6: bool,
    pub monitoring: bool,
    pub user_data: &'a str,
}

impl<'a> From<&'a DropletSpec> for CreateDroplet<'a> {
    fn from(spec: &'a DropletSpec) -> Self {
        CreateDroplet {
            name: &spec.name,
            region: &spec.region,
            size: &spec.size,
            image: &spec.image,
            ssh_keys: &spec.ssh_key_ids,
            backups: spec.backups,
            ipv6: spec.ipv6,
            monitoring: spec.monitoring,
            user_data: &spec.user_data,
        }
    }
}
