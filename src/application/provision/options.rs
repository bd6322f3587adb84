//! Provision Options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::{BootstrapSpec, PollPolicy, SshAccess};

/// Options for the provision use case
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
    pub backups: bool,
    pub ipv6: bool,
    pub monitoring: bool,
    /// Domain the app will be served on (reported, never configured)
    pub domain: String,
    /// Reserved name prefix for the reusable SSH key record
    pub key_name_prefix: String,
    /// Read only when no reusable key record exists
    pub public_key_path: PathBuf,
    /// User-data inputs; `ssh_access` is decided during preflight
    pub bootstrap: BootstrapSpec,
    /// Limit ssh to the operator's public IP
    pub restrict_ssh_to_operator: bool,
    pub poll: PollPolicy,
    /// `--yes`: skip the summary confirmation
    pub auto_confirm: bool,
    /// `--allow-duplicate`: create even if a droplet with this name exists
    pub allow_duplicate: bool,
}

impl ProvisionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.droplet.name.clone(),
            region: config.droplet.region.clone(),
            size: config.droplet.size.clone(),
            image: config.droplet.image.clone(),
            backups: config.droplet.backups,
            ipv6: config.droplet.ipv6,
            monitoring: config.droplet.monitoring,
            domain: config.target.host.clone(),
            key_name_prefix: config.provider.key_name_prefix.clone(),
            public_key_path: config.public_key_path(),
            bootstrap: config.bootstrap_spec(SshAccess::Anywhere),
            restrict_ssh_to_operator: config.bootstrap.restrict_ssh_to_operator,
            poll: config.poll_policy(),
            auto_confirm: false,
            allow_duplicate: false,
        }
    }

    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    pub fn with_allow_duplicate(mut self, allow_duplicate: bool) -> Self {
        self.allow_duplicate = allow_duplicate;
        self
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_restrict_ssh(mut self, restrict: bool) -> Self {
        self.restrict_ssh_to_operator = restrict;
        self
    }
}
