//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeployScriptSpec;
use crate::domain::ports::RemoteTarget;
use crate::domain::value_objects::{BootstrapSpec, HostKeyPolicy, PollPolicy, SshAccess};
use crate::error::{LaunchpadError, LaunchpadResult};

use super::loader::{self, ConfigWarning};

/// Deploy target host and service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Host name (also the public domain of the app)
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_user")]
    pub user: String,

    /// Checkout on the host that `git pull` runs in
    #[serde(default)]
    pub deploy_path: String,

    /// systemd unit to restart
    #[serde(default)]
    pub service: String,

    /// Private key for ssh; the public key defaults to `<identity_file>.pub`
    #[serde(default)]
    pub identity_file: PathBuf,

    #[serde(default)]
    pub public_key_file: Option<PathBuf>,

    #[serde(default)]
    pub host_key_checking: HostKeyPolicy,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u64,

    #[serde(default = "default_restart_grace")]
    pub restart_grace_secs: u64,

    #[serde(default = "default_status_lines")]
    pub status_lines: u32,

    /// Run systemctl through sudo (for a non-root remote user)
    #[serde(default)]
    pub use_sudo: bool,

    /// URL printed after a successful deploy (defaults to `https://<host>`)
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            user: default_user(),
            deploy_path: String::new(),
            service: String::new(),
            identity_file: PathBuf::new(),
            public_key_file: None,
            host_key_checking: HostKeyPolicy::default(),
            connect_timeout_secs: default_connect_timeout(),
            session_timeout_secs: default_session_timeout(),
            restart_grace_secs: default_restart_grace(),
            status_lines: default_status_lines(),
            use_sudo: false,
            url: None,
        }
    }
}

fn default_user() -> String {
    "root".to_string()
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_session_timeout() -> u64 {
    300
}

fn default_restart_grace() -> u64 {
    3
}

fn default_status_lines() -> u32 {
    15
}

/// Local git behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Appended after a blank line to commits made by the deploy flow
    #[serde(default = "default_commit_footer")]
    pub commit_footer: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            commit_footer: default_commit_footer(),
        }
    }
}

fn default_commit_footer() -> String {
    "Deployed with launchpad".to_string()
}

/// Cloud provider API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Dotenv file loaded before the token lookup
    #[serde(default)]
    pub env_file: Option<PathBuf>,

    /// Reserved name prefix for Launchpad's SSH key record
    #[serde(default = "default_key_name_prefix")]
    pub key_name_prefix: String,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Plain-text "what is my IP" endpoint
    #[serde(default = "default_public_ip_url")]
    pub public_ip_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token_env: default_token_env(),
            env_file: None,
            key_name_prefix: default_key_name_prefix(),
            poll_interval_secs: default_poll_interval(),
            poll_timeout_secs: default_poll_timeout(),
            request_timeout_secs: default_request_timeout(),
            public_ip_url: default_public_ip_url(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.digitalocean.com/v2".to_string()
}

fn default_token_env() -> String {
    "DO_API_TOKEN".to_string()
}

fn default_key_name_prefix() -> String {
    "launchpad-deploy-key".to_string()
}

fn default_poll_interval() -> u64 {
    5
}

fn default_poll_timeout() -> u64 {
    600
}

fn default_request_timeout() -> u64 {
    30
}

fn default_public_ip_url() -> String {
    "https://api.ipify.org".to_string()
}

/// Droplet to create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_size")]
    pub size: String,

    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default)]
    pub backups: bool,

    #[serde(default = "default_true")]
    pub ipv6: bool,

    #[serde(default = "default_true")]
    pub monitoring: bool,
}

impl Default for DropletConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            region: default_region(),
            size: default_size(),
            image: default_image(),
            backups: false,
            ipv6: true,
            monitoring: true,
        }
    }
}

fn default_region() -> String {
    "nyc1".to_string()
}

fn default_size() -> String {
    "s-1vcpu-512mb-10gb".to_string()
}

fn default_image() -> String {
    "ubuntu-22-04-x64".to_string()
}

fn default_true() -> bool {
    true
}

/// First-boot script options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_node_major")]
    pub node_major: u16,

    #[serde(default = "default_deploy_user")]
    pub deploy_user: String,

    /// Repository cloned into `target.deploy_path` on first boot
    #[serde(default)]
    pub repository: Option<String>,

    /// Only allow ssh from the operator's current public IP
    #[serde(default)]
    pub restrict_ssh_to_operator: bool,

    /// Contact address for certificate issuance (shown in next steps)
    #[serde(default)]
    pub certbot_email: Option<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            node_major: default_node_major(),
            deploy_user: default_deploy_user(),
            repository: None,
            restrict_ssh_to_operator: false,
            certbot_email: None,
        }
    }
}

fn default_node_major() -> u16 {
    20
}

fn default_deploy_user() -> String {
    "deploy".to_string()
}

/// Main configuration struct
///
/// Loaded once at startup and passed explicitly; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub droplet: DropletConfig,

    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LaunchpadResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LaunchpadResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Check the fields the deploy flow needs
    pub fn validate_for_deploy(&self) -> LaunchpadResult<()> {
        require("target.host", &self.target.host)?;
        require("target.deploy_path", &self.target.deploy_path)?;
        require("target.service", &self.target.service)?;
        require_path("target.identity_file", &self.target.identity_file)?;
        if self.target.status_lines == 0 {
            return Err(LaunchpadError::config("target.status_lines must be at least 1"));
        }
        Ok(())
    }

    /// Check the fields the provision flow needs
    pub fn validate_for_provision(&self) -> LaunchpadResult<()> {
        require("droplet.name", &self.droplet.name)?;
        require("droplet.region", &self.droplet.region)?;
        require("droplet.size", &self.droplet.size)?;
        require("droplet.image", &self.droplet.image)?;
        require("provider.key_name_prefix", &self.provider.key_name_prefix)?;
        require("provider.token_env", &self.provider.token_env)?;
        if self.target.public_key_file.is_none() {
            require_path("target.identity_file", &self.target.identity_file)?;
        }
        if self.bootstrap.repository.is_some() {
            require("target.deploy_path", &self.target.deploy_path)?;
        }
        if !is_valid_user_name(&self.bootstrap.deploy_user) {
            return Err(LaunchpadError::config(format!(
                "bootstrap.deploy_user '{}' must match [a-z_][a-z0-9_-]*",
                self.bootstrap.deploy_user
            )));
        }
        Ok(())
    }

    pub fn remote_target(&self) -> RemoteTarget {
        RemoteTarget {
            host: self.target.host.clone(),
            user: self.target.user.clone(),
            identity_file: self.target.identity_file.clone(),
        }
    }

    pub fn deploy_script_spec(&self) -> DeployScriptSpec {
        DeployScriptSpec {
            deploy_path: self.target.deploy_path.clone(),
            service: self.target.service.clone(),
            restart_grace_secs: self.target.restart_grace_secs,
            status_lines: self.target.status_lines,
            use_sudo: self.target.use_sudo,
        }
    }

    /// Public key uploaded to the provider
    pub fn public_key_path(&self) -> PathBuf {
        match &self.target.public_key_file {
            Some(path) => path.clone(),
            None => {
                let mut os = self.target.identity_file.clone().into_os_string();
                os.push(".pub");
                PathBuf::from(os)
            }
        }
    }

    pub fn site_url(&self) -> String {
        match &self.target.url {
            Some(url) => url.clone(),
            None => format!("https://{}", self.target.host),
        }
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            Duration::from_secs(self.provider.poll_interval_secs),
            Duration::from_secs(self.provider.poll_timeout_secs),
        )
    }

    pub fn bootstrap_spec(&self, ssh_access: SshAccess) -> BootstrapSpec {
        BootstrapSpec {
            node_major: self.bootstrap.node_major,
            deploy_user: self.bootstrap.deploy_user.clone(),
            deploy_path: self.target.deploy_path.clone(),
            repository: self.bootstrap.repository.clone(),
            ssh_access,
        }
    }
}

fn require(key: &str, value: &str) -> LaunchpadResult<()> {
    if value.trim().is_empty() {
        return Err(LaunchpadError::config(format!("{} is not set", key)));
    }
    Ok(())
}

/// `[a-z_][a-z0-9_-]*`, at most 32 characters
fn is_valid_user_name(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_');
    first_ok
        && name.len() <= 32
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

fn require_path(key: &str, value: &Path) -> LaunchpadResult<()> {
    if value.as_os_str().is_empty() {
        return Err(LaunchpadError::config(format!("{} is not set", key)));
    }
    Ok(())
}
