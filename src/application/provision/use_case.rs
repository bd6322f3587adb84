//! Provision Use Case
//!
//! Strictly sequential:
//! 0. Preflight: operator IP (when ssh is restricted), confirmation
//! 1. Ensure a reusable SSH key record exists
//! 2. Create the droplet with the bootstrap script as user-data
//! 3. Poll until the droplet is active and has an address
//!
//! Any error ends the run. Nothing is retried and nothing created is ever
//! deleted.

use std::fs;
use std::net::Ipv4Addr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{
    find_reserved, reserved_key_name, DropletSpec, DropletStatus, SshKeyRecord,
};
use crate::domain::ports::{
    CloudProvider, NoopProvisionSink, OperatorPrompt, ProvisionEvent, ProvisionEventSink,
    ProvisionStage, PublicIpResolver, Sleeper,
};
use crate::domain::value_objects::{BootstrapScript, PollPolicy, SshAccess};
use crate::error::{LaunchpadError, LaunchpadResult};

use super::options::ProvisionOptions;
use super::result::ProvisionResult;

/// Provision use case - orchestrates droplet creation
pub struct ProvisionUseCase<CP>
where
    CP: CloudProvider,
{
    provider: CP,
    ip_resolver: Box<dyn PublicIpResolver>,
    prompt: Box<dyn OperatorPrompt>,
    sleeper: Box<dyn Sleeper>,
}

impl<CP> ProvisionUseCase<CP>
where
    CP: CloudProvider,
{
    pub fn new(
        provider: CP,
        ip_resolver: Box<dyn PublicIpResolver>,
        prompt: Box<dyn OperatorPrompt>,
        sleeper: Box<dyn Sleeper>,
    ) -> Self {
        Self {
            provider,
            ip_resolver,
            prompt,
            sleeper,
        }
    }

    /// Execute the provision use case
    pub fn execute(&self, options: &ProvisionOptions) -> LaunchpadResult<ProvisionResult> {
        self.execute_with_events(options, Arc::new(NoopProvisionSink))
    }

    /// Execute the provision use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &ProvisionOptions,
        event_sink: Arc<dyn ProvisionEventSink>,
    ) -> LaunchpadResult<ProvisionResult> {
        let sink = event_sink.as_ref();

        sink.on_event(ProvisionEvent::Started {
            name: options.name.clone(),
            region: options.region.clone(),
            size: options.size.clone(),
            image: options.image.clone(),
            domain: options.domain.clone(),
        });

        let ssh_access = staged(sink, ProvisionStage::Preflight, self.preflight(options, sink))?;

        let (key, key_created) = staged(
            sink,
            ProvisionStage::EnsureKey,
            self.ensure_ssh_key(options, sink),
        )?;

        let droplet_id = staged(
            sink,
            ProvisionStage::CreateInstance,
            self.create_droplet(options, key.id, ssh_access, sink),
        )?;

        let (ip, poll_attempts) = staged(
            sink,
            ProvisionStage::WaitActive,
            self.wait_until_active(droplet_id, &options.poll, sink),
        )?;

        sink.on_event(ProvisionEvent::Completed {
            ip: ip.clone(),
            domain: options.domain.clone(),
        });

        Ok(ProvisionResult {
            key,
            key_created,
            droplet_id,
            ip,
            domain: options.domain.clone(),
            operator_ip: match ssh_access {
                SshAccess::OnlyFrom(ip) => Some(ip),
                SshAccess::Anywhere => None,
            },
            poll_attempts,
        })
    }

    fn preflight(
        &self,
        options: &ProvisionOptions,
        sink: &dyn ProvisionEventSink,
    ) -> LaunchpadResult<SshAccess> {
        let ssh_access = if options.restrict_ssh_to_operator {
            let ip = self.operator_ip()?;
            sink.on_event(ProvisionEvent::OperatorIp { ip: ip.to_string() });
            SshAccess::OnlyFrom(ip)
        } else {
            SshAccess::Anywhere
        };

        if !options.auto_confirm {
            let question = format!(
                "Create droplet '{}' ({}, {}, {})?",
                options.name, options.region, options.size, options.image
            );
            if !self.prompt.confirm(&question, true)? {
                return Err(LaunchpadError::ProvisionDeclined);
            }
        }

        Ok(ssh_access)
    }

    fn operator_ip(&self) -> LaunchpadResult<Ipv4Addr> {
        let err = match self.ip_resolver.resolve() {
            Ok(ip) => return Ok(ip),
            Err(e) => e,
        };

        warn!(error = %err, "could not detect public IP");
        if !self.prompt.can_prompt() {
            return Err(err);
        }

        let answer = self.prompt.input("Enter your public IP address")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(LaunchpadError::config(
                "a public IP is required when bootstrap.restrict_ssh_to_operator is set",
            ));
        }
        answer.parse::<Ipv4Addr>().map_err(|_| {
            LaunchpadError::config(format!("'{}' is not an IPv4 address", answer))
        })
    }

    /// Reuse the reserved key record, or register the local public key.
    ///
    /// Safe to run repeatedly: once a record with the reserved prefix exists
    /// it is always returned and nothing new is created.
    pub fn ensure_ssh_key(
        &self,
        options: &ProvisionOptions,
        sink: &dyn ProvisionEventSink,
    ) -> LaunchpadResult<(SshKeyRecord, bool)> {
        let keys = self.provider.list_ssh_keys()?;
        if let Some(existing) = find_reserved(&keys, &options.key_name_prefix) {
            info!(id = existing.id, name = %existing.name, "reusing SSH key");
            sink.on_event(ProvisionEvent::KeyReused {
                id: existing.id,
                name: existing.name.clone(),
            });
            return Ok((existing.clone(), false));
        }

        let public_key = fs::read_to_string(&options.public_key_path).map_err(|source| {
            LaunchpadError::KeyFile {
                path: options.public_key_path.clone(),
                source,
            }
        })?;

        let name = reserved_key_name(&options.key_name_prefix, chrono::Utc::now().timestamp());
        let created = self.provider.create_ssh_key(&name, public_key.trim())?;
        info!(id = created.id, name = %created.name, "created SSH key");
        sink.on_event(ProvisionEvent::KeyCreated {
            id: created.id,
            name: created.name.clone(),
        });
        Ok((created, true))
    }

    fn create_droplet(
        &self,
        options: &ProvisionOptions,
        key_id: u64,
        ssh_access: SshAccess,
        sink: &dyn ProvisionEventSink,
    ) -> LaunchpadResult<u64> {
        if !options.allow_duplicate {
            let existing = self.provider.find_droplets_by_name(&options.name)?;
            if let Some(droplet) = existing.first() {
                return Err(LaunchpadError::DuplicateInstance {
                    name: options.name.clone(),
                    id: droplet.id,
                });
            }
        }

        let mut bootstrap = options.bootstrap.clone();
        bootstrap.ssh_access = ssh_access;

        let spec = DropletSpec {
            name: options.name.clone(),
            region: options.region.clone(),
            size: options.size.clone(),
            image: options.image.clone(),
            ssh_key_ids: vec![key_id],
            user_data: BootstrapScript::render(&bootstrap).as_str().to_string(),
            backups: options.backups,
            ipv6: options.ipv6,
            monitoring: options.monitoring,
        };

        let droplet = self.provider.create_droplet(&spec)?;
        info!(id = droplet.id, "droplet created");
        sink.on_event(ProvisionEvent::DropletCreated { id: droplet.id });
        Ok(droplet.id)
    }

    /// Poll until `active`, returning the first IPv4 address and the number
    /// of queries made.
    ///
    /// Stops at the first active status, on a terminal failure status, or
    /// once `policy` runs out of attempts.
    pub fn wait_until_active(
        &self,
        id: u64,
        policy: &PollPolicy,
        sink: &dyn ProvisionEventSink,
    ) -> LaunchpadResult<(String, u64)> {
        let max_attempts = policy.max_attempts();
        let mut last_status = DropletStatus::New;

        for attempt in 1..=max_attempts {
            let droplet = self.provider.get_droplet(id)?;

            if droplet.status.is_active() {
                let ip = droplet
                    .first_ipv4()
                    .ok_or(LaunchpadError::MissingAddress { id })?
                    .to_string();
                sink.on_event(ProvisionEvent::DropletActive { id, ip: ip.clone() });
                return Ok((ip, attempt));
            }

            if droplet.status.is_terminal_failure() {
                return Err(LaunchpadError::InstanceFailed {
                    id,
                    status: droplet.status.to_string(),
                });
            }

            sink.on_event(ProvisionEvent::StatusPolled {
                attempt,
                status: droplet.status.clone(),
            });
            last_status = droplet.status;

            if attempt < max_attempts {
                self.sleeper.sleep(policy.interval);
            }
        }

        Err(LaunchpadError::PollTimeout {
            id,
            seconds: policy.timeout.as_secs(),
            last_status: last_status.to_string(),
        })
    }
}

/// Emit `StageFailed` for an error before handing it back
fn staged<T>(
    sink: &dyn ProvisionEventSink,
    stage: ProvisionStage,
    result: LaunchpadResult<T>,
) -> LaunchpadResult<T> {
    if let Err(e) = &result {
        sink.on_event(ProvisionEvent::StageFailed {
            stage,
            error: e.to_string(),
        });
    }
    result
}
