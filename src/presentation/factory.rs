//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::time::Duration;

use is_terminal::IsTerminal;

use crate::application::{DeployUseCase, ProvisionUseCase};
use crate::config::{ApiToken, Config};
use crate::domain::ports::{NonInteractivePrompt, OperatorPrompt, ThreadSleeper};
use crate::error::LaunchpadResult;
use crate::infrastructure::{
    DigitalOceanClient, GitCli, InteractivePrompt, IpifyResolver, OutputMode, SshOptions,
    SshShell,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<GitCli, SshShell>;

/// Type alias for the concrete ProvisionUseCase with all dependencies
pub type ConcreteProvisionUseCase = ProvisionUseCase<DigitalOceanClient>;

/// Create a deploy use case with all dependencies wired up
///
/// `mode` decides whether remote output streams to the terminal or is
/// captured for JSON output.
pub fn create_deploy_use_case(config: &Config, mode: OutputMode) -> ConcreteDeployUseCase {
    let options = SshOptions {
        host_key_policy: config.target.host_key_checking,
        connect_timeout: Duration::from_secs(config.target.connect_timeout_secs),
        session_timeout: Duration::from_secs(config.target.session_timeout_secs),
    };

    DeployUseCase::new(GitCli::new(), SshShell::new(options, mode), operator_prompt())
}

/// Create a provision use case talking to the configured API
pub fn create_provision_use_case(
    config: &Config,
    token: ApiToken,
) -> LaunchpadResult<ConcreteProvisionUseCase> {
    let timeout = Duration::from_secs(config.provider.request_timeout_secs);
    let client = DigitalOceanClient::new(config.provider.api_base.clone(), token, timeout)?;
    let resolver = IpifyResolver::new(config.provider.public_ip_url.clone(), timeout);

    Ok(ProvisionUseCase::new(
        client,
        Box::new(resolver),
        operator_prompt(),
        Box::new(ThreadSleeper),
    ))
}

/// Dialoguer prompts when stdin is a terminal, otherwise a prompt that refuses
fn operator_prompt() -> Box<dyn OperatorPrompt> {
    if std::io::stdin().is_terminal() {
        Box::new(InteractivePrompt::new())
    } else {
        Box::new(NonInteractivePrompt)
    }
}
