//! Deploy Options

use crate::application::guard::CommitPolicy;
use crate::config::Config;
use crate::domain::entities::DeployScriptSpec;
use crate::domain::ports::RemoteTarget;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Host and identity for the remote session
    pub target: RemoteTarget,
    /// Values rendered into the composite remote script
    pub script: DeployScriptSpec,
    /// How a dirty working tree may be committed
    pub commit: CommitPolicy,
    /// Printed after every step succeeded
    pub site_url: String,
}

impl DeployOptions {
    pub fn new(target: RemoteTarget, script: DeployScriptSpec) -> Self {
        let site_url = format!("https://{}", target.host);
        Self {
            target,
            script,
            commit: CommitPolicy::default(),
            site_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.remote_target(), config.deploy_script_spec())
            .with_commit_policy(CommitPolicy::new(config.git.commit_footer.clone()))
            .with_site_url(config.site_url())
    }

    pub fn with_commit_policy(mut self, commit: CommitPolicy) -> Self {
        self.commit = commit;
        self
    }

    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.commit.auto_confirm = auto_confirm;
        self
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.commit.message = message;
        self
    }

    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }
}
