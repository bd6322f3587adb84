//! Composite remote script: pull, restart, status
//!
//! The three remote effects run in a single ssh session under `set -e`, so
//! the first failing step aborts the rest and its exit status becomes the
//! session's exit status.

use crate::domain::value_objects::shell_quote;

/// Parameters for the deploy script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployScriptSpec {
    pub deploy_path: String,
    pub service: String,
    /// Seconds to wait between restart and status query
    pub restart_grace_secs: u64,
    /// Lines of `systemctl status` output to keep
    pub status_lines: u32,
    /// Prefix systemctl calls with sudo (non-root remote user)
    pub use_sudo: bool,
}

/// Immutable, fully rendered command string for one remote session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    script: String,
}

impl RemoteCommand {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn deploy_script(spec: &DeployScriptSpec) -> Self {
        let path = shell_quote(&spec.deploy_path);
        let service = shell_quote(&spec.service);
        let systemctl = if spec.use_sudo {
            "sudo systemctl"
        } else {
            "systemctl"
        };

        let lines = [
            "set -e".to_string(),
            "echo \"Pulling latest code...\"".to_string(),
            format!("cd {}", path),
            "git pull".to_string(),
            String::new(),
            "echo \"\"".to_string(),
            "echo \"Restarting service...\"".to_string(),
            format!("{} restart {}", systemctl, service),
            String::new(),
            "echo \"\"".to_string(),
            "echo \"Waiting for service to start...\"".to_string(),
            format!("sleep {}", spec.restart_grace_secs),
            String::new(),
            "echo \"\"".to_string(),
            "echo \"Service status:\"".to_string(),
            format!(
                "{} status {} --no-pager | head -{}",
                systemctl, service, spec.status_lines
            ),
        ];

        Self::new(lines.join("\n"))
    }

    pub fn script(&self) -> &str {
        &self.script
    }
}
