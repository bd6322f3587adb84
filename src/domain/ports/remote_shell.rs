//! Remote Shell Port
//!
//! One authenticated session per call; no pooling.

use std::path::PathBuf;

use crate::domain::entities::RemoteCommand;
use crate::error::LaunchpadResult;

/// Where and as whom to run a remote command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub host: String,
    pub user: String,
    /// Private key passed to `ssh -i`
    pub identity_file: PathBuf,
}

impl RemoteTarget {
    /// `user@host`, or just `host` when no user is configured
    pub fn destination(&self) -> String {
        if self.user.is_empty() {
            self.host.clone()
        } else {
            format!("{}@{}", self.user, self.host)
        }
    }
}

/// Exit status and, in capture mode, the verbatim output of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    pub exit_code: Option<i32>,
    pub captured: Option<String>,
}

impl RemoteOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait RemoteShell {
    /// Run `command` on `target`.
    ///
    /// A non-zero remote exit is reported through `RemoteOutput`, not as an
    /// error; errors mean the session could not be opened or timed out.
    fn execute(&self, target: &RemoteTarget, command: &RemoteCommand)
        -> LaunchpadResult<RemoteOutput>;
}
