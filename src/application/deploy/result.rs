//! Deploy Result

use crate::domain::entities::DeploymentAttempt;
use crate::error::LaunchpadError;

/// Result of a deploy operation
#[derive(Debug)]
pub struct DeployResult {
    /// Outcome of every step that ran, in order
    pub attempt: DeploymentAttempt,
    /// Subject of the commit made for pending changes, if any
    pub committed: Option<String>,
    /// Remote output (capture mode only)
    pub remote_output: Option<String>,
    /// The error that stopped the run
    pub failure: Option<LaunchpadError>,
}

impl DeployResult {
    pub fn new() -> Self {
        Self {
            attempt: DeploymentAttempt::new(),
            committed: None,
            remote_output: None,
            failure: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none() && self.attempt.exit_code() == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.failure.is_some() {
            1
        } else {
            self.attempt.exit_code()
        }
    }
}

impl Default for DeployResult {
    fn default() -> Self {
        Self::new()
    }
}
