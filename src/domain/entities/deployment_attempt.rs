//! Ordered outcome log for one deploy run

use std::fmt;

/// Steps of the deploy flow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    CheckClean,
    Commit,
    Push,
    /// Pull, restart and status query, run as one composite script
    RemoteScript,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::CheckClean => "check_clean",
            DeployStep::Commit => "commit",
            DeployStep::Push => "push",
            DeployStep::RemoteScript => "remote",
        }
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: DeployStep,
    pub outcome: StepOutcome,
}

/// Outcome log; only used to decide whether to continue and the exit code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentAttempt {
    steps: Vec<StepRecord>,
}

impl DeploymentAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: DeployStep, outcome: StepOutcome) {
        self.steps.push(StepRecord { step, outcome });
    }

    pub fn succeeded(&mut self, step: DeployStep) {
        self.record(step, StepOutcome::Succeeded);
    }

    pub fn failed(&mut self, step: DeployStep) {
        self.record(step, StepOutcome::Failed);
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn has_failure(&self) -> bool {
        self.steps.iter().any(|s| s.outcome == StepOutcome::Failed)
    }

    /// Whether `step` ran and succeeded
    pub fn completed(&self, step: DeployStep) -> bool {
        self.steps
            .iter()
            .any(|s| s.step == step && s.outcome == StepOutcome::Succeeded)
    }

    /// Whether `step` was attempted at all
    pub fn attempted(&self, step: DeployStep) -> bool {
        self.steps.iter().any(|s| s.step == step)
    }

    /// Process exit code for this attempt: 0 only when the remote script succeeded
    pub fn exit_code(&self) -> i32 {
        if !self.has_failure() && self.completed(DeployStep::RemoteScript) {
            0
        } else {
            1
        }
    }
}
