//! Deploy Use Case
//!
//! Orchestrates the deploy flow:
//! 1. Check the working tree (commit pending changes if the operator agrees)
//! 2. Push to the upstream
//! 3. Run the composite remote script (pull, restart, status) in one session
//!
//! Strictly sequential. The first failing step ends the run; later steps
//! are never attempted.

use std::sync::Arc;

use tracing::info;

use crate::application::guard::WorkingTreeGuard;
use crate::application::push_gate::PushGate;
use crate::domain::entities::{DeployStep, RemoteCommand};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, OperatorPrompt, RemoteShell, VersionControl,
};
use crate::error::LaunchpadError;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case - orchestrates the deploy flow
///
/// Parameterized by its ports so tests can drive it with fakes.
pub struct DeployUseCase<VC, RS>
where
    VC: VersionControl,
    RS: RemoteShell,
{
    vcs: VC,
    shell: RS,
    prompt: Box<dyn OperatorPrompt>,
}

impl<VC, RS> DeployUseCase<VC, RS>
where
    VC: VersionControl,
    RS: RemoteShell,
{
    pub fn new(vcs: VC, shell: RS, prompt: Box<dyn OperatorPrompt>) -> Self {
        Self { vcs, shell, prompt }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> DeployResult {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult {
        let sink = event_sink.as_ref();
        let mut result = DeployResult::new();

        sink.on_event(DeployEvent::Started {
            destination: options.target.destination(),
            deploy_path: options.script.deploy_path.clone(),
            service: options.script.service.clone(),
        });

        let guard = WorkingTreeGuard::new(&self.vcs, self.prompt.as_ref());

        let state = match guard.inspect(sink) {
            Ok(state) => state,
            Err(e) => return fail(result, DeployStep::CheckClean, e, sink),
        };
        result.attempt.succeeded(DeployStep::CheckClean);

        if state.has_uncommitted_changes() {
            match guard.commit_pending(&state, &options.commit, sink) {
                Ok(subject) => {
                    info!(subject = %subject, "committed pending changes");
                    result.attempt.succeeded(DeployStep::Commit);
                    result.committed = Some(subject);
                }
                Err(e) => return fail(result, DeployStep::Commit, e, sink),
            }
        }

        if let Err(e) = PushGate::new(&self.vcs).publish(sink) {
            return fail(result, DeployStep::Push, e, sink);
        }
        result.attempt.succeeded(DeployStep::Push);
        info!("pushed to upstream");

        let command = RemoteCommand::deploy_script(&options.script);
        sink.on_event(DeployEvent::RemoteStarted {
            destination: options.target.destination(),
        });

        let output = match self.shell.execute(&options.target, &command) {
            Ok(output) => output,
            Err(e) => return fail(result, DeployStep::RemoteScript, e, sink),
        };

        if let Some(captured) = &output.captured {
            sink.on_event(DeployEvent::RemoteOutput {
                output: captured.clone(),
            });
        }
        result.remote_output = output.captured.clone();

        if !output.success() {
            let err = LaunchpadError::RemoteFailed {
                host: options.target.host.clone(),
                exit_code: output.exit_code,
            };
            return fail(result, DeployStep::RemoteScript, err, sink);
        }

        result.attempt.succeeded(DeployStep::RemoteScript);
        sink.on_event(DeployEvent::RemoteSucceeded);
        sink.on_event(DeployEvent::Completed {
            url: options.site_url.clone(),
        });

        result
    }
}

fn fail(
    mut result: DeployResult,
    step: DeployStep,
    error: LaunchpadError,
    sink: &dyn DeployEventSink,
) -> DeployResult {
    info!(step = step.as_str(), error = %error, "deploy step failed");
    result.attempt.failed(step);
    sink.on_event(DeployEvent::StepFailed {
        step,
        error: error.to_string(),
    });
    result.failure = Some(error);
    result
}
