//! Push Gate
//!
//! Publishes the current branch to its upstream. Plain `git push` only: no
//! fetch, rebase or force fallback. Callers run it after the guard.

use crate::domain::ports::{DeployEvent, DeployEventSink, VersionControl};
use crate::error::LaunchpadResult;

pub struct PushGate<'a, VC: VersionControl> {
    vcs: &'a VC,
}

impl<'a, VC: VersionControl> PushGate<'a, VC> {
    pub fn new(vcs: &'a VC) -> Self {
        Self { vcs }
    }

    pub fn publish(&self, sink: &dyn DeployEventSink) -> LaunchpadResult<()> {
        sink.on_event(DeployEvent::PushStarted);
        self.vcs.push()?;
        sink.on_event(DeployEvent::Pushed);
        Ok(())
    }
}
