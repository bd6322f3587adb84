//! Version-Control State Guard
//!
//! Inspects the working tree and, when it is dirty, mediates the
//! commit-all-or-abort decision. Nothing here pushes.

use crate::domain::entities::RepositoryState;
use crate::domain::ports::{DeployEvent, DeployEventSink, OperatorPrompt, VersionControl};
use crate::domain::value_objects::CommitMessage;
use crate::error::{LaunchpadError, LaunchpadResult};

/// How a dirty tree may be committed without asking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPolicy {
    /// `--yes`: skip the yes/no question (a message is still required)
    pub auto_confirm: bool,
    /// `--message`: commit with this subject; implies consent
    pub message: Option<String>,
    /// Appended after a blank line to every commit
    pub footer: String,
}

impl CommitPolicy {
    pub fn new(footer: impl Into<String>) -> Self {
        Self {
            auto_confirm: false,
            message: None,
            footer: footer.into(),
        }
    }

    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

pub struct WorkingTreeGuard<'a, VC: VersionControl> {
    vcs: &'a VC,
    prompt: &'a dyn OperatorPrompt,
}

impl<'a, VC: VersionControl> WorkingTreeGuard<'a, VC> {
    pub fn new(vcs: &'a VC, prompt: &'a dyn OperatorPrompt) -> Self {
        Self { vcs, prompt }
    }

    /// The clean check: `is_clean()` on the returned state is true when no
    /// tracked path differs from HEAD. Emits `TreeClean`, or `TreeDirty`
    /// with every listed path (untracked ones included).
    pub fn inspect(&self, sink: &dyn DeployEventSink) -> LaunchpadResult<RepositoryState> {
        let state = self.vcs.status()?;
        if state.is_clean() {
            sink.on_event(DeployEvent::TreeClean);
        } else {
            sink.on_event(DeployEvent::TreeDirty {
                changes: state.changes().to_vec(),
            });
        }
        Ok(state)
    }

    /// Commit every pending change, or fail.
    ///
    /// Returns the subject line that was committed. Consent and the message
    /// come from `policy` first and from the operator otherwise; without a
    /// terminal the tree stays dirty and the run aborts.
    pub fn commit_pending(
        &self,
        state: &RepositoryState,
        policy: &CommitPolicy,
        sink: &dyn DeployEventSink,
    ) -> LaunchpadResult<String> {
        let dirty = || LaunchpadError::DirtyTree {
            count: state.changes().len(),
        };

        let subject = match &policy.message {
            Some(message) => message.clone(),
            None => {
                if !self.prompt.can_prompt() {
                    return Err(dirty());
                }
                if !policy.auto_confirm
                    && !self
                        .prompt
                        .confirm("Commit all changes and continue with deployment?", false)?
                {
                    return Err(LaunchpadError::CommitDeclined);
                }
                self.prompt.input("Commit message")?
            }
        };

        let message = CommitMessage::with_footer(&subject, &policy.footer)?;
        self.vcs.stage_all()?;
        self.vcs.commit(&message)?;

        let subject = subject.trim().to_string();
        sink.on_event(DeployEvent::Committed {
            subject: subject.clone(),
        });
        Ok(subject)
    }
}
