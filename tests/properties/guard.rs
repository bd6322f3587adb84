//! Property tests for the working tree guard.

use std::cell::RefCell;

use proptest::prelude::*;

use launchpad::application::{CommitPolicy, WorkingTreeGuard};
use launchpad::domain::entities::RepositoryState;
use launchpad::domain::ports::{NonInteractivePrompt, NoopEventSink, VersionControl};
use launchpad::domain::value_objects::CommitMessage;
use launchpad::{LaunchpadError, LaunchpadResult};

#[derive(Default)]
struct RecordingVcs {
    state: RepositoryState,
    committed: RefCell<Vec<String>>,
    staged: RefCell<u32>,
}

impl VersionControl for RecordingVcs {
    fn status(&self) -> LaunchpadResult<RepositoryState> {
        Ok(self.state.clone())
    }

    fn stage_all(&self) -> LaunchpadResult<()> {
        *self.staged.borrow_mut() += 1;
        Ok(())
    }

    fn commit(&self, message: &CommitMessage) -> LaunchpadResult<()> {
        self.committed.borrow_mut().push(message.as_str().to_string());
        Ok(())
    }

    fn push(&self) -> LaunchpadResult<()> {
        Ok(())
    }
}

fn porcelain_line() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(" M"), Just("M "), Just("A "), Just(" D"), Just("??")],
        "[a-z][a-z0-9_/]{0,20}\\.[a-z]{1,3}",
    )
        .prop_map(|(code, path)| format!("{} {}", code, path))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every non-blank porcelain line is listed, but only tracked
    /// paths make the tree dirty.
    #[test]
    fn property_porcelain_counts_changes(
        lines in proptest::collection::vec(porcelain_line(), 0..10),
    ) {
        let output = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        let state = RepositoryState::from_porcelain(&output);
        let untracked_only = lines.iter().all(|l| l.starts_with("??"));
        prop_assert_eq!(state.changes().len(), lines.len());
        prop_assert_eq!(state.is_clean(), untracked_only);
        prop_assert_eq!(state.has_uncommitted_changes(), !untracked_only);
    }

    /// PROPERTY: Without a terminal or a message, a dirty tree is never
    /// committed and the abort reports every change.
    #[test]
    fn property_no_terminal_never_commits(
        lines in proptest::collection::vec(porcelain_line(), 1..10),
        auto_confirm in any::<bool>(),
    ) {
        let vcs = RecordingVcs {
            state: RepositoryState::with_changes(lines.clone()),
            ..RecordingVcs::default()
        };
        let prompt = NonInteractivePrompt;
        let guard = WorkingTreeGuard::new(&vcs, &prompt);
        let policy = CommitPolicy::new("Deployed with launchpad").with_auto_confirm(auto_confirm);

        let state = guard.inspect(&NoopEventSink).unwrap();
        let err = guard.commit_pending(&state, &policy, &NoopEventSink).unwrap_err();

        match err {
            LaunchpadError::DirtyTree { count } => prop_assert_eq!(count, lines.len()),
            other => prop_assert!(false, "expected DirtyTree, got {:?}", other),
        }
        prop_assert_eq!(*vcs.staged.borrow(), 0);
        prop_assert!(vcs.committed.borrow().is_empty());
    }

    /// PROPERTY: A supplied message commits exactly once, subject first and
    /// footer last.
    #[test]
    fn property_message_commits_once_with_footer(
        lines in proptest::collection::vec(porcelain_line(), 1..10),
        subject in "[A-Za-z][A-Za-z0-9 ]{0,40}",
        padding in "[ \t]{0,3}",
    ) {
        let vcs = RecordingVcs {
            state: RepositoryState::with_changes(lines),
            ..RecordingVcs::default()
        };
        let prompt = NonInteractivePrompt;
        let guard = WorkingTreeGuard::new(&vcs, &prompt);
        let policy = CommitPolicy::new("Deployed with launchpad")
            .with_message(Some(format!("{}{}{}", padding, subject, padding)));

        let state = guard.inspect(&NoopEventSink).unwrap();
        let committed = guard.commit_pending(&state, &policy, &NoopEventSink).unwrap();

        prop_assert_eq!(&committed, subject.trim());
        prop_assert_eq!(*vcs.staged.borrow(), 1);
        let messages = vcs.committed.borrow();
        prop_assert_eq!(messages.len(), 1);
        prop_assert!(messages[0].starts_with(subject.trim()));
        prop_assert!(messages[0].ends_with("\n\nDeployed with launchpad"));
    }
}
