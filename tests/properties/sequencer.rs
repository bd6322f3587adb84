//! Property tests for deploy step ordering.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use launchpad::domain::entities::{DeployScriptSpec, RemoteCommand, RepositoryState};
use launchpad::domain::ports::{
    DeployEvent, DeployEventSink, NonInteractivePrompt, RemoteOutput, RemoteShell, RemoteTarget,
    VersionControl,
};
use launchpad::domain::value_objects::CommitMessage;
use launchpad::{DeployOptions, DeployUseCase, LaunchpadError, LaunchpadResult};

type Log = Rc<RefCell<Vec<&'static str>>>;

struct ScriptedVcs {
    dirty: bool,
    stage_fails: bool,
    commit_fails: bool,
    push_fails: bool,
    log: Log,
}

impl VersionControl for ScriptedVcs {
    fn status(&self) -> LaunchpadResult<RepositoryState> {
        self.log.borrow_mut().push("status");
        if self.dirty {
            Ok(RepositoryState::with_changes(vec![" M app.js".to_string()]))
        } else {
            Ok(RepositoryState::clean())
        }
    }

    fn stage_all(&self) -> LaunchpadResult<()> {
        self.log.borrow_mut().push("stage");
        if self.stage_fails {
            return Err(LaunchpadError::Stage {
                message: "index.lock exists".to_string(),
            });
        }
        Ok(())
    }

    fn commit(&self, _message: &CommitMessage) -> LaunchpadResult<()> {
        self.log.borrow_mut().push("commit");
        if self.commit_fails {
            return Err(LaunchpadError::Commit {
                message: "nothing to commit".to_string(),
            });
        }
        Ok(())
    }

    fn push(&self) -> LaunchpadResult<()> {
        self.log.borrow_mut().push("push");
        if self.push_fails {
            return Err(LaunchpadError::Push {
                message: "rejected".to_string(),
            });
        }
        Ok(())
    }
}

struct ScriptedShell {
    exit_code: Option<i32>,
    log: Log,
}

impl RemoteShell for ScriptedShell {
    fn execute(
        &self,
        _target: &RemoteTarget,
        _command: &RemoteCommand,
    ) -> LaunchpadResult<RemoteOutput> {
        self.log.borrow_mut().push("remote");
        Ok(RemoteOutput {
            exit_code: self.exit_code,
            captured: None,
        })
    }
}

#[derive(Default)]
struct CompletionSink {
    completed: Mutex<bool>,
}

impl DeployEventSink for CompletionSink {
    fn on_event(&self, event: DeployEvent) {
        if let DeployEvent::Completed { .. } = event {
            *self.completed.lock().unwrap() = true;
        }
    }
}

fn options(message: Option<String>) -> DeployOptions {
    DeployOptions::new(
        RemoteTarget {
            host: "app.example.com".to_string(),
            user: "root".to_string(),
            identity_file: PathBuf::from("id_test"),
        },
        DeployScriptSpec {
            deploy_path: "/srv/app".to_string(),
            service: "app".to_string(),
            restart_grace_secs: 3,
            status_lines: 15,
            use_sudo: false,
        },
    )
    .with_message(message)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Steps run in order, nothing runs after a failure, and the
    /// run succeeds only when every step did.
    #[test]
    fn property_first_failure_ends_the_run(
        dirty in any::<bool>(),
        has_message in any::<bool>(),
        stage_fails in any::<bool>(),
        commit_fails in any::<bool>(),
        push_fails in any::<bool>(),
        remote_exit in prop_oneof![Just(Some(0)), (1i32..255).prop_map(Some), Just(None)],
    ) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let use_case = DeployUseCase::new(
            ScriptedVcs { dirty, stage_fails, commit_fails, push_fails, log: log.clone() },
            ScriptedShell { exit_code: remote_exit, log: log.clone() },
            Box::new(NonInteractivePrompt),
        );
        let sink = Arc::new(CompletionSink::default());
        let message = if has_message { Some("Ship it".to_string()) } else { None };

        let result = use_case.execute_with_events(&options(message), sink.clone());
        let log = log.borrow().clone();

        let attempts_commit = dirty && has_message;
        let commit_ok = !dirty || (has_message && !stage_fails && !commit_fails);
        let push_ok = commit_ok && !push_fails;
        let all_ok = push_ok && remote_exit == Some(0);

        let mut expected = vec!["status"];
        if attempts_commit {
            expected.push("stage");
            if !stage_fails {
                expected.push("commit");
            }
        }
        if commit_ok {
            expected.push("push");
        }
        if push_ok {
            expected.push("remote");
        }

        prop_assert_eq!(log, expected);
        prop_assert_eq!(result.is_success(), all_ok);
        prop_assert_eq!(result.exit_code(), if all_ok { 0 } else { 1 });
        prop_assert_eq!(*sink.completed.lock().unwrap(), all_ok);
        prop_assert_eq!(result.failure.is_none(), all_ok);
    }
}
