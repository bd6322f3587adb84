//! Git CLI adapter
//!
//! Implements the VersionControl port by shelling out to `git` in the
//! working directory. Output is captured so `--json` stdout stays clean.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::domain::entities::RepositoryState;
use crate::domain::ports::VersionControl;
use crate::domain::value_objects::CommitMessage;
use crate::error::{LaunchpadError, LaunchpadResult};

pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Run git in the current directory
    pub fn new() -> Self {
        Self::in_dir(".")
    }

    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!(args = ?args, workdir = %self.workdir.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            // output is captured, so a credential prompt would hang
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Best human-readable reason from a failed git invocation
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    match output.status.code() {
        Some(code) => format!("git exited with status {}", code),
        None => "git was terminated by a signal".to_string(),
    }
}

impl VersionControl for GitCli {
    fn status(&self) -> LaunchpadResult<RepositoryState> {
        let output = self
            .run(&["status", "--porcelain"])
            .map_err(|e| LaunchpadError::StatusQuery {
                message: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(LaunchpadError::StatusQuery {
                message: failure_message(&output),
            });
        }
        Ok(RepositoryState::from_porcelain(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    fn stage_all(&self) -> LaunchpadResult<()> {
        let output = self.run(&["add", "-A"]).map_err(|e| LaunchpadError::Stage {
            message: e.to_string(),
        })?;
        if !output.status.success() {
            return Err(LaunchpadError::Stage {
                message: failure_message(&output),
            });
        }
        Ok(())
    }

    fn commit(&self, message: &CommitMessage) -> LaunchpadResult<()> {
        let output = self
            .run(&["commit", "-m", message.as_str()])
            .map_err(|e| LaunchpadError::Commit {
                message: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(LaunchpadError::Commit {
                message: failure_message(&output),
            });
        }
        Ok(())
    }

    fn push(&self) -> LaunchpadResult<()> {
        let output = self.run(&["push"]).map_err(|e| LaunchpadError::Push {
            message: e.to_string(),
        })?;
        if !output.status.success() {
            return Err(LaunchpadError::Push {
                message: failure_message(&output),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn git(dir: &std::path::Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn untracked_files_are_listed_but_leave_tree_clean() {
        let dir = tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        fs::write(dir.path().join("app.js"), "v1").unwrap();
        git(dir.path(), &["add", "-A"]);
        git(dir.path(), &["commit", "-q", "-m", "init"]);

        let vcs = GitCli::in_dir(dir.path());
        assert!(vcs.status().unwrap().is_clean());

        fs::write(dir.path().join("scratch.log"), "noise").unwrap();
        let state = vcs.status().unwrap();
        assert!(state.is_clean());
        assert_eq!(state.changes(), &["?? scratch.log"]);

        fs::write(dir.path().join("app.js"), "v2").unwrap();
        let state = vcs.status().unwrap();
        assert!(state.has_uncommitted_changes());
        assert_eq!(state.changes(), &[" M app.js", "?? scratch.log"]);
    }

    #[test]
    fn status_outside_repository_is_error() {
        let dir = tempdir().unwrap();
        let err = GitCli::in_dir(dir.path()).status().unwrap_err();
        assert!(matches!(err, LaunchpadError::StatusQuery { .. }));
    }

    #[test]
    fn push_without_upstream_fails() {
        let dir = tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        git(dir.path(), &["add", "-A"]);
        git(dir.path(), &["commit", "-q", "-m", "init"]);

        let err = GitCli::in_dir(dir.path()).push().unwrap_err();
        assert!(matches!(err, LaunchpadError::Push { .. }));
    }
}
