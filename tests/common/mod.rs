#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Minimal deploy/provision configuration; the identity file is never read
/// by the scenarios that use it.
pub const DEPLOY_CONFIG: &str = r#"
[target]
host = "app.example.com"
deploy_path = "/srv/app"
service = "app"
identity_file = "id_test"

[droplet]
name = "app-test"
"#;

pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args(["-c", "user.name=Launchpad Test", "-c", "user.email=test@example.com"])
        .args(args)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

/// Repository with one commit and no remote
pub fn committed_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"]);
    fs::write(dir.path().join("README.md"), "# app\n").unwrap();
    git(dir.path(), &["add", "-A"]);
    git(dir.path(), &["commit", "-q", "-m", "init"]);
    dir
}

/// Config written outside the repository so it never dirties the tree
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("launchpad.toml");
    fs::write(&path, body).unwrap();
    path
}

/// The binary with an isolated home and no inherited token
pub fn launchpad(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_launchpad"));
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("NO_COLOR", "1")
        .env_remove("DO_API_TOKEN")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}
