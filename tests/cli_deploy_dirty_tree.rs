mod common;

use std::fs;

use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_dirty_tree_without_terminal_aborts_before_push() {
    let repo = common::committed_repo();
    fs::write(repo.path().join("README.md"), "# app\n\nwip\n").unwrap();
    let home = tempdir().unwrap();
    let config = common::write_config(home.path(), common::DEPLOY_CONFIG);

    let output = common::launchpad(repo.path(), home.path())
        .args(["deploy", "--config", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("README.md"), "got:\n{}", stdout);
    assert!(!stdout.contains("Pushing"), "got:\n{}", stdout);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("uncommitted change"), "got:\n{}", stderr);

    // Nothing was committed on the operator's behalf.
    let status = std::process::Command::new("git")
        .current_dir(repo.path())
        .args(["status", "--porcelain"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&status.stdout).contains(" M README.md"));
}

#[test]
fn test_message_flag_commits_with_footer_then_stops_at_push() {
    let repo = common::committed_repo();
    fs::write(repo.path().join("README.md"), "# app\n\nwip\n").unwrap();
    common::git(repo.path(), &["config", "user.name", "Launchpad Test"]);
    common::git(repo.path(), &["config", "user.email", "test@example.com"]);
    let home = tempdir().unwrap();
    let config = common::write_config(home.path(), common::DEPLOY_CONFIG);

    let output = common::launchpad(repo.path(), home.path())
        .args([
            "deploy",
            "--json",
            "--message",
            "Update readme",
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<String> = stdout
        .lines()
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .filter_map(|e| e["event"].as_str().map(str::to_string))
        .collect();
    assert_eq!(
        names,
        ["start", "tree_dirty", "committed", "push_start", "step_failed", "error"],
        "got:\n{}",
        stdout
    );

    let log = std::process::Command::new("git")
        .current_dir(repo.path())
        .args(["log", "-1", "--format=%B"])
        .output()
        .unwrap();
    let body = String::from_utf8_lossy(&log.stdout);
    assert!(body.starts_with("Update readme\n\nDeployed with launchpad"), "got:\n{}", body);
}
