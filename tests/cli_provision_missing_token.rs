mod common;

use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_provision_without_token_fails_before_any_request() {
    let dir = tempdir().unwrap();
    // An unroutable API base; reaching it would be a bug.
    let config = common::write_config(
        dir.path(),
        &format!(
            "{}\n[provider]\napi_base = \"http://127.0.0.1:9\"\n",
            common::DEPLOY_CONFIG
        ),
    );

    let output = common::launchpad(dir.path(), dir.path())
        .args(["provision", "--yes", "--config", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("DO_API_TOKEN"),
        "error should name the token variable; got:\n{}",
        stderr
    );
    assert!(!stderr.contains("HTTP"), "got:\n{}", stderr);
}

#[test]
fn test_provision_blank_token_is_missing_in_json_mode() {
    let dir = tempdir().unwrap();
    let config = common::write_config(dir.path(), common::DEPLOY_CONFIG);

    let output = common::launchpad(dir.path(), dir.path())
        .env("DO_API_TOKEN", "   ")
        .args(["provision", "--json", "--config", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["category"], "provisioner_auth");
}

#[test]
fn test_provision_requires_droplet_name() {
    let dir = tempdir().unwrap();
    let config = common::write_config(dir.path(), "[target]\nidentity_file = \"id_test\"\n");

    let output = common::launchpad(dir.path(), dir.path())
        .env("DO_API_TOKEN", "dop_v1_test")
        .args(["provision", "--config", config.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("droplet.name"), "got:\n{}", stderr);
}
