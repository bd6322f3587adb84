//! Init command - write a commented launchpad.toml

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use launchpad::config::PROJECT_CONFIG_FILE;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

const TEMPLATE: &str = r#"# Launchpad configuration
#
# Lookup order: --config <path>, ./launchpad.toml, then
# <config dir>/launchpad/config.toml. LAUNCHPAD_HOST, LAUNCHPAD_USER,
# LAUNCHPAD_DEPLOY_PATH, LAUNCHPAD_SERVICE, LAUNCHPAD_IDENTITY_FILE,
# LAUNCHPAD_REGION, LAUNCHPAD_SIZE and LAUNCHPAD_IMAGE override the file.

[target]
# Host the app runs on; also the public domain
host = "app.example.com"
user = "root"
# Checkout on the host where `git pull` runs
deploy_path = "/home/deploy/app"
# systemd unit restarted after the pull
service = "app"
# Private key for ssh; relative paths resolve against this file
identity_file = "~/.ssh/id_ed25519"
# public_key_file = "~/.ssh/id_ed25519.pub"
# no | accept-new | yes
host_key_checking = "no"
connect_timeout_secs = 15
session_timeout_secs = 300
restart_grace_secs = 3
status_lines = 15
# use_sudo = true
# url = "https://app.example.com"

[git]
commit_footer = "Deployed with launchpad"

[provider]
# The API token is read from this variable, never from this file
token_env = "DO_API_TOKEN"
# env_file = ".env"
key_name_prefix = "launchpad-deploy-key"
poll_interval_secs = 5
poll_timeout_secs = 600
request_timeout_secs = 30

[droplet]
name = "app"
region = "nyc1"
size = "s-1vcpu-512mb-10gb"
image = "ubuntu-22-04-x64"
backups = false
ipv6 = true
monitoring = true

[bootstrap]
node_major = 20
deploy_user = "deploy"
# Cloned into target.deploy_path on first boot
# repository = "https://github.com/example/app.git"
restrict_ssh_to_operator = false
# certbot_email = "ops@example.com"
"#;

pub fn cmd_init(path: &Path, force: bool, ui: &UiContext) -> Result<()> {
    let file = path.join(PROJECT_CONFIG_FILE);

    if file.exists() && !force {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "error",
                "command": "init",
                "kind": "already_exists",
                "path": file.display().to_string(),
                "message": "launchpad.toml already exists",
            }));
        }
        bail!(
            "{} already exists. Use --force to overwrite.",
            file.display()
        );
    }

    fs::create_dir_all(path).with_context(|| format!("cannot create {}", path.display()))?;
    fs::write(&file, TEMPLATE).with_context(|| format!("cannot write {}", file.display()))?;

    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": file.display().to_string(),
        }));
    } else {
        println!(
            "{} Created {}",
            Icon::Success.colored(ui.color, ui.unicode),
            file.display()
        );
        println!();
        println!(
            "{} Next: edit [target] and [droplet], then run `launchpad provision` or `launchpad deploy`",
            Icon::Arrow.colored(ui.color, ui.unicode)
        );
    }

    Ok(())
}
