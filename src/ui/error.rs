use launchpad::LaunchpadError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

fn format_launchpad_error(
    err: &LaunchpadError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = ErrorBlock::new(err.category().as_str(), err.to_string());

    match err {
        LaunchpadError::ConfigParse { file, .. } => block = block.with_file(file),
        LaunchpadError::KeyFile { path, .. } => block = block.with_file(path),
        _ => {}
    }

    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }

    block.render(supports_color, supports_unicode)
}

fn fix_hint(err: &LaunchpadError) -> Option<String> {
    let hint = match err {
        LaunchpadError::DirtyTree { .. } => {
            "Commit your changes, or pass --message \"...\" to commit them as part of the deploy."
                .to_string()
        }
        LaunchpadError::CommitDeclined => {
            "Commit or stash your changes, then deploy again.".to_string()
        }
        LaunchpadError::Push { .. } => {
            "Check that the branch has an upstream (git push -u origin <branch>) and is not behind it."
                .to_string()
        }
        LaunchpadError::RemoteSpawn { .. } => {
            "Install the OpenSSH client (ssh) and make sure it is on PATH.".to_string()
        }
        LaunchpadError::RemoteFailed { .. } => {
            "The output above comes from the host. Fix the failing step there and deploy again."
                .to_string()
        }
        LaunchpadError::RemoteTimeout { .. } => {
            "Raise target.session_timeout_secs, or check whether the host is reachable.".to_string()
        }
        LaunchpadError::MissingToken { env_var } => format!(
            "export {}=<token>, or set provider.env_file to a dotenv file that defines it.",
            env_var
        ),
        LaunchpadError::Unauthorized { .. } => {
            "Generate a new API token with read and write scope.".to_string()
        }
        LaunchpadError::DuplicateInstance { .. } => {
            "Pick another droplet.name, or pass --allow-duplicate.".to_string()
        }
        LaunchpadError::PollTimeout { .. } => {
            "Check the droplet in the control panel. Raise provider.poll_timeout_secs if it is slow to boot."
                .to_string()
        }
        LaunchpadError::KeyFile { .. } => {
            "Set target.public_key_file, or create the key pair with ssh-keygen.".to_string()
        }
        LaunchpadError::Prompt { .. } => {
            "Run from an interactive terminal, or pass --yes (and --message for deploys).".to_string()
        }
        LaunchpadError::Config { .. } | LaunchpadError::ConfigParse { .. } => {
            "Run `launchpad init` for a commented template.".to_string()
        }
        _ => return None,
    };
    Some(hint)
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    if let Some(launchpad) = err.downcast_ref::<LaunchpadError>() {
        return format_launchpad_error(launchpad, ui.color, ui.unicode);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let category = err
            .downcast_ref::<LaunchpadError>()
            .map(|e| e.category().as_str());
        let output = serde_json::json!({
            "event": "error",
            "category": category,
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui));
}
