//! Provision command - create and boot a droplet

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use launchpad::config::resolve_api_token;
use launchpad::domain::ports::ProvisionEventSink;
use launchpad::infrastructure::JsonProvisionSink;
use launchpad::presentation::create_provision_use_case;
use launchpad::ProvisionOptions;
use tracing::info;

use crate::ui::context::UiContext;
use crate::ui::views::provision::ConsoleProvisionSink;

pub fn cmd_provision(
    config_path: Option<&Path>,
    yes: bool,
    allow_duplicate: bool,
    ui: &UiContext,
) -> Result<()> {
    let config = super::load_config(config_path, ui)?;
    config.validate_for_provision()?;

    // No API call is made without a token.
    let token = resolve_api_token(&config.provider)?;
    let use_case = create_provision_use_case(&config, token)?;

    let options = ProvisionOptions::from_config(&config)
        .with_auto_confirm(yes)
        .with_allow_duplicate(allow_duplicate);

    let sink: Arc<dyn ProvisionEventSink> = if ui.json {
        Arc::new(JsonProvisionSink::stdout())
    } else {
        Arc::new(ConsoleProvisionSink::stdout(
            *ui,
            config.bootstrap.certbot_email.clone(),
        ))
    };

    let result = use_case.execute_with_events(&options, sink)?;
    info!(
        droplet_id = result.droplet_id,
        ip = %result.ip,
        key_created = result.key_created,
        "provisioning complete"
    );
    Ok(())
}
