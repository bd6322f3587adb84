//! Deploy command - push and restart on the target host

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use launchpad::domain::ports::DeployEventSink;
use launchpad::infrastructure::{JsonEventSink, OutputMode};
use launchpad::presentation::create_deploy_use_case;
use launchpad::DeployOptions;
use tracing::info;

use crate::ui::context::UiContext;
use crate::ui::views::deploy::ConsoleDeploySink;

pub fn cmd_deploy(
    config_path: Option<&Path>,
    yes: bool,
    message: Option<String>,
    ui: &UiContext,
) -> Result<()> {
    let config = super::load_config(config_path, ui)?;
    config.validate_for_deploy()?;

    // Captured output is needed to put it into JSON events.
    let mode = if ui.json {
        OutputMode::Capture
    } else {
        OutputMode::Stream
    };
    let use_case = create_deploy_use_case(&config, mode);

    let options = DeployOptions::from_config(&config)
        .with_auto_confirm(yes)
        .with_message(message);

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleDeploySink::stdout(*ui))
    };

    let result = use_case.execute_with_events(&options, sink);
    if let Some(failure) = result.failure {
        return Err(failure.into());
    }
    if !result.is_success() {
        bail!("deploy did not complete");
    }

    info!(url = %options.site_url, "deploy complete");
    Ok(())
}
