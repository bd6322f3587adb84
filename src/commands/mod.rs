//! Subcommand implementations
//!
//! Each command returns `anyhow::Result`; library errors pass through
//! unchanged so `ui::error` can downcast them.

pub mod deploy;
pub mod init;
pub mod provision;

use std::path::Path;

use anyhow::{Context, Result};
use launchpad::config::{load_layered, ConfigWarning};
use launchpad::Config;
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Resolve configuration for this run and report unknown keys on stderr
pub(crate) fn load_config(explicit: Option<&Path>, ui: &UiContext) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let user_dir = dirs::config_dir();
    let loaded = load_layered(explicit, &cwd, user_dir.as_deref())?;

    if let Some(source) = &loaded.source {
        debug!(path = %source.display(), "configuration loaded");
    }
    for warning in &loaded.warnings {
        eprintln!("{}", format_config_warning(warning, ui));
    }

    Ok(loaded.config)
}

fn format_config_warning(warning: &ConfigWarning, ui: &UiContext) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = format!("unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }

    format!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(text).render(ui.color)
    )
}
