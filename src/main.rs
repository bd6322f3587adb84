//! Launchpad CLI
//!
//! Usage: launchpad [--json] [--color <WHEN>] [-v...] [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   deploy     Push local commits and restart the service on the host
//!   provision  Create a DigitalOcean droplet ready to receive deploys
//!   init       Write a commented launchpad.toml template

mod commands;
mod ui;

use clap::Parser;
use launchpad::presentation::{Cli, Commands};
use tracing_subscriber::EnvFilter;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\ncancelled by user");
        std::process::exit(1);
    }) {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Deploy { yes, message } => {
            commands::deploy::cmd_deploy(config, yes, message, &ui)
        }
        Commands::Provision {
            yes,
            allow_duplicate,
        } => commands::provision::cmd_provision(config, yes, allow_duplicate, &ui),
        Commands::Init { path, force } => commands::init::cmd_init(&path, force, &ui),
    };

    if let Err(e) = result {
        ui::error::print_error(&e, &ui);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
