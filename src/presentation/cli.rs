//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Launchpad - deploy a web app to its host, or create the host
#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./launchpad.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push local commits and restart the service on the target host
    Deploy {
        /// Commit pending changes without asking (a message is still required)
        #[arg(short, long)]
        yes: bool,

        /// Commit message for pending changes (implies --yes)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Create a DigitalOcean droplet ready to receive deploys
    Provision {
        /// Skip the summary confirmation
        #[arg(short, long)]
        yes: bool,

        /// Create the droplet even if one with the same name exists
        #[arg(long)]
        allow_duplicate: bool,
    },

    /// Write a commented launchpad.toml template
    Init {
        /// Directory to write launchpad.toml into
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing launchpad.toml
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["launchpad"]).is_err());
    }

    #[test]
    fn test_cli_parse_deploy() {
        let cli = Cli::try_parse_from(["launchpad", "deploy"]).unwrap();
        if let Commands::Deploy { yes, message } = cli.command {
            assert!(!yes);
            assert!(message.is_none());
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_deploy_with_message() {
        let cli =
            Cli::try_parse_from(["launchpad", "deploy", "-y", "-m", "Fix header"]).unwrap();
        if let Commands::Deploy { yes, message } = cli.command {
            assert!(yes);
            assert_eq!(message.as_deref(), Some("Fix header"));
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_provision_flags() {
        let cli =
            Cli::try_parse_from(["launchpad", "provision", "--yes", "--allow-duplicate"]).unwrap();
        if let Commands::Provision {
            yes,
            allow_duplicate,
        } = cli.command
        {
            assert!(yes);
            assert!(allow_duplicate);
        } else {
            panic!("Expected Provision command");
        }
    }

    #[test]
    fn test_cli_parse_init_defaults() {
        let cli = Cli::try_parse_from(["launchpad", "init"]).unwrap();
        if let Commands::Init { path, force } = cli.command {
            assert_eq!(path, PathBuf::from("."));
            assert!(!force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "launchpad",
            "deploy",
            "--json",
            "--color",
            "never",
            "-vv",
            "--config",
            "ops/launchpad.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ops/launchpad.toml")));
    }

    #[test]
    fn test_invalid_color_value_rejected() {
        assert!(Cli::try_parse_from(["launchpad", "deploy", "--color", "sometimes"]).is_err());
    }
}
