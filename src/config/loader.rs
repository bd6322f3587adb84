//! Configuration loading
//!
//! Resolution order (first hit wins, then environment overrides apply):
//! 1. `--config <path>` (must exist)
//! 2. `./launchpad.toml`
//! 3. `<config dir>/launchpad/config.toml`
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::HostKeyPolicy;
use crate::error::{LaunchpadError, LaunchpadResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "launchpad.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> LaunchpadResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LaunchpadError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LaunchpadError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(base) = path.parent() {
        resolve_relative_paths(&mut config, base);
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a run.
///
/// `explicit` comes from `--config`; `user_config_dir` is normally
/// `dirs::config_dir()` and is a parameter so tests can isolate it.
pub fn load_layered(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> LaunchpadResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(LaunchpadError::config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            let user = user_config_dir.map(|d| d.join("launchpad").join("config.toml"));
            if project.exists() {
                Some(project)
            } else {
                user.filter(|p| p.exists())
            }
        }
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(path)?
        }
        None => {
            debug!("no configuration file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: candidate,
        warnings,
    })
}

/// Apply environment variable overrides (LAUNCHPAD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(host) = get_env("LAUNCHPAD_HOST") {
        config.target.host = host;
    }
    if let Some(user) = get_env("LAUNCHPAD_USER") {
        config.target.user = user;
    }
    if let Some(path) = get_env("LAUNCHPAD_DEPLOY_PATH") {
        config.target.deploy_path = path;
    }
    if let Some(service) = get_env("LAUNCHPAD_SERVICE") {
        config.target.service = service;
    }
    if let Some(identity) = get_env("LAUNCHPAD_IDENTITY_FILE") {
        config.target.identity_file = PathBuf::from(identity);
    }
    if let Some(policy) = get_env("LAUNCHPAD_HOST_KEY_CHECKING") {
        match HostKeyPolicy::parse(&policy) {
            Some(parsed) => config.target.host_key_checking = parsed,
            None => warn!(
                value = %policy,
                "ignoring invalid LAUNCHPAD_HOST_KEY_CHECKING (expected no, accept-new or yes)"
            ),
        }
    }
    if let Some(region) = get_env("LAUNCHPAD_REGION") {
        config.droplet.region = region;
    }
    if let Some(size) = get_env("LAUNCHPAD_SIZE") {
        config.droplet.size = size;
    }
    if let Some(image) = get_env("LAUNCHPAD_IMAGE") {
        config.droplet.image = image;
    }

    config
}

fn resolve_relative_paths(config: &mut Config, base: &Path) {
    let resolve = |p: &Path| -> PathBuf {
        if p.as_os_str().is_empty() || p.is_absolute() {
            return p.to_path_buf();
        }
        if let Ok(rest) = p.strip_prefix("~") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
            return p.to_path_buf();
        }
        base.join(p)
    };

    config.target.identity_file = resolve(&config.target.identity_file);
    config.target.public_key_file = config.target.public_key_file.as_deref().map(&resolve);
    config.provider.env_file = config.provider.env_file.as_deref().map(&resolve);
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "target",
        "host",
        "user",
        "deploy_path",
        "service",
        "identity_file",
        "public_key_file",
        "host_key_checking",
        "connect_timeout_secs",
        "session_timeout_secs",
        "restart_grace_secs",
        "status_lines",
        "use_sudo",
        "url",
        "git",
        "commit_footer",
        "provider",
        "api_base",
        "token_env",
        "env_file",
        "key_name_prefix",
        "poll_interval_secs",
        "poll_timeout_secs",
        "request_timeout_secs",
        "public_ip_url",
        "droplet",
        "name",
        "region",
        "size",
        "image",
        "backups",
        "ipv6",
        "monitoring",
        "bootstrap",
        "node_major",
        "deploy_user",
        "repository",
        "restrict_ssh_to_operator",
        "certbot_email",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
