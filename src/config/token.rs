//! Provider API token
//!
//! Read once, before any provider call. The token is never printed; its
//! `Debug` output is redacted.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{LaunchpadError, LaunchpadResult};

use super::types::ProviderConfig;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Load the configured dotenv file (if any) and read the token variable.
pub fn resolve_api_token(provider: &ProviderConfig) -> LaunchpadResult<ApiToken> {
    if let Some(env_file) = &provider.env_file {
        let _ = load_env_file(env_file);
    }
    token_from(&provider.token_env, |key| std::env::var(key).ok())
}

/// Variables already set in the process environment take precedence.
///
/// A missing file is silent; one that exists but cannot be read or parsed
/// is logged as a warning and handed back.
pub(crate) fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "env file not found");
            Ok(())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load env file");
            Err(e)
        }
    }
}

pub(crate) fn token_from(
    env_var: &str,
    get_env: impl Fn(&str) -> Option<String>,
) -> LaunchpadResult<ApiToken> {
    match get_env(env_var) {
        Some(token) if !token.trim().is_empty() => Ok(ApiToken::new(token.trim())),
        _ => Err(LaunchpadError::MissingToken {
            env_var: env_var.to_string(),
        }),
    }
}
