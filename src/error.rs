//! Error types for Launchpad
//!
//! Uses `thiserror` for library errors. The binary wraps these in
//! `anyhow::Error` at the command boundary and downcasts for rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Launchpad operations
pub type LaunchpadResult<T> = Result<T, LaunchpadError>;

/// Coarse grouping of errors, used for rendering and JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    LocalState,
    VcsOperation,
    RemoteExecution,
    ProvisionerAuth,
    ProvisionerApi,
    ProvisionerIo,
    Config,
    Interrupted,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::LocalState => "local_state",
            ErrorCategory::VcsOperation => "vcs_operation",
            ErrorCategory::RemoteExecution => "remote_execution",
            ErrorCategory::ProvisionerAuth => "provisioner_auth",
            ErrorCategory::ProvisionerApi => "provisioner_api",
            ErrorCategory::ProvisionerIo => "provisioner_io",
            ErrorCategory::Config => "config",
            ErrorCategory::Interrupted => "interrupted",
        }
    }
}

/// Main error type for Launchpad operations
#[derive(Error, Debug)]
pub enum LaunchpadError {
    /// Working tree has changes and no way to ask the operator about them
    #[error("working tree has {count} uncommitted change(s)")]
    DirtyTree { count: usize },

    /// Operator declined to commit pending changes
    #[error("deployment cancelled - commit your changes first")]
    CommitDeclined,

    /// Operator declined the droplet summary
    #[error("provisioning cancelled")]
    ProvisionDeclined,

    /// Operator supplied an empty commit message
    #[error("commit message must not be empty")]
    EmptyCommitMessage,

    #[error("failed to query repository status: {message}")]
    StatusQuery { message: String },

    #[error("failed to stage changes: {message}")]
    Stage { message: String },

    #[error("failed to commit changes: {message}")]
    Commit { message: String },

    #[error("failed to push to upstream: {message}")]
    Push { message: String },

    /// Could not start the ssh client at all
    #[error("failed to open remote session to {host}: {message}")]
    RemoteSpawn { host: String, message: String },

    /// Composite remote script exited non-zero
    #[error("remote command on {host} failed{}", exit_suffix(.exit_code))]
    RemoteFailed { host: String, exit_code: Option<i32> },

    #[error("remote command on {host} timed out after {seconds}s")]
    RemoteTimeout { host: String, seconds: u64 },

    /// API token not found in the environment
    #[error("missing API token: set {env_var} (or add it to the configured env file)")]
    MissingToken { env_var: String },

    /// Provider rejected the token
    #[error("API token rejected by provider: {body}")]
    Unauthorized { body: String },

    /// Any non-success provider response
    #[error("{action} failed with HTTP {status}: {body}")]
    Api {
        action: String,
        status: u16,
        body: String,
    },

    #[error("{action} failed: {message}")]
    Transport { action: String, message: String },

    #[error("droplet {id} entered terminal status '{status}'")]
    InstanceFailed { id: u64, status: String },

    #[error("droplet {id} did not become active within {seconds}s (last status '{last_status}')")]
    PollTimeout {
        id: u64,
        seconds: u64,
        last_status: String,
    },

    #[error("droplet {id} is active but has no IPv4 address")]
    MissingAddress { id: u64 },

    #[error("a droplet named '{name}' already exists (id {id}); pass --allow-duplicate to create another")]
    DuplicateInstance { name: String, id: u64 },

    /// Public key file missing or unreadable
    #[error("cannot read key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Operator prompt could not be shown or read
    #[error("prompt failed: {message}")]
    Prompt { message: String },

    #[error("cancelled by user")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl LaunchpadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LaunchpadError::DirtyTree { .. }
            | LaunchpadError::CommitDeclined
            | LaunchpadError::ProvisionDeclined
            | LaunchpadError::EmptyCommitMessage => ErrorCategory::LocalState,
            LaunchpadError::StatusQuery { .. }
            | LaunchpadError::Stage { .. }
            | LaunchpadError::Commit { .. }
            | LaunchpadError::Push { .. } => ErrorCategory::VcsOperation,
            LaunchpadError::RemoteSpawn { .. }
            | LaunchpadError::RemoteFailed { .. }
            | LaunchpadError::RemoteTimeout { .. } => ErrorCategory::RemoteExecution,
            LaunchpadError::MissingToken { .. } | LaunchpadError::Unauthorized { .. } => {
                ErrorCategory::ProvisionerAuth
            }
            LaunchpadError::Api { .. }
            | LaunchpadError::Transport { .. }
            | LaunchpadError::InstanceFailed { .. }
            | LaunchpadError::PollTimeout { .. }
            | LaunchpadError::MissingAddress { .. }
            | LaunchpadError::DuplicateInstance { .. } => ErrorCategory::ProvisionerApi,
            LaunchpadError::KeyFile { .. } | LaunchpadError::Io(_) => ErrorCategory::ProvisionerIo,
            LaunchpadError::Config { .. }
            | LaunchpadError::ConfigParse { .. }
            | LaunchpadError::Prompt { .. } => ErrorCategory::Config,
            LaunchpadError::Interrupted => ErrorCategory::Interrupted,
        }
    }

    /// Map a prompt failure, keeping Ctrl+C distinct from other IO errors
    pub fn from_prompt(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            LaunchpadError::Interrupted
        } else {
            LaunchpadError::Prompt {
                message: err.to_string(),
            }
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        LaunchpadError::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_remote_failed() {
        let err = LaunchpadError::RemoteFailed {
            host: "app.example.com".to_string(),
            exit_code: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "remote command on app.example.com failed with exit code 3"
        );
    }

    #[test]
    fn test_error_display_remote_killed_by_signal() {
        let err = LaunchpadError::RemoteFailed {
            host: "h".to_string(),
            exit_code: None,
        };
        assert!(err.to_string().ends_with("(terminated by signal)"));
    }

    #[test]
    fn test_error_display_api_carries_body() {
        let err = LaunchpadError::Api {
            action: "create droplet".to_string(),
            status: 422,
            body: r#"{"id":"unprocessable_entity"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"create droplet failed with HTTP 422: {"id":"unprocessable_entity"}"#
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            LaunchpadError::CommitDeclined.category(),
            ErrorCategory::LocalState
        );
        assert_eq!(
            LaunchpadError::Push {
                message: "rejected".into()
            }
            .category(),
            ErrorCategory::VcsOperation
        );
        assert_eq!(
            LaunchpadError::MissingToken {
                env_var: "DO_API_TOKEN".into()
            }
            .category(),
            ErrorCategory::ProvisionerAuth
        );
        assert_eq!(
            LaunchpadError::KeyFile {
                path: PathBuf::from("id.pub"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .category(),
            ErrorCategory::ProvisionerIo
        );
    }

    #[test]
    fn test_prompt_interrupt_maps_to_interrupted() {
        let err = LaunchpadError::from_prompt(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(err, LaunchpadError::Interrupted));

        let err = LaunchpadError::from_prompt(std::io::Error::other("not a terminal"));
        assert!(matches!(err, LaunchpadError::Prompt { .. }));
    }
}
