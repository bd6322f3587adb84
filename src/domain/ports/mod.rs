//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cloud_provider;
pub mod deploy_events;
pub mod operator_prompt;
pub mod provision_events;
pub mod public_ip;
pub mod remote_shell;
pub mod sleeper;
pub mod version_control;

pub use cloud_provider::CloudProvider;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use operator_prompt::{NonInteractivePrompt, OperatorPrompt};
pub use provision_events::{NoopProvisionSink, ProvisionEvent, ProvisionEventSink, ProvisionStage};
pub use public_ip::PublicIpResolver;
pub use remote_shell::{RemoteOutput, RemoteShell, RemoteTarget};
pub use sleeper::{NoopSleeper, Sleeper, ThreadSleeper};
pub use version_control::VersionControl;
