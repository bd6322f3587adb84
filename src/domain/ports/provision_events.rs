//! Provision Event Port

use crate::domain::entities::DropletStatus;

/// Provisioning stage, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStage {
    Preflight,
    EnsureKey,
    CreateInstance,
    WaitActive,
}

impl ProvisionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvisionStage::Preflight => "preflight",
            ProvisionStage::EnsureKey => "ensure_key",
            ProvisionStage::CreateInstance => "create_instance",
            ProvisionStage::WaitActive => "wait_active",
        }
    }
}

/// Event emitted during provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionEvent {
    Started {
        name: String,
        region: String,
        size: String,
        image: String,
        domain: String,
    },

    /// Operator's public IP, when SSH is restricted to it
    OperatorIp { ip: String },

    KeyReused { id: u64, name: String },

    KeyCreated { id: u64, name: String },

    DropletCreated { id: u64 },

    /// One status query returned a non-active status
    StatusPolled { attempt: u64, status: DropletStatus },

    DropletActive { id: u64, ip: String },

    StageFailed { stage: ProvisionStage, error: String },

    Completed { ip: String, domain: String },
}

pub trait ProvisionEventSink {
    fn on_event(&self, event: ProvisionEvent);
}

pub struct NoopProvisionSink;

impl ProvisionEventSink for NoopProvisionSink {
    fn on_event(&self, _event: ProvisionEvent) {}
}
