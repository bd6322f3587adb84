//! Deploy Event Port
//!
//! Observable progress for the deploy flow. The binary renders these as
//! console lines or an NDJSON stream.

use crate::domain::entities::DeployStep;

/// Event emitted during a deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        destination: String,
        deploy_path: String,
        service: String,
    },

    /// Working tree has nothing to commit
    TreeClean,

    /// Working tree has pending changes (shown before asking to commit)
    TreeDirty { changes: Vec<String> },

    /// Pending changes were committed
    Committed { subject: String },

    PushStarted,

    Pushed,

    /// Remote session is being opened
    RemoteStarted { destination: String },

    /// Captured remote output, verbatim (capture mode only)
    RemoteOutput { output: String },

    RemoteSucceeded,

    /// A step failed; nothing after it will run
    StepFailed { step: DeployStep, error: String },

    /// All steps succeeded
    Completed { url: String },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingEventSink {
        events: Arc<Mutex<Vec<DeployEvent>>>,
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(DeployEvent::TreeClean);
        sink.on_event(DeployEvent::PushStarted);

        assert_eq!(
            *events.lock().unwrap(),
            vec![DeployEvent::TreeClean, DeployEvent::PushStarted]
        );
    }
}
