//! JSON Event Sinks
//!
//! Output deploy and provision events as NDJSON for CI/automation
//! consumption. One object per line, flushed immediately.

use crate::domain::ports::{DeployEvent, DeployEventSink, ProvisionEvent, ProvisionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Line-oriented JSON writer shared by both sinks
struct NdjsonWriter {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl NdjsonWriter {
    fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Deploy event sink that outputs NDJSON events
pub struct JsonEventSink {
    out: NdjsonWriter,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: NdjsonWriter::new(writer),
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                destination,
                deploy_path,
                service,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "destination": destination,
                "deploy_path": deploy_path,
                "service": service,
            }),

            DeployEvent::TreeClean => serde_json::json!({
                "event": "tree_clean",
                "command": "deploy",
            }),

            DeployEvent::TreeDirty { changes } => serde_json::json!({
                "event": "tree_dirty",
                "command": "deploy",
                "changes": changes,
            }),

            DeployEvent::Committed { subject } => serde_json::json!({
                "event": "committed",
                "command": "deploy",
                "subject": subject,
            }),

            DeployEvent::PushStarted => serde_json::json!({
                "event": "push_start",
                "command": "deploy",
            }),

            DeployEvent::Pushed => serde_json::json!({
                "event": "pushed",
                "command": "deploy",
            }),

            DeployEvent::RemoteStarted { destination } => serde_json::json!({
                "event": "remote_start",
                "command": "deploy",
                "destination": destination,
            }),

            DeployEvent::RemoteOutput { output } => serde_json::json!({
                "event": "remote_output",
                "command": "deploy",
                "output": output,
            }),

            DeployEvent::RemoteSucceeded => serde_json::json!({
                "event": "remote_success",
                "command": "deploy",
            }),

            DeployEvent::StepFailed { step, error } => serde_json::json!({
                "event": "step_failed",
                "command": "deploy",
                "step": step.as_str(),
                "error": error,
            }),

            DeployEvent::Completed { url } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "status": "success",
                "url": url,
            }),
        };

        self.out.write_event(json);
    }
}

/// Provision event sink that outputs NDJSON events
pub struct JsonProvisionSink {
    out: NdjsonWriter,
}

impl JsonProvisionSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: NdjsonWriter::new(writer),
        }
    }
}

impl ProvisionEventSink for JsonProvisionSink {
    fn on_event(&self, event: ProvisionEvent) {
        let json = match event {
            ProvisionEvent::Started {
                name,
                region,
                size,
                image,
                domain,
            } => serde_json::json!({
                "event": "start",
                "command": "provision",
                "name": name,
                "region": region,
                "size": size,
                "image": image,
                "domain": domain,
            }),

            ProvisionEvent::OperatorIp { ip } => serde_json::json!({
                "event": "operator_ip",
                "command": "provision",
                "ip": ip,
            }),

            ProvisionEvent::KeyReused { id, name } => serde_json::json!({
                "event": "ssh_key",
                "command": "provision",
                "id": id,
                "name": name,
                "created": false,
            }),

            ProvisionEvent::KeyCreated { id, name } => serde_json::json!({
                "event": "ssh_key",
                "command": "provision",
                "id": id,
                "name": name,
                "created": true,
            }),

            ProvisionEvent::DropletCreated { id } => serde_json::json!({
                "event": "droplet_created",
                "command": "provision",
                "id": id,
            }),

            ProvisionEvent::StatusPolled { attempt, status } => serde_json::json!({
                "event": "status",
                "command": "provision",
                "attempt": attempt,
                "status": status.as_str(),
            }),

            ProvisionEvent::DropletActive { id, ip } => serde_json::json!({
                "event": "droplet_active",
                "command": "provision",
                "id": id,
                "ip": ip,
            }),

            ProvisionEvent::StageFailed { stage, error } => serde_json::json!({
                "event": "stage_failed",
                "command": "provision",
                "stage": stage.as_str(),
                "error": error,
            }),

            ProvisionEvent::Completed { ip, domain } => serde_json::json!({
                "event": "complete",
                "command": "provision",
                "status": "success",
                "ip": ip,
                "domain": domain,
            }),
        };

        self.out.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DeployStep, DropletStatus};
    use crate::domain::ports::ProvisionStage;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_one_object_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Started {
            destination: "root@app.example.com".to_string(),
            deploy_path: "/home/deploy/app".to_string(),
            service: "app-server".to_string(),
        });
        sink.on_event(DeployEvent::Completed {
            url: "https://app.example.com".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["service"], "app-server");
        assert_eq!(events[1]["status"], "success");
        assert_eq!(events[1]["url"], "https://app.example.com");
    }

    #[test]
    fn json_sink_names_failed_step() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::StepFailed {
            step: DeployStep::Push,
            error: "failed to push to upstream: rejected".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "step_failed");
        assert_eq!(events[0]["step"], "push");
    }

    #[test]
    fn provision_sink_reports_status_and_stage() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonProvisionSink::with_writer(writer);

        sink.on_event(ProvisionEvent::StatusPolled {
            attempt: 2,
            status: DropletStatus::New,
        });
        sink.on_event(ProvisionEvent::StageFailed {
            stage: ProvisionStage::WaitActive,
            error: "timed out".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["status"], "new");
        assert_eq!(events[0]["attempt"], 2);
        assert_eq!(events[1]["stage"], "wait_active");
    }
}
