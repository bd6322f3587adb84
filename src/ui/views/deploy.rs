//! Console rendering of deploy events

use std::io::{self, Write};
use std::sync::Mutex;

use launchpad::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    destination: &str,
    deploy_path: &str,
    service: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "Launchpad Deploy");
    header.add("Target", destination);
    header.add("Path", deploy_path);
    header.add("Service", service);
    header.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(url: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut summary = ResultSummary::success("Deploy Complete");
    summary.add_fact("Live at", url);
    summary.render(supports_color, supports_unicode)
}

/// Prints deploy progress as step markers
pub struct ConsoleDeploySink {
    ui: UiContext,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleDeploySink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }

    fn marker(&self, icon: Icon, text: &str) {
        self.write(&format!(
            "{} {}\n",
            icon.colored(self.ui.color, self.ui.unicode),
            text
        ));
    }
}

impl DeployEventSink for ConsoleDeploySink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                destination,
                deploy_path,
                service,
            } => {
                self.write(&render_deploy_header(
                    &destination,
                    &deploy_path,
                    &service,
                    self.ui.color,
                    self.ui.unicode,
                ));
                self.write("\n");
            }
            DeployEvent::TreeClean => self.marker(Icon::Success, "Working tree clean"),
            DeployEvent::TreeDirty { changes } => {
                self.marker(
                    Icon::Warning,
                    &format!("{} uncommitted change(s):", changes.len()),
                );
                for change in &changes {
                    let line = ColoredText::dim(change.as_str()).render(self.ui.color);
                    self.write(&format!("    {}\n", line));
                }
            }
            DeployEvent::Committed { subject } => {
                self.marker(Icon::Success, &format!("Committed: {}", subject))
            }
            DeployEvent::PushStarted => self.marker(Icon::Progress, "Pushing to upstream"),
            DeployEvent::Pushed => self.marker(Icon::Success, "Pushed"),
            DeployEvent::RemoteStarted { destination } => self.marker(
                Icon::Progress,
                &format!("Pulling and restarting on {}", destination),
            ),
            DeployEvent::RemoteOutput { output } => {
                self.write(&output);
                if !output.ends_with('\n') {
                    self.write("\n");
                }
            }
            DeployEvent::RemoteSucceeded => self.marker(Icon::Success, "Service restarted"),
            // The error itself is rendered once the command returns.
            DeployEvent::StepFailed { step, .. } => {
                let text = ColoredText::error(format!("Step '{}' failed", step)).render(self.ui.color);
                self.marker(Icon::Error, &text);
            }
            DeployEvent::Completed { url } => {
                self.write("\n");
                self.write(&render_deploy_summary(&url, self.ui.color, self.ui.unicode));
            }
        }
    }
}
