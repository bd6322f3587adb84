//! Console rendering of provision events

use std::io::{self, Write};
use std::sync::Mutex;

use launchpad::domain::ports::{ProvisionEvent, ProvisionEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_provision_header(
    name: &str,
    region: &str,
    size: &str,
    image: &str,
    domain: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Provision, "Launchpad Provision");
    header.add("Droplet", name);
    header.add("Region", region);
    header.add("Size", size);
    header.add("Image", image);
    if !domain.is_empty() {
        header.add("Domain", domain);
    }
    header.render(supports_color, supports_unicode)
}

/// Summary with the manual follow-up the droplet still needs
pub fn render_provision_summary(
    ip: &str,
    domain: &str,
    certbot_email: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Droplet Ready");
    summary.add_fact("IP address", ip);
    if !domain.is_empty() {
        summary.add_fact("Domain", domain);
        summary.add_next_step(format!("Point the DNS A record for {} to {}", domain, ip));
    }
    summary.add_next_step("Wait 5-10 minutes for the first-boot script to install packages");
    summary.add_next_step(format!("Check the server: ssh root@{}", ip));
    if !domain.is_empty() {
        let certbot = match certbot_email {
            Some(email) => format!(
                "certbot --nginx -d {} --non-interactive --agree-tos -m {}",
                domain, email
            ),
            None => format!("certbot --nginx -d {}", domain),
        };
        summary.add_next_step(format!("Once DNS resolves, issue a certificate: {}", certbot));
    }
    summary.add_next_step("Ship the app: launchpad deploy");

    summary.render(supports_color, supports_unicode)
}

/// Prints provisioning progress as step markers
pub struct ConsoleProvisionSink {
    ui: UiContext,
    certbot_email: Option<String>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleProvisionSink {
    pub fn stdout(ui: UiContext, certbot_email: Option<String>) -> Self {
        Self::with_writer(ui, certbot_email, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(
        ui: UiContext,
        certbot_email: Option<String>,
        writer: W,
    ) -> Self {
        Self {
            ui,
            certbot_email,
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

impl ProvisionEventSink for ConsoleProvisionSink {
    fn on_event(&self, event: ProvisionEvent) {
        match event {
            ProvisionEvent::Started {
                name,
                region,
                size,
                image,
                domain,
            } => {
                self.write(&render_provision_header(
                    &name,
                    &region,
                    &size,
                    &image,
                    &domain,
                    self.ui.color,
                    self.ui.unicode,
                ));
                self.write("\n");
            }
            ProvisionEvent::OperatorIp { ip } => {
                self.marker(Icon::Success, &format!("SSH will only accept {}", ip))
            }
            ProvisionEvent::KeyReused { id, name } => {
                self.marker(Icon::Success, &format!("Reusing SSH key {} (id {})", name, id))
            }
            ProvisionEvent::KeyCreated { id, name } => {
                self.marker(Icon::Success, &format!("Registered SSH key {} (id {})", name, id))
            }
            ProvisionEvent::DropletCreated { id } => {
                self.marker(Icon::Success, &format!("Droplet {} created", id));
                self.marker(Icon::Progress, "Waiting for the droplet to become active");
            }
            ProvisionEvent::StatusPolled { attempt, status } => {
                let line = ColoredText::dim(format!("status '{}' (check {})", status, attempt))
                    .render(self.ui.color);
                self.marker(Icon::Pending, &line);
            }
            ProvisionEvent::DropletActive { id, ip } => {
                self.marker(Icon::Success, &format!("Droplet {} is active at {}", id, ip))
            }
            // The error itself is rendered once the command returns.
            ProvisionEvent::StageFailed { stage, .. } => {
                let text = ColoredText::error(format!("Stage '{}' failed", stage.as_str()))
                    .render(self.ui.color);
                self.marker(Icon::Error, &text);
            }
            ProvisionEvent::Completed { ip, domain } => {
                self.write("\n");
                self.write(&render_provision_summary(
                    &ip,
                    &domain,
                    self.certbot_email.as_deref(),
                    self.ui.color,
                    self.ui.unicode,
                ));
            }
        }
    }
}
