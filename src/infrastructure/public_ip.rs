//! Operator public IP lookup over a plain-text echo service

use std::net::Ipv4Addr;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::ports::PublicIpResolver;
use crate::error::{LaunchpadError, LaunchpadResult};

const ACTION: &str = "detect public IP";

/// Resolves the operator's IPv4 address from a service such as
/// `https://api.ipify.org`, which answers with the bare address.
pub struct IpifyResolver {
    url: String,
    timeout: Duration,
}

impl IpifyResolver {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

fn transport(message: impl ToString) -> LaunchpadError {
    LaunchpadError::Transport {
        action: ACTION.to_string(),
        message: message.to_string(),
    }
}

/// Parse the echo service's response body
pub(crate) fn parse_ip(body: &str) -> LaunchpadResult<Ipv4Addr> {
    body.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| transport(format!("unexpected response '{}'", body.trim())))
}

impl PublicIpResolver for IpifyResolver {
    fn resolve(&self) -> LaunchpadResult<Ipv4Addr> {
        debug!(url = %self.url, "resolving operator IP");
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(transport)?;
        let response = client.get(&self.url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LaunchpadError::Api {
                action: ACTION.to_string(),
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        parse_ip(&response.text().map_err(transport)?)
    }
}
