//! Blocking DigitalOcean API client
//!
//! One request per port call, bearer-token auth, bounded by the configured
//! request timeout. Nothing is retried.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiToken;
use crate::domain::entities::{DropletRecord, DropletSpec, SshKeyRecord};
use crate::domain::ports::CloudProvider;
use crate::error::{LaunchpadError, LaunchpadResult};

use super::wire::{
    CreateDroplet, CreateSshKey, DropletEnvelope, DropletList, SshKeyEnvelope, SshKeyList,
};

pub struct DigitalOceanClient {
    http: Client,
    api_base: String,
    token: ApiToken,
}

impl DigitalOceanClient {
    pub fn new(
        api_base: impl Into<String>,
        token: ApiToken,
        timeout: Duration,
    ) -> LaunchpadResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LaunchpadError::Transport {
                action: "build HTTP client".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_base, path))
            .bearer_auth(self.token.expose())
    }

    /// Send `builder`, require `expected` (or any 2xx), and decode the body
    fn send<T: DeserializeOwned>(
        &self,
        action: &str,
        builder: RequestBuilder,
        expected: Option<StatusCode>,
    ) -> LaunchpadResult<T> {
        let transport = |e: reqwest::Error| LaunchpadError::Transport {
            action: action.to_string(),
            message: e.to_string(),
        };

        let response = builder.send().map_err(transport)?;
        let status = response.status();
        debug!(action, %status, "provider response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(LaunchpadError::Unauthorized {
                body: response.text().unwrap_or_default(),
            });
        }

        let accepted = match expected {
            Some(code) => status == code,
            None => status.is_success(),
        };
        if !accepted {
            return Err(LaunchpadError::Api {
                action: action.to_string(),
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        response.json::<T>().map_err(transport)
    }
}

impl CloudProvider for DigitalOceanClient {
    fn list_ssh_keys(&self) -> LaunchpadResult<Vec<SshKeyRecord>> {
        let builder = self
            .request(Method::GET, "/account/keys")
            .query(&[("per_page", "200")]);
        let list: SshKeyList = self.send("list SSH keys", builder, None)?;
        Ok(list.ssh_keys)
    }

    fn create_ssh_key(&self, name: &str, public_key: &str) -> LaunchpadResult<SshKeyRecord> {
        let builder = self
            .request(Method::POST, "/account/keys")
            .json(&CreateSshKey { name, public_key });
        let envelope: SshKeyEnvelope =
            self.send("create SSH key", builder, Some(StatusCode::CREATED))?;
        Ok(envelope.ssh_key)
    }

    fn find_droplets_by_name(&self, name: &str) -> LaunchpadResult<Vec<DropletRecord>> {
        let builder = self
            .request(Method::GET, "/droplets")
            .query(&[("name", name)]);
        let list: DropletList = self.send("list droplets", builder, None)?;
        Ok(list
            .droplets
            .into_iter()
            .map(DropletRecord::from)
            .filter(|d| d.name == name)
            .collect())
    }

    fn create_droplet(&self, spec: &DropletSpec) -> LaunchpadResult<DropletRecord> {
        let builder = self
            .request(Method::POST, "/droplets")
            .json(&CreateDroplet::from(spec));
        let envelope: DropletEnvelope =
            self.send("create droplet", builder, Some(StatusCode::ACCEPTED))?;
        Ok(envelope.droplet.into())
    }

    fn get_droplet(&self, id: u64) -> LaunchpadResult<DropletRecord> {
        let builder = self.request(Method::GET, &format!("/droplets/{}", id));
        let envelope: DropletEnvelope = self.send("get droplet status", builder, None)?;
        Ok(envelope.droplet.into())
    }
}
