//! HTTP client for the subscribe endpoint

use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::Url;

use super::toggle_types::{ToggleBody, ToggleError, ToggleReply};
use crate::config::Config;

/// Posts toggles and decodes the JSON reply
#[derive(Debug, Clone)]
pub struct SubscriptionClient {
    http: reqwest::Client,
    base_url: Option<Url>,
    cookie_name: String,
}

impl SubscriptionClient {
    /// Create a client from configuration
    ///
    /// Returns an error if the base url is malformed or the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ToggleError> {
        let base_url = config
            .http
            .base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .map(|u| {
                Url::parse(u).map_err(|e| ToggleError::InvalidUrl {
                    url: u.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.http.timeout_secs));
        if !config.http.system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| ToggleError::NotConfigured(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            cookie_name: config.session.cookie_name.clone(),
        })
    }

    /// Absolute urls pass through; relative ones are joined onto the base url
    pub fn resolve_url(&self, url: &str) -> Result<Url, ToggleError> {
        let resolved = match &self.base_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };

        resolved.map_err(|e| ToggleError::InvalidUrl {
            url: url.to_string(),
            reason: match self.base_url {
                Some(_) => e.to_string(),
                None => format!("{} (set [http] base_url or --base-url)", e),
            },
        })
    }

    /// POST the toggle and decode the reply
    pub async fn toggle(&self, url: &str, body: &ToggleBody) -> Result<ToggleReply, ToggleError> {
        let url = self.resolve_url(url)?;
        log::debug!("POST {} ({})", url, body.action.field());

        let mut request = self.http.post(url).form(&body.fields());
        if !body.session_id.is_empty() {
            request = request.header(COOKIE, format!("{}={}", self.cookie_name, body.session_id));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ToggleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToggleError::Status(status.as_u16()));
        }

        response
            .json::<ToggleReply>()
            .await
            .map_err(|e| ToggleError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
