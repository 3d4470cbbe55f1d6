// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP dispatch to a REST light-control service.
//!
//! Commands go to `POST /api/services/light/turn_on` with the JSON service
//! payload; the status line goes to `POST /api/states/{entity_id}`. Requests
//! are independent; there is no persistent connection state.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::command::TurnOnCommand;
use crate::error::ProtocolError;
use crate::protocol::{FixtureService, StateStore};

/// Configuration for the HTTP dispatcher.
///
/// # Examples
///
/// ```
/// use solarc_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.10");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.10")
///     .with_port(8123)
///     .with_https()
///     .with_token("long-lived-token")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    token: Option<String>,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port of the light-control service.
    pub const DEFAULT_PORT: u16 = 8123;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            token: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL of the service.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

/// HTTP dispatcher for fixture commands and status writes.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: Client,
    config: HttpConfig,
}

impl HttpDispatcher {
    /// Creates a dispatcher from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: HttpConfig) -> Result<Self, ProtocolError> {
        if config.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("empty host".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl FixtureService for HttpDispatcher {
    async fn turn_on(&self, command: &TurnOnCommand) -> Result<(), ProtocolError> {
        let url = format!(
            "{}/api/services/{}/{}",
            self.config.base_url(),
            TurnOnCommand::DOMAIN,
            TurnOnCommand::SERVICE
        );
        tracing::debug!(entity = %command.entity_id, %url, "sending turn_on");
        self.authorized(self.client.post(&url))
            .json(&command.payload())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl StateStore for HttpDispatcher {
    async fn set_state(&self, entity_id: &str, value: &str) -> Result<(), ProtocolError> {
        let url = format!(
            "{}/api/states/{}",
            self.config.base_url(),
            urlencoding::encode(entity_id)
        );
        let body = json!({
            "state": value,
            "attributes": {
                "updated": chrono::Utc::now().to_rfc3339(),
            },
        });
        tracing::debug!(entity = %entity_id, %url, "writing status");
        self.authorized(self.client.post(&url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_default() {
        let config = HttpConfig::new("192.168.1.10");
        assert_eq!(config.base_url(), "http://192.168.1.10:8123");
    }

    #[test]
    fn base_url_https_custom_port() {
        let config = HttpConfig::new("hub.local").with_https().with_port(443);
        assert_eq!(config.base_url(), "https://hub.local:443");
    }

    #[test]
    fn empty_host_rejected() {
        let result = HttpDispatcher::new(HttpConfig::new(""));
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }
}
