// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Publish-only MQTT dispatch.
//!
//! Commands are published as JSON to `{prefix}/{entity_id}/set`; the status
//! line is published retained to `{prefix}/{entity_id}/state`. The dispatcher
//! never subscribes; a background task drives the event loop so publishes
//! are flushed to the broker.

use std::time::Duration;

use rumqttc::{AsyncClient, MqttOptions, QoS};
use uuid::Uuid;

use crate::command::TurnOnCommand;
use crate::error::ProtocolError;
use crate::protocol::{FixtureService, StateStore};

/// Configuration for the MQTT dispatcher.
///
/// # Examples
///
/// ```
/// use solarc_lib::protocol::MqttConfig;
///
/// let config = MqttConfig::new("192.168.1.50")
///     .with_port(1883)
///     .with_credentials("mqtt_user", "mqtt_pass")
///     .with_topic_prefix("lights");
/// ```
#[derive(Debug, Clone)]
pub struct MqttConfig {
    host: String,
    port: u16,
    credentials: Option<(String, String)>,
    topic_prefix: String,
}

impl MqttConfig {
    /// Default MQTT port.
    pub const DEFAULT_PORT: u16 = 1883;
    /// Default topic prefix.
    pub const DEFAULT_PREFIX: &'static str = "solarc";

    /// Creates a new configuration for the specified broker host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            credentials: None,
            topic_prefix: Self::DEFAULT_PREFIX.to_string(),
        }
    }

    /// Sets a custom broker port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets broker credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the topic prefix commands are published under.
    #[must_use]
    pub fn with_topic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.topic_prefix = prefix.into();
        self
    }
}

/// MQTT dispatcher for fixture commands and status writes.
#[derive(Debug, Clone)]
pub struct MqttDispatcher {
    client: AsyncClient,
    topic_prefix: String,
}

impl MqttDispatcher {
    /// Connects to the broker and spawns the event loop task.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the broker address is invalid.
    pub fn connect(config: MqttConfig) -> Result<Self, ProtocolError> {
        if config.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("empty host".to_string()));
        }

        let client_id = format!("solarc-{}", Uuid::new_v4().simple());
        let mut options = MqttOptions::new(client_id, &config.host, config.port);
        options.set_keep_alive(Duration::from_secs(30));
        if let Some((username, password)) = &config.credentials {
            options.set_credentials(username, password);
        }

        let (client, mut event_loop) = AsyncClient::new(options, 16);

        tokio::spawn(async move {
            loop {
                if let Err(error) = event_loop.poll().await {
                    tracing::warn!(%error, "MQTT event loop terminated");
                    break;
                }
            }
        });

        Ok(Self {
            client,
            topic_prefix: config.topic_prefix,
        })
    }
}

impl FixtureService for MqttDispatcher {
    async fn turn_on(&self, command: &TurnOnCommand) -> Result<(), ProtocolError> {
        let topic = format!("{}/{}/set", self.topic_prefix, command.entity_id);
        let payload = command.payload().to_string();
        tracing::debug!(entity = %command.entity_id, %topic, "publishing turn_on");
        self.client
            .publish(topic, QoS::AtLeastOnce, false, payload)
            .await?;
        Ok(())
    }
}

impl StateStore for MqttDispatcher {
    async fn set_state(&self, entity_id: &str, value: &str) -> Result<(), ProtocolError> {
        let topic = format!("{}/{}/state", self.topic_prefix, entity_id);
        tracing::debug!(entity = %entity_id, %topic, "publishing status");
        // Retained so late subscribers see the last status line
        self.client
            .publish(topic, QoS::AtLeastOnce, true, value)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MqttConfig::new("broker.local");
        assert_eq!(config.port, MqttConfig::DEFAULT_PORT);
        assert_eq!(config.topic_prefix, "solarc");
    }

    #[test]
    fn empty_host_rejected() {
        let result = MqttDispatcher::connect(MqttConfig::new(""));
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }
}
