//! MQTT publisher over the synchronous `rumqttc` client
//!
//! Publishes are fire-and-forget at QoS 0, matching the engine's "skip the
//! minute, never block the sampling loop" contract. The client's network
//! event loop runs on a background thread and reconnects on its own; this
//! type only queues outgoing messages.

use std::thread;
use std::time::Duration;

use aeris_core::{CalibratedRecord, RecordSink};
use rumqttc::{Client, MqttOptions, QoS};

use crate::format::{self, OutputFormat};
use crate::{ConnectionStats, ConnectorError};

/// Outgoing queue depth for the rumqttc client
const CLIENT_QUEUE_CAPACITY: usize = 10;

/// Broker connection settings
#[derive(Debug, Clone)]
pub struct MqttConfig {
    /// Broker hostname or address
    pub host: String,
    /// Broker port (1883 for plain MQTT)
    pub port: u16,
    /// Client identifier presented to the broker
    pub client_id: String,
    /// Base topic; flat layout appends `/<field>` suffixes to it
    pub base_topic: String,
    /// Optional broker credentials
    pub username: Option<String>,
    /// Optional broker credentials
    pub password: Option<String>,
    /// Keep-alive interval in seconds
    pub keep_alive_secs: u64,
    /// Which wire layout to emit
    pub format: OutputFormat,
}

impl MqttConfig {
    /// Sensible defaults for a local unauthenticated broker
    pub fn new(host: impl Into<String>, base_topic: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 1883,
            client_id: String::from("aeris"),
            base_topic: base_topic.into(),
            username: None,
            password: None,
            keep_alive_secs: 60,
            format: OutputFormat::Flat,
        }
    }
}

/// Publishes calibrated records to an MQTT broker
pub struct MqttPublisher {
    client: Client,
    base_topic: String,
    format: OutputFormat,
    stats: ConnectionStats,
}

impl MqttPublisher {
    /// Connect to the broker and spawn the network event loop
    pub fn connect(config: MqttConfig) -> Result<Self, ConnectorError> {
        if config.base_topic.is_empty() {
            return Err(ConnectorError::ConfigError("base topic is empty".into()));
        }

        let mut options = MqttOptions::new(config.client_id, config.host, config.port);
        options.set_keep_alive(Duration::from_secs(config.keep_alive_secs));

        if let (Some(username), Some(password)) = (config.username, config.password) {
            options.set_credentials(username, password);
        }

        let (client, mut connection) = Client::new(options, CLIENT_QUEUE_CAPACITY);

        // rumqttc only makes progress while the connection is polled, so
        // iterate it on its own thread for the life of the publisher.
        thread::spawn(move || {
            for event in connection.iter() {
                if let Err(e) = event {
                    log::warn!("mqtt connection error: {e}");
                    thread::sleep(Duration::from_secs(1));
                }
            }
        });

        Ok(Self {
            client,
            base_topic: config.base_topic,
            format: config.format,
            stats: ConnectionStats::default(),
        })
    }

    /// Counters since connect
    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }

    fn send(&mut self, topic: &str, payload: &str) -> Result<(), ConnectorError> {
        match self
            .client
            .try_publish(topic, QoS::AtMostOnce, false, payload.as_bytes().to_vec())
        {
            Ok(()) => {
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += payload.len() as u64;
                Ok(())
            }
            Err(e) => {
                self.stats.messages_failed += 1;
                self.stats.last_error = Some(e.to_string());
                Err(ConnectorError::ProtocolError(e.to_string()))
            }
        }
    }
}

impl RecordSink for MqttPublisher {
    type Error = ConnectorError;

    fn publish(&mut self, record: &CalibratedRecord) -> Result<(), ConnectorError> {
        match self.format {
            OutputFormat::Flat => {
                for (suffix, value) in format::flat_fields(record) {
                    let topic = format!("{}/{}", self.base_topic, suffix);
                    self.send(&topic, &value)?;
                }
                Ok(())
            }
            OutputFormat::Structured => {
                let topic = self.base_topic.clone();
                let payload = format::structured_payload(record).to_string();
                self.send(&topic, &payload)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MqttConfig::new("broker.local", "home/office");
        assert_eq!(config.port, 1883);
        assert_eq!(config.keep_alive_secs, 60);
        assert_eq!(config.format, OutputFormat::Flat);
        assert!(config.username.is_none());
    }

    #[test]
    fn empty_base_topic_is_rejected() {
        let config = MqttConfig::new("broker.local", "");
        assert!(matches!(
            MqttPublisher::connect(config),
            Err(ConnectorError::ConfigError(_))
        ));
    }
}
