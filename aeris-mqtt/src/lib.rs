//! MQTT Publishing for Aeris Calibrated Records
//!
//! ## Overview
//!
//! This crate adapts the engine's `RecordSink` seam to an MQTT broker. The
//! engine itself performs no I/O; everything wire-shaped lives here.
//!
//! ## Output Layouts
//!
//! Two layouts are supported, selected by configuration:
//!
//! - **Flat**: one scalar value per sub-topic under the base topic
//!   (`.../temperature`, `.../humidity`, `.../pressure`, plus
//!   `.../sealevel-pressure` and `.../air-quality` when those fields are
//!   present). Suits dashboards that subscribe per metric.
//! - **Structured**: one JSON object per publish on the base topic,
//!   carrying every present field, a `burn_in` flag and an ISO-8601
//!   timestamp truncated to whole seconds. Suits ingest pipelines that
//!   want one document per reading.
//!
//! ## Connection Model
//!
//! `MqttPublisher` wraps the synchronous `rumqttc` client: publishes are
//! queued locally and a background thread drives the network event loop,
//! reconnecting as needed. Publish failures surface as `ConnectorError`;
//! the engine counts them and keeps sampling - delivery is fire-and-forget
//! at this layer.
//!
//! ## Example
//!
//! ```no_run
//! use aeris_mqtt::{MqttConfig, MqttPublisher, OutputFormat};
//!
//! let mut config = MqttConfig::new("broker.local", "home/office");
//! config.format = OutputFormat::Structured;
//!
//! let publisher = MqttPublisher::connect(config)?;
//! // Hand the publisher to aeris_core::SampleScheduler as its sink.
//! # Ok::<(), aeris_mqtt::ConnectorError>(())
//! ```

#![warn(missing_docs)]

pub mod format;

#[cfg(feature = "mqtt")]
pub mod mqtt;

pub use format::OutputFormat;

#[cfg(feature = "mqtt")]
pub use mqtt::{MqttConfig, MqttPublisher};

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// No broker connection is established
    #[error("Not connected")]
    NotConnected,

    /// The client's outgoing queue is full
    #[error("Buffer full")]
    BufferFull,

    /// Lower-level protocol failure, stringified from the client library
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// Invalid connector configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Connection statistics common to all connectors
#[derive(Debug, Default, Clone)]
pub struct ConnectionStats {
    /// Total messages sent successfully
    pub messages_sent: u64,
    /// Total messages failed to send
    pub messages_failed: u64,
    /// Total bytes sent
    pub bytes_sent: u64,
    /// Last error message
    pub last_error: Option<String>,
}
