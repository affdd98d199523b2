//! Record serialization for the two published layouts
//!
//! Rounding rules follow the reference daemon: temperature and humidity to
//! one decimal, pressures and the score to two, gas resistance and the gas
//! baseline to whole Ohms. Fields that are absent from a record (sea-level
//! pressure without a configured elevation, score during warm-up) are
//! omitted entirely rather than published as zeros.

use aeris_core::CalibratedRecord;
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use core::str::FromStr;

use crate::ConnectorError;

/// Which wire layout a publisher emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One scalar value per sub-topic
    #[default]
    Flat,
    /// One JSON object per publish on the base topic
    Structured,
}

impl FromStr for OutputFormat {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "json" | "structured" => Ok(Self::Structured),
            other => Err(ConnectorError::ConfigError(format!(
                "unknown output format '{other}' (expected 'flat' or 'json')"
            ))),
        }
    }
}

/// Flat layout: `(topic_suffix, value)` pairs for one record
///
/// Optional fields contribute pairs only when present.
pub fn flat_fields(record: &CalibratedRecord) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("temperature", format!("{:.1}", record.temperature_f)),
        ("humidity", format!("{:.1}", record.humidity_pct)),
        ("pressure", format!("{:.2}", record.pressure_hpa)),
    ];

    if let Some(sealevel) = record.sealevel_pressure_hpa {
        fields.push(("sealevel-pressure", format!("{sealevel:.2}")));
    }

    if let Some(score) = record.air_quality_score {
        fields.push(("air-quality", format!("{score:.2}")));
    }

    fields
}

/// Structured layout: one JSON object for the whole record
///
/// The `burn_in` flag is true once a baseline (hence a score) is available.
pub fn structured_payload(record: &CalibratedRecord) -> Value {
    let mut data = Map::new();

    data.insert("gas".into(), json!(record.gas_resistance_ohms.round() as i64));
    data.insert("humidity".into(), json!(round_to(record.humidity_pct, 1)));
    data.insert("temperature".into(), json!(round_to(record.temperature_f, 1)));
    data.insert("pressure".into(), json!(round_to(record.pressure_hpa, 2)));

    if let Some(sealevel) = record.sealevel_pressure_hpa {
        data.insert("sealevel".into(), json!(round_to(sealevel, 2)));
    }

    if let Some(score) = record.air_quality_score {
        data.insert("air_quality".into(), json!(round_to(score, 2)));
    }

    data.insert("burn_in".into(), json!(!record.is_interim()));

    if let Some(baseline) = record.gas_baseline_ohms {
        data.insert("gas_baseline".into(), json!(baseline.round() as i64));
    }

    data.insert("timestamp".into(), json!(iso8601_seconds(record.timestamp)));

    Value::Object(data)
}

/// ISO-8601 timestamp truncated to whole seconds, UTC
pub fn iso8601_seconds(timestamp_ms: u64) -> String {
    let datetime = DateTime::<Utc>::from_timestamp((timestamp_ms / 1000) as i64, 0)
        .unwrap_or(DateTime::UNIX_EPOCH);
    datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Round to a fixed number of decimal places for JSON emission
fn round_to(value: f32, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value as f64 * factor).round() / factor
}
