//! Sample data model and collaborator seams
//!
//! The engine performs no I/O itself. The sensor driver, the clock and the
//! publisher all sit behind the traits defined here, which keeps the whole
//! acquire/convert/score cycle testable without hardware or a broker.

use crate::config::EngineConfig;
use crate::errors::EngineResult;
use crate::time::Timestamp;
use crate::units;

/// One raw reading from the sensor driver
///
/// Produced once per poll; the engine never mutates it. Fields are whatever
/// the driver's compensation math yields - the engine applies user offsets
/// and unit conversion on top.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    /// Compensated temperature (°C)
    pub temperature_c: f32,
    /// Compensated relative humidity (%RH)
    pub humidity_pct: f32,
    /// Compensated station pressure (hPa)
    pub pressure_hpa: f32,
    /// Gas plate resistance (Ohms)
    pub gas_resistance_ohms: f32,
    /// Whether the gas heater had reached a stable temperature
    ///
    /// Readings taken before the heater settles carry meaningless gas
    /// resistance; the baseline estimator drops them.
    pub heater_stable: bool,
}

/// One calibrated record, derived fresh each tick
///
/// Optional fields are absent rather than zeroed: sea-level pressure exists
/// only when the site elevation is configured, score and baseline only once
/// warm-up has completed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibratedRecord {
    /// When the sample was taken (ms)
    pub timestamp: Timestamp,
    /// Offset-corrected temperature (°F)
    pub temperature_f: f32,
    /// Offset-corrected relative humidity (%RH)
    pub humidity_pct: f32,
    /// Offset-corrected station pressure (hPa)
    pub pressure_hpa: f32,
    /// Elevation-corrected sea-level pressure (hPa), when elevation is known
    pub sealevel_pressure_hpa: Option<f32>,
    /// Gas plate resistance (Ohms), passed through unconverted
    pub gas_resistance_ohms: f32,
    /// Composite air quality score, once a baseline exists
    pub air_quality_score: Option<f32>,
    /// The learned gas baseline (Ohms), once warm-up completes
    pub gas_baseline_ohms: Option<f32>,
}

impl CalibratedRecord {
    /// Convert a raw sample into calibrated units, without a score
    ///
    /// This is the record shape published during warm-up.
    pub fn from_raw(raw: &RawSample, config: &EngineConfig, timestamp: Timestamp) -> Self {
        let pressure = units::pressure_absolute_hpa(raw.pressure_hpa, config.pressure_offset_hpa);

        Self {
            timestamp,
            temperature_f: units::temperature_f(raw.temperature_c, config.temperature_offset_f),
            humidity_pct: units::humidity_pct(raw.humidity_pct, config.humidity_offset_pct),
            pressure_hpa: pressure,
            sealevel_pressure_hpa: config
                .elevation_m
                .map(|elevation| units::pressure_sealevel_hpa(pressure, elevation)),
            gas_resistance_ohms: raw.gas_resistance_ohms,
            air_quality_score: None,
            gas_baseline_ohms: None,
        }
    }

    /// Attach the score and the baseline it was computed against
    pub fn with_score(mut self, score: f32, gas_baseline_ohms: f32) -> Self {
        self.air_quality_score = Some(score);
        self.gas_baseline_ohms = Some(gas_baseline_ohms);
        self
    }

    /// Whether warm-up was still running when this record was built
    pub fn is_interim(&self) -> bool {
        self.gas_baseline_ohms.is_none()
    }
}

/// Sensor driver seam
///
/// Implemented by the host over its bus driver (I²C, simulated, replayed).
/// A poll with nothing usable returns `EngineError::SensorNotReady`; the
/// scheduler treats that as "no stable sample this tick", not a failure.
pub trait SensorSource {
    /// Acquire one raw sample
    fn read(&mut self) -> EngineResult<RawSample>;
}

/// Publisher seam
///
/// Receives every record that passes the publish gate. Implementations
/// decide the wire layout (flat per-field topics, one JSON object, a log
/// line). Errors are the sink's own; the scheduler counts them and moves on.
pub trait RecordSink {
    /// Sink-specific failure type
    type Error;

    /// Emit one calibrated record
    fn publish(&mut self, record: &CalibratedRecord) -> Result<(), Self::Error>;
}
