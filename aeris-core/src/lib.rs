//! Calibration-and-scoring engine for Aeris
//!
//! Turns raw environmental sensor samples (temperature, humidity, pressure,
//! gas resistance) into calibrated records with a baseline-referenced air
//! quality score. Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - No heap allocation in the sampling path
//! - No I/O: sensor driver, clock and publisher sit behind trait seams
//! - Single thread of control (one 1 Hz tick loop)
//!
//! ```no_run
//! use aeris_core::{EngineConfig, SampleScheduler, time::SystemClock};
//! # use aeris_core::{RawSample, SensorSource, RecordSink, CalibratedRecord, EngineResult};
//! # struct Driver; struct Sink;
//! # impl SensorSource for Driver {
//! #     fn read(&mut self) -> EngineResult<RawSample> { unimplemented!() }
//! # }
//! # impl RecordSink for Sink {
//! #     type Error = ();
//! #     fn publish(&mut self, _r: &CalibratedRecord) -> Result<(), ()> { Ok(()) }
//! # }
//!
//! let config = EngineConfig::default();
//! let mut engine = SampleScheduler::new(Driver, Sink, SystemClock, config);
//!
//! // Blocks, sampling once a second; returns only on a fatal engine error.
//! engine.run().unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod baseline;
pub mod config;
pub mod constants;
pub mod errors;
pub mod sample;
pub mod scheduler;
pub mod score;
pub mod time;
pub mod units;
pub mod window;

// Public API
pub use baseline::{BaselineEstimator, BaselinePhase};
pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use sample::{CalibratedRecord, RawSample, RecordSink, SensorSource};
pub use scheduler::{SampleScheduler, SchedulerStats, TickOutcome};
pub use score::AirQualityScorer;

/// Crate version, for diagnostics at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
