//! Error Types for the Calibration-and-Scoring Engine
//!
//! ## Design Philosophy
//!
//! The error system follows the same rules as the rest of the engine:
//!
//! 1. **Small Size**: Each variant is kept minimal since errors are returned
//!    from the per-tick hot path.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, only
//!    `&'static str` for messages. This keeps memory usage deterministic.
//!
//! 3. **Copy Semantics**: Errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! ## Error Categories
//!
//! ### Transient (retry next tick)
//! - `SensorNotReady`: the driver had no data, or the gas heater had not
//!   stabilized. The scheduler skips the tick and polls again.
//!
//! ### Fatal (halt and surface a diagnostic)
//! - `InsufficientBurnInData`: the warm-up window elapsed with zero accepted
//!   samples, so no gas baseline exists and scoring can never start.
//!
//! ### Contract violations (should not occur)
//! - `DivisionUndefined`: the scorer was invoked with a zero gas baseline.
//!   The scheduler enforces phase ordering, so hitting this means a caller
//!   bypassed the estimator.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use aeris_core::{EngineError, EngineResult};
//!
//! fn handle_tick_result(result: EngineResult<()>) {
//!     match result {
//!         Ok(()) => {
//!             // Tick processed - nothing to do
//!         }
//!         Err(EngineError::SensorNotReady { .. }) => {
//!             // Transient - the loop proceeds to the next tick
//!         }
//!         Err(EngineError::InsufficientBurnInData { .. }) => {
//!             // Baseline never established - stop and report
//!         }
//!         Err(EngineError::DivisionUndefined) => {
//!             // Phase ordering was violated upstream
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// Driver returned no data or an unstable heater this tick
    #[error("Sensor not ready: {reason}")]
    SensorNotReady {
        /// Why the sample was unusable (driver-supplied, static)
        reason: &'static str,
    },

    /// Warm-up ended with zero accepted samples - no baseline exists
    #[error("No stable samples accepted during {elapsed_s}s warm-up")]
    InsufficientBurnInData {
        /// Wall-clock seconds spent in warm-up before giving up
        elapsed_s: u32,
    },

    /// Scorer invoked with a zero gas baseline
    #[error("Air quality score undefined for zero gas baseline")]
    DivisionUndefined,
}

#[cfg(feature = "defmt")]
impl defmt::Format for EngineError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::SensorNotReady { reason } =>
                defmt::write!(fmt, "Sensor not ready: {}", reason),
            Self::InsufficientBurnInData { elapsed_s } =>
                defmt::write!(fmt, "No stable samples in {}s warm-up", elapsed_s),
            Self::DivisionUndefined =>
                defmt::write!(fmt, "Score undefined: zero gas baseline"),
        }
    }
}
