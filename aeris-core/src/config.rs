//! Engine configuration
//!
//! All tunable parameters for a run. Parsing and defaulting from whatever
//! configuration source the host uses (ini file, NVS, CLI flags) happens
//! outside the engine; this struct is handed over once at startup and never
//! mutated afterwards.

use crate::constants::{DEFAULT_BURN_IN_SECONDS, HUMIDITY_BASELINE_PCT, HUMIDITY_WEIGHT};

/// Immutable per-run engine configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    // --- Calibration offsets ---
    /// Added to the converted temperature (°F)
    pub temperature_offset_f: f32,
    /// Added to the raw relative humidity (%RH)
    pub humidity_offset_pct: f32,
    /// Added to the raw station pressure (hPa)
    pub pressure_offset_hpa: f32,

    // --- Site ---
    /// Station elevation above sea level (m)
    ///
    /// `None` means not configured: sea-level pressure is then neither
    /// computed nor published.
    pub elevation_m: Option<f32>,

    // --- Baseline learning ---
    /// Warm-up duration before the gas baseline is frozen (seconds)
    pub burn_in_seconds: u32,

    // --- Scoring ---
    /// Reference humidity treated as optimal indoor air (%RH)
    pub humidity_baseline_pct: f32,
    /// Share of the composite score carried by humidity (0.0-1.0)
    pub humidity_weight: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Offsets
            temperature_offset_f: 0.0,
            humidity_offset_pct: 0.0,
            pressure_offset_hpa: 0.0,

            // Site
            elevation_m: None,

            // Baseline learning
            burn_in_seconds: DEFAULT_BURN_IN_SECONDS,

            // Scoring: 25:75 humidity-to-gas balance around 40 %RH
            humidity_baseline_pct: HUMIDITY_BASELINE_PCT,
            humidity_weight: HUMIDITY_WEIGHT,
        }
    }
}

impl EngineConfig {
    /// Warm-up duration in engine timestamp units (ms)
    pub fn burn_in_ms(&self) -> u64 {
        self.burn_in_seconds as u64 * crate::constants::MS_PER_SECOND
    }
}
