//! Constants for the Aeris engine
//!
//! All numeric values used by the engine are defined here with their purpose
//! and source. Use these instead of magic numbers; names include units.

// ===== BASELINE LEARNING =====

/// Number of trailing gas-resistance samples retained for the baseline.
///
/// A short trailing window avoids bias from sensor drift during the initial
/// heater ramp while the averaging reduces single-sample noise.
///
/// Source: Bosch BME680 burn-in guidance (Pimoroni reference scripts)
pub const GAS_WINDOW_SIZE: usize = 50;

/// Default warm-up duration before the baseline is frozen (seconds).
///
/// Five minutes of heater-stable readings is enough for the gas plate to
/// reach a steady resistance in typical indoor air.
pub const DEFAULT_BURN_IN_SECONDS: u32 = 300;

// ===== SCORING =====

/// Reference relative humidity treated as optimal indoor air (%RH).
pub const HUMIDITY_BASELINE_PCT: f32 = 40.0;

/// Share of the composite score carried by humidity deviation.
///
/// Balance between humidity and gas readings is 25:75 (humidity:gas),
/// so the humidity sub-score tops out at 25 of 100 points.
pub const HUMIDITY_WEIGHT: f32 = 0.25;

// ===== PRESSURE =====

/// Linear sea-level correction divisor (metres of elevation per hPa).
///
/// Sea Level Pressure = Station Pressure + elevation / 9.2
///
/// Source: https://www.sandhurstweather.org.uk/barometric.pdf
pub const SEALEVEL_DIVISOR_M_PER_HPA: f32 = 9.2;

// ===== SCHEDULING =====

/// Milliseconds per second, for `Timestamp` arithmetic.
pub const MS_PER_SECOND: u64 = 1000;

/// Nominal delay between sensor polls (milliseconds).
pub const SAMPLE_INTERVAL_MS: u64 = 1000;

/// Publish gate period (seconds).
///
/// Records are emitted only on ticks whose wall-clock second is a multiple
/// of this period, independent of the per-second sampling cadence.
pub const PUBLISH_PERIOD_S: u64 = 60;
