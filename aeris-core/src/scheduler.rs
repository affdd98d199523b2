//! Sample Scheduling and Publish Gating
//!
//! ## Overview
//!
//! The scheduler drives the whole engine: one `tick()` per second pulls a
//! raw sample from the driver, routes it by phase, and gates emission to
//! the publisher on a wall-clock minute boundary.
//!
//! ```text
//!        ┌──────────── every tick ───────────┐
//! Driver ─▶ read ─▶ phase? ──WarmingUp──▶ BaselineEstimator
//!                      │                      │ (minute boundary:
//!                      │                      ▼  interim record)
//!                      └────Complete───▶ convert + score
//!                                             │ (minute boundary:
//!                                             ▼  full record)
//!                                           Sink
//! ```
//!
//! ## Phases
//!
//! The phase split mirrors the estimator's state machine:
//!
//! 1. **Warm-up**: every sample feeds the baseline estimator. Stable
//!    samples that land on a minute boundary are published as interim
//!    records - converted units only, no score yet.
//! 2. **Steady-state**: stable samples become full calibrated records with
//!    an air quality score; unstable ones skip the tick (transient heater
//!    wobble is not fatal). Minute-boundary records go to the sink.
//!
//! ## Publish Gate
//!
//! The gate is wall-clock aligned: `floor(now_s) % 60 == 0`, not a tick
//! counter. A tick that lands off-boundary due to scheduling jitter simply
//! skips that minute's publication - acceptable drift, no catch-up logic.
//!
//! ## Error Handling
//!
//! A driver `SensorNotReady` is absorbed: the tick is skipped and the loop
//! proceeds. Sink failures are counted, not propagated - each publish is
//! fire-and-forget as far as the engine is concerned. The only error that
//! escapes `tick()` is a fatal one (`InsufficientBurnInData`), on which
//! `run()` halts so the host can surface a diagnostic.

use crate::baseline::{BaselineEstimator, BaselinePhase};
use crate::config::EngineConfig;
use crate::constants::{MS_PER_SECOND, PUBLISH_PERIOD_S};
use crate::errors::{EngineError, EngineResult};
use crate::sample::{CalibratedRecord, RecordSink, SensorSource};
use crate::score::AirQualityScorer;
use crate::time::{TimeSource, Timestamp};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No usable sample this tick (driver not ready, or heater unstable
    /// in steady-state); nothing was scored or published
    Skipped,
    /// Warm-up sample processed
    WarmingUp {
        /// Whether the sample entered the baseline window
        accepted: bool,
        /// Whether an interim record went to the sink
        published: bool,
    },
    /// Steady-state sample converted and scored
    Scored {
        /// The composite air quality score for this tick
        score: f32,
        /// Whether the full record went to the sink
        published: bool,
    },
}

/// Counters for the lifetime of a scheduler
#[derive(Debug, Default, Clone)]
pub struct SchedulerStats {
    /// Total ticks processed
    pub ticks: u64,
    /// Ticks skipped for lack of a usable sample
    pub ticks_skipped: u64,
    /// Records accepted by the sink
    pub records_published: u64,
    /// Records the sink refused
    pub publish_failures: u64,
}

/// Drives the acquire / convert / score / publish-gate cycle
///
/// Owns its collaborators and the estimator state exclusively; there is one
/// scheduler per sensor and it never crosses a thread boundary.
pub struct SampleScheduler<S, P, C> {
    sensor: S,
    sink: P,
    clock: C,
    config: EngineConfig,
    estimator: BaselineEstimator,
    scorer: AirQualityScorer,
    started_at: Option<Timestamp>,
    stats: SchedulerStats,
}

/// True when `timestamp` falls on a publish boundary
fn on_publish_boundary(timestamp: Timestamp) -> bool {
    (timestamp / MS_PER_SECOND) % PUBLISH_PERIOD_S == 0
}

impl<S, P, C> SampleScheduler<S, P, C>
where
    S: SensorSource,
    P: RecordSink,
    C: TimeSource,
{
    /// Create a scheduler; the warm-up clock starts on the first tick
    pub fn new(sensor: S, sink: P, clock: C, config: EngineConfig) -> Self {
        let estimator = BaselineEstimator::new(config.burn_in_ms());
        let scorer = AirQualityScorer::from_config(&config);

        Self {
            sensor,
            sink,
            clock,
            config,
            estimator,
            scorer,
            started_at: None,
            stats: SchedulerStats::default(),
        }
    }

    /// Process one tick: acquire, route by phase, publish if gated open
    ///
    /// Returns `Err` only for fatal conditions; a sensor that was not ready
    /// yields `Ok(TickOutcome::Skipped)` and the caller just ticks again.
    pub fn tick(&mut self) -> EngineResult<TickOutcome> {
        let now = self.clock.now();
        let started = *self.started_at.get_or_insert(now);
        let elapsed_ms = now.saturating_sub(started);

        self.stats.ticks += 1;

        let sample = match self.sensor.read() {
            Ok(sample) => sample,
            Err(EngineError::SensorNotReady { reason: _reason }) => {
                #[cfg(feature = "log")]
                log::debug!("tick skipped: {}", _reason);

                self.stats.ticks_skipped += 1;
                // Wall-clock time advances whether or not the driver
                // delivered; warm-up may still complete on this tick.
                self.estimator.advance(elapsed_ms)?;
                return Ok(TickOutcome::Skipped);
            }
            Err(other) => return Err(other),
        };

        if !self.estimator.is_complete() {
            let accepted = sample.heater_stable;
            self.estimator.accept(&sample, elapsed_ms)?;

            let mut published = false;
            if accepted && on_publish_boundary(now) {
                let record = CalibratedRecord::from_raw(&sample, &self.config, now);
                published = self.emit(&record);
            }

            return Ok(TickOutcome::WarmingUp { accepted, published });
        }

        if !sample.heater_stable {
            self.stats.ticks_skipped += 1;
            return Ok(TickOutcome::Skipped);
        }

        // Phase ordering guarantees a baseline here; its absence is the
        // same contract violation a zero baseline is.
        let baseline = self
            .estimator
            .baseline()
            .ok_or(EngineError::DivisionUndefined)?;

        let record = CalibratedRecord::from_raw(&sample, &self.config, now);
        let score = self
            .scorer
            .score(record.gas_resistance_ohms, baseline, record.humidity_pct)?;
        let record = record.with_score(score, baseline);

        let published = if on_publish_boundary(now) {
            self.emit(&record)
        } else {
            false
        };

        Ok(TickOutcome::Scored { score, published })
    }

    /// Run the loop at the nominal 1 Hz cadence (std only)
    ///
    /// Blocks the calling thread. Returns only when a tick fails with a
    /// fatal error; external termination (a signal) is expected to stop the
    /// process between ticks.
    #[cfg(feature = "std")]
    pub fn run(&mut self) -> EngineResult<()> {
        use crate::constants::SAMPLE_INTERVAL_MS;

        loop {
            self.tick()?;
            std::thread::sleep(std::time::Duration::from_millis(SAMPLE_INTERVAL_MS));
        }
    }

    fn emit(&mut self, record: &CalibratedRecord) -> bool {
        match self.sink.publish(record) {
            Ok(()) => {
                self.stats.records_published += 1;
                true
            }
            Err(_) => {
                #[cfg(feature = "log")]
                log::warn!("sink refused record at t={}; continuing", record.timestamp);

                self.stats.publish_failures += 1;
                false
            }
        }
    }

    /// Current engine phase
    pub fn phase(&self) -> BaselinePhase {
        self.estimator.phase()
    }

    /// The learned gas baseline, once warm-up completes
    pub fn baseline(&self) -> Option<f32> {
        self.estimator.baseline()
    }

    /// Lifetime counters
    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    /// Borrow the sink (e.g. to inspect a recording sink in tests)
    pub fn sink(&self) -> &P {
        &self.sink
    }
}
