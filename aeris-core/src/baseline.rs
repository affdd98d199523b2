//! Gas-Resistance Baseline Estimation
//!
//! ## Overview
//!
//! The air quality score is relative, not absolute: it measures deviation
//! from a "clean air" gas resistance learned on-site during an initial
//! warm-up window. This module owns that learning.
//!
//! The estimator is a two-state machine:
//!
//! ```text
//! WarmingUp ──(elapsed >= burn_in)──▶ Complete
//! ```
//!
//! The transition is one-way and encoded structurally: the trailing sample
//! window only exists in `WarmingUp`, the baseline scalar only in
//! `Complete`, so there is no way to keep accumulating into a frozen
//! baseline or to read a baseline that does not exist yet.
//!
//! ## Acceptance Rules
//!
//! - Samples with `heater_stable == false` are silently dropped; they never
//!   enter the window. The gas plate reads garbage until its heater settles.
//! - Elapsed time is wall-clock and advances regardless of acceptance. A
//!   noisy sensor does not stretch the warm-up; it just contributes fewer
//!   samples to the average.
//! - At transition the baseline is the arithmetic mean of whatever the
//!   window retained (at most the last 50 accepted samples). If nothing was
//!   ever accepted the estimator fails with `InsufficientBurnInData` rather
//!   than inventing a zero baseline.

use crate::constants::{GAS_WINDOW_SIZE, MS_PER_SECOND};
use crate::errors::{EngineError, EngineResult};
use crate::sample::RawSample;
use crate::window::SampleWindow;

/// Externally visible estimator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselinePhase {
    /// Still collecting burn-in samples
    WarmingUp,
    /// Baseline frozen; scoring may begin
    Complete,
}

/// Internal tagged state - window and baseline never coexist
#[derive(Debug, Clone)]
enum State {
    WarmingUp {
        window: SampleWindow<GAS_WINDOW_SIZE>,
    },
    Complete {
        baseline_ohms: f32,
    },
}

/// Learns the gas-resistance baseline over a fixed warm-up window
#[derive(Debug, Clone)]
pub struct BaselineEstimator {
    state: State,
    burn_in_ms: u64,
}

impl BaselineEstimator {
    /// Create an estimator that completes after `burn_in_ms` of wall-clock time
    pub fn new(burn_in_ms: u64) -> Self {
        Self {
            state: State::WarmingUp {
                window: SampleWindow::new(),
            },
            burn_in_ms,
        }
    }

    /// Feed one sample, then check for warm-up completion
    ///
    /// `elapsed_ms` is wall-clock time since the estimator's first tick.
    /// In `Complete` this is a no-op. The only error is
    /// `InsufficientBurnInData`, raised exactly once at a transition with
    /// an empty window.
    pub fn accept(&mut self, sample: &RawSample, elapsed_ms: u64) -> EngineResult<()> {
        if let State::WarmingUp { window } = &mut self.state {
            if sample.heater_stable {
                window.push(sample.gas_resistance_ohms);
            }
        }

        self.advance(elapsed_ms)
    }

    /// Check for warm-up completion without a sample
    ///
    /// Used on ticks where the driver had nothing to offer - the clock
    /// still advances, so the transition must not wait for a stable read.
    pub fn advance(&mut self, elapsed_ms: u64) -> EngineResult<()> {
        let State::WarmingUp { window } = &self.state else {
            return Ok(());
        };

        if elapsed_ms < self.burn_in_ms {
            return Ok(());
        }

        let baseline_ohms = window.mean().ok_or(EngineError::InsufficientBurnInData {
            elapsed_s: (elapsed_ms / MS_PER_SECOND) as u32,
        })?;

        #[cfg(feature = "log")]
        log::info!(
            "burn-in complete: gas baseline {:.0} Ohms from {} samples",
            baseline_ohms,
            window.len()
        );

        self.state = State::Complete { baseline_ohms };
        Ok(())
    }

    /// Current phase
    pub fn phase(&self) -> BaselinePhase {
        match self.state {
            State::WarmingUp { .. } => BaselinePhase::WarmingUp,
            State::Complete { .. } => BaselinePhase::Complete,
        }
    }

    /// Whether the baseline has been frozen
    pub fn is_complete(&self) -> bool {
        self.phase() == BaselinePhase::Complete
    }

    /// The learned baseline (Ohms), once `Complete`
    pub fn baseline(&self) -> Option<f32> {
        match self.state {
            State::WarmingUp { .. } => None,
            State::Complete { baseline_ohms } => Some(baseline_ohms),
        }
    }

    /// Number of samples currently retained (0 once complete)
    pub fn samples_retained(&self) -> usize {
        match &self.state {
            State::WarmingUp { window } => window.len(),
            State::Complete { .. } => 0,
        }
    }
}
