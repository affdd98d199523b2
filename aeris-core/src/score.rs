//! Air Quality Scoring
//!
//! ## The Score
//!
//! The composite score blends two deviations from reference conditions:
//!
//! - **Humidity** (25 of 100 points): distance of the current relative
//!   humidity from the 40 %RH indoor optimum, falling off linearly toward
//!   either extreme.
//! - **Gas resistance** (75 of 100 points): the current gas plate
//!   resistance relative to the learned clean-air baseline. Resistance
//!   below baseline means more volatile compounds, so a worse score;
//!   resistance at or above baseline earns the full 75 points.
//!
//! Both sub-scores are piecewise linear and sign-dependent. The sum is not
//! clamped: under extreme offsets (humidity far above 100 - baseline, or a
//! calibration offset pushing humidity negative) the score can leave the
//! [0, 100] range. That matches the reference behavior and is left as-is
//! rather than silently bounded.
//!
//! ## Preconditions
//!
//! Scoring only makes sense once the baseline estimator has completed; a
//! zero baseline would divide by zero and is rejected as
//! `DivisionUndefined`, which indicates a phase-ordering bug in the caller
//! rather than a runtime condition to recover from.

use crate::config::EngineConfig;
use crate::constants::{HUMIDITY_BASELINE_PCT, HUMIDITY_WEIGHT};
use crate::errors::{EngineError, EngineResult};

/// Computes the composite air quality score
///
/// Pure and stateless; the baselines and weighting are fixed for a run.
#[derive(Debug, Clone)]
pub struct AirQualityScorer {
    humidity_baseline_pct: f32,
    humidity_weight: f32,
}

impl Default for AirQualityScorer {
    fn default() -> Self {
        Self {
            humidity_baseline_pct: HUMIDITY_BASELINE_PCT,
            humidity_weight: HUMIDITY_WEIGHT,
        }
    }
}

impl AirQualityScorer {
    /// Build a scorer from the engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            humidity_baseline_pct: config.humidity_baseline_pct,
            humidity_weight: config.humidity_weight,
        }
    }

    /// Composite score for one calibrated sample against the learned baseline
    pub fn score(
        &self,
        gas_resistance_ohms: f32,
        gas_baseline_ohms: f32,
        humidity_pct: f32,
    ) -> EngineResult<f32> {
        if gas_baseline_ohms == 0.0 {
            return Err(EngineError::DivisionUndefined);
        }

        let hum_score = self.humidity_sub_score(humidity_pct);
        let gas_score = self.gas_sub_score(gas_resistance_ohms, gas_baseline_ohms);

        Ok(hum_score + gas_score)
    }

    /// Humidity sub-score: distance from the humidity baseline
    ///
    /// Above baseline the headroom is `100 - baseline`; below it the
    /// headroom is the baseline itself. Either way the sub-score scales
    /// linearly to at most `weight * 100` points.
    fn humidity_sub_score(&self, humidity_pct: f32) -> f32 {
        let baseline = self.humidity_baseline_pct;
        let max_points = self.humidity_weight * 100.0;
        let hum_offset = humidity_pct - baseline;

        if hum_offset > 0.0 {
            (100.0 - baseline - hum_offset) / (100.0 - baseline) * max_points
        } else {
            (baseline + hum_offset) / baseline * max_points
        }
    }

    /// Gas sub-score: distance from the gas baseline
    ///
    /// Only resistance *below* the baseline is penalized; cleaner-than-
    /// baseline air cannot earn bonus points.
    fn gas_sub_score(&self, gas_resistance_ohms: f32, gas_baseline_ohms: f32) -> f32 {
        let max_points = 100.0 - self.humidity_weight * 100.0;
        let gas_offset = gas_baseline_ohms - gas_resistance_ohms;

        if gas_offset > 0.0 {
            (gas_resistance_ohms / gas_baseline_ohms) * max_points
        } else {
            max_points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_conditions_score_100() {
        let scorer = AirQualityScorer::default();

        // Humidity exactly at baseline (offset 0 takes the else branch:
        // 40/40 * 25 = 25) and gas exactly at baseline (offset 0 is not
        // > 0, so the flat 75 branch applies).
        let score = scorer.score(120_000.0, 120_000.0, 40.0).unwrap();
        assert_eq!(score, 100.0);
    }

    #[test]
    fn gas_above_baseline_stays_flat() {
        let scorer = AirQualityScorer::default();

        let at = scorer.score(120_000.0, 120_000.0, 40.0).unwrap();
        let above = scorer.score(150_000.0, 120_000.0, 40.0).unwrap();
        assert_eq!(at, above);
    }

    #[test]
    fn gas_below_baseline_scales_down() {
        let scorer = AirQualityScorer::default();

        // Half the baseline resistance earns half the 75 gas points
        let score = scorer.score(60_000.0, 120_000.0, 40.0).unwrap();
        assert_eq!(score, 25.0 + 0.5 * 75.0);
    }

    #[test]
    fn gas_sub_score_is_monotonic_below_baseline() {
        let scorer = AirQualityScorer::default();
        let baseline = 120_000.0;

        let mut previous = f32::NEG_INFINITY;
        for gas in [10_000.0, 40_000.0, 80_000.0, 119_000.0, 120_000.0, 200_000.0] {
            let score = scorer.score(gas, baseline, 40.0).unwrap();
            assert!(
                score >= previous,
                "score regressed at gas={gas}: {score} < {previous}"
            );
            previous = score;
        }
    }

    #[test]
    fn humid_side_of_baseline() {
        let scorer = AirQualityScorer::default();

        // hum_offset = 20 > 0: (100 - 40 - 20) / (100 - 40) * 25
        let score = scorer.score(120_000.0, 120_000.0, 60.0).unwrap();
        let expected_hum = (100.0 - 40.0 - 20.0) / (100.0 - 40.0) * 25.0;
        assert_eq!(score, expected_hum + 75.0);
    }

    #[test]
    fn dry_side_of_baseline() {
        let scorer = AirQualityScorer::default();

        // hum_offset = -20: (40 - 20) / 40 * 25
        let score = scorer.score(120_000.0, 120_000.0, 20.0).unwrap();
        let expected_hum = (40.0 - 20.0) / 40.0 * 25.0;
        assert_eq!(score, expected_hum + 75.0);
    }

    #[test]
    fn score_is_not_clamped() {
        let scorer = AirQualityScorer::default();

        // A negative calibrated humidity drives the sub-score negative;
        // the formula is preserved unclamped.
        let score = scorer.score(120_000.0, 120_000.0, -50.0).unwrap();
        assert!(score < 75.0);
        let expected_hum = (40.0 - 90.0) / 40.0 * 25.0;
        assert_eq!(score, expected_hum + 75.0);
    }

    #[test]
    fn zero_baseline_is_a_contract_violation() {
        let scorer = AirQualityScorer::default();
        let err = scorer.score(120_000.0, 0.0, 40.0).unwrap_err();
        assert_eq!(err, EngineError::DivisionUndefined);
    }
}
