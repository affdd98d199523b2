//! Integration tests for the calibration-and-scoring engine
//!
//! Exercises the complete flow - acquire, baseline learning, conversion,
//! scoring, publish gating - against scripted drivers and stepped clocks.

use aeris_core::{
    time::StepClock, AirQualityScorer, CalibratedRecord, EngineConfig, EngineResult, RawSample,
    RecordSink, SampleScheduler, SensorSource,
};

use proptest::prelude::*;

/// Driver that always returns the same stable sample
struct SteadySensor {
    sample: RawSample,
}

impl SensorSource for SteadySensor {
    fn read(&mut self) -> EngineResult<RawSample> {
        Ok(self.sample)
    }
}

/// Captures every record that passes the publish gate
#[derive(Default)]
struct RecordingSink {
    records: Vec<CalibratedRecord>,
}

impl RecordSink for RecordingSink {
    type Error = ();

    fn publish(&mut self, record: &CalibratedRecord) -> Result<(), ()> {
        self.records.push(*record);
        Ok(())
    }
}

fn steady(gas_ohms: f32, humidity_pct: f32) -> SteadySensor {
    SteadySensor {
        sample: RawSample {
            temperature_c: 20.0,
            humidity_pct,
            pressure_hpa: 1000.0,
            gas_resistance_ohms: gas_ohms,
            heater_stable: true,
        },
    }
}

#[test]
fn publishes_only_on_minute_boundaries_across_125_seconds() {
    let config = EngineConfig {
        burn_in_seconds: 30,
        ..EngineConfig::default()
    };
    let clock = StepClock::new(1000, 1000); // ticks at seconds 1..=125
    let mut scheduler =
        SampleScheduler::new(steady(120_000.0, 40.0), RecordingSink::default(), clock, config);

    for _ in 0..125 {
        scheduler.tick().unwrap();
    }

    let timestamps: Vec<u64> = scheduler
        .sink()
        .records
        .iter()
        .map(|r| r.timestamp)
        .collect();
    assert_eq!(timestamps, vec![60_000, 120_000]);
    assert_eq!(scheduler.stats().records_published, 2);
}

#[test]
fn steady_state_records_carry_score_and_baseline() {
    let config = EngineConfig {
        burn_in_seconds: 30,
        elevation_m: Some(92.0),
        ..EngineConfig::default()
    };
    let clock = StepClock::new(1000, 1000);
    let mut scheduler =
        SampleScheduler::new(steady(120_000.0, 40.0), RecordingSink::default(), clock, config);

    for _ in 0..65 {
        scheduler.tick().unwrap();
    }

    let records = &scheduler.sink().records;
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.timestamp, 60_000);
    assert_eq!(record.air_quality_score, Some(100.0));
    assert_eq!(record.gas_baseline_ohms, Some(120_000.0));
    assert_eq!(record.temperature_f, 68.0);
    assert_eq!(record.sealevel_pressure_hpa, Some(1000.0 + 92.0 / 9.2));
}

#[test]
fn interim_record_published_during_warm_up() {
    // Burn-in longer than the first minute: the record at second 60 is
    // interim (no score, no baseline), the one at second 120 is scored.
    let config = EngineConfig {
        burn_in_seconds: 90,
        ..EngineConfig::default()
    };
    let clock = StepClock::new(1000, 1000);
    let mut scheduler =
        SampleScheduler::new(steady(120_000.0, 40.0), RecordingSink::default(), clock, config);

    for _ in 0..125 {
        scheduler.tick().unwrap();
    }

    let records = &scheduler.sink().records;
    assert_eq!(records.len(), 2);
    assert!(records[0].is_interim());
    assert!(!records[1].is_interim());
    assert_eq!(records[1].air_quality_score, Some(100.0));
}

proptest! {
    #[test]
    fn window_never_exceeds_capacity_and_keeps_newest(
        samples in prop::collection::vec(1.0f32..1_000_000.0, 0..200)
    ) {
        let mut window = aeris_core::window::SampleWindow::<50>::new();
        for &s in &samples {
            window.push(s);
        }

        prop_assert!(window.len() <= 50);
        prop_assert_eq!(window.len(), samples.len().min(50));

        // Retained contents are exactly the most recent, in arrival order
        let expected: Vec<f32> = samples
            .iter()
            .copied()
            .skip(samples.len().saturating_sub(50))
            .collect();
        let actual: Vec<f32> = window.iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn gas_sub_score_is_monotonic_in_resistance(
        baseline in 1_000.0f32..500_000.0,
        gas_lo in 1.0f32..500_000.0,
        gas_hi in 1.0f32..500_000.0,
    ) {
        prop_assume!(gas_lo <= gas_hi);

        let scorer = AirQualityScorer::default();
        let lo = scorer.score(gas_lo, baseline, 40.0).unwrap();
        let hi = scorer.score(gas_hi, baseline, 40.0).unwrap();

        // More resistance means cleaner air: the score never decreases
        prop_assert!(hi >= lo);
    }

    #[test]
    fn sealevel_round_trip(
        absolute in 800.0f32..1100.0,
        elevation in -100.0f32..4000.0,
    ) {
        let sealevel = aeris_core::units::pressure_sealevel_hpa(absolute, elevation);
        let correction = elevation / 9.2;
        // One rounding step (the addition) separates the two sides
        prop_assert!((sealevel - absolute - correction).abs() <= absolute.abs() * f32::EPSILON);
    }
}
