//! Unit conversions
//!
//! Pure, stateless mappings from raw sensor fields plus user offsets into
//! calibrated physical quantities. Inputs are always well-formed numbers
//! from the driver's own compensation, so there are no error paths here.

use crate::constants::SEALEVEL_DIVISOR_M_PER_HPA;

/// Celsius to Fahrenheit with the user's calibration offset applied
pub fn temperature_f(raw_c: f32, offset_f: f32) -> f32 {
    raw_c * 9.0 / 5.0 + 32.0 + offset_f
}

/// Relative humidity with the user's calibration offset applied
pub fn humidity_pct(raw_pct: f32, offset_pct: f32) -> f32 {
    raw_pct + offset_pct
}

/// Station (absolute) pressure with the user's calibration offset applied
pub fn pressure_absolute_hpa(raw_hpa: f32, offset_hpa: f32) -> f32 {
    raw_hpa + offset_hpa
}

/// Sea-level pressure from station pressure and site elevation
///
/// Uses the linear approximation `station + elevation / 9.2`, good to a
/// fraction of a hPa for the elevations where people live. Callers only
/// invoke this when an elevation is actually configured.
pub fn pressure_sealevel_hpa(absolute_hpa: f32, elevation_m: f32) -> f32 {
    absolute_hpa + elevation_m / SEALEVEL_DIVISOR_M_PER_HPA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion() {
        assert_eq!(temperature_f(0.0, 0.0), 32.0);
        assert_eq!(temperature_f(100.0, 0.0), 212.0);
        assert_eq!(temperature_f(20.0, 1.5), 69.5);
    }

    #[test]
    fn offsets_are_additive() {
        assert_eq!(humidity_pct(45.0, -3.0), 42.0);
        assert_eq!(pressure_absolute_hpa(1013.2, 0.8), 1014.0);
    }

    #[test]
    fn sealevel_correction_is_elevation_over_9_2() {
        // Elevations whose correction lands on a representable value make
        // the round trip bit-exact; arbitrary elevations are covered by a
        // property test with a one-ulp tolerance.
        for elevation in [0.0_f32, 92.0, 460.0] {
            let absolute = 1000.0;
            let sealevel = pressure_sealevel_hpa(absolute, elevation);
            assert_eq!(sealevel - absolute, elevation / 9.2);
        }
    }

    #[test]
    fn sealevel_handles_below_sea_level_sites() {
        let sealevel = pressure_sealevel_hpa(1000.0, -46.0);
        assert!(sealevel < 1000.0);
        assert!((sealevel - (1000.0 - 5.0)).abs() < 1e-3);
    }
}
