//! # MatruKavach environmental sampling
//!
//! Derives an [`EnvironmentalReading`] from geographic coordinates. Until a
//! live AQI/weather feed is wired in, readings are sampled from two fixed
//! regimes: a polluted heatwave band and benign conditions everywhere else.
//! Sampling is generic over [`rand::Rng`] so tests can seed the generator.
//!
//! This crate produces workflow *input*; the workflow core never depends
//! on it.

use matru_types::EnvironmentalReading;
use rand::Rng;
use serde::Serialize;

/// Latitude band (exclusive) modelled as a polluted heatwave region.
const POLLUTED_BAND: (f64, f64) = (18.0, 20.0);

#[derive(Debug, thiserror::Error)]
pub enum EnviroError {
    #[error("coordinates out of range: lat {latitude}, lon {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// One sampled set of local conditions.
///
/// `reading` feeds the risk workflow; the remaining fields are display
/// context for the excluded UI and messaging collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentSample {
    pub reading: EnvironmentalReading,
    /// PM10 level, reported alongside the PM2.5-based AQI.
    pub pm10: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
    /// Short weather condition, e.g. "Clear Sky" or "Haze/Heatwave".
    pub condition: String,
    /// Human-readable advisory for the sampled conditions.
    pub advisory: String,
}

/// Samples local conditions for the given coordinates using the thread RNG.
pub fn sample_environment(latitude: f64, longitude: f64) -> Result<EnvironmentSample, EnviroError> {
    sample_environment_with(latitude, longitude, &mut rand::thread_rng())
}

/// Samples local conditions with a caller-supplied random generator.
pub fn sample_environment_with<R: Rng>(
    latitude: f64,
    longitude: f64,
    rng: &mut R,
) -> Result<EnvironmentSample, EnviroError> {
    if !latitude.is_finite()
        || !longitude.is_finite()
        || !(-90.0..=90.0).contains(&latitude)
        || !(-180.0..=180.0).contains(&longitude)
    {
        return Err(EnviroError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }

    let polluted = latitude > POLLUTED_BAND.0 && latitude < POLLUTED_BAND.1;
    tracing::debug!(latitude, longitude, polluted, "sampling environment");

    let sample = if polluted {
        EnvironmentSample {
            reading: EnvironmentalReading {
                temperature_c: rng.gen_range(30.0..38.0),
                heat_index_c: rng.gen_range(40.0..50.0),
                air_quality_index: rng.gen_range(150.0..300.0),
                toxin_index: rng.gen_range(6.5..9.0),
            },
            pm10: rng.gen_range(200.0..400.0),
            humidity_pct: rng.gen_range(70.0..90.0),
            condition: "Haze/Heatwave".to_string(),
            advisory: "Severe Heatwave and Pollution Alert".to_string(),
        }
    } else {
        EnvironmentSample {
            reading: EnvironmentalReading {
                temperature_c: rng.gen_range(25.0..30.0),
                heat_index_c: rng.gen_range(28.0..32.0),
                air_quality_index: rng.gen_range(30.0..80.0),
                toxin_index: rng.gen_range(0.5..4.0),
            },
            pm10: rng.gen_range(50.0..100.0),
            humidity_pct: rng.gen_range(50.0..70.0),
            condition: "Clear Sky".to_string(),
            advisory: "Conditions are stable".to_string(),
        }
    };

    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn polluted_band_exceeds_hazard_thresholds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let sample =
                sample_environment_with(19.1, 72.9, &mut rng).expect("valid coordinates");
            assert_eq!(sample.condition, "Haze/Heatwave");
            assert!(sample.reading.heat_index_c >= 40.0);
            assert!(sample.reading.air_quality_index >= 150.0);
            assert!(sample.reading.toxin_index > 6.0);
            assert!(sample.reading.toxin_index <= 10.0);
        }
    }

    #[test]
    fn benign_region_stays_within_safe_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let sample =
                sample_environment_with(51.5, -0.1, &mut rng).expect("valid coordinates");
            assert_eq!(sample.condition, "Clear Sky");
            assert!(sample.reading.heat_index_c < 40.0);
            assert!(sample.reading.air_quality_index < 150.0);
            assert!(sample.reading.toxin_index < 6.0);
        }
    }

    #[test]
    fn band_edges_are_exclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        for lat in [18.0, 20.0] {
            let sample = sample_environment_with(lat, 73.0, &mut rng).expect("valid coordinates");
            assert_eq!(sample.condition, "Clear Sky");
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut rng = StdRng::seed_from_u64(7);
        for (lat, lon) in [(91.0, 0.0), (-91.0, 0.0), (0.0, 181.0), (f64::NAN, 0.0)] {
            let err = sample_environment_with(lat, lon, &mut rng).expect_err("expected rejection");
            assert!(matches!(err, EnviroError::InvalidCoordinates { .. }));
        }
    }
}
