//! Environmental-hazard scoring.
//!
//! Produces flags only. The amplification multiplier derived from the same
//! thresholds is owned by the synthesiser, so the combination rule lives in
//! one auditable place.

use matru_types::{EnvironmentalAssessment, EnvironmentalReading};

use crate::constants::{EXTREME_HEAT_INDEX, HAZARDOUS_AQI, HIGH_TOXIN_INDEX};
use crate::error::{AssessmentError, AssessmentResult};

fn validate(reading: &EnvironmentalReading) -> AssessmentResult<()> {
    let fields = [
        ("temperature", reading.temperature_c),
        ("heat index", reading.heat_index_c),
        ("air-quality index", reading.air_quality_index),
        ("toxin index", reading.toxin_index),
    ];
    for (label, value) in fields {
        if !value.is_finite() {
            return Err(AssessmentError::InvalidInput(format!(
                "{label} must be a finite number"
            )));
        }
    }
    if !(-90.0..=70.0).contains(&reading.temperature_c) {
        return Err(AssessmentError::InvalidInput(format!(
            "temperature out of range: {} °C",
            reading.temperature_c
        )));
    }
    if !(-90.0..=70.0).contains(&reading.heat_index_c) {
        return Err(AssessmentError::InvalidInput(format!(
            "heat index out of range: {} °C",
            reading.heat_index_c
        )));
    }
    if !(0.0..=1000.0).contains(&reading.air_quality_index) {
        return Err(AssessmentError::InvalidInput(format!(
            "air-quality index out of range: {}",
            reading.air_quality_index
        )));
    }
    if !(0.0..=10.0).contains(&reading.toxin_index) {
        return Err(AssessmentError::InvalidInput(format!(
            "toxin index out of range: {}/10",
            reading.toxin_index
        )));
    }
    Ok(())
}

/// Evaluates an environmental reading against the hazard thresholds.
///
/// Every threshold is checked independently (they are not mutually
/// exclusive) and flags are appended in a fixed order: heat, then air
/// quality, then toxin exposure. Deterministic and side-effect free.
pub fn assess_environment(
    reading: &EnvironmentalReading,
) -> AssessmentResult<EnvironmentalAssessment> {
    validate(reading)?;

    let mut flags = Vec::new();

    if reading.heat_index_c > EXTREME_HEAT_INDEX {
        flags.push(format!("Extreme Heat Index ({:.1}°C)", reading.heat_index_c));
    }
    if reading.air_quality_index > HAZARDOUS_AQI {
        flags.push(format!("High PM2.5 Levels ({:.1})", reading.air_quality_index));
    }
    if reading.toxin_index > HIGH_TOXIN_INDEX {
        flags.push(format!(
            "High Chemical/Toxin Exposure ({:.1}/10)",
            reading.toxin_index
        ));
    }

    tracing::debug!(flag_count = flags.len(), "environmental scoring complete");

    Ok(EnvironmentalAssessment { flags })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benign_reading() -> EnvironmentalReading {
        EnvironmentalReading {
            temperature_c: 26.0,
            heat_index_c: 30.0,
            air_quality_index: 60.0,
            toxin_index: 2.0,
        }
    }

    #[test]
    fn benign_reading_produces_no_flags() {
        let assessment = assess_environment(&benign_reading()).expect("valid reading");
        assert!(assessment.flags.is_empty());
    }

    #[test]
    fn all_hazards_flag_in_fixed_order() {
        let reading = EnvironmentalReading {
            temperature_c: 41.0,
            heat_index_c: 45.5,
            air_quality_index: 250.0,
            toxin_index: 8.2,
        };
        let assessment = assess_environment(&reading).expect("valid reading");
        assert_eq!(
            assessment.flags,
            vec![
                "Extreme Heat Index (45.5°C)".to_string(),
                "High PM2.5 Levels (250.0)".to_string(),
                "High Chemical/Toxin Exposure (8.2/10)".to_string(),
            ]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly at each threshold: nothing fires.
        let reading = EnvironmentalReading {
            temperature_c: 35.0,
            heat_index_c: 40.0,
            air_quality_index: 150.0,
            toxin_index: 6.0,
        };
        let assessment = assess_environment(&reading).expect("valid reading");
        assert!(assessment.flags.is_empty());
    }

    #[test]
    fn crossing_a_threshold_never_removes_a_flag() {
        let mut flag_count = 0;
        for aqi in [100.0, 151.0, 400.0] {
            let reading = EnvironmentalReading {
                air_quality_index: aqi,
                ..benign_reading()
            };
            let flags = assess_environment(&reading).expect("valid reading").flags;
            assert!(flags.len() >= flag_count);
            flag_count = flags.len();
        }
    }

    #[test]
    fn rejects_implausible_readings() {
        let cases = [
            EnvironmentalReading {
                heat_index_c: f64::NAN,
                ..benign_reading()
            },
            EnvironmentalReading {
                air_quality_index: -5.0,
                ..benign_reading()
            },
            EnvironmentalReading {
                toxin_index: 11.0,
                ..benign_reading()
            },
            EnvironmentalReading {
                temperature_c: 120.0,
                ..benign_reading()
            },
        ];
        for reading in cases {
            let err = assess_environment(&reading).expect_err("expected rejection");
            assert!(matches!(err, AssessmentError::InvalidInput(_)));
        }
    }
}
