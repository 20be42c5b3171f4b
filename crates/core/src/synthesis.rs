//! Guidance synthesis: the fan-in stage of the workflow.
//!
//! Merges the two scorer outputs into the final composite score and level,
//! asks the narrative backend for guidance, and degrades to the rule-based
//! fallback when that call fails. This is the only stage with an external
//! dependency and therefore the only one with a failure path; the failure is
//! caught here and never propagates.

use std::collections::BTreeMap;

use matru_types::{
    ClinicalAssessment, CompositeAssessment, EnvironmentalAssessment, EnvironmentalReading,
    PatientName, RiskLevel,
};

use crate::constants::{
    AQI_MULTIPLIER_BONUS, EXTREME_HEAT_INDEX, HAZARDOUS_AQI, HEAT_MULTIPLIER_BONUS,
    HIGH_TOXIN_INDEX, MAX_RISK_SCORE, TOXIN_MULTIPLIER_BONUS,
};
use crate::guidance::{
    fallback_guidance, DIETARY_CATEGORY, FALLBACK_CATEGORY, MONITORING_CATEGORY, SAFETY_CATEGORY,
};
use crate::narrative::{NarrativeContext, NarrativeError, NarrativeGenerator};

/// Fixed justification when the backend failed on quota or rate limits.
pub const FALLBACK_QUOTA_JUSTIFICATION: &str = "System fallback activated: the narrative backend \
    has exceeded its quota or rate limits. Standard clinical rules applied without extended \
    context.";

/// Fixed justification for any other backend failure.
pub const FALLBACK_GENERIC_JUSTIFICATION: &str =
    "System fallback activated. Standard clinical rules applied without extended context.";

/// Merges scorer outputs and produces the terminal assessment record.
pub struct GuidanceSynthesiser<G> {
    generator: G,
}

impl<G: NarrativeGenerator> GuidanceSynthesiser<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Produces the composite assessment for one workflow run.
    ///
    /// Environmental factors only ever amplify the clinical score: the
    /// multiplier starts at 1.0 and each triggered hazard adds its bonus,
    /// so the composite is always at least the clinical score (clamped
    /// at 10.0).
    pub async fn synthesise(
        &self,
        patient: &PatientName,
        clinical: &ClinicalAssessment,
        environment: &EnvironmentalAssessment,
        reading: &EnvironmentalReading,
    ) -> CompositeAssessment {
        let heat = reading.heat_index_c > EXTREME_HEAT_INDEX;
        let aqi = reading.air_quality_index > HAZARDOUS_AQI;
        let toxin = reading.toxin_index > HIGH_TOXIN_INDEX;

        // Additive across triggered hazards, not compounding.
        let mut multiplier = 1.0;
        if heat {
            multiplier += HEAT_MULTIPLIER_BONUS;
        }
        if aqi {
            multiplier += AQI_MULTIPLIER_BONUS;
        }
        if toxin {
            multiplier += TOXIN_MULTIPLIER_BONUS;
        }

        let final_score = (clinical.score * multiplier).min(MAX_RISK_SCORE);
        debug_assert!(final_score >= clinical.score);
        let risk_level = RiskLevel::from_score(final_score);

        let environmental_impact = if final_score > clinical.score {
            let mut reasons = Vec::new();
            if heat {
                reasons.push(format!("{:.1}°C Heatwave", reading.heat_index_c));
            }
            if aqi {
                reasons.push(format!("{:.1} AQI", reading.air_quality_index));
            }
            if toxin {
                reasons.push("high chemical exposure".to_string());
            }
            Some(format!(
                "Score increased by +{:.1} due to {}.",
                final_score - clinical.score,
                reasons.join(" and ")
            ))
        } else {
            None
        };

        let combined_flags: Vec<String> = clinical
            .flags
            .iter()
            .chain(environment.flags.iter())
            .cloned()
            .collect();
        let weather_description = summarise_weather(reading);
        let baseline = fallback_guidance(&combined_flags, &weather_description);

        let context = NarrativeContext {
            patient_name: patient.as_str().to_string(),
            clinical_flags: clinical.flags.clone(),
            environmental_flags: environment.flags.clone(),
            reading: *reading,
            final_score,
            risk_level,
            baseline_guidance: baseline.clone(),
        };

        // Single try, no retry: one failed call is terminal for this request
        // so a rate-limited backend cannot stall the workflow.
        let (justification, guidance) = match self.generator.generate(&context).await {
            Ok(response) => {
                let mut guidance = BTreeMap::new();
                guidance.insert(DIETARY_CATEGORY.to_string(), response.dietary_plan);
                guidance.insert(SAFETY_CATEGORY.to_string(), response.safety_protocols);
                guidance.insert(MONITORING_CATEGORY.to_string(), response.monitoring);
                (response.justification, guidance)
            }
            Err(err) => {
                tracing::warn!(error = %err, "narrative backend failed, using rule-based fallback");
                let justification = match err {
                    NarrativeError::QuotaExceeded(_) => FALLBACK_QUOTA_JUSTIFICATION,
                    NarrativeError::Generation(_) => FALLBACK_GENERIC_JUSTIFICATION,
                }
                .to_string();
                let mut guidance = BTreeMap::new();
                guidance.insert(FALLBACK_CATEGORY.to_string(), baseline);
                (justification, guidance)
            }
        };

        CompositeAssessment {
            score: final_score,
            risk_level,
            environmental_impact,
            justification,
            guidance,
            clinical_flags: clinical.flags.clone(),
            environmental_flags: environment.flags.clone(),
        }
    }
}

/// One-line weather summary handed to the fallback builder and the backend.
///
/// Carries the "Heatwave" token exactly when the heat index exceeds the
/// extreme-heat threshold, so the builder's heat rule can fire.
fn summarise_weather(reading: &EnvironmentalReading) -> String {
    let base = format!(
        "Temp: {:.1}°C, AQI: {:.1}, Toxins: {:.1}/10",
        reading.temperature_c, reading.air_quality_index, reading.toxin_index
    );
    if reading.heat_index_c > EXTREME_HEAT_INDEX {
        format!("Heatwave, {base}")
    } else {
        base
    }
}
