//! Narrative-generation seam.
//!
//! The synthesiser depends on the [`NarrativeGenerator`] trait only; the
//! surrounding system injects a concrete backend (typically a hosted
//! text-generation model). [`TemplateNarrative`] is the deterministic
//! offline implementation used by the CLI and as a test double baseline.

use async_trait::async_trait;
use matru_types::{EnvironmentalReading, RiskLevel};
use serde::Serialize;

/// Everything a backend needs to write the justification and categorised
/// recommendations for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeContext {
    pub patient_name: String,
    pub clinical_flags: Vec<String>,
    pub environmental_flags: Vec<String>,
    pub reading: EnvironmentalReading,
    pub final_score: f64,
    pub risk_level: RiskLevel,
    /// Rule-based guidance supplied as grounding for the backend.
    pub baseline_guidance: Vec<String>,
}

/// A backend's response: one justification paragraph that must cite the
/// literal temperature and AQI values, plus three categorised
/// recommendation lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeGuidance {
    pub justification: String,
    pub dietary_plan: Vec<String>,
    pub safety_protocols: Vec<String>,
    pub monitoring: Vec<String>,
}

/// Narrative backend failures, classified so the synthesiser can word its
/// fallback accordingly.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative backend quota exhausted: {0}")]
    QuotaExceeded(String),
    #[error("narrative generation failed: {0}")]
    Generation(String),
}

impl NarrativeError {
    /// Classifies a raw backend error message.
    ///
    /// Rate-limit and quota signals (`429`, `quota`, `rate limit`,
    /// `RESOURCE_EXHAUSTED`) map to [`NarrativeError::QuotaExceeded`];
    /// everything else to [`NarrativeError::Generation`].
    pub fn from_backend_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("429")
            || lowered.contains("quota")
            || lowered.contains("rate limit")
            || lowered.contains("resource_exhausted")
        {
            NarrativeError::QuotaExceeded(message)
        } else {
            NarrativeError::Generation(message)
        }
    }
}

/// External text-generation collaborator.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, context: &NarrativeContext) -> Result<NarrativeGuidance, NarrativeError>;
}

/// Deterministic offline backend.
///
/// Composes the justification and categorised recommendations from the
/// context alone, with no external call, and never fails.
#[derive(Debug, Default, Clone)]
pub struct TemplateNarrative;

impl TemplateNarrative {
    pub fn new() -> Self {
        Self
    }

    fn justification(context: &NarrativeContext) -> String {
        let clinical_summary = if context.clinical_flags.is_empty() {
            "no clinical risk flags".to_string()
        } else {
            context.clinical_flags.join("; ")
        };

        if context.environmental_flags.is_empty() {
            format!(
                "The {:.1}/10 score ({}) for {} is driven by {}. The local {:.1}°C temperature \
                 and {:.1} AQI were analysed and are currently within safe limits, adding no \
                 additional risk.",
                context.final_score,
                context.risk_level,
                context.patient_name,
                clinical_summary,
                context.reading.temperature_c,
                context.reading.air_quality_index,
            )
        } else {
            format!(
                "The {:.1}/10 score ({}) for {} is driven by {}, compounded by environmental \
                 conditions ({}) at {:.1}°C ambient temperature and {:.1} AQI.",
                context.final_score,
                context.risk_level,
                context.patient_name,
                clinical_summary,
                context.environmental_flags.join("; "),
                context.reading.temperature_c,
                context.reading.air_quality_index,
            )
        }
    }

    fn dietary_plan(context: &NarrativeContext) -> Vec<String> {
        let mut plan: Vec<String> = context
            .baseline_guidance
            .iter()
            .filter(|entry| {
                let entry = entry.to_lowercase();
                ["salt", "iron", "glycemic", "meals", "diet", "sugars", "tea", "supplement"]
                    .iter()
                    .any(|kw| entry.contains(kw))
            })
            .cloned()
            .collect();
        if plan.is_empty() {
            plan.push(
                "Maintain a balanced diet with plenty of seasonal vegetables and fruits."
                    .to_string(),
            );
        }
        plan
    }

    fn safety_protocols(context: &NarrativeContext) -> Vec<String> {
        let mut protocols = Vec::new();
        for flag in &context.environmental_flags {
            if flag.contains("Heat") {
                protocols.push(format!(
                    "Avoid outdoors between 11 AM and 4 PM due to {:.1}°C heat index.",
                    context.reading.heat_index_c
                ));
            }
            if flag.contains("PM2.5") {
                protocols.push(format!(
                    "Stay indoors or wear an N95 mask; AQI is currently {:.1}.",
                    context.reading.air_quality_index
                ));
            }
            if flag.contains("Toxin") {
                protocols.push(
                    "Avoid known chemical-exposure sources and ventilate living spaces."
                        .to_string(),
                );
            }
        }
        if protocols.is_empty() {
            protocols
                .push("No additional environmental precautions required today.".to_string());
        }
        protocols
    }

    fn monitoring(context: &NarrativeContext) -> Vec<String> {
        let mut actions = Vec::new();
        for flag in &context.clinical_flags {
            if flag.contains("Hypertension") && !actions.iter().any(|a: &String| a.contains("blood pressure")) {
                actions.push(
                    "Check blood pressure daily; notify the doctor if systolic exceeds 140."
                        .to_string(),
                );
            }
            if flag.contains("Anemia") && !actions.iter().any(|a: &String| a.contains("hemoglobin")) {
                actions.push("Recheck hemoglobin within two weeks.".to_string());
            }
            if (flag.contains("Glucose") || flag.contains("Diabetes"))
                && !actions.iter().any(|a: &String| a.contains("glucose"))
            {
                actions.push("Log fasting glucose every morning before breakfast.".to_string());
            }
        }
        if actions.is_empty() {
            actions.push("Continue routine antenatal check-ups.".to_string());
        }
        actions
    }
}

#[async_trait]
impl NarrativeGenerator for TemplateNarrative {
    async fn generate(
        &self,
        context: &NarrativeContext,
    ) -> Result<NarrativeGuidance, NarrativeError> {
        Ok(NarrativeGuidance {
            justification: Self::justification(context),
            dietary_plan: Self::dietary_plan(context),
            safety_protocols: Self::safety_protocols(context),
            monitoring: Self::monitoring(context),
        })
    }
}
