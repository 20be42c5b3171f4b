use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PatientName, RiskLevel};

/// Maternal vitals captured at assessment time.
///
/// Immutable input, constructed once per assessment request. Values are
/// plain numerics; range validation happens in the scorer, which rejects
/// malformed readings rather than silently scoring them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalVitals {
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: i32,
    /// Diastolic blood pressure in mmHg.
    pub diastolic_bp: i32,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Blood hemoglobin in g/dL.
    pub hemoglobin: f64,
    /// Blood glucose in mg/dL.
    pub glucose: i32,
    /// Gestational age in completed weeks.
    pub gestational_age_weeks: i32,
    /// Free-text symptom note reported by the patient, if any.
    #[serde(default)]
    pub symptom_note: Option<String>,
}

/// Environmental conditions at the patient's location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    /// Ambient temperature in °C.
    pub temperature_c: f64,
    /// Heat index (apparent temperature) in °C.
    pub heat_index_c: f64,
    /// Air-quality index (PM2.5 based, dimensionless).
    pub air_quality_index: f64,
    /// Chemical/toxin exposure index on a 0–10 scale.
    pub toxin_index: f64,
}

/// One complete assessment request as handed to the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub patient: PatientName,
    pub vitals: ClinicalVitals,
    pub reading: EnvironmentalReading,
}

/// Output of the clinical scorer: a 0–10 score plus ordered flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    pub score: f64,
    pub flags: Vec<String>,
}

/// Output of the environmental scorer: ordered hazard flags, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalAssessment {
    pub flags: Vec<String>,
}

/// Terminal, immutable output of the risk-assessment workflow.
///
/// Handed to the persistence collaborator and never mutated afterwards.
/// `guidance` maps a category name to an ordered recommendation list; a
/// `BTreeMap` keeps the record deterministic so identical inputs produce
/// identical records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeAssessment {
    /// Final 0–10 risk score after environmental amplification.
    pub score: f64,
    pub risk_level: RiskLevel,
    /// How environmental factors raised the score; `None` when they did not.
    pub environmental_impact: Option<String>,
    /// Narrative clinical justification for the score and level.
    pub justification: String,
    pub guidance: BTreeMap<String, Vec<String>>,
    pub clinical_flags: Vec<String>,
    pub environmental_flags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vitals_symptom_note_defaults_to_none() {
        let json = r#"{
            "systolic_bp": 120,
            "diastolic_bp": 80,
            "weight_kg": 65.0,
            "hemoglobin": 12.0,
            "glucose": 95,
            "gestational_age_weeks": 28
        }"#;
        let vitals: ClinicalVitals = serde_json::from_str(json).expect("valid vitals");
        assert_eq!(vitals.symptom_note, None);
    }

    #[test]
    fn composite_round_trips_through_json() {
        let mut guidance = BTreeMap::new();
        guidance.insert(
            "Fallback Guidance".to_string(),
            vec!["Continue standard prenatal supplements as prescribed.".to_string()],
        );
        let record = CompositeAssessment {
            score: 4.5,
            risk_level: RiskLevel::Moderate,
            environmental_impact: None,
            justification: "Anemia drives the score.".to_string(),
            guidance,
            clinical_flags: vec!["Anemia Detected".to_string()],
            environmental_flags: vec![],
        };

        let json = serde_json::to_string(&record).expect("serialize");
        let back: CompositeAssessment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }
}
