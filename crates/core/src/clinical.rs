//! Clinical-vitals scoring.
//!
//! An additive point system over maternal vitals: each triggered condition
//! adds points and a flag, severe conditions stack on top of their milder
//! form, and the total is clamped to 10.0. Flags are appended in a fixed
//! order so identical vitals always produce the identical assessment.

use matru_types::{ClinicalAssessment, ClinicalVitals};

use crate::constants::*;
use crate::error::{AssessmentError, AssessmentResult};

/// Plausibility bounds for scorer input. Values inside these bounds, however
/// abnormal, are scored rather than rejected.
fn validate(vitals: &ClinicalVitals) -> AssessmentResult<()> {
    if !vitals.weight_kg.is_finite() || !vitals.hemoglobin.is_finite() {
        return Err(AssessmentError::InvalidInput(
            "weight and hemoglobin must be finite numbers".into(),
        ));
    }
    if !(40..=300).contains(&vitals.systolic_bp) {
        return Err(AssessmentError::InvalidInput(format!(
            "systolic blood pressure out of range: {} mmHg",
            vitals.systolic_bp
        )));
    }
    if !(20..=200).contains(&vitals.diastolic_bp) {
        return Err(AssessmentError::InvalidInput(format!(
            "diastolic blood pressure out of range: {} mmHg",
            vitals.diastolic_bp
        )));
    }
    if !(20.0..=300.0).contains(&vitals.weight_kg) {
        return Err(AssessmentError::InvalidInput(format!(
            "weight out of range: {} kg",
            vitals.weight_kg
        )));
    }
    if vitals.hemoglobin <= 0.0 || vitals.hemoglobin > 25.0 {
        return Err(AssessmentError::InvalidInput(format!(
            "hemoglobin out of range: {} g/dL",
            vitals.hemoglobin
        )));
    }
    if !(10..=1000).contains(&vitals.glucose) {
        return Err(AssessmentError::InvalidInput(format!(
            "glucose out of range: {} mg/dL",
            vitals.glucose
        )));
    }
    if !(1..=45).contains(&vitals.gestational_age_weeks) {
        return Err(AssessmentError::InvalidInput(format!(
            "gestational age out of range: {} weeks",
            vitals.gestational_age_weeks
        )));
    }
    Ok(())
}

/// Scores maternal vitals for clinical risks such as preeclampsia, anemia
/// and gestational diabetes.
///
/// Deterministic and side-effect free. Returns a score in [1.0, 10.0] and
/// the ordered list of triggered flags. Fails only on implausible input
/// (see [`AssessmentError::InvalidInput`]).
pub fn assess_clinical(vitals: &ClinicalVitals) -> AssessmentResult<ClinicalAssessment> {
    validate(vitals)?;

    let mut score = BASE_CLINICAL_SCORE;
    let mut flags = Vec::new();

    if vitals.systolic_bp >= HYPERTENSION_SYSTOLIC || vitals.diastolic_bp >= HYPERTENSION_DIASTOLIC
    {
        score += 3.0;
        flags.push("Hypertension Level 1".to_string());
    }
    if vitals.systolic_bp >= SEVERE_HYPERTENSION_SYSTOLIC
        || vitals.diastolic_bp >= SEVERE_HYPERTENSION_DIASTOLIC
    {
        score += 5.0;
        flags.push("Severe Hypertension (Preeclampsia Risk)".to_string());
    }

    if vitals.hemoglobin < ANEMIA_HEMOGLOBIN {
        score += 2.0;
        flags.push("Anemia Detected".to_string());
    }
    if vitals.hemoglobin < SEVERE_ANEMIA_HEMOGLOBIN {
        score += 4.0;
        flags.push("Severe Anemia".to_string());
    }

    if vitals.glucose > ELEVATED_GLUCOSE {
        score += 2.0;
        flags.push("Elevated Blood Glucose".to_string());
    }
    if vitals.glucose > GESTATIONAL_DIABETES_GLUCOSE {
        score += 4.0;
        flags.push("Possible Gestational Diabetes".to_string());
    }

    if let Some(note) = vitals.symptom_note.as_deref() {
        let note = note.trim();
        if !note.is_empty() {
            score += 1.5;
            flags.push(format!("Reported Symptoms: {note}"));
        }
    }

    let score = score.min(MAX_RISK_SCORE);
    tracing::debug!(score, flag_count = flags.len(), "clinical scoring complete");

    Ok(ClinicalAssessment { score, flags })
}
