//! Clinical and environmental thresholds used by the scorers and the
//! synthesiser. Kept in one place so the combination rule stays auditable.

/// Baseline clinical score before any risk condition fires.
pub const BASE_CLINICAL_SCORE: f64 = 1.0;

/// Ceiling for every risk score, clinical or composite.
pub const MAX_RISK_SCORE: f64 = 10.0;

// Stage 1 hypertension (mmHg).
pub const HYPERTENSION_SYSTOLIC: i32 = 140;
pub const HYPERTENSION_DIASTOLIC: i32 = 90;

// Severe hypertension / preeclampsia risk (mmHg). Stacks with stage 1.
pub const SEVERE_HYPERTENSION_SYSTOLIC: i32 = 160;
pub const SEVERE_HYPERTENSION_DIASTOLIC: i32 = 110;

// Anemia cut-offs (g/dL). Severe stacks with the first.
pub const ANEMIA_HEMOGLOBIN: f64 = 11.0;
pub const SEVERE_ANEMIA_HEMOGLOBIN: f64 = 7.0;

// Glucose cut-offs (mg/dL). Gestational-diabetes stacks with elevated.
pub const ELEVATED_GLUCOSE: i32 = 140;
pub const GESTATIONAL_DIABETES_GLUCOSE: i32 = 200;

/// Heat index above which the environment counts as extreme heat (°C).
pub const EXTREME_HEAT_INDEX: f64 = 40.0;

/// AQI above which particulate pollution counts as hazardous.
pub const HAZARDOUS_AQI: f64 = 150.0;

/// Toxin-exposure index (0–10) above which exposure counts as high.
pub const HIGH_TOXIN_INDEX: f64 = 6.0;

// Environmental amplification bonuses, additive onto a 1.0 multiplier.
pub const HEAT_MULTIPLIER_BONUS: f64 = 0.3;
pub const AQI_MULTIPLIER_BONUS: f64 = 0.2;
pub const TOXIN_MULTIPLIER_BONUS: f64 = 0.2;
