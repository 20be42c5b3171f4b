//! Rule-based fallback guidance.
//!
//! A deterministic recommendation builder used both as the default guidance
//! when the narrative backend is unavailable and as grounding context fed to
//! it. Independent of the synthesiser so it can be tested on its own.

/// Guidance category populated from the narrative backend's dietary plan.
pub const DIETARY_CATEGORY: &str = "Clinical Dietary Plan";
/// Guidance category populated from the backend's safety protocols.
pub const SAFETY_CATEGORY: &str = "Environmental Safety Protocols";
/// Guidance category populated from the backend's monitoring actions.
pub const MONITORING_CATEGORY: &str = "Medication & Monitoring";
/// Sole guidance category when the narrative backend failed.
pub const FALLBACK_CATEGORY: &str = "Fallback Guidance";

/// Builds the rule-based recommendation list for a set of risk flags and a
/// weather description.
///
/// Rules are evaluated in fixed order (heat first, then one pass over the
/// flags), and each matching flag appends its full recommendation block, so
/// two hypertension flags yield the low-salt block twice. If nothing
/// matches, a generic wellness pair is returned.
pub fn fallback_guidance(flags: &[String], weather_description: &str) -> Vec<String> {
    let mut advice = Vec::new();

    if weather_description.contains("Heatwave") || weather_description.contains("Heat") {
        advice.push(
            "EXTREME HEAT WARNING: Increase hydration immediately. Drink at least 3-4 liters of water."
                .to_string(),
        );
        advice.push("Avoid outdoor activities between 11 AM and 4 PM.".to_string());
        advice.push("Wear loose, light-colored cotton clothing.".to_string());
    }

    for flag in flags {
        if flag.contains("Hypertension") {
            advice.push("Reduce salt intake to < 5g per day.".to_string());
            advice.push("Avoid processed foods, pickles, and papads.".to_string());
            advice.push(
                "Incorporate potassium-rich foods like bananas and spinach.".to_string(),
            );
        }
        if flag.contains("Anemia") {
            advice.push(
                "Increase iron intake: Eat leafy greens, jaggery, dates, and legumes.".to_string(),
            );
            advice.push(
                "Combine iron-rich foods with Vitamin C (lemon, amla) for better absorption."
                    .to_string(),
            );
            advice.push("Avoid tea/coffee immediately after meals.".to_string());
        }
        if flag.contains("Glucose") || flag.contains("Diabetes") {
            advice.push("Switch to low glycemic index foods (whole grains, oats).".to_string());
            advice.push("Avoid direct sugars, sweets, and sweetened beverages.".to_string());
            advice.push("Eat small, frequent meals rather than large heavy meals.".to_string());
        }
    }

    if advice.is_empty() {
        advice.push(
            "Maintain a balanced diet with plenty of seasonal vegetables and fruits.".to_string(),
        );
        advice.push("Continue standard prenatal supplements as prescribed.".to_string());
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_matches_yields_generic_wellness_pair() {
        let advice = fallback_guidance(&[], "Temp: 26.0°C, AQI: 60.0, Toxins: 2.0/10");
        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("balanced diet"));
        assert!(advice[1].contains("prenatal supplements"));
    }

    #[test]
    fn heat_in_weather_description_triggers_hydration_block() {
        let advice = fallback_guidance(&[], "Heatwave, Temp: 42.0°C, AQI: 60.0, Toxins: 2.0/10");
        assert_eq!(advice.len(), 3);
        assert!(advice[0].starts_with("EXTREME HEAT WARNING"));
    }

    #[test]
    fn hypertension_flag_appends_low_salt_block() {
        let advice = fallback_guidance(
            &flags(&["Hypertension Level 1"]),
            "Temp: 26.0°C, AQI: 60.0, Toxins: 2.0/10",
        );
        assert_eq!(advice.len(), 3);
        assert!(advice[0].contains("salt intake"));
    }

    #[test]
    fn matching_flags_append_without_deduplication() {
        // Both hypertension flags match, so the low-salt block appears twice.
        let advice = fallback_guidance(
            &flags(&[
                "Hypertension Level 1",
                "Severe Hypertension (Preeclampsia Risk)",
            ]),
            "Temp: 26.0°C, AQI: 60.0, Toxins: 2.0/10",
        );
        assert_eq!(advice.len(), 6);
        assert_eq!(advice[0], advice[3]);
    }

    #[test]
    fn diabetes_flag_matches_glucose_rule() {
        let advice = fallback_guidance(
            &flags(&["Possible Gestational Diabetes"]),
            "Temp: 26.0°C, AQI: 60.0, Toxins: 2.0/10",
        );
        assert_eq!(advice.len(), 3);
        assert!(advice[0].contains("glycemic"));
    }

    #[test]
    fn rules_compose_in_fixed_order() {
        let advice = fallback_guidance(
            &flags(&["Anemia Detected", "Elevated Blood Glucose"]),
            "Heatwave, Temp: 43.0°C, AQI: 200.0, Toxins: 7.0/10",
        );
        // Heat block, then anemia block, then glucose block.
        assert_eq!(advice.len(), 9);
        assert!(advice[0].starts_with("EXTREME HEAT WARNING"));
        assert!(advice[3].contains("iron intake"));
        assert!(advice[6].contains("glycemic"));
    }
}
