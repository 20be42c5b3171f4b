use serde::{Deserialize, Serialize};

/// Categorical risk band for a composite assessment.
///
/// Serialised as the upper-case band name (`"LOW"`, `"MODERATE"`, `"HIGH"`,
/// `"CRITICAL"`), which is also the display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Maps a 0–10 composite score onto a risk band.
    ///
    /// Bands are checked in ascending order and each matching threshold
    /// overwrites the previous, so the highest matching band wins:
    /// below 4.0 is `Low`, 4.0 and above `Moderate`, 7.0 and above `High`,
    /// 9.0 and above `Critical`.
    pub fn from_score(score: f64) -> Self {
        let mut level = RiskLevel::Low;
        if score >= 4.0 {
            level = RiskLevel::Moderate;
        }
        if score >= 7.0 {
            level = RiskLevel::High;
        }
        if score >= 9.0 {
            level = RiskLevel::Critical;
        }
        level
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(6.9), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(7.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(8.9), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(9.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(10.0), RiskLevel::Critical);
    }

    #[test]
    fn serialises_upper_case() {
        let json = serde_json::to_string(&RiskLevel::Moderate).expect("serialize");
        assert_eq!(json, "\"MODERATE\"");
        let back: RiskLevel = serde_json::from_str("\"CRITICAL\"").expect("deserialize");
        assert_eq!(back, RiskLevel::Critical);
    }

    #[test]
    fn bands_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }
}
