/// Errors that can occur when creating a validated patient name.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    /// The input was empty or contained only whitespace
    #[error("patient name cannot be empty")]
    Empty,
    /// The input exceeded the maximum allowed length after trimming
    #[error("patient name exceeds 120 characters")]
    TooLong,
    /// The input contained line breaks or other control characters
    #[error("patient name contains control characters")]
    ControlCharacters,
}

/// Maximum accepted length of a patient display name, in characters.
pub const MAX_NAME_LEN: usize = 120;

/// A patient display name that is guaranteed non-empty.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character, carries no control characters, and stays within
/// [`MAX_NAME_LEN`]. Leading and trailing whitespace is trimmed during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientName(String);

impl PatientName {
    /// Creates a new `PatientName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. Returns
    /// `Err(NameError)` if the trimmed result is empty, too long, or
    /// contains control characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(NameError::ControlCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PatientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PatientName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = PatientName::new("  Asha Devi  ").expect("valid name");
        assert_eq!(name.as_str(), "Asha Devi");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(PatientName::new(""), Err(NameError::Empty)));
        assert!(matches!(PatientName::new("   \t "), Err(NameError::Empty)));
    }

    #[test]
    fn rejects_control_characters() {
        let err = PatientName::new("Asha\nDevi").expect_err("expected rejection");
        assert!(matches!(err, NameError::ControlCharacters));
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(PatientName::new(long), Err(NameError::TooLong)));
    }

    #[test]
    fn deserialize_revalidates() {
        let ok: PatientName = serde_json::from_str("\" Meera \"").expect("valid name");
        assert_eq!(ok.as_str(), "Meera");

        let err = serde_json::from_str::<PatientName>("\"  \"");
        assert!(err.is_err());
    }
}
