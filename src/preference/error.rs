//! Preference parsing errors.

/// Error returned when a stored or user-supplied token is not a theme preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference '{token}' (expected light, dark or system)")]
pub struct ParsePreferenceError {
    token: String,
}

impl ParsePreferenceError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParsePreferenceError::new("sepia");
        let msg = err.to_string();
        assert!(msg.contains("sepia"));
        assert!(msg.contains("light, dark or system"));
    }

    #[test]
    fn test_parse_error_token() {
        let err = ParsePreferenceError::new("");
        assert_eq!(err.token(), "");
    }
}
