//! Error types for settings translation.

use thiserror::Error;

/// Errors raised while formatting a settings value for the slicer profile.
///
/// Both variants mean the value fails its key's constraint. Emitting it
/// anyway could corrupt the downstream profile, so the whole translation
/// fails instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// Value has the wrong type or is not in the key's choice set.
    #[error("unsupported value for {key}: expected {expected}, got {value}")]
    UnsupportedValue {
        /// Internal key name.
        key: &'static str,
        /// What the key accepts.
        expected: String,
        /// The rejected value, rendered for diagnostics.
        value: String,
    },

    /// Numeric value outside the key's range.
    #[error("unsupported value for {key}: {value} is outside {min}..={max}")]
    OutOfRange {
        /// Internal key name.
        key: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Profile header field contains a quote, bracket or line break.
    #[error("invalid profile {field} {value:?}: contains a quote, bracket or line break")]
    InvalidHeader {
        /// `name` or `inherits`.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
}

/// Result type for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SettingsError::UnsupportedValue {
            key: "supportType",
            expected: "one of None, Normal, Tree".to_string(),
            value: "\"Organic\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported value for supportType: expected one of None, Normal, Tree, got \"Organic\""
        );

        let err = SettingsError::OutOfRange {
            key: "infillDensity",
            value: 140.0,
            min: 0.0,
            max: 100.0,
        };
        assert!(err.to_string().contains("140"));
    }
}
