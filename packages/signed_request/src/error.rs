//! Error types for signed request handling

use thiserror::Error;

/// Why a signed request was not accepted.
///
/// The variants exist for diagnostic logging. Anything user-facing must
/// collapse them into a single "unauthenticated" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// Missing delimiter, bad base64url, or a payload that is not a JSON object
    #[error("malformed signed request")]
    MalformedToken,

    /// `algorithm` claim absent or not HMAC-SHA256
    #[error("unsupported signed request algorithm")]
    UnsupportedAlgorithm,

    /// Signature does not match the payload under the configured secret
    #[error("signed request signature mismatch")]
    SignatureMismatch,
}

impl Rejection {
    /// Stable snake_case label for log lines and metrics keys
    #[must_use]
    pub const fn kind_label(self) -> &'static str {
        match self {
            Rejection::MalformedToken => "malformed_token",
            Rejection::UnsupportedAlgorithm => "unsupported_algorithm",
            Rejection::SignatureMismatch => "signature_mismatch",
        }
    }
}

/// Errors produced while minting a signed request
#[derive(Debug, Error)]
pub enum SignError {
    /// Claims could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Claims serialized to something other than an object
    #[error("Claims must serialize to a JSON object")]
    NotAnObject,

    /// Claims carry an `algorithm` other than HMAC-SHA256
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Errors produced while loading the canvas application configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Setting not present
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    /// Setting present but blank
    #[error("Empty configuration value: {0}")]
    Empty(&'static str),

    /// Setting present but unusable
    #[error("Invalid configuration value for {setting}: {reason}")]
    Invalid {
        /// Name of the offending setting
        setting: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Result type for verification
pub type VerifyResult<T> = std::result::Result<T, Rejection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_are_distinct() {
        let labels = [
            Rejection::MalformedToken.kind_label(),
            Rejection::UnsupportedAlgorithm.kind_label(),
            Rejection::SignatureMismatch.kind_label(),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_config_error_names_setting_only() {
        let err = ConfigError::Empty("PEAS_FB_APP_SECRET");
        assert_eq!(err.to_string(), "Empty configuration value: PEAS_FB_APP_SECRET");
    }
}
