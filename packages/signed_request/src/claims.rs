//! Decoded signed request payloads.
//!
//! [`Claims`] can only be obtained from a successful verification. A payload
//! decoded without checking its signature is an [`UnverifiedClaims`], and
//! there is no conversion from one to the other.

use serde::Serialize;
use serde_json::{Map, Value};
use std::{borrow::Cow, fmt};

/// The only signing algorithm the canvas platform uses for signed requests.
pub const ALGORITHM_HMAC_SHA256: &str = "HMAC-SHA256";

/// Claim carrying the signing algorithm.
pub const CLAIM_ALGORITHM: &str = "algorithm";
/// Claim carrying the platform user id; absent until the user authorizes the app.
pub const CLAIM_USER_ID: &str = "user_id";
/// Claim carrying the user's access token.
pub const CLAIM_OAUTH_TOKEN: &str = "oauth_token";
/// Claim carrying the issue time (unix seconds).
pub const CLAIM_ISSUED_AT: &str = "issued_at";
/// Claim carrying the access token expiry (unix seconds, 0 for offline tokens).
pub const CLAIM_EXPIRES: &str = "expires";

/// Whether `algorithm` names HMAC-SHA256, ignoring ASCII case.
pub(crate) fn is_supported_algorithm(algorithm: &str) -> bool {
    algorithm.eq_ignore_ascii_case(ALGORITHM_HMAC_SHA256)
}

/// Authenticated claims from a verified signed request.
#[derive(Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Claims {
    map: Map<String, Value>,
}

impl Claims {
    /// Only the verifier constructs trusted claims.
    pub(crate) fn from_verified(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// The `algorithm` claim as sent.
    #[must_use]
    pub fn algorithm(&self) -> Option<&str> {
        self.map.get(CLAIM_ALGORITHM).and_then(Value::as_str)
    }

    /// The platform user id.
    ///
    /// Accepted as either a JSON string or an integer.
    #[must_use]
    pub fn user_id(&self) -> Option<Cow<'_, str>> {
        match self.map.get(CLAIM_USER_ID)? {
            Value::String(id) if !id.is_empty() => Some(Cow::Borrowed(id.as_str())),
            Value::Number(id) if id.is_u64() || id.is_i64() => Some(Cow::Owned(id.to_string())),
            _ => None,
        }
    }

    /// The user's access token, if the user has authorized the app.
    #[must_use]
    pub fn oauth_token(&self) -> Option<&str> {
        self.map
            .get(CLAIM_OAUTH_TOKEN)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Issue time in unix seconds.
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.map.get(CLAIM_ISSUED_AT).and_then(Value::as_i64)
    }

    /// Access token expiry in unix seconds.
    #[must_use]
    pub fn expires(&self) -> Option<i64> {
        self.map.get(CLAIM_EXPIRES).and_then(Value::as_i64)
    }

    /// Any claim by name, uninterpreted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// All claims.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// Consume into the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }
}

impl PartialEq<Map<String, Value>> for Claims {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        &self.map == other
    }
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Claims").field(&Redacted(&self.map)).finish()
    }
}

/// Claims decoded without any algorithm or signature check.
///
/// For diagnostics only: nothing here has been authenticated.
#[derive(Clone, PartialEq)]
pub struct UnverifiedClaims {
    map: Map<String, Value>,
}

impl UnverifiedClaims {
    pub(crate) fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// The `algorithm` claim as sent.
    #[must_use]
    pub fn algorithm(&self) -> Option<&str> {
        self.map.get(CLAIM_ALGORITHM).and_then(Value::as_str)
    }

    /// Any claim by name, uninterpreted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// All claims.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }
}

impl fmt::Debug for UnverifiedClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnverifiedClaims")
            .field(&Redacted(&self.map))
            .finish()
    }
}

/// Debug view of a claims map with the access token masked.
struct Redacted<'a>(&'a Map<String, Value>);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.0 {
            if key == CLAIM_OAUTH_TOKEN {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Claims {
        match value {
            Value::Object(map) => Claims::from_verified(map),
            _ => panic!("test claims must be an object"),
        }
    }

    #[test]
    fn test_algorithm_comparison_ignores_ascii_case() {
        assert!(is_supported_algorithm("HMAC-SHA256"));
        assert!(is_supported_algorithm("hmac-sha256"));
        assert!(is_supported_algorithm("Hmac-Sha256"));
        assert!(!is_supported_algorithm("HS256"));
        assert!(!is_supported_algorithm("HMAC-SHA256 "));
        assert!(!is_supported_algorithm(""));
    }

    #[test]
    fn test_user_id_accepts_string_and_integer() {
        let c = claims(json!({"user_id": "100001234567890"}));
        assert_eq!(c.user_id().as_deref(), Some("100001234567890"));

        let c = claims(json!({"user_id": 42}));
        assert_eq!(c.user_id().as_deref(), Some("42"));

        let c = claims(json!({"user_id": ""}));
        assert_eq!(c.user_id(), None);

        let c = claims(json!({"user_id": 4.2}));
        assert_eq!(c.user_id(), None);
    }

    #[test]
    fn test_typed_accessors() {
        let c = claims(json!({
            "algorithm": "HMAC-SHA256",
            "oauth_token": "AAAB",
            "issued_at": 1_300_000_000,
            "expires": 0,
            "user": {"country": "us", "locale": "en_US"}
        }));
        assert_eq!(c.algorithm(), Some("HMAC-SHA256"));
        assert_eq!(c.oauth_token(), Some("AAAB"));
        assert_eq!(c.issued_at(), Some(1_300_000_000));
        assert_eq!(c.expires(), Some(0));
        assert_eq!(c.get("user").and_then(|u| u.get("locale")), Some(&json!("en_US")));
        assert_eq!(c.get("missing"), None);
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let c = claims(json!({"user_id": "42", "oauth_token": "very-secret-token"}));
        let rendered = format!("{c:?}");
        assert!(rendered.contains("42"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("very-secret-token"));

        let u = UnverifiedClaims::new(c.clone().into_map());
        assert!(!format!("{u:?}").contains("very-secret-token"));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let c = claims(json!({"algorithm": "HMAC-SHA256", "user_id": "42"}));
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value, json!({"algorithm": "HMAC-SHA256", "user_id": "42"}));
    }
}
