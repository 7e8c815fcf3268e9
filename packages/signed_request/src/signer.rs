//! Signed request minting, the inverse of [`crate::verify`].

use crate::{
    claims::{is_supported_algorithm, ALGORITHM_HMAC_SHA256, CLAIM_ALGORITHM},
    crypto::hmac_sha256::hmac_sha256_sign,
    encoding::encode_segment,
    error::SignError,
};
use serde::Serialize;
use serde_json::Value;

/// Produce a `<signature>.<payload>` token for `claims` under `secret`.
///
/// `algorithm` is set to HMAC-SHA256 when the claims omit it.
///
/// # Errors
///
/// Fails if the claims do not serialize to a JSON object or name another
/// algorithm.
pub fn sign<T: Serialize + ?Sized>(claims: &T, secret: &[u8]) -> Result<String, SignError> {
    let Value::Object(mut map) = serde_json::to_value(claims)? else {
        return Err(SignError::NotAnObject);
    };

    match map.get(CLAIM_ALGORITHM) {
        None => {
            map.insert(CLAIM_ALGORITHM.to_string(), Value::from(ALGORITHM_HMAC_SHA256));
        }
        Some(Value::String(alg)) if is_supported_algorithm(alg) => {}
        Some(other) => return Err(SignError::UnsupportedAlgorithm(other.to_string())),
    }

    let payload_json = serde_json::to_vec(&map)?;
    let payload = encode_segment(&payload_json);
    let signature = encode_segment(&hmac_sha256_sign(payload.as_bytes(), secret));
    Ok(format!("{signature}.{payload}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify;
    use serde_json::json;

    #[derive(Serialize)]
    struct CanvasClaims<'a> {
        user_id: &'a str,
        oauth_token: &'a str,
        issued_at: i64,
    }

    #[test]
    fn test_inserts_algorithm_when_absent() {
        let token = sign(&json!({"user_id": "42"}), b"s3cr3t").unwrap();
        let claims = verify(&token, b"s3cr3t").unwrap();
        assert_eq!(claims.algorithm(), Some(ALGORITHM_HMAC_SHA256));
    }

    #[test]
    fn test_keeps_case_variant_algorithm() {
        let token = sign(&json!({"algorithm": "hmac-sha256"}), b"s3cr3t").unwrap();
        let claims = verify(&token, b"s3cr3t").unwrap();
        assert_eq!(claims.algorithm(), Some("hmac-sha256"));
    }

    #[test]
    fn test_rejects_other_algorithms() {
        let err = sign(&json!({"algorithm": "HS256"}), b"s3cr3t").unwrap_err();
        assert!(matches!(err, SignError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_rejects_non_object_claims() {
        let err = sign(&json!(["user_id", "42"]), b"s3cr3t").unwrap_err();
        assert!(matches!(err, SignError::NotAnObject));
        let err = sign("plain string", b"s3cr3t").unwrap_err();
        assert!(matches!(err, SignError::NotAnObject));
    }

    #[test]
    fn test_signs_typed_claims() {
        let token = sign(
            &CanvasClaims {
                user_id: "100001234567890",
                oauth_token: "AAAB",
                issued_at: 1_300_000_000,
            },
            b"s3cr3t",
        )
        .unwrap();
        let claims = verify(&token, b"s3cr3t").unwrap();
        assert_eq!(claims.oauth_token(), Some("AAAB"));
        assert_eq!(claims.issued_at(), Some(1_300_000_000));
    }

    #[test]
    fn test_token_shape() {
        let token = sign(&json!({"user_id": "42"}), b"s3cr3t").unwrap();
        let (signature, payload) = token.split_once('.').unwrap();
        // 32-byte MAC, unpadded
        assert_eq!(signature.len(), 43);
        assert!(!payload.contains('='));
        assert!(!token.contains('+') && !token.contains('/'));
    }
}
