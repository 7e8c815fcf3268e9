//! Signed request verification

use crate::{
    claims::{is_supported_algorithm, Claims, UnverifiedClaims, CLAIM_ALGORITHM},
    crypto::hmac_sha256::hmac_sha256_verify,
    encoding::decode_segment,
    error::{Rejection, VerifyResult},
};
use serde_json::{Map, Value};

/// A structurally valid token, not yet authenticated.
struct ParsedToken<'a> {
    signature: Vec<u8>,
    /// Payload exactly as received; the MAC is computed over this text.
    payload_segment: &'a str,
    claims: Map<String, Value>,
}

fn parse(token: &str) -> VerifyResult<ParsedToken<'_>> {
    let (signature_segment, payload_segment) =
        token.split_once('.').ok_or(Rejection::MalformedToken)?;

    let signature = decode_segment(signature_segment).map_err(|_| Rejection::MalformedToken)?;
    let payload = decode_segment(payload_segment).map_err(|_| Rejection::MalformedToken)?;
    let claims: Map<String, Value> =
        serde_json::from_slice(&payload).map_err(|_| Rejection::MalformedToken)?;

    Ok(ParsedToken {
        signature,
        payload_segment,
        claims,
    })
}

fn authenticate(token: &str, secret: &[u8]) -> VerifyResult<Claims> {
    let parsed = parse(token)?;

    // Algorithm is pinned before any MAC work.
    let algorithm_ok = parsed
        .claims
        .get(CLAIM_ALGORITHM)
        .and_then(Value::as_str)
        .is_some_and(is_supported_algorithm);
    if !algorithm_ok {
        return Err(Rejection::UnsupportedAlgorithm);
    }

    if !hmac_sha256_verify(parsed.payload_segment.as_bytes(), secret, &parsed.signature) {
        return Err(Rejection::SignatureMismatch);
    }

    Ok(Claims::from_verified(parsed.claims))
}

/// Verify a signed request and return its claims.
///
/// The token is `<signature>.<payload>`, both base64url. The signature must
/// be the HMAC-SHA256 of the payload segment text under `secret`, and the
/// payload must declare `"algorithm": "HMAC-SHA256"`.
///
/// # Errors
///
/// Returns the [`Rejection`] describing why the token was refused. Callers
/// exposing the outcome to end users should not distinguish between kinds.
pub fn verify(token: &str, secret: &[u8]) -> VerifyResult<Claims> {
    let result = authenticate(token, secret);
    match &result {
        Ok(_) => tracing::trace!("signed request verified"),
        Err(rejection) => {
            tracing::debug!(reason = rejection.kind_label(), "signed request rejected");
        }
    }
    result
}

/// Decode a signed request's payload without authenticating it.
///
/// # Errors
///
/// Returns [`Rejection::MalformedToken`] if the token cannot be split or
/// decoded.
pub fn peek(token: &str) -> VerifyResult<UnverifiedClaims> {
    parse(token).map(|parsed| UnverifiedClaims::new(parsed.claims))
}
