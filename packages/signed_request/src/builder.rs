//! Builder entry point for signed request operations

use crate::{
    claims::{Claims, UnverifiedClaims},
    config::AppSecret,
    error::{SignError, VerifyResult},
    signer, verifier,
};
use serde::Serialize;

/// Main entry point for signed request operations
pub struct SignedRequest;

impl SignedRequest {
    /// Bind operations to an application secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> SignedRequestBuilder {
        SignedRequestBuilder::from_secret(AppSecret::new(secret))
    }
}

/// Signed request operations bound to a secret
#[derive(Debug, Clone)]
pub struct SignedRequestBuilder {
    secret: AppSecret,
}

impl SignedRequestBuilder {
    pub(crate) fn from_secret(secret: AppSecret) -> Self {
        Self { secret }
    }

    /// Verify a signed request - see [`crate::verify`]
    ///
    /// # Errors
    ///
    /// Returns the reason the token was rejected.
    pub fn verify(&self, token: impl AsRef<str>) -> VerifyResult<Claims> {
        verifier::verify(token.as_ref(), self.secret.expose())
    }

    /// Decode without authenticating - see [`crate::peek`]
    ///
    /// # Errors
    ///
    /// Returns [`crate::Rejection::MalformedToken`] for undecodable tokens.
    pub fn peek(&self, token: impl AsRef<str>) -> VerifyResult<UnverifiedClaims> {
        verifier::peek(token.as_ref())
    }

    /// Mint a signed request - see [`crate::sign`]
    ///
    /// # Errors
    ///
    /// Fails for claims that are not a JSON object or name another algorithm.
    pub fn sign<T: Serialize + ?Sized>(&self, claims: &T) -> Result<String, SignError> {
        signer::sign(claims, self.secret.expose())
    }
}
