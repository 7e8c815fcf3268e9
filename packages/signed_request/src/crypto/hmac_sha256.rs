//! HMAC-SHA256 operations for signed request signing and verification

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over raw bytes
#[must_use]
pub fn hmac_sha256_sign(data: &[u8], secret: &[u8]) -> [u8; 32] {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        unreachable!("HMAC accepts keys of any length");
    };
    mac.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// Check `signature` against the HMAC-SHA256 of `data` in constant time.
///
/// A signature of the wrong length is a mismatch, not an error.
#[must_use]
pub fn hmac_sha256_verify(data: &[u8], secret: &[u8], signature: &[u8]) -> bool {
    let expected = hmac_sha256_sign(data, secret);
    expected.as_slice().ct_eq(signature).into()
}
