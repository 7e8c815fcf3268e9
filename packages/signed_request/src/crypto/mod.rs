//! Cryptographic primitives used by the signed request codec

pub mod hmac_sha256;
