//! Facebook Canvas signed request verification for Play With Your Peas
//!
//! This crate provides:
//! - HMAC-SHA256 verification of `signed_request` tokens
//! - Minting of tokens for fixtures and tooling
//! - Explicit canvas application configuration
//! - The authenticated / anonymous / denied decision for the canvas page
//!
//! ```
//! use peas_signed_request::{sign, verify};
//! use serde_json::json;
//!
//! let token = sign(&json!({"user_id": "42"}), b"s3cr3t").unwrap();
//! let claims = verify(&token, b"s3cr3t").unwrap();
//! assert_eq!(claims.user_id().as_deref(), Some("42"));
//! ```

mod builder;
pub mod canvas;
pub mod claims;
pub mod config;
pub(crate) mod crypto;
mod encoding;
mod error;
mod signer;
mod verifier;

pub use builder::{SignedRequest, SignedRequestBuilder};
pub use canvas::{AuthenticatedSession, CanvasView};
pub use claims::{Claims, UnverifiedClaims, ALGORITHM_HMAC_SHA256};
pub use config::{AppSecret, CanvasConfig};
pub use error::*;
pub use signer::sign;
pub use verifier::{peek, verify};
