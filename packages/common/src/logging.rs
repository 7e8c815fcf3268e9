//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of sensitive data
//! and proper integration with the standard log crate.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs, including rejection reasons
    /// - `RUST_LOG=info` - Enable info and above (recommended for production)
    /// - `RUST_LOG=peas_signed_request=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log authentication events securely
    ///
    /// User identifiers are hashed for privacy while maintaining traceability
    pub fn log_auth_event(event: &str, user_id: Option<&str>, success: bool) {
        if success {
            let user_hash = user_id.map_or_else(|| "anonymous".to_string(), Self::secure_hash_key);
            info!("Authentication succeeded: {event} (user_hash: {user_hash})");
        } else {
            warn!("Authentication failed: {event}");
        }
    }

    /// Log a rejected credential by its reason label only.
    ///
    /// The credential itself never reaches the log.
    pub fn log_rejection(operation: &str, reason: &str) {
        debug!("Credential rejected: {operation} (reason: {reason})");
    }

    /// Log a configuration problem by setting name, never by value
    pub fn log_config_error(setting: &str, problem: &str) {
        warn!("Configuration error: {setting} ({problem})");
    }

    /// Cryptographically secure key hashing for logging
    ///
    /// Returns the first 12 hex characters of the SHA-256 digest.
    fn secure_hash_key(key: &str) -> String {
        let hex_hash = hex::encode(Sha256::digest(key.as_bytes()));
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_key_hashing() {
        LoggingTransformer::init_test();

        let hash1 = LoggingTransformer::secure_hash_key("100001234567890");
        let hash2 = LoggingTransformer::secure_hash_key("100009876543210");

        assert_eq!(hash1.len(), 13);
        assert!(hash1.starts_with('#'));
        assert_ne!(hash1, hash2);
        assert!(!hash1.contains("100001234567890"));
    }

    #[test]
    fn test_hashing_is_stable() {
        assert_eq!(
            LoggingTransformer::secure_hash_key("42"),
            LoggingTransformer::secure_hash_key("42")
        );
    }

    #[test]
    fn test_logging_helpers_do_not_panic() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_auth_event("canvas_signed_request", Some("42"), true);
        LoggingTransformer::log_auth_event("canvas_signed_request", None, true);
        LoggingTransformer::log_auth_event("canvas_signed_request", None, false);
        LoggingTransformer::log_rejection("signed_request_verify", "signature_mismatch");
        LoggingTransformer::log_config_error("PEAS_FB_APP_SECRET", "missing");
    }
}
