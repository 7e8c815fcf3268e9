//! Canvas application configuration.
//!
//! The app id, secret and namespace travel together as a [`CanvasConfig`]
//! value handed to whoever needs them; nothing here is process-global.

use crate::{builder::SignedRequestBuilder, error::ConfigError};
use peas_common::LoggingTransformer;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable holding the platform application id.
pub const ENV_APP_ID: &str = "PEAS_FB_APP_ID";
/// Environment variable holding the application secret.
pub const ENV_APP_SECRET: &str = "PEAS_FB_APP_SECRET";
/// Environment variable holding the canvas namespace.
pub const ENV_NAMESPACE: &str = "PEAS_FB_NAMESPACE";

const CANVAS_BASE_URL: &str = "https://apps.facebook.com";

/// Application secret bytes, wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AppSecret(Vec<u8>);

impl AppSecret {
    /// Wrap secret bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    /// Raw secret bytes for MAC computation.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(<redacted>)")
    }
}

/// Credentials and identity of the canvas application.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    app_id: String,
    app_secret: AppSecret,
    namespace: String,
}

impl CanvasConfig {
    /// Build a configuration from explicit values.
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<Vec<u8>>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: AppSecret::new(app_secret),
            namespace: namespace.into(),
        }
    }

    /// Load from `PEAS_FB_APP_ID`, `PEAS_FB_APP_SECRET` and `PEAS_FB_NAMESPACE`.
    ///
    /// # Errors
    ///
    /// See [`CanvasConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a setting is missing or blank, or when the
    /// namespace is not a single URL path segment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or_else(|| {
                LoggingTransformer::log_config_error(name, "missing");
                ConfigError::Missing(name)
            })?;
            let trimmed = value.trim();
            if trimmed.is_empty() {
                LoggingTransformer::log_config_error(name, "empty");
                return Err(ConfigError::Empty(name));
            }
            Ok(trimmed.to_string())
        };

        let app_id = required(ENV_APP_ID)?;
        let app_secret = required(ENV_APP_SECRET)?;
        let namespace = required(ENV_NAMESPACE)?;

        if !namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            LoggingTransformer::log_config_error(ENV_NAMESPACE, "not a path segment");
            return Err(ConfigError::Invalid {
                setting: ENV_NAMESPACE,
                reason: "must contain only ASCII letters, digits, '-' or '_'",
            });
        }

        Ok(Self::new(app_id, app_secret.into_bytes(), namespace))
    }

    /// Platform application id.
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Application secret.
    #[must_use]
    pub fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Canvas namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Public URL of the canvas page.
    #[must_use]
    pub fn canvas_page_url(&self) -> String {
        format!("{CANVAS_BASE_URL}/{}/", self.namespace)
    }

    /// Signed request verifier bound to this application's secret.
    #[must_use]
    pub fn verifier(&self) -> SignedRequestBuilder {
        SignedRequestBuilder::from_secret(self.app_secret.clone())
    }
}
