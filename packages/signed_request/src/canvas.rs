//! What the canvas page should show for an incoming request.

use crate::{claims::Claims, config::CanvasConfig, verifier};
use peas_common::LoggingTransformer;
use std::fmt;

const AUTH_EVENT: &str = "canvas_signed_request";

/// Outcome of authenticating a canvas page load.
#[derive(Debug, Clone)]
pub enum CanvasView {
    /// Verified user who has authorized the app; embed the game with their token.
    Authenticated(AuthenticatedSession),
    /// No signed request, or a verified one for a user who has not authorized the app.
    Anonymous,
    /// The signed request failed verification.
    Denied,
}

impl CanvasView {
    /// Decide the view from the request's `signed_request` parameter.
    ///
    /// Rejection details are logged, never carried into the view.
    pub fn resolve(signed_request: Option<&str>, config: &CanvasConfig) -> Self {
        let Some(token) = signed_request.filter(|token| !token.is_empty()) else {
            LoggingTransformer::log_auth_event(AUTH_EVENT, None, true);
            return CanvasView::Anonymous;
        };

        let claims = match verifier::verify(token, config.app_secret().expose()) {
            Ok(claims) => claims,
            Err(rejection) => {
                LoggingTransformer::log_rejection(AUTH_EVENT, rejection.kind_label());
                LoggingTransformer::log_auth_event(AUTH_EVENT, None, false);
                return CanvasView::Denied;
            }
        };

        match AuthenticatedSession::from_claims(claims) {
            Some(session) => {
                LoggingTransformer::log_auth_event(AUTH_EVENT, Some(session.user_id()), true);
                CanvasView::Authenticated(session)
            }
            None => {
                LoggingTransformer::log_auth_event(AUTH_EVENT, None, true);
                CanvasView::Anonymous
            }
        }
    }

    /// Whether the game can be embedded for a known user.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, CanvasView::Authenticated(_))
    }

    /// The authenticated session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&AuthenticatedSession> {
        match self {
            CanvasView::Authenticated(session) => Some(session),
            CanvasView::Anonymous | CanvasView::Denied => None,
        }
    }
}

/// A verified user together with the access token handed to the game.
#[derive(Clone)]
pub struct AuthenticatedSession {
    user_id: String,
    access_token: String,
    claims: Claims,
}

impl AuthenticatedSession {
    fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.user_id()?.into_owned();
        let access_token = claims.oauth_token()?.to_string();
        Some(Self {
            user_id,
            access_token,
            claims,
        })
    }

    /// Platform user id.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Access token to inject into the game's initialization parameters.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Every verified claim.
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

impl fmt::Debug for AuthenticatedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedSession")
            .field("user_id", &self.user_id)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
