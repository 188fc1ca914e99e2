// ABOUTME: OAuth initiation and callback route handlers
// ABOUTME: Redirects to HubSpot consent and exchanges the returned code for tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! OAuth flow routes
//!
//! `GET /start-hubspot-oauth` redirects the browser to HubSpot's consent
//! screen. HubSpot redirects back to `GET /oauth-callback` with a one-time
//! authorization code, which is exchanged for a token pair in a single
//! outbound call. Every failure is terminal for that request; errors are
//! returned synchronously as plain text.

use crate::errors::AppError;
use crate::oauth::{OAuthError, OAuthProvider};
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query parameters on the OAuth callback
#[derive(Deserialize)]
struct CallbackQuery {
    #[serde(default)]
    code: Option<String>,
}

/// OAuth flow routes
pub struct OAuthRoutes;

impl OAuthRoutes {
    /// Create all OAuth routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/start-hubspot-oauth", get(Self::handle_start))
            .route("/oauth-callback", get(Self::handle_callback))
            .with_state(resources)
    }

    /// Redirect to the HubSpot authorization URL
    async fn handle_start(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let url = resources.oauth.authorization_url().map_err(|err| {
            AppError::config("Server OAuth configuration error.").with_source(err)
        })?;

        info!(provider = resources.oauth.name(), "redirecting to authorization URL");

        // Plain 302; axum's Redirect helpers emit 303/307/308
        Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
    }

    /// Exchange the authorization code delivered on the callback
    async fn handle_callback(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CallbackQuery>,
    ) -> Result<Response, AppError> {
        let Some(code) = query.code.filter(|code| !code.is_empty()) else {
            return Err(AppError::missing_field(
                "Authorization code missing in callback.",
            ));
        };

        let token = resources
            .oauth
            .exchange_code(&code)
            .await
            .map_err(|err| callback_error(&err).with_source(err))?;

        // Tokens are recorded to the log (metadata only, never the values)
        // and dropped; nothing in this system persists them.
        info!(
            provider = resources.oauth.name(),
            expires_in = token.expires_in,
            expires_at = %token.expires_at,
            "access and refresh tokens received"
        );

        Ok((
            StatusCode::OK,
            "OAuth process completed successfully! Tokens received. You can close this window.",
        )
            .into_response())
    }
}

/// Map an exchange failure to the plain-text response the caller sees
fn callback_error(err: &OAuthError) -> AppError {
    match err {
        OAuthError::Configuration(_) => {
            AppError::config("Server configuration error for OAuth token exchange.")
        }
        OAuthError::Provider(message) => AppError::exchange_failed(format!(
            "Failed to exchange authorization code for token. HubSpot error: {message}"
        )),
        OAuthError::Network(_) => {
            AppError::exchange_failed("Failed to exchange authorization code for token.")
        }
    }
}
