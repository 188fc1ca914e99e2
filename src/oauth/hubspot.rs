// ABOUTME: HubSpot OAuth provider implementation
// ABOUTME: Builds the authorization URL and performs the form-encoded token exchange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # HubSpot OAuth Provider
//!
//! Concrete [`OAuthProvider`] implementation for HubSpot's OAuth 2.0
//! authorization-code grant.

use super::{OAuthError, OAuthProvider, TokenData};
use crate::config::environment::{HubSpotApiConfig, OAuthProviderConfig};
use crate::constants::oauth;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

/// HubSpot OAuth provider
pub struct HubSpotProvider {
    config: OAuthProviderConfig,
    api: HubSpotApiConfig,
    client: reqwest::Client,
}

/// HubSpot token response format
#[derive(Debug, Deserialize)]
struct HubSpotTokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
}

/// Error body shape the token endpoint returns on rejection
#[derive(Debug, Deserialize)]
struct HubSpotErrorResponse {
    message: Option<String>,
}

impl HubSpotProvider {
    /// Create a provider from the loaded configuration
    ///
    /// Construction always succeeds; credential completeness is validated
    /// per operation so the card route keeps serving when OAuth
    /// configuration is absent.
    #[must_use]
    pub fn new(config: OAuthProviderConfig, api: HubSpotApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(oauth::TOKEN_EXCHANGE_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            config,
            api,
            client,
        }
    }

    fn client_id(&self) -> Result<&str, OAuthError> {
        self.config
            .client_id
            .as_deref()
            .ok_or_else(|| OAuthError::Configuration("HUBSPOT_CLIENT_ID not set".into()))
    }

    fn client_secret(&self) -> Result<&str, OAuthError> {
        self.config
            .client_secret
            .as_deref()
            .ok_or_else(|| OAuthError::Configuration("HUBSPOT_CLIENT_SECRET not set".into()))
    }

    fn redirect_uri(&self) -> Result<&str, OAuthError> {
        self.config
            .redirect_uri
            .as_deref()
            .ok_or_else(|| OAuthError::Configuration("HUBSPOT_REDIRECT_URI not set".into()))
    }
}

#[async_trait::async_trait]
impl OAuthProvider for HubSpotProvider {
    fn name(&self) -> &str {
        "hubspot"
    }

    fn authorization_url(&self) -> Result<String, OAuthError> {
        let client_id = self.client_id()?;
        let redirect_uri = self.redirect_uri()?;

        Ok(format!(
            "{}?client_id={}&redirect_uri={}&scope={}",
            self.api.auth_url,
            urlencoding::encode(client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(&self.config.scope_string())
        ))
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenData, OAuthError> {
        // Validate the full credential set before any outbound call
        let client_id = self.client_id()?;
        let client_secret = self.client_secret()?;
        let redirect_uri = self.redirect_uri()?;

        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];

        let response = self
            .client
            .post(self.api.token_url.as_str())
            .form(&params)
            .send()
            .await
            .map_err(|e| OAuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OAuthError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(rejection_from_body(status, &body));
        }

        let token_response: HubSpotTokenResponse = serde_json::from_str(&body)
            .map_err(|e| OAuthError::Network(format!("Parse error: {e}")))?;

        debug!(expires_in = token_response.expires_in, "token exchange completed");

        Ok(TokenData {
            expires_at: Utc::now() + chrono::Duration::seconds(token_response.expires_in),
            access_token: token_response.access_token,
            refresh_token: token_response.refresh_token,
            expires_in: token_response.expires_in,
        })
    }
}

/// Map a non-success token endpoint reply to an error, keeping any
/// provider-supplied message
fn rejection_from_body(status: reqwest::StatusCode, body: &str) -> OAuthError {
    match serde_json::from_str::<HubSpotErrorResponse>(body) {
        Ok(HubSpotErrorResponse {
            message: Some(message),
        }) if !message.is_empty() => OAuthError::Provider(message),
        _ => OAuthError::Network(format!("token endpoint returned {status}")),
    }
}
