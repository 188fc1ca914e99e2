// ABOUTME: OAuth module for the HubSpot authorization-code flow
// ABOUTME: Defines token data, error types, and the provider trait the routes depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # OAuth Management Module
//!
//! The authorization-code exchange lives behind the [`OAuthProvider`] trait
//! so route handlers never touch the network directly and tests can
//! substitute the exchange with a local implementation.

pub mod hubspot;

pub use hubspot::HubSpotProvider;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth token data received from the token endpoint
///
/// Tokens are request-scoped: received, logged, and discarded. Nothing in
/// this system persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    /// Credential for calling protected APIs
    pub access_token: String,
    /// Longer-lived credential for obtaining new access tokens
    pub refresh_token: String,
    /// Lifetime of the access token in seconds
    pub expires_in: i64,
    /// Absolute expiry computed at receipt
    pub expires_at: DateTime<Utc>,
}

/// OAuth error types
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Required OAuth configuration is missing or empty
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The token endpoint or the transport failed without a provider message
    #[error("Token exchange failed: {0}")]
    Network(String),

    /// The token endpoint rejected the exchange with an error message
    #[error("Token endpoint rejected the exchange: {0}")]
    Provider(String),
}

/// Trait for OAuth provider implementations
///
/// One implementation talks to HubSpot; tests substitute their own.
#[async_trait::async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Get provider name
    fn name(&self) -> &str;

    /// Build the user-consent authorization URL from the configured client
    /// identity, redirect target, and scopes
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Configuration`] when the client ID or redirect
    /// URI is missing.
    fn authorization_url(&self) -> Result<String, OAuthError>;

    /// Exchange a one-time authorization code for a token pair
    ///
    /// Performs at most one outbound call. Every failure is terminal for
    /// the request; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Configuration`] before any outbound call when
    /// credentials are incomplete, [`OAuthError::Provider`] when the token
    /// endpoint supplied an error message, and [`OAuthError::Network`] for
    /// transport failures or malformed bodies.
    async fn exchange_code(&self, code: &str) -> Result<TokenData, OAuthError>;
}
