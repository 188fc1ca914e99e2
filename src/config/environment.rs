// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, runtime markers, and OAuth credential parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management
//!
//! All behavior is controlled through environment variables. Configuration is
//! loaded once at process start into an explicit struct and passed by
//! reference into each handler; nothing reads the environment afterwards.

use crate::constants::{oauth, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for logging format and runtime decisions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which card payload the card route serves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardProfile {
    /// Full descriptor with properties and actions; OAuth routes mounted
    #[default]
    Detailed,
    /// Action-only descriptor pointing at a fixed webhook; no OAuth routes
    Compact,
}

impl CardProfile {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "compact" => Self::Compact,
            _ => Self::Detailed,
        }
    }
}

/// Runtime markers controlling process startup behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeConfig {
    /// Deployment environment
    pub environment: Environment,
    /// True when an external host process owns the listener; the binary
    /// must not self-bind in that case
    pub hosted: bool,
}

/// HubSpot OAuth client credentials and scopes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthProviderConfig {
    /// OAuth client ID
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// OAuth redirect URI
    pub redirect_uri: Option<String>,
    /// OAuth scopes, space-joined on the wire
    pub scopes: Vec<String>,
}

impl OAuthProviderConfig {
    /// Scopes as the space-delimited string HubSpot expects
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// HubSpot endpoint URLs, overridable for test harnesses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubSpotApiConfig {
    /// User-consent authorization URL
    pub auth_url: String,
    /// Token exchange URL
    pub token_url: String,
}

impl Default for HubSpotApiConfig {
    fn default() -> Self {
        Self {
            auth_url: oauth::HUBSPOT_AUTH_URL.into(),
            token_url: oauth::HUBSPOT_TOKEN_URL.into(),
        }
    }
}

/// Card serving configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CardConfig {
    /// Which fixed descriptor the card route returns
    pub profile: CardProfile,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Runtime markers
    pub runtime: RuntimeConfig,
    /// HubSpot OAuth client configuration
    pub oauth: OAuthProviderConfig,
    /// HubSpot endpoint URLs
    pub hubspot_api: HubSpotApiConfig,
    /// Card serving configuration
    pub cards: CardConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable fails to parse (e.g. a
    /// non-numeric `HTTP_PORT`). Missing OAuth credentials are not an error
    /// here; completeness is validated per OAuth operation.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            runtime: RuntimeConfig {
                environment: Environment::from_str_or_default(&env_var_or("APP_ENV", "development")),
                hosted: env_var_or("HOSTED_RUNTIME", "false")
                    .parse()
                    .context("Invalid HOSTED_RUNTIME value")?,
            },
            oauth: OAuthProviderConfig {
                client_id: non_empty(env::var("HUBSPOT_CLIENT_ID").ok()),
                client_secret: non_empty(env::var("HUBSPOT_CLIENT_SECRET").ok()),
                redirect_uri: non_empty(env::var("HUBSPOT_REDIRECT_URI").ok()),
                scopes: parse_scopes(oauth::HUBSPOT_DEFAULT_SCOPES),
            },
            hubspot_api: HubSpotApiConfig {
                auth_url: env_var_or("HUBSPOT_AUTH_URL", oauth::HUBSPOT_AUTH_URL),
                token_url: env_var_or("HUBSPOT_TOKEN_URL", oauth::HUBSPOT_TOKEN_URL),
            },
            cards: CardConfig {
                profile: CardProfile::from_str_or_default(&env_var_or("CARD_PROFILE", "detailed")),
            },
        };

        Ok(config)
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} env={} profile={:?} oauth_configured={}",
            self.http_port,
            self.runtime.environment,
            self.cards.profile,
            self.oauth.client_id.is_some()
                && self.oauth.client_secret.is_some()
                && self.oauth.redirect_uri.is_some()
        )
    }
}

/// Read an environment variable with a default fallback
fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Treat empty-string credentials the same as absent ones
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split a space-delimited scope string into a list
fn parse_scopes(scopes: &str) -> Vec<String> {
    scopes.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_string_round_trip() {
        let config = OAuthProviderConfig {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            scopes: parse_scopes(oauth::HUBSPOT_DEFAULT_SCOPES),
        };
        assert_eq!(config.scope_string(), oauth::HUBSPOT_DEFAULT_SCOPES);
    }

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("id".into())), Some("id".into()));
        assert_eq!(non_empty(None), None);
    }
}
