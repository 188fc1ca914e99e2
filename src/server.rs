// ABOUTME: Shared server resources and HTTP listener startup
// ABOUTME: Assembles the router from route modules and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server assembly
//!
//! [`ServerResources`] holds everything handlers share: the configuration
//! loaded once at startup and the OAuth provider. Handlers receive it by
//! `Arc`; there is no other shared state and no cross-request coordination.

use crate::config::environment::{CardProfile, ServerConfig};
use crate::errors::{AppError, AppResult};
use crate::oauth::{HubSpotProvider, OAuthProvider};
use crate::routes::{cards::CardRoutes, health::HealthRoutes, oauth::OAuthRoutes};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for all route handlers
pub struct ServerResources {
    /// Configuration loaded once at startup
    pub config: Arc<ServerConfig>,
    /// OAuth provider performing the token exchange
    pub oauth: Arc<dyn OAuthProvider>,
}

impl ServerResources {
    /// Create resources with the HubSpot provider built from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let oauth = Arc::new(HubSpotProvider::new(
            config.oauth.clone(),
            config.hubspot_api.clone(),
        ));

        Self {
            config: Arc::new(config),
            oauth,
        }
    }

    /// Create resources with a substitute OAuth provider
    #[must_use]
    pub fn with_provider(config: ServerConfig, oauth: Arc<dyn OAuthProvider>) -> Self {
        Self {
            config: Arc::new(config),
            oauth,
        }
    }
}

/// Build the application router
///
/// The OAuth routes are mounted only for the detailed card profile; the
/// compact variant exposes just the card and health surfaces.
#[must_use]
pub fn router(resources: &Arc<ServerResources>) -> Router {
    let mut router = Router::new()
        .merge(CardRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes());

    if resources.config.cards.profile == CardProfile::Detailed {
        router = router.merge(OAuthRoutes::routes(resources.clone()));
    }

    router.layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve on the configured
/// port.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let port = resources.config.http_port;
    let app = router(&resources);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}"))
        .await
        .map_err(|e| AppError::internal(format!("failed to bind port {port}")).with_source(e))?;

    info!("HTTP server listening on http://127.0.0.1:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("server terminated abnormally").with_source(e))?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => warn!("failed to listen for shutdown signal: {e}"),
    }
}
