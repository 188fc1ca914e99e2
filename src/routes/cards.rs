// ABOUTME: Card definition route handler
// ABOUTME: Returns the fixed card descriptor JSON regardless of request content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Card definition route
//!
//! HubSpot fetches the card definition from `GET /`. The response is the
//! pre-defined descriptor for the configured profile, independent of
//! headers, query parameters, or origin.

use crate::cards;
use crate::models::CardResponse;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// Card routes
pub struct CardRoutes;

impl CardRoutes {
    /// Create all card routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_card_definition))
            .with_state(resources)
    }

    /// Serve the fixed card definition
    async fn handle_card_definition(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Json<CardResponse> {
        let origin = header_str(&headers, "x-forwarded-for").unwrap_or("unknown");
        let user_agent = header_str(&headers, header::USER_AGENT.as_str()).unwrap_or("unknown");
        info!(origin, user_agent, "card definition requested");

        Json(cards::card_for_profile(resources.config.cards.profile))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
