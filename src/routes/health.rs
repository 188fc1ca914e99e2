// ABOUTME: Health probe route handler
// ABOUTME: Liveness endpoint for deployment orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health probe route

use crate::constants::service_names;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Health routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health route
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": service_names::HUBCARD_SERVER,
        }))
    }
}
