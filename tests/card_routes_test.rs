// ABOUTME: Integration tests for the card definition and health routes
// ABOUTME: Validates the fixed descriptor payloads are served verbatim for both profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hubcard_server::cards;
use hubcard_server::config::environment::{
    CardConfig, CardProfile, HubSpotApiConfig, LogLevel, OAuthProviderConfig, RuntimeConfig,
    ServerConfig,
};
use hubcard_server::server::{self, ServerResources};
use std::sync::Arc;
use tower::ServiceExt;

fn base_config(profile: CardProfile) -> ServerConfig {
    ServerConfig {
        http_port: 3000,
        log_level: LogLevel::Info,
        runtime: RuntimeConfig::default(),
        oauth: OAuthProviderConfig {
            client_id: Some("client-123".into()),
            client_secret: Some("secret-456".into()),
            redirect_uri: Some("https://example.com/oauth-callback".into()),
            scopes: vec!["oauth".into()],
        },
        hubspot_api: HubSpotApiConfig::default(),
        cards: CardConfig { profile },
    }
}

fn app(profile: CardProfile) -> axum::Router {
    let resources = Arc::new(ServerResources::new(base_config(profile)));
    server::router(&resources)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_card_route_serves_detailed_descriptor() {
    let response = app(CardProfile::Detailed)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::to_value(cards::detailed_card()).unwrap());
}

#[tokio::test]
async fn test_card_route_ignores_request_content() {
    let plain = app(CardProfile::Detailed)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let decorated = app(CardProfile::Detailed)
        .oneshot(
            Request::builder()
                .uri("/?contact=42&portal=99")
                .header("user-agent", "HubSpot Connect 1.0")
                .header("x-forwarded-for", "203.0.113.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_json(plain).await, body_json(decorated).await);
}

#[tokio::test]
async fn test_card_route_serves_compact_descriptor() {
    let response = app(CardProfile::Compact)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::to_value(cards::compact_card()).unwrap());

    // Compact descriptor is action-only
    let descriptor = &body["results"][0];
    assert!(descriptor.get("properties").is_none());
    assert_eq!(descriptor["actions"][0]["type"], "ACTION_HOOK");
}

#[tokio::test]
async fn test_health_route() {
    let response = app(CardProfile::Detailed)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "hubcard-server");
}
