// ABOUTME: End-to-end tests for the HubSpot token exchange against a stub token endpoint
// ABOUTME: Validates the outbound form body, response parsing, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::http::StatusCode;
use axum::{routing::post, Router};
use hubcard_server::config::environment::{HubSpotApiConfig, OAuthProviderConfig};
use hubcard_server::oauth::{HubSpotProvider, OAuthError, OAuthProvider};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Captured request bodies from the stub token endpoint
type Captured = Arc<Mutex<Vec<String>>>;

/// Spawn a stub token endpoint returning a fixed status and body
async fn spawn_token_stub(status: StatusCode, body: &'static str) -> (SocketAddr, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    let app = Router::new().route(
        "/oauth/v1/token",
        post(move |request_body: String| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(request_body);
                (status, body.to_string())
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captured)
}

fn complete_config() -> OAuthProviderConfig {
    OAuthProviderConfig {
        client_id: Some("client-123".into()),
        client_secret: Some("secret-456".into()),
        redirect_uri: Some("https://example.com/oauth-callback".into()),
        scopes: vec!["oauth".into()],
    }
}

fn provider_for(addr: SocketAddr, config: OAuthProviderConfig) -> HubSpotProvider {
    HubSpotProvider::new(
        config,
        HubSpotApiConfig {
            auth_url: "https://app.hubspot.com/oauth/authorize".into(),
            token_url: format!("http://{addr}/oauth/v1/token"),
        },
    )
}

#[tokio::test]
async fn test_exchange_sends_single_form_encoded_post() {
    let (addr, captured) = spawn_token_stub(
        StatusCode::OK,
        r#"{"access_token":"AT1","refresh_token":"RT1","expires_in":1800}"#,
    )
    .await;

    let provider = provider_for(addr, complete_config());
    let token = provider.exchange_code("ABC").await.unwrap();

    assert_eq!(token.access_token, "AT1");
    assert_eq!(token.refresh_token, "RT1");
    assert_eq!(token.expires_in, 1800);

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1, "exactly one outbound POST expected");

    let fields: HashMap<String, String> = serde_urlencoded::from_str(&bodies[0]).unwrap();
    assert_eq!(fields["grant_type"], "authorization_code");
    assert_eq!(fields["client_id"], "client-123");
    assert_eq!(fields["client_secret"], "secret-456");
    assert_eq!(fields["redirect_uri"], "https://example.com/oauth-callback");
    assert_eq!(fields["code"], "ABC");
    assert_eq!(fields.len(), 5);
}

#[tokio::test]
async fn test_exchange_maps_provider_rejection() {
    let (addr, captured) =
        spawn_token_stub(StatusCode::BAD_REQUEST, r#"{"message":"invalid_grant"}"#).await;

    let provider = provider_for(addr, complete_config());
    let err = provider.exchange_code("ABC").await.unwrap_err();

    assert!(matches!(err, OAuthError::Provider(m) if m == "invalid_grant"));
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_exchange_maps_unstructured_error_body() {
    let (addr, _captured) = spawn_token_stub(StatusCode::BAD_GATEWAY, "upstream exploded").await;

    let provider = provider_for(addr, complete_config());
    let err = provider.exchange_code("ABC").await.unwrap_err();

    match err {
        OAuthError::Network(detail) => assert!(detail.contains("502")),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_maps_malformed_success_body() {
    let (addr, _captured) = spawn_token_stub(StatusCode::OK, "not json at all").await;

    let provider = provider_for(addr, complete_config());
    let err = provider.exchange_code("ABC").await.unwrap_err();

    assert!(matches!(err, OAuthError::Network(_)));
}

#[tokio::test]
async fn test_incomplete_config_short_circuits_without_request() {
    let (addr, captured) = spawn_token_stub(
        StatusCode::OK,
        r#"{"access_token":"AT1","refresh_token":"RT1","expires_in":1800}"#,
    )
    .await;

    let mut config = complete_config();
    config.client_secret = None;

    let provider = provider_for(addr, config);
    let err = provider.exchange_code("ABC").await.unwrap_err();

    assert!(matches!(err, OAuthError::Configuration(_)));
    assert_eq!(captured.lock().unwrap().len(), 0);
}
