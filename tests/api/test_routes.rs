// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Route registration tests

use axum::http::StatusCode;
use genai_gateway::api::{EMBEDDING_ROUTE, GENERATE_IMAGE_ROUTE, SUMMARIZE_ROUTE};

use super::common::{app_with_provider, get, post_json, untouched_provider};

#[tokio::test]
async fn test_health_endpoint() {
    let response = get(app_with_provider(untouched_provider()), "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], genai_gateway::version::VERSION);
    // An injected client counts as configured
    assert_eq!(response.body["credentialConfigured"], true);
}

#[tokio::test]
async fn test_capability_routes_reject_get() {
    for route in [EMBEDDING_ROUTE, SUMMARIZE_ROUTE, GENERATE_IMAGE_ROUTE] {
        let response = get(app_with_provider(untouched_provider()), route).await;
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "route: {}", route);
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = post_json(
        app_with_provider(untouched_provider()),
        "/api/translate",
        serde_json::json!({ "text": "hola" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
