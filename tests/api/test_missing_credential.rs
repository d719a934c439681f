// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Missing provider credential: every capability fails without network I/O

use axum::http::StatusCode;
use genai_gateway::api::{
    create_app, AppState, EMBEDDING_ROUTE, ERROR_REF_HEADER, GENERATE_IMAGE_ROUTE, SUMMARIZE_ROUTE,
};
use genai_gateway::config::{ModelConfig, ProviderConfig, SummaryConfig};
use genai_gateway::provider::{ImageGenerator, ImagePricing, ProviderClientFactory};
use serde_json::json;
use wiremock::MockServer;

use super::common::{get, post_json};

fn unconfigured_app(base_url: &str) -> axum::Router {
    let factory = ProviderClientFactory::new(ProviderConfig::default().base_url(base_url));
    create_app(AppState::new(
        factory,
        ModelConfig::default(),
        SummaryConfig::default(),
        ImageGenerator::new("dall-e-3", ImagePricing::Table),
    ))
}

#[tokio::test]
async fn test_every_capability_fails_without_contacting_provider() {
    let server = MockServer::start().await;
    let base_url = format!("{}/v1", server.uri());

    let cases = [
        (EMBEDDING_ROUTE, json!({ "text": "hello" }), "Failed to generate embedding"),
        (SUMMARIZE_ROUTE, json!({ "text": "hello" }), "Failed to generate summary"),
        (GENERATE_IMAGE_ROUTE, json!({ "prompt": "cat" }), "Failed to generate image"),
    ];

    for (route, body, message) in cases {
        let response = post_json(unconfigured_app(&base_url), route, body).await;

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE, "route: {}", route);
        assert_eq!(response.body, json!({ "error": message }));
        assert!(response.headers.contains_key(ERROR_REF_HEADER));
    }

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty(), "provider was contacted: {:?}", received);
}

#[tokio::test]
async fn test_validation_still_runs_before_configuration() {
    let server = MockServer::start().await;
    let app = unconfigured_app(&format!("{}/v1", server.uri()));

    let response = post_json(app, SUMMARIZE_ROUTE, json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "Text is required" }));
}

#[tokio::test]
async fn test_health_reports_missing_credential() {
    let server = MockServer::start().await;
    let app = unconfigured_app(&server.uri());

    let response = get(app, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["credentialConfigured"], false);
}
