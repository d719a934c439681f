// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAiClient wire tests against a local mock HTTP server

use genai_gateway::provider::{
    ChatCompletionRequest, ChatMessage, EmbeddingRequest, GenerationProvider, ImageRequest,
    OpenAiClient, ProviderError,
};
use secrecy::SecretString;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(
        &format!("{}/v1", server.uri()),
        SecretString::from("sk-test".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_create_embedding_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({ "model": "text-embedding-3-small", "input": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{ "object": "embedding", "index": 0, "embedding": [0.1, 0.2] }],
            "model": "text-embedding-3-small",
            "usage": { "prompt_tokens": 1, "total_tokens": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .create_embedding(EmbeddingRequest::new("text-embedding-3-small", "hello"))
        .await
        .unwrap();

    assert_eq!(response.usage.map(|u| u.total_tokens), Some(1));
    assert_eq!(response.into_first_embedding(), Some(vec![0.1, 0.2]));
}

#[tokio::test]
async fn test_create_chat_completion_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(json!({
            "model": "gpt-4o-mini",
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "hello there" }
            ],
            "max_tokens": 150,
            "temperature": 0.3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hi." },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .create_chat_completion(ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hello there")],
            max_tokens: 150,
            temperature: 0.3,
        })
        .await
        .unwrap();

    assert_eq!(response.first_content(), Some("Hi."));
}

#[tokio::test]
async fn test_create_image_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_json(json!({
            "model": "dall-e-3",
            "prompt": "cat",
            "n": 1,
            "size": "1024x1024",
            "response_format": "url"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": 1700000000,
            "data": [{ "url": "https://cdn/cat.png", "revised_prompt": "a cat" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .create_image(ImageRequest {
            model: "dall-e-3".to_string(),
            prompt: "cat".to_string(),
            n: 1,
            size: Some("1024x1024".to_string()),
            quality: None,
            style: None,
            response_format: Some("url".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(response.data[0].url.as_deref(), Some("https://cdn/cat.png"));
    assert_eq!(response.data[0].revised_prompt.as_deref(), Some("a cat"));
}

#[tokio::test]
async fn test_error_status_uses_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached", "type": "requests" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_embedding(EmbeddingRequest::new("m", "hello"))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    match err {
        ProviderError::Status { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_status_with_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_embedding(EmbeddingRequest::new("m", "hello"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Status { status: 502, ref message } if message == "Bad Gateway"
    ));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_embedding(EmbeddingRequest::new("m", "hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    let client = OpenAiClient::new(
        "http://127.0.0.1:1/v1",
        SecretString::from("sk-test".to_string()),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client
        .create_embedding(EmbeddingRequest::new("m", "hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
