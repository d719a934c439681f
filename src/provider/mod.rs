// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream generative-AI provider: client trait, HTTP client, lazy factory
//! and the image generation wrapper

pub mod client;
pub mod error;
pub mod factory;
pub mod images;
pub mod pricing;
pub mod types;

pub use client::{GenerationProvider, OpenAiClient};
pub use error::{ConfigurationError, ProviderError};
pub use factory::ProviderClientFactory;
pub use images::{ImageGenerationParams, ImageGenerationResult, ImageGenerator, ImageUsage, ModelRef};
pub use pricing::ImagePricing;
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatResponseMessage,
    ChatRole, EmbeddingData, EmbeddingRequest, EmbeddingResponse, ImageData, ImageRequest,
    ImageResponse, TokenUsage,
};
