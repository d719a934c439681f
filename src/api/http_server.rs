// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::embed::embed_handler;
use super::generate_image::generate_image_handler;
use super::handlers::health_handler;
use super::summarize::summarize_handler;
use crate::config::{GatewayConfig, ModelConfig, SummaryConfig, DEFAULT_MAX_BODY_BYTES};
use crate::provider::{ImageGenerator, ImagePricing, ProviderClientFactory};

pub const EMBEDDING_ROUTE: &str = "/api/embedding";
pub const SUMMARIZE_ROUTE: &str = "/api/summarize";
pub const GENERATE_IMAGE_ROUTE: &str = "/api/generate-image";

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub factory: Arc<ProviderClientFactory>,
    pub models: Arc<ModelConfig>,
    pub summary: Arc<SummaryConfig>,
    pub image_generator: Arc<ImageGenerator>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(
        factory: ProviderClientFactory,
        models: ModelConfig,
        summary: SummaryConfig,
        image_generator: ImageGenerator,
    ) -> Self {
        Self {
            factory: Arc::new(factory),
            models: Arc::new(models),
            summary: Arc::new(summary),
            image_generator: Arc::new(image_generator),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// State for a full gateway config. The provider client itself is
    /// built lazily on the first request.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let image_generator = ImageGenerator::new(
            config.models.image_model.clone(),
            ImagePricing::from_flat_cost(config.image.flat_cost),
        );

        Self::new(
            ProviderClientFactory::new(config.provider.clone()),
            config.models.clone(),
            config.summary.clone(),
            image_generator,
        )
        .with_max_body_bytes(config.max_body_bytes)
    }
}

pub fn create_app(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route(EMBEDDING_ROUTE, post(embed_handler))
        .route(SUMMARIZE_ROUTE, post(summarize_handler))
        .route(GENERATE_IMAGE_ROUTE, post(generate_image_handler))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn start_server(config: GatewayConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    if !state.factory.is_configured() {
        tracing::warn!(
            "{} is not set; generation requests will fail until it is configured",
            crate::config::API_KEY_ENV
        );
    }

    info!(
        "Image model: {}, max request body: {} bytes",
        state.image_generator.model(),
        state.max_body_bytes
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
