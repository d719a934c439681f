// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use genai_gateway::{config::GatewayConfig, start_server, version};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env next to the binary; real environment wins
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::parse();
    config.validate()?;

    info!("Starting {}", version::get_version_string());
    info!("Capabilities: {}", version::FEATURES.join(", "));
    info!(
        "Models: embedding={}, summary={}, image={}",
        config.models.embedding_model, config.models.summary_model, config.models.image_model
    );

    start_server(config).await
}
