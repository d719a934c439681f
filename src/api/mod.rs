// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod embed;
pub mod errors;
pub mod generate_image;
pub mod handlers;
pub mod http_server;
pub mod payload;
pub mod response_formatter;
pub mod summarize;

pub use embed::{embed_handler, EmbedRequest, EmbedResponse};
pub use errors::{Capability, ErrorResponse, GatewayError};
pub use generate_image::{generate_image_handler, GenerateImageRequest, GenerateImageResponse};
pub use handlers::{health_handler, HealthResponse};
pub use http_server::{
    create_app, start_server, AppState, EMBEDDING_ROUTE, GENERATE_IMAGE_ROUTE, SUMMARIZE_ROUTE,
};
pub use payload::JsonPayload;
pub use response_formatter::{respond, ERROR_REF_HEADER};
pub use summarize::{summarize_handler, SummarizeRequest, SummarizeResponse};
