// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding API Module
//!
//! This module provides the POST /api/embedding endpoint, which returns the
//! provider's embedding vector for a single input text.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::embed_handler;
pub use request::{EmbedRequest, TEXT_REQUIRED};
pub use response::EmbedResponse;
