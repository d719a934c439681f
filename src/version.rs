// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the generation gateway

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capabilities served by this build
pub const FEATURES: &[&str] = &["embedding", "summarization", "image-synthesis"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("GenAI Gateway {}", VERSION)
}
