// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summarization response types

use serde::{Deserialize, Serialize};

/// Response from summarization: exactly `{ "summary": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    pub summary: String,
}

impl SummarizeResponse {
    /// Provider content when non-empty, otherwise the caller's own text
    pub fn with_fallback(content: Option<&str>, original_text: String) -> Self {
        let summary = match content {
            Some(content) if !content.is_empty() => content.to_string(),
            _ => original_text,
        };
        Self { summary }
    }
}
