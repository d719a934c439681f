// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbedResponse type for POST /api/embedding

use serde::{Deserialize, Serialize};

/// Response body for POST /api/embedding: exactly `{ "embedding": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedResponse {
    pub embedding: Vec<f64>,
}

impl EmbedResponse {
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}

impl From<Vec<f64>> for EmbedResponse {
    fn from(embedding: Vec<f64>) -> Self {
        Self { embedding }
    }
}
