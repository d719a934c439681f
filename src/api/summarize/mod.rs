// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summarization API endpoint module
//!
//! Provides POST /api/summarize for short, low-temperature summaries.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{summarize_handler, SUMMARY_SYSTEM_PROMPT};
pub use request::SummarizeRequest;
pub use response::SummarizeResponse;
