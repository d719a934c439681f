// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-image cost calculation for image generation usage reporting

use tracing::debug;

/// Size assumed when the caller does not pass one
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// USD list price per image: (model, quality, size, price)
///
/// dall-e-2 has no quality tiers and is keyed with `"standard"`.
const PRICE_TABLE: &[(&str, &str, &str, f64)] = &[
    ("dall-e-2", "standard", "256x256", 0.016),
    ("dall-e-2", "standard", "512x512", 0.018),
    ("dall-e-2", "standard", "1024x1024", 0.020),
    ("dall-e-3", "standard", "1024x1024", 0.040),
    ("dall-e-3", "standard", "1024x1792", 0.080),
    ("dall-e-3", "standard", "1792x1024", 0.080),
    ("dall-e-3", "hd", "1024x1024", 0.080),
    ("dall-e-3", "hd", "1024x1792", 0.120),
    ("dall-e-3", "hd", "1792x1024", 0.120),
    ("gpt-image-1", "low", "1024x1024", 0.011),
    ("gpt-image-1", "low", "1024x1536", 0.016),
    ("gpt-image-1", "low", "1536x1024", 0.016),
    ("gpt-image-1", "medium", "1024x1024", 0.042),
    ("gpt-image-1", "medium", "1024x1536", 0.063),
    ("gpt-image-1", "medium", "1536x1024", 0.063),
    ("gpt-image-1", "high", "1024x1024", 0.167),
    ("gpt-image-1", "high", "1024x1536", 0.25),
    ("gpt-image-1", "high", "1536x1024", 0.25),
];

/// How the cost of one generated image is determined
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImagePricing {
    /// Built-in list prices; unknown combinations cost 0.0
    #[default]
    Table,
    /// Same cost for every image
    Flat(f64),
}

impl ImagePricing {
    pub fn from_flat_cost(flat_cost: Option<f64>) -> Self {
        flat_cost.map_or(ImagePricing::Table, ImagePricing::Flat)
    }

    /// Cost in USD of one image
    pub fn cost(&self, model: &str, size: Option<&str>, quality: Option<&str>) -> f64 {
        match self {
            ImagePricing::Flat(cost) => *cost,
            ImagePricing::Table => {
                let size = size.unwrap_or(DEFAULT_IMAGE_SIZE);
                let quality = normalize_quality(model, quality);

                PRICE_TABLE
                    .iter()
                    .find(|(m, q, s, _)| *m == model && *q == quality && *s == size)
                    .map(|(_, _, _, price)| *price)
                    .unwrap_or_else(|| {
                        debug!(
                            "No list price for model={}, quality={}, size={}; reporting 0.0",
                            model, quality, size
                        );
                        0.0
                    })
            }
        }
    }
}

/// Map caller quality onto the tier names used in the price table
fn normalize_quality<'a>(model: &str, quality: Option<&'a str>) -> &'a str {
    match (model, quality) {
        ("dall-e-2", _) => "standard",
        ("gpt-image-1", None | Some("auto")) => "medium",
        (_, None) => "standard",
        (_, Some(q)) => q,
    }
}
