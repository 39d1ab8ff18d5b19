//! Field constraints published to the web client.
//!
//! The browser validates submissions against this document before sending
//! them, so the category list and bounds exist only once, in `spotrate-core`.

use serde::Serialize;
use spotrate_core::{Coordinates, LocationType, MAX_IMAGE_BYTES, Rating};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Inclusive range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDto {
    pub categories: Vec<CategoryDto>,
    pub rating: Bounds<u8>,
    pub latitude: Bounds<f64>,
    pub longitude: Bounds<f64>,
    pub max_image_bytes: usize,
}

impl SchemaDto {
    pub fn current() -> Self {
        Self {
            categories: LocationType::ALL
                .iter()
                .map(|t| CategoryDto {
                    label: t.label(),
                    icon: t.icon(),
                })
                .collect(),
            rating: Bounds {
                min: Rating::MIN,
                max: Rating::MAX,
            },
            latitude: Bounds {
                min: Coordinates::LATITUDE_RANGE.0,
                max: Coordinates::LATITUDE_RANGE.1,
            },
            longitude: Bounds {
                min: Coordinates::LONGITUDE_RANGE.0,
                max: Coordinates::LONGITUDE_RANGE.1,
            },
            max_image_bytes: MAX_IMAGE_BYTES,
        }
    }
}
