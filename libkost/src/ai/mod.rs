//! External AI text service boundary
//!
//! Two capabilities, both opaque async calls: marketing-description
//! generation and Maps-grounded nearby-place lookup. Callers outside this
//! module go through the `*_or_fallback` wrappers, which convert every
//! failure into a fixed Indonesian placeholder; errors never cross the
//! boundary into calling logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod gemini;
pub mod mock;

pub use gemini::GeminiClient;
pub use mock::MockAi;

/// Fallback shown when the description call itself fails
pub const DESCRIPTION_FAILURE: &str = "Terjadi kesalahan saat menghubungi AI.";
/// Fallback shown when the call succeeds but returns no text
pub const DESCRIPTION_EMPTY: &str = "Gagal membuat deskripsi otomatis.";
/// Fallback summary when the place lookup fails
pub const PLACES_FAILURE: &str = "Maaf, gagal mencari lokasi sekitar.";
/// Summary when the lookup succeeds but returns no text
pub const PLACES_EMPTY: &str = "Tidak ada informasi ditemukan.";

/// A place reference suitable for rendering as a clickable link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceRef {
    pub label: String,
    pub uri: String,
}

/// Result of a nearby-place lookup: a short summary plus zero or more places
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceLookup {
    pub summary: String,
    pub places: Vec<PlaceRef>,
}

#[async_trait]
pub trait AiService: Send + Sync {
    /// Generate a short marketing description for a property
    async fn generate_description(
        &self,
        name: &str,
        facilities: &[String],
        city: &str,
    ) -> Result<String>;

    /// Look up nearby places of the given category around a coordinate
    async fn nearby_places(&self, lat: f64, lng: f64, category: &str) -> Result<PlaceLookup>;
}

/// Description with the failure swallowed into a placeholder string
pub async fn describe_or_fallback(
    service: &dyn AiService,
    name: &str,
    facilities: &[String],
    city: &str,
) -> String {
    match service.generate_description(name, facilities, city).await {
        Ok(text) if text.trim().is_empty() => DESCRIPTION_EMPTY.to_string(),
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "description generation failed");
            DESCRIPTION_FAILURE.to_string()
        }
    }
}

/// Place lookup with the failure swallowed into a placeholder result
pub async fn nearby_or_fallback(
    service: &dyn AiService,
    lat: f64,
    lng: f64,
    category: &str,
) -> PlaceLookup {
    match service.nearby_places(lat, lng, category).await {
        Ok(lookup) if lookup.summary.trim().is_empty() => PlaceLookup {
            summary: PLACES_EMPTY.to_string(),
            places: lookup.places,
        },
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::warn!(error = %e, "nearby place lookup failed");
            PlaceLookup {
                summary: PLACES_FAILURE.to_string(),
                places: Vec::new(),
            }
        }
    }
}
