//! Gemini API client
//!
//! Thin reqwest client for the Generative Language API. Description
//! generation uses plain text prompts; the nearby-place lookup additionally
//! enables the Google Maps grounding tool and turns grounding chunks into
//! [`PlaceRef`]s.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{AiService, PlaceLookup, PlaceRef};
use crate::config::AiConfig;
use crate::error::{AiError, Result};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    maps_model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

/// A grounding chunk carries its source under `maps` (Maps grounding) or
/// `web` (search grounding); both shapes expose a title and uri
#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    maps: Option<ChunkSource>,
    #[serde(default)]
    web: Option<ChunkSource>,
}

#[derive(Debug, Deserialize)]
struct ChunkSource {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

impl GeminiClient {
    /// Build a client from the `[ai]` config section, reading the API key
    /// from the configured environment variable
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        if !config.enabled {
            return Err(AiError::NotConfigured.into());
        }
        let api_key = std::env::var(&config.api_key_env).map_err(|_| AiError::NotConfigured)?;
        if api_key.is_empty() {
            return Err(AiError::NotConfigured.into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(AiError::Http)?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            maps_model: config.maps_model.clone(),
            base_url: BASE_URL.to_string(),
        })
    }

    async fn generate(&self, model: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        tracing::debug!(model, "calling Gemini API");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(AiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Gemini API returned an error");
            return Err(AiError::Api(format!("{}: {}", status, body)).into());
        }

        let parsed: GenerateResponse = response.json().await.map_err(AiError::Http)?;
        Ok(parsed)
    }
}

fn first_text(response: &GenerateResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn place_refs(response: &GenerateResponse) -> Vec<PlaceRef> {
    let Some(candidate) = response.candidates.first() else {
        return Vec::new();
    };
    let Some(metadata) = candidate.grounding_metadata.as_ref() else {
        return Vec::new();
    };
    metadata
        .grounding_chunks
        .iter()
        .filter_map(|chunk| {
            let source = chunk.maps.as_ref().or(chunk.web.as_ref())?;
            let uri = source.uri.clone()?;
            Some(PlaceRef {
                label: source.title.clone().unwrap_or_else(|| uri.clone()),
                uri,
            })
        })
        .collect()
}

#[async_trait]
impl AiService for GeminiClient {
    async fn generate_description(
        &self,
        name: &str,
        facilities: &[String],
        city: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Generate a catchy and professional description for a boarding house (kost) \
             named \"{}\" located in {}. Facilities include: {}. \
             Keep it under 100 words in Indonesian.",
            name,
            city,
            facilities.join(", ")
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig { temperature: 0.7 }),
            tools: None,
            tool_config: None,
        };

        // An empty reply is a successful call with no usable text; the
        // fallback wrapper turns it into the empty-text placeholder
        let response = self.generate(&self.model, &request).await?;
        Ok(first_text(&response).unwrap_or_default())
    }

    async fn nearby_places(&self, lat: f64, lng: f64, category: &str) -> Result<PlaceLookup> {
        let prompt = format!(
            "Cari {} terdekat dari lokasi koordinat {}, {}. \
             Berikan rekomendasi singkat dalam bahasa Indonesia.",
            category, lat, lng
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
            tools: Some(vec![Tool {
                google_maps: serde_json::json!({}),
            }]),
            tool_config: Some(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: lat,
                        longitude: lng,
                    },
                },
            }),
        };

        let response = self.generate(&self.maps_model, &request).await?;
        let summary = first_text(&response).unwrap_or_default();
        let places = place_refs(&response);
        Ok(PlaceLookup { summary, places })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_for_maps_lookup() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Cari warung makan terdekat".to_string(),
                }],
            }],
            generation_config: None,
            tools: Some(vec![Tool {
                google_maps: serde_json::json!({}),
            }]),
            tool_config: Some(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: -6.18,
                        longitude: 106.83,
                    },
                },
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["tools"][0]["googleMaps"].is_object());
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            -6.18
        );
        // Text generation requests omit the tool keys entirely
        let plain = GenerateRequest {
            contents: vec![],
            generation_config: Some(GenerationConfig { temperature: 0.7 }),
            tools: None,
            tool_config: None,
        };
        let plain_json = serde_json::to_value(&plain).unwrap();
        assert!(plain_json.get("tools").is_none());
        assert_eq!(plain_json["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Kost nyaman " }, { "text": "dekat stasiun." }] }
            }]
        });
        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(
            first_text(&response).unwrap(),
            "Kost nyaman dekat stasiun."
        );
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(first_text(&response).is_none());
        assert!(place_refs(&response).is_empty());
    }

    #[test]
    fn test_grounding_chunks_to_place_refs() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Dua tempat ditemukan." }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "maps": { "title": "Warung Bu Sri", "uri": "https://maps.google.com/?cid=1" } },
                        { "web": { "title": "Indomaret", "uri": "https://maps.google.com/?cid=2" } },
                        { "maps": { "title": "No uri, skipped" } }
                    ]
                }
            }]
        });
        let response: GenerateResponse = serde_json::from_value(raw).unwrap();

        let places = place_refs(&response);
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].label, "Warung Bu Sri");
        assert_eq!(places[1].uri, "https://maps.google.com/?cid=2");
    }

    #[test]
    fn test_from_config_requires_enabled_and_key() {
        let config = AiConfig {
            enabled: false,
            model: "gemini-3-flash-preview".to_string(),
            maps_model: "gemini-2.5-flash".to_string(),
            api_key_env: "KOST_TEST_MISSING_KEY".to_string(),
            timeout_seconds: 5,
        };
        assert!(GeminiClient::from_config(&config).is_err());

        let config = AiConfig {
            enabled: true,
            ..config
        };
        // Env var not set either
        assert!(GeminiClient::from_config(&config).is_err());
    }
}
