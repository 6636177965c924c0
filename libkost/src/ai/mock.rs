//! Mock AI service for tests and offline runs
//!
//! Configurable canned responses, failure toggles, optional latency, and
//! call counters for verifying caller behavior without network access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use super::{AiService, PlaceLookup, PlaceRef};
use crate::error::{AiError, Result};

#[derive(Debug, Clone)]
pub struct MockAiConfig {
    /// Canned description text
    pub description: String,
    /// Canned place-lookup summary
    pub summary: String,
    /// Canned place references
    pub places: Vec<PlaceRef>,
    /// When false, every call returns an API error
    pub succeeds: bool,
    /// Simulated network latency
    pub delay: Duration,
}

impl Default for MockAiConfig {
    fn default() -> Self {
        Self {
            description: "Kost nyaman dengan fasilitas lengkap.".to_string(),
            summary: "Ada beberapa tempat menarik di sekitar.".to_string(),
            places: Vec::new(),
            succeeds: true,
            delay: Duration::from_millis(0),
        }
    }
}

pub struct MockAi {
    config: MockAiConfig,
    description_calls: Arc<Mutex<usize>>,
    lookup_calls: Arc<Mutex<usize>>,
}

impl MockAi {
    pub fn new(config: MockAiConfig) -> Self {
        Self {
            config,
            description_calls: Arc::new(Mutex::new(0)),
            lookup_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// A mock that always succeeds with default canned responses
    pub fn success() -> Self {
        Self::new(MockAiConfig::default())
    }

    /// A mock where every call fails
    pub fn failing() -> Self {
        Self::new(MockAiConfig {
            succeeds: false,
            ..Default::default()
        })
    }

    /// A mock returning the given description text
    pub fn with_description(text: &str) -> Self {
        Self::new(MockAiConfig {
            description: text.to_string(),
            ..Default::default()
        })
    }

    /// A mock returning the given lookup summary and places
    pub fn with_places(summary: &str, places: Vec<PlaceRef>) -> Self {
        Self::new(MockAiConfig {
            summary: summary.to_string(),
            places,
            ..Default::default()
        })
    }

    /// A mock with simulated latency
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockAiConfig {
            delay,
            ..Default::default()
        })
    }

    pub fn description_call_count(&self) -> usize {
        *self.description_calls.lock().unwrap()
    }

    pub fn lookup_call_count(&self) -> usize {
        *self.lookup_calls.lock().unwrap()
    }
}

#[async_trait]
impl AiService for MockAi {
    async fn generate_description(
        &self,
        _name: &str,
        _facilities: &[String],
        _city: &str,
    ) -> Result<String> {
        *self.description_calls.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.succeeds {
            Ok(self.config.description.clone())
        } else {
            Err(AiError::Api("mock failure".to_string()).into())
        }
    }

    async fn nearby_places(&self, _lat: f64, _lng: f64, _category: &str) -> Result<PlaceLookup> {
        *self.lookup_calls.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.succeeds {
            Ok(PlaceLookup {
                summary: self.config.summary.clone(),
                places: self.config.places.clone(),
            })
        } else {
            Err(AiError::Api("mock failure".to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_success_counts_calls() {
        let ai = MockAi::success();

        let text = ai
            .generate_description("Kost Sukamahi", &["wifi".to_string()], "Bekasi")
            .await
            .unwrap();
        assert!(!text.is_empty());
        assert_eq!(ai.description_call_count(), 1);
        assert_eq!(ai.lookup_call_count(), 0);

        ai.nearby_places(-6.18, 106.83, "kampus").await.unwrap();
        assert_eq!(ai.lookup_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let ai = MockAi::failing();

        assert!(ai.generate_description("x", &[], "y").await.is_err());
        assert!(ai.nearby_places(0.0, 0.0, "z").await.is_err());
        assert_eq!(ai.description_call_count(), 1);
        assert_eq!(ai.lookup_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_delay() {
        let ai = MockAi::with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        ai.generate_description("x", &[], "y").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
