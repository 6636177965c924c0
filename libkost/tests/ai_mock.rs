//! Integration tests for the AI service boundary
//!
//! Drives the fallback wrappers through the mock service the way the CLI
//! tools do; errors must never cross the boundary, only placeholder text.

use libkost::ai::{
    describe_or_fallback, nearby_or_fallback, MockAi, PlaceRef, DESCRIPTION_EMPTY,
    DESCRIPTION_FAILURE, PLACES_FAILURE,
};

#[tokio::test]
async fn describe_fallback_on_failure() {
    let ai = MockAi::failing();
    let facilities = vec!["wifi".to_string()];
    let text = describe_or_fallback(&ai, "Kost Sukamahi", &facilities, "Bekasi").await;
    assert_eq!(text, DESCRIPTION_FAILURE);
    assert_eq!(ai.description_call_count(), 1);
}

#[tokio::test]
async fn describe_fallback_on_blank_text() {
    let ai = MockAi::with_description("   ");
    let text = describe_or_fallback(&ai, "Kost Sukamahi", &[], "Bekasi").await;
    assert_eq!(text, DESCRIPTION_EMPTY);
}

#[tokio::test]
async fn describe_empty_reply_is_not_a_failure() {
    // A successful call with no text gets the empty-text placeholder, not
    // the failure one; failure text is reserved for actual errors
    let ai = MockAi::with_description("");
    let text = describe_or_fallback(&ai, "Kost Sukamahi", &[], "Bekasi").await;
    assert_eq!(text, DESCRIPTION_EMPTY);
    assert_ne!(text, DESCRIPTION_FAILURE);
}

#[tokio::test]
async fn describe_passes_text_through() {
    let ai = MockAi::with_description("Kost nyaman dekat stasiun.");
    let text = describe_or_fallback(&ai, "Kost Sukamahi", &[], "Bekasi").await;
    assert_eq!(text, "Kost nyaman dekat stasiun.");
}

#[tokio::test]
async fn nearby_fallback_has_empty_places() {
    let ai = MockAi::failing();
    let lookup = nearby_or_fallback(&ai, -6.18, 106.83, "warung makan").await;
    assert_eq!(lookup.summary, PLACES_FAILURE);
    assert!(lookup.places.is_empty());
    assert_eq!(ai.lookup_call_count(), 1);
}

#[tokio::test]
async fn nearby_passes_places_through() {
    let ai = MockAi::with_places(
        "Ada dua warung makan terdekat.",
        vec![PlaceRef {
            label: "Warung Bu Sri".to_string(),
            uri: "https://maps.example/warung-bu-sri".to_string(),
        }],
    );
    let lookup = nearby_or_fallback(&ai, -6.18, 106.83, "warung makan").await;
    assert_eq!(lookup.summary, "Ada dua warung makan terdekat.");
    assert_eq!(lookup.places.len(), 1);
    assert_eq!(lookup.places[0].label, "Warung Bu Sri");
}
