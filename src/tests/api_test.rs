//! Unit tests for the API client module
//!
//! Tests cover:
//! - Client construction and URL building
//! - Response envelope parsing
//! - Error display

use crate::api::*;

// ============================================================================
// CLIENT CONSTRUCTION TESTS
// ============================================================================

#[test]
fn test_client_default_url() {
    let client = DiligenceClient::new();
    assert_eq!(
        client.due_diligence_url("AAPL"),
        "http://127.0.0.1:8000/due_diligence/AAPL"
    );
}

#[test]
fn test_client_with_custom_url() {
    let client = DiligenceClient::with_url("http://analysis-host:9000".to_string());
    assert_eq!(
        client.due_diligence_url("MSFT"),
        "http://analysis-host:9000/due_diligence/MSFT"
    );
}

#[test]
fn test_url_embeds_ticker_verbatim() {
    // No format validation happens client-side; whatever the user typed
    // goes into the path.
    let client = DiligenceClient::new();
    assert_eq!(
        client.due_diligence_url("brk.b"),
        "http://127.0.0.1:8000/due_diligence/brk.b"
    );
}

// ============================================================================
// RESPONSE PARSING TESTS
// ============================================================================

#[test]
fn test_envelope_parses_section_mapping() {
    let json_str =
        r#"{"DD":{"due_diligence":{"Valuation":"<p>Fair</p>","Risks":"<p>High debt</p>"}}}"#;
    let response: DueDiligenceResponse = serde_json::from_str(json_str).unwrap();

    let map = response.dd.due_diligence.as_object().unwrap();
    assert_eq!(map.len(), 2);
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["Valuation", "Risks"]);
}

#[test]
fn test_envelope_missing_dd_fails() {
    let json_str = r#"{"due_diligence":{"Valuation":"<p>Fair</p>"}}"#;
    assert!(serde_json::from_str::<DueDiligenceResponse>(json_str).is_err());
}

#[test]
fn test_envelope_missing_mapping_fails() {
    let json_str = r#"{"DD":{"sections":{"Valuation":"<p>Fair</p>"}}}"#;
    assert!(serde_json::from_str::<DueDiligenceResponse>(json_str).is_err());
}

#[test]
fn test_envelope_top_level_array_fails() {
    assert!(serde_json::from_str::<DueDiligenceResponse>("[1,2,3]").is_err());
}

#[test]
fn test_envelope_accepts_non_object_mapping() {
    // A mapping of the wrong shape still decodes; the renderer shows it as
    // invalid data instead of raising an alert.
    let json_str = r#"{"DD":{"due_diligence":"oops"}}"#;
    let response: DueDiligenceResponse = serde_json::from_str(json_str).unwrap();
    assert!(response.dd.due_diligence.as_object().is_none());
}

#[test]
fn test_envelope_empty_mapping_parses() {
    let json_str = r#"{"DD":{"due_diligence":{}}}"#;
    let response: DueDiligenceResponse = serde_json::from_str(json_str).unwrap();
    assert!(response.dd.due_diligence.as_object().unwrap().is_empty());
}

// ============================================================================
// API ERROR TESTS
// ============================================================================

#[test]
fn test_api_error_network_display() {
    let error = ApiError::Network("connection refused".to_string());
    assert_eq!(error.to_string(), "network error: connection refused");
}

#[test]
fn test_api_error_server_display() {
    let error = ApiError::Server(500);
    assert_eq!(error.to_string(), "server returned status 500");
}

#[test]
fn test_api_error_parse_display() {
    let error = ApiError::Parse("missing field `DD`".to_string());
    assert_eq!(
        error.to_string(),
        "invalid response format: missing field `DD`"
    );
}
