//! Integration tests for the Diligence GUI
//!
//! These tests verify the interaction between modules:
//! - Response envelope to report view state
//! - Section collapse behavior across re-renders
//! - Whole-document section bodies through block extraction

use crate::api::*;
use crate::report::*;
use serde_json::json;

// ============================================================================
// RESPONSE TO RENDER PIPELINE TESTS
// ============================================================================

#[test]
fn test_example_response_renders_two_sections() {
    let body =
        r#"{"DD":{"due_diligence":{"Valuation":"<p>Fair</p>","Risks":"<p>High debt</p>"}}}"#;
    let response: DueDiligenceResponse = serde_json::from_str(body).unwrap();
    let sections = sections_from_value(&response.dd.due_diligence).unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Valuation");
    assert_eq!(sections[1].title, "Risks");
    assert!(sections.iter().all(|s| !s.expanded));

    let blocks = html_blocks(&sections[0].body);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, "Fair");
}

#[test]
fn test_rerender_replaces_sections_and_resets_collapse() {
    let first = json!({"Valuation": "<p>Fair</p>", "Risks": "<p>High debt</p>"});
    let mut sections = sections_from_value(&first).unwrap();
    sections[1].toggle();
    assert!(sections[1].expanded);

    // A second render rebuilds the whole list; prior expansion is gone
    let second = json!({"Valuation": "<p>Rich</p>"});
    sections = sections_from_value(&second).unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].body, "<p>Rich</p>");
    assert!(!sections[0].expanded);
}

#[test]
fn test_invalid_mapping_shows_invalid_data_view() {
    let body = r#"{"DD":{"due_diligence":["not","a","mapping"]}}"#;
    let response: DueDiligenceResponse = serde_json::from_str(body).unwrap();

    let view = match sections_from_value(&response.dd.due_diligence) {
        Some(sections) => ReportView::Sections(sections),
        None => ReportView::InvalidData,
    };
    assert_eq!(view, ReportView::InvalidData);
}

#[test]
fn test_full_document_section_pipeline() {
    // The technical-analysis side of the backend returns whole HTML pages
    let html = "<!DOCTYPE html>\n<html>\n<head>\n\
                <style>body { font-family: Arial, sans-serif; margin: 30px; }</style>\n\
                </head>\n<body>\n\
                <h1>Technical Analysis Report on AAPL</h1>\n\
                <h2>1. Executive Summary</h2>\n\
                <p>Momentum is improving.</p>\n\
                </body>\n</html>";
    let value = json!({ "Technical Analysis": html });

    let sections = sections_from_value(&value).unwrap();
    let blocks = html_blocks(&sections[0].body);

    let texts: Vec<_> = blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Technical Analysis Report on AAPL",
            "1. Executive Summary",
            "Momentum is improving."
        ]
    );
    assert_eq!(blocks[0].kind, BlockKind::Heading);
    assert_eq!(blocks[1].kind, BlockKind::Subheading);
    assert_eq!(blocks[2].kind, BlockKind::Paragraph);
}

#[test]
fn test_canonical_report_sections_in_order() {
    // The merged report the backend produces uses these section names
    let body = json!({
        "DD": {
            "due_diligence": {
                "Executive Summary": "<p>High-level overview.</p>",
                "Company Overview": "<p>Business model.</p>",
                "Financial Analysis": "<p>Key ratios.</p>",
                "Market and Industry Analysis": "<p>Competitive landscape.</p>",
                "Technical Price Analysis": "<p>Support and resistance.</p>",
                "Market Sentiment": "<p>News flow.</p>",
                "Volume and Liquidity Analysis": "<p>Trading volume.</p>",
                "Risk Assessment": "<p>Key risks.</p>",
                "Valuation": "<p>Intrinsic value.</p>",
                "Recommendations": "<p>Hold.</p>"
            }
        }
    });
    let response: DueDiligenceResponse = serde_json::from_value(body).unwrap();
    let sections = sections_from_value(&response.dd.due_diligence).unwrap();

    assert_eq!(sections.len(), 10);
    assert_eq!(sections[0].title, "Executive Summary");
    assert_eq!(sections[9].title, "Recommendations");
}
