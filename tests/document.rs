use lightreport::models::{CurrencyCode, MeasurementRecord};
use lightreport::normalize;
use lightreport::services::export_service::{PAGE_HEIGHT_PX, PAGE_WIDTH_PX};
use lightreport::services::{render_document, ReportDecoration};
use serde_json::json;

fn decoration() -> ReportDecoration {
    ReportDecoration {
        audit_id: "AUD-TEST0001".to_string(),
        generated_at: "January 1, 2026".to_string(),
    }
}

fn page_count(html: &str) -> usize {
    html.matches("<section class=\"page\"").count()
}

#[test]
fn every_page_has_fixed_size_and_break() {
    let report = normalize(&json!({}), &MeasurementRecord::unavailable("x"), "acme.io", CurrencyCode::Usd);
    let html = render_document(&report, &[], &decoration());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("width:{}px", PAGE_WIDTH_PX)));
    assert!(html.contains(&format!("height:{}px", PAGE_HEIGHT_PX)));
    assert!(html.contains("page-break-after:always"));

    let pages = page_count(&html);
    assert!(pages > 16);
    assert!(html.contains(&format!("Page {} of {}", pages, pages)));
    assert!(html.contains("AUD-TEST0001"));
}

#[test]
fn recommendations_paginate_two_per_page() {
    let m = MeasurementRecord::unavailable("x");
    let two = normalize(
        &json!({ "recommendations": [{ "title": "One" }, { "title": "Two" }] }),
        &m,
        "acme.io",
        CurrencyCode::Usd,
    );
    let six = normalize(&json!({}), &m, "acme.io", CurrencyCode::Usd);
    assert_eq!(six.recommendations.len(), 6);

    let pages_two = page_count(&render_document(&two, &[], &decoration()));
    let pages_six = page_count(&render_document(&six, &[], &decoration()));
    assert_eq!(pages_six, pages_two + 2);
}

#[test]
fn model_text_is_escaped() {
    let report = normalize(
        &json!({ "executiveSummary": { "headline": "<script>alert('x')</script>" } }),
        &MeasurementRecord::unavailable("x"),
        "acme.io",
        CurrencyCode::Usd,
    );
    let html = render_document(&report, &[], &decoration());

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn warnings_show_on_cover_only_when_present() {
    let report = normalize(&json!({}), &MeasurementRecord::unavailable("x"), "acme.io", CurrencyCode::Usd);

    let clean = render_document(&report, &[], &decoration());
    assert!(!clean.contains("class=\"warning\""));

    let warned = render_document(&report, &["PageSpeed returned 500".to_string()], &decoration());
    assert!(warned.contains("class=\"warning\""));
    assert!(warned.contains("PageSpeed returned 500"));
}

#[test]
fn rendering_is_stable_for_fixed_decoration() {
    let report = normalize(&json!({}), &MeasurementRecord::unavailable("x"), "acme.io", CurrencyCode::Usd);
    assert_eq!(
        render_document(&report, &[], &decoration()),
        render_document(&report, &[], &decoration())
    );
}

#[test]
fn generated_audit_id_has_expected_shape() {
    let id = ReportDecoration::generate().audit_id;
    assert!(id.starts_with("AUD-"));
    assert_eq!(id.len(), 12);
}

#[test]
fn default_report_fits_without_continuation_pages() {
    let report = normalize(&json!({}), &MeasurementRecord::unavailable("x"), "acme.io", CurrencyCode::Usd);
    let html = render_document(&report, &[], &decoration());
    assert!(!html.contains("(continued)"));
}

#[test]
fn long_sections_continue_on_further_pages() {
    let findings: Vec<String> = (1..=60)
        .map(|i| format!("Finding number {} about page speed and conversions", i))
        .collect();
    let m = MeasurementRecord::unavailable("x");
    let short = normalize(&json!({}), &m, "acme.io", CurrencyCode::Usd);
    let long = normalize(
        &json!({ "executiveSummary": { "keyFindings": findings } }),
        &m,
        "acme.io",
        CurrencyCode::Usd,
    );

    let html = render_document(&long, &[], &decoration());
    assert!(html.contains("<h2>Executive Summary (continued)</h2>"));
    assert!(page_count(&html) > page_count(&render_document(&short, &[], &decoration())));
    for i in [1, 30, 60] {
        assert!(html.contains(&format!("Finding number {} about", i)));
    }
    // The contents page lists each section once.
    assert_eq!(html.matches("<li>Executive Summary</li>").count(), 1);
    assert!(!html.contains("<li>Executive Summary (continued)</li>"));
}

#[test]
fn long_tables_repeat_their_header() {
    let issues: Vec<_> = (1..=25)
        .map(|i| json!({ "title": format!("Issue {}", i), "severity": "Low", "description": "d", "impact": "i" }))
        .collect();
    let report = normalize(
        &json!({ "criticalIssues": { "issues": issues } }),
        &MeasurementRecord::unavailable("x"),
        "acme.io",
        CurrencyCode::Usd,
    );
    let html = render_document(&report, &[], &decoration());
    assert_eq!(html.matches("<th>Severity</th>").count(), 3);
    assert!(html.contains("Issue 25"));
}
