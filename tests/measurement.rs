mod common;

use axum::http::StatusCode;
use common::{local_config, pagespeed_payload, pagespeed_server};
use lightreport::models::MeasurementRecord;
use lightreport::services::MeasurementFetcher;
use serde_json::json;
use std::time::Duration;

async fn fetch_from(endpoint: &str) -> MeasurementRecord {
    let config = local_config(endpoint, "http://127.0.0.1:9/unused");
    MeasurementFetcher::new(reqwest::Client::new(), &config)
        .fetch("https://example.com")
        .await
}

fn assert_degraded(record: &MeasurementRecord) {
    assert!(record.is_degraded());
    assert_eq!(record.errors.len(), 1);
    assert_eq!(record.performance_score, 0);
    assert_eq!(record.seo_score, 0);
    assert_eq!(record.accessibility_score, 0);
    assert_eq!(record.best_practices_score, 0);
    assert!(!record.https);
    assert!(!record.viewport);
    assert_eq!(record.meta_description, "Missing");
    assert_eq!(record.document_title, "Missing");
    assert!(record.opportunities.is_empty());
    assert!(record.screenshot.is_none());
}

#[tokio::test]
async fn maps_successful_payload() {
    let endpoint = pagespeed_server(StatusCode::OK, pagespeed_payload()).await;
    let record = fetch_from(&endpoint).await;

    assert!(!record.is_degraded());
    assert_eq!(record.performance_score, 72);
    assert_eq!(record.seo_score, 88);
    assert_eq!(record.accessibility_score, 95);
    assert_eq!(record.best_practices_score, 80);
    assert!((record.lcp - 3.1).abs() < 1e-9);
    assert!((record.fcp - 1.2).abs() < 1e-9);
    assert_eq!(record.total_size, 1500);
    assert!(record.https);
    assert!(record.viewport);
    assert_eq!(record.document_title, "Present");
    assert_eq!(record.meta_description, "Missing");

    let titles: Vec<&str> = record.opportunities.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Serve images in next-gen formats", "Eliminate render-blocking resources"]
    );
}

#[tokio::test]
async fn server_error_degrades() {
    let endpoint = pagespeed_server(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "backend failure" } }),
    )
    .await;
    let record = fetch_from(&endpoint).await;

    assert_degraded(&record);
    assert!(record.errors[0].contains("500"));
}

#[tokio::test]
async fn malformed_payload_degrades() {
    let endpoint = pagespeed_server(StatusCode::OK, json!({ "unexpected": true })).await;
    assert_degraded(&fetch_from(&endpoint).await);
}

#[tokio::test]
async fn unreachable_endpoint_degrades() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let record = fetch_from(&format!("http://{}/runPagespeed", addr)).await;
    assert_degraded(&record);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    use axum::{routing::get, Json, Router};

    let app = Router::new().route(
        "/runPagespeed",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(pagespeed_payload())
        }),
    );
    let endpoint = format!("{}/runPagespeed", common::serve(app).await);

    let mut config = local_config(&endpoint, "http://127.0.0.1:9/unused");
    config.measurement_timeout = Duration::from_millis(100);
    let record = MeasurementFetcher::new(reqwest::Client::new(), &config)
        .fetch("https://example.com")
        .await;

    assert_degraded(&record);
    assert!(record.errors[0].contains("timed out"));
}
