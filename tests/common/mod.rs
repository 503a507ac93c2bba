#![allow(dead_code)]

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lightreport::config::AuditConfig;
use serde_json::{json, Value};
use std::time::Duration;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A PageSpeed payload for a mid-range site (performance 0.72).
pub fn pagespeed_payload() -> Value {
    json!({
        "lighthouseResult": {
            "requestedUrl": "https://example.com/",
            "categories": {
                "performance": { "score": 0.72 },
                "seo": { "score": 0.88 },
                "accessibility": { "score": 0.95 },
                "best-practices": { "score": 0.8 }
            },
            "audits": {
                "largest-contentful-paint": { "numericValue": 3100.0 },
                "first-contentful-paint": { "numericValue": 1200.0 },
                "cumulative-layout-shift": { "numericValue": 0.05 },
                "total-byte-weight": { "numericValue": 1536000.0 },
                "is-on-https": { "score": 1 },
                "viewport": { "score": 1 },
                "document-title": { "score": 1 },
                "meta-description": { "score": 0 },
                "render-blocking-resources": {
                    "title": "Eliminate render-blocking resources",
                    "description": "Defer scripts.",
                    "score": 0.3,
                    "details": { "type": "opportunity", "overallSavingsMs": 820.0 }
                },
                "uses-webp-images": {
                    "title": "Serve images in next-gen formats",
                    "description": "Use WebP.",
                    "score": 0.5,
                    "details": { "type": "opportunity", "overallSavingsMs": 1450.0 }
                }
            }
        }
    })
}

/// PageSpeed stand-in that answers every request with `payload`.
pub async fn pagespeed_server(status: StatusCode, payload: Value) -> String {
    let app = Router::new().route(
        "/runPagespeed",
        get(move || {
            let payload = payload.clone();
            async move { (status, Json(payload)) }
        }),
    );
    format!("{}/runPagespeed", serve(app).await)
}

/// Generative endpoint stand-in replying with `text` for any model.
pub async fn generation_server(text: &'static str) -> String {
    let app = Router::new().route(
        "/v1beta/models/{model}",
        post(move |Path(_model): Path<String>| async move {
            Json(json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            }))
        }),
    );
    format!("{}/v1beta", serve(app).await)
}

/// Configuration pointing at local stand-ins with short timeouts.
pub fn local_config(pagespeed_endpoint: &str, generation_endpoint: &str) -> AuditConfig {
    AuditConfig {
        gemini_api_key: Some("test-key".to_string()),
        pagespeed_endpoint: pagespeed_endpoint.to_string(),
        generation_endpoint: generation_endpoint.to_string(),
        measurement_timeout: Duration::from_secs(5),
        generation_timeout: Duration::from_secs(5),
        ..AuditConfig::default()
    }
}
