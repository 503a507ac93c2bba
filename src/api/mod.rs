// src/api/mod.rs

pub mod handler;

pub use handler::{
    document_handler, export_handler, get_settings, report_handler, run_audit_handler,
    set_setting,
};

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/audit", get(run_audit_handler))
        .route("/report", get(report_handler))
        .route("/report/document", get(document_handler))
        .route("/report/export", post(export_handler))
        .route("/settings", get(get_settings).post(set_setting))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
