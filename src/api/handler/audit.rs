use crate::config::FAST_RETRY_MODEL;
use crate::error::AuditError;
use crate::models::{AppState, AuditResponse, AuditStatus, CurrencyCode, ErrorResponse, ExportResponse, ParamsRunAudit};
use crate::services::{export_report, render_document, Auditor, ReportDecoration};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::{error, info};
use std::sync::Arc;

fn status_for(err: &AuditError) -> StatusCode {
    match err {
        AuditError::CredentialMissing | AuditError::UnknownSetting(_) => StatusCode::BAD_REQUEST,
        AuditError::GenerationExhausted { .. } => StatusCode::BAD_GATEWAY,
        AuditError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: AuditError) -> Response {
    let body = ErrorResponse {
        status: AuditStatus::Error,
        kind: err.kind().to_string(),
        message: err.to_string(),
        retry_model: err.is_retryable().then(|| FAST_RETRY_MODEL.to_string()),
    };
    (status_for(&err), Json(body)).into_response()
}

fn no_report() -> Response {
    (StatusCode::NOT_FOUND, "No report has been generated yet").into_response()
}

fn superseded(url: &str) -> Response {
    info!("Discarded audit for {}; a newer run replaced it", url);
    let body = ErrorResponse {
        status: AuditStatus::Superseded,
        kind: "superseded".to_string(),
        message: "A newer audit replaced this one".to_string(),
        retry_model: None,
    };
    (StatusCode::CONFLICT, Json(body)).into_response()
}

/// Starts a run. Starting one discards any run still in flight; only the
/// newest run's outcome becomes the latest report.
pub async fn run_audit_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsRunAudit>,
) -> Response {
    if params.url.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing url").into_response();
    }

    let mut config = state.run_config().await;
    if let Some(model) = params.model.filter(|m| !m.trim().is_empty()) {
        config.preferred_model = model;
    }
    if let Some(code) = params.currency.as_deref() {
        config.currency = CurrencyCode::from_code(code);
    }

    info!("Started audit for {} with {}", params.url, config.preferred_model);
    let auditor = match Auditor::new(state.client.clone(), config) {
        Ok(auditor) => auditor,
        Err(e) => return error_response(e),
    };

    let generation = state.next_generation();
    let url = params.url.clone();
    let task = tokio::spawn(async move { auditor.run(&url).await });
    state.track_run(generation, task.abort_handle()).await;
    let result = task.await;
    state.finish_run(generation).await;

    match result {
        Ok(Ok(outcome)) => {
            let body = AuditResponse {
                status: AuditStatus::Completed,
                report: outcome.report.clone(),
                warnings: outcome.warnings.clone(),
            };
            if state.publish(generation, outcome).await {
                (StatusCode::OK, Json(body)).into_response()
            } else {
                superseded(&params.url)
            }
        }
        Ok(Err(_)) if !state.is_current(generation) => superseded(&params.url),
        Ok(Err(e)) => {
            error!("Audit for {} failed: {}", params.url, e);
            error_response(e)
        }
        Err(e) if e.is_cancelled() => superseded(&params.url),
        Err(e) => {
            error!("Audit task for {} panicked: {}", params.url, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn report_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.latest.lock().await.as_ref() {
        Some(outcome) => Json(AuditResponse {
            status: AuditStatus::Completed,
            report: outcome.report.clone(),
            warnings: outcome.warnings.clone(),
        })
        .into_response(),
        None => no_report(),
    }
}

pub async fn document_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.latest.lock().await.as_ref() {
        Some(outcome) => Html(render_document(
            &outcome.report,
            &outcome.warnings,
            &ReportDecoration::generate(),
        ))
        .into_response(),
        None => no_report(),
    }
}

pub async fn export_handler(State(state): State<Arc<AppState>>) -> Response {
    let Some(outcome) = state.latest.lock().await.clone() else {
        return no_report();
    };

    let dir = state.export_dir.clone();
    let exported = tokio::task::spawn_blocking(move || {
        export_report(&dir, &outcome.report, &outcome.warnings)
    })
    .await;

    match exported {
        Ok(Ok(files)) => Json(ExportResponse {
            json: files.json.display().to_string(),
            html: files.html.display().to_string(),
            pdf: files.pdf.map(|p| p.display().to_string()),
        })
        .into_response(),
        Ok(Err(e)) => {
            error!("Export failed: {}", e);
            error_response(e)
        }
        Err(e) => {
            error!("Export task panicked: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
