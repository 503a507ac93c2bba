use super::status::AuditStatus;
use crate::models::AuditReport;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub status: AuditStatus,
    pub report: AuditReport,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: AuditStatus,
    pub kind: String,
    pub message: String,
    /// Faster model the client may offer for the next attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub values: BTreeMap<String, String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub json: String,
    pub html: String,
    pub pdf: Option<String>,
}
