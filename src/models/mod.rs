// src/models/mod.rs

pub mod api;
pub mod app;
pub mod currency;
pub mod lighthouse;
pub mod measurement;
pub mod report;

pub use api::{
    AuditResponse, AuditStatus, ErrorResponse, ExportResponse, ParamsRunAudit, SettingInput,
    SettingParams, SettingsResponse,
};
pub use app::AppState;
pub use currency::CurrencyCode;
pub use measurement::{FieldMetric, MeasurementRecord, Opportunity};
pub use report::{AuditReport, Recommendation};
