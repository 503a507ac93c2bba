pub mod params;
pub mod responses;
pub mod status;

pub use params::{ParamsRunAudit, SettingInput, SettingParams};
pub use responses::{AuditResponse, ErrorResponse, ExportResponse, SettingsResponse};
pub use status::AuditStatus;
