pub mod export_service;
pub mod report_service;
pub mod site_audit_service;
pub mod synthesis_service;

pub use export_service::{export_report, render_document, ExportedFiles, ReportDecoration};
pub use report_service::normalize;
pub use site_audit_service::{run_audit, AuditOutcome, Auditor, MeasurementFetcher};
pub use synthesis_service::{GeminiClient, GenerationBackend, ModelController};
