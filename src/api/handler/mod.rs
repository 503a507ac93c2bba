pub mod audit;
pub mod settings;

pub use audit::{document_handler, export_handler, report_handler, run_audit_handler};
pub use settings::{get_settings, set_setting};
