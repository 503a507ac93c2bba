pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{AuditConfig, SettingsStore};
pub use error::{AuditError, Result};
pub use models::{AuditReport, CurrencyCode, MeasurementRecord};
pub use services::{normalize, run_audit, AuditOutcome, Auditor};
