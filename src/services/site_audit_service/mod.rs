pub mod audit;
pub mod compute;
pub mod lighthouse;

pub use audit::{run_audit, AuditOutcome, Auditor};
pub use compute::{rank_opportunities, to_measurement};
pub use lighthouse::MeasurementFetcher;
