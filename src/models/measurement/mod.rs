pub mod record;

pub use record::{FieldMetric, MeasurementRecord, Opportunity};
