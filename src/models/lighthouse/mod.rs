pub mod audit;
pub mod category;
pub mod report;

pub use audit::Audit;
pub use category::{Categories, Category};
pub use report::{FieldMetricPayload, LoadingExperience, PageSpeedResponse, Root};
