pub mod measurement;

pub use measurement::{rank_opportunities, to_measurement};
