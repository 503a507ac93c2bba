pub mod pagespeed;

pub use pagespeed::MeasurementFetcher;
