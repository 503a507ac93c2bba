use serde::{Deserialize, Serialize};

/// Sentinel used for on-page text signals the measurement could not find.
pub const MISSING: &str = "Missing";

/// Real-user (field) metric from the Chrome UX report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetric {
    pub category: String,
    pub percentile: f64,
}

/// Optimization opportunity, ranked by estimated savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    /// Estimated savings in milliseconds.
    pub savings: f64,
}

/// Compact, always fully populated result of one performance measurement.
///
/// A failed fetch yields [`MeasurementRecord::unavailable`]: zero scores,
/// `https`/`viewport` false and a non-empty `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub performance_score: u32,
    pub seo_score: u32,
    pub accessibility_score: u32,
    pub best_practices_score: u32,
    /// Largest contentful paint, seconds.
    pub lcp: f64,
    pub cls: f64,
    /// First contentful paint, seconds.
    pub fcp: f64,
    /// Total page weight in KB.
    pub total_size: u64,
    pub field_lcp: Option<FieldMetric>,
    pub field_inp: Option<FieldMetric>,
    pub field_cls: Option<FieldMetric>,
    pub screenshot: Option<String>,
    pub meta_description: String,
    pub document_title: String,
    pub image_alt_missing: u32,
    pub https: bool,
    pub viewport: bool,
    pub opportunities: Vec<Opportunity>,
    pub errors: Vec<String>,
}

impl MeasurementRecord {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            performance_score: 0,
            seo_score: 0,
            accessibility_score: 0,
            best_practices_score: 0,
            lcp: 0.0,
            cls: 0.0,
            fcp: 0.0,
            total_size: 0,
            field_lcp: None,
            field_inp: None,
            field_cls: None,
            screenshot: None,
            meta_description: MISSING.to_string(),
            document_title: MISSING.to_string(),
            image_alt_missing: 0,
            https: false,
            viewport: false,
            opportunities: Vec::new(),
            errors: vec![reason.into()],
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.errors.is_empty()
    }
}
