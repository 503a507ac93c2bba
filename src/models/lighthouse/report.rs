use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level PageSpeed Insights v5 response. Only the sub-trees the
/// measurement mapping reads are modelled.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedResponse {
    pub lighthouse_result: Root,
    pub loading_experience: Option<LoadingExperience>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Root {
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

impl Root {
    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.audits.get(id)
    }
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct LoadingExperience {
    #[serde(default)]
    pub metrics: HashMap<String, FieldMetricPayload>,
}

// Chrome UX report metric as embedded in loadingExperience
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldMetricPayload {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub percentile: f64,
}
