use serde::{Deserialize, Serialize};

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Category {
    pub score: Option<f64>,
}

impl Category {
    /// Lighthouse scores are 0..1; reports use whole percentages.
    pub fn percent(category: Option<&Category>) -> u32 {
        category
            .and_then(|c| c.score)
            .map(|s| (s * 100.0).round().clamp(0.0, 100.0) as u32)
            .unwrap_or(0)
    }
}

// pub struct for Lighthouse categories
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}
