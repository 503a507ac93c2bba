use serde::{Deserialize, Serialize};
use serde_json::Value;

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub score: Option<f64>,
    pub numeric_value: Option<f64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub details: Option<Value>,
}

impl Audit {
    /// Lighthouse reports binary audits as score 1 (pass) or 0 (fail).
    pub fn passed(&self) -> bool {
        self.score == Some(1.0)
    }

    pub fn details_type(&self) -> Option<&str> {
        self.details.as_ref()?.get("type")?.as_str()
    }

    /// Estimated savings for opportunity audits, in milliseconds.
    pub fn savings_ms(&self) -> f64 {
        self.details
            .as_ref()
            .and_then(|d| d.get("overallSavingsMs"))
            .and_then(Value::as_f64)
            .or(self.numeric_value)
            .unwrap_or(0.0)
    }

    pub fn item_count(&self) -> usize {
        self.details
            .as_ref()
            .and_then(|d| d.get("items"))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
