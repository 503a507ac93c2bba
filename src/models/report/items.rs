use super::lenient;
use serde::{Deserialize, Serialize};

// List entries. Every field tolerates absence, null and wrong types so a
// single sloppy entry never costs the model its whole list.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::score")]
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub item: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalIssue {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub potential: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub strength: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub weakness: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPhase {
    #[serde(default, deserialize_with = "lenient::text")]
    pub phase: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub timeframe: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub actions: Vec<String>,
}

/// One prioritized recommendation.
///
/// Models often return partial entries. The normalizer backfills the two
/// financial projections afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub impact: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub effort: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rationale: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub implementation_steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub expected_outcome: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub projected_revenue: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub projected_customers: String,
}
