//! Field readers for model-supplied list entries. A null or wrongly typed
//! field reads as that field's empty value instead of failing the entry.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Rounds any number onto the 0..=100 score scale.
pub fn clamp_score(n: f64) -> u32 {
    n.round().clamp(0.0, 100.0) as u32
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

pub fn score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|n| n.is_finite())
        .map_or(0, clamp_score))
}

/// Keeps the non-empty strings of an array; anything else reads as empty.
pub fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use crate::models::report::{CategoryScore, CriticalIssue, Recommendation};
    use serde_json::json;

    #[test]
    fn null_and_wrong_types_read_as_empty() {
        let issue: CriticalIssue = serde_json::from_value(json!({
            "title": "Slow hero image",
            "severity": 3,
            "description": null,
            "impact": ["not", "text"]
        }))
        .unwrap();
        assert_eq!(issue.title, "Slow hero image");
        assert_eq!(issue.severity, "3");
        assert_eq!(issue.description, "");
        assert_eq!(issue.impact, "");
    }

    #[test]
    fn item_scores_round_and_clamp() {
        let parse = |v| serde_json::from_value::<CategoryScore>(v).unwrap().score;
        assert_eq!(parse(json!({ "category": "SEO", "score": 72.5 })), 73);
        assert_eq!(parse(json!({ "category": "SEO", "score": 130 })), 100);
        assert_eq!(parse(json!({ "category": "SEO", "score": -4 })), 0);
        assert_eq!(parse(json!({ "category": "SEO", "score": "high" })), 0);
        assert_eq!(parse(json!({ "category": "SEO" })), 0);
    }

    #[test]
    fn partial_recommendation_keeps_what_it_has() {
        let rec: Recommendation = serde_json::from_value(json!({
            "title": "Add testimonials",
            "projectedRevenue": null,
            "implementationSteps": ["Collect quotes", null, "", 4]
        }))
        .unwrap();
        assert_eq!(rec.title, "Add testimonials");
        assert_eq!(rec.projected_revenue, "");
        assert_eq!(rec.implementation_steps, vec!["Collect quotes"]);
    }
}
