use crate::models::lighthouse::{Audit, Category, FieldMetricPayload, PageSpeedResponse, Root};
use crate::models::measurement::record::MISSING;
use crate::models::{FieldMetric, MeasurementRecord, Opportunity};
use std::cmp::Ordering;

/// Audits scoring at or above this are already "good" and not worth listing.
pub const GOOD_SCORE: f64 = 0.9;
pub const MAX_OPPORTUNITIES: usize = 5;

pub fn to_measurement(payload: &PageSpeedResponse) -> MeasurementRecord {
    let report = &payload.lighthouse_result;
    let categories = &report.categories;

    let field = |key: &str| {
        payload
            .loading_experience
            .as_ref()
            .and_then(|le| le.metrics.get(key))
            .map(|m: &FieldMetricPayload| FieldMetric {
                category: m.category.clone(),
                percentile: m.percentile,
            })
    };

    let presence = |id: &str| {
        if report.audit(id).is_some_and(Audit::passed) {
            "Present".to_string()
        } else {
            MISSING.to_string()
        }
    };

    MeasurementRecord {
        performance_score: Category::percent(categories.performance.as_ref()),
        seo_score: Category::percent(categories.seo.as_ref()),
        accessibility_score: Category::percent(categories.accessibility.as_ref()),
        best_practices_score: Category::percent(categories.best_practices.as_ref()),
        lcp: numeric(report, "largest-contentful-paint") / 1000.0,
        cls: numeric(report, "cumulative-layout-shift"),
        fcp: numeric(report, "first-contentful-paint") / 1000.0,
        total_size: (numeric(report, "total-byte-weight") / 1024.0).round() as u64,
        field_lcp: field("LARGEST_CONTENTFUL_PAINT_MS"),
        field_inp: field("INTERACTION_TO_NEXT_PAINT"),
        field_cls: field("CUMULATIVE_LAYOUT_SHIFT_SCORE"),
        screenshot: report
            .audit("final-screenshot")
            .and_then(|a| a.details.as_ref())
            .and_then(|d| d.get("data"))
            .and_then(|d| d.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        meta_description: presence("meta-description"),
        document_title: presence("document-title"),
        image_alt_missing: report.audit("image-alt").map_or(0, Audit::item_count) as u32,
        https: report.audit("is-on-https").is_some_and(Audit::passed),
        viewport: report.audit("viewport").is_some_and(Audit::passed),
        opportunities: rank_opportunities(report),
        errors: Vec::new(),
    }
}

fn numeric(report: &Root, id: &str) -> f64 {
    report
        .audit(id)
        .and_then(|a| a.numeric_value)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Opportunity audits below the good threshold, largest savings first,
/// capped at five. The prompt is primed with exactly this list.
pub fn rank_opportunities(report: &Root) -> Vec<Opportunity> {
    let mut ranked: Vec<Opportunity> = report
        .audits
        .values()
        .filter(|a| a.details_type() == Some("opportunity"))
        .filter(|a| a.score.is_some_and(|s| s < GOOD_SCORE))
        .map(|a| Opportunity {
            title: a.title.clone(),
            description: a.description.clone(),
            savings: a.savings_ms(),
        })
        .collect();

    // Audits come out of a map; tie-break on title to keep the order stable.
    ranked.sort_by(|a, b| {
        b.savings
            .partial_cmp(&a.savings)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    ranked.truncate(MAX_OPPORTUNITIES);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> PageSpeedResponse {
        serde_json::from_value(value).unwrap()
    }

    fn opportunity(title: &str, score: f64, savings: f64) -> serde_json::Value {
        json!({
            "title": title,
            "description": format!("{} description", title),
            "score": score,
            "numericValue": savings,
            "details": { "type": "opportunity", "overallSavingsMs": savings }
        })
    }

    #[test]
    fn maps_scores_and_metrics() {
        let record = to_measurement(&payload(json!({
            "lighthouseResult": {
                "categories": {
                    "performance": { "score": 0.72 },
                    "seo": { "score": 0.915 },
                    "accessibility": { "score": 1.0 },
                    "best-practices": { "score": 0.5 }
                },
                "audits": {
                    "largest-contentful-paint": { "numericValue": 2450.0 },
                    "first-contentful-paint": { "numericValue": 900.0 },
                    "cumulative-layout-shift": { "numericValue": 0.12 },
                    "total-byte-weight": { "numericValue": 2048.0 },
                    "is-on-https": { "score": 1 },
                    "viewport": { "score": 0 },
                    "meta-description": { "score": 1 },
                    "image-alt": { "score": 0, "details": { "type": "table", "items": [{}, {}, {}] } },
                    "final-screenshot": { "details": { "type": "screenshot", "data": "data:image/jpeg;base64,AAA" } }
                }
            },
            "loadingExperience": {
                "metrics": {
                    "LARGEST_CONTENTFUL_PAINT_MS": { "category": "FAST", "percentile": 2100 }
                }
            }
        })));

        assert_eq!(record.performance_score, 72);
        assert_eq!(record.seo_score, 92);
        assert_eq!(record.accessibility_score, 100);
        assert_eq!(record.best_practices_score, 50);
        assert!((record.lcp - 2.45).abs() < 1e-9);
        assert!((record.fcp - 0.9).abs() < 1e-9);
        assert!((record.cls - 0.12).abs() < 1e-9);
        assert_eq!(record.total_size, 2);
        assert!(record.https);
        assert!(!record.viewport);
        assert_eq!(record.meta_description, "Present");
        assert_eq!(record.document_title, MISSING);
        assert_eq!(record.image_alt_missing, 3);
        assert_eq!(record.screenshot.as_deref(), Some("data:image/jpeg;base64,AAA"));
        assert_eq!(record.field_lcp.as_ref().map(|f| f.category.as_str()), Some("FAST"));
        assert!(record.field_inp.is_none());
        assert!(record.errors.is_empty());
    }

    #[test]
    fn opportunities_are_filtered_ranked_and_capped() {
        let record = to_measurement(&payload(json!({
            "lighthouseResult": {
                "audits": {
                    "a": opportunity("Reduce unused JavaScript", 0.4, 1200.0),
                    "b": opportunity("Serve images in next-gen formats", 0.2, 2400.0),
                    "c": opportunity("Already good", 0.95, 9000.0),
                    "d": opportunity("Eliminate render-blocking resources", 0.89, 600.0),
                    "e": opportunity("Minify CSS", 0.5, 150.0),
                    "f": opportunity("Enable text compression", 0.1, 800.0),
                    "g": opportunity("Properly size images", 0.3, 300.0),
                    "h": { "title": "Not an opportunity", "score": 0.0,
                           "details": { "type": "table", "overallSavingsMs": 5000.0 } },
                    "i": { "title": "Informative", "score": null,
                           "details": { "type": "opportunity", "overallSavingsMs": 7000.0 } }
                }
            }
        })));

        let titles: Vec<&str> = record.opportunities.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Serve images in next-gen formats",
                "Reduce unused JavaScript",
                "Enable text compression",
                "Eliminate render-blocking resources",
                "Properly size images",
            ]
        );
    }

    #[test]
    fn missing_categories_score_zero() {
        let record = to_measurement(&payload(json!({ "lighthouseResult": {} })));
        assert_eq!(record.performance_score, 0);
        assert_eq!(record.lcp, 0.0);
        assert!(record.opportunities.is_empty());
        assert_eq!(record.meta_description, MISSING);
    }
}
