use crate::models::{CurrencyCode, FieldMetric, MeasurementRecord};
use std::fmt::Write;

/// JSON shape the model is asked to fill. Keys match `AuditReport`.
pub const REPORT_SHAPE: &str = r#"{
  "titlePage": { "websiteName": string, "url": string, "reportTitle": string, "subtitle": string, "preparedBy": string },
  "roiAnalysis": { "estimatedLostRevenue": string, "potentialRevenueGain": string, "conversionImpact": string, "paybackPeriod": string, "summary": string, "metrics": [{ "label": string, "value": string }] },
  "executiveSummary": { "overallScore": number, "headline": string, "summary": string, "keyFindings": [string], "strengths": [string], "weaknesses": [string] },
  "businessIntelligence": { "companyProfile": [{ "label": string, "details": string }], "industry": string, "targetAudience": string, "valueProposition": string, "businessModel": string },
  "technicalAudit": { "performanceScore": number, "summary": string, "categoryScores": [{ "category": string, "score": number }], "coreWebVitals": [{ "name": string, "value": string, "status": string }], "issues": [string] },
  "contentAudit": { "contentScore": number, "summary": string, "metaDescription": string, "documentTitle": string, "imageAltMissing": number, "strengths": [string], "gaps": [string] },
  "conversionInsights": { "conversionScore": number, "summary": string, "ctaAnalysis": string, "barriers": [string], "opportunities": [string], "trustSignals": [string] },
  "seoMarketing": { "seoScore": number, "httpsEnabled": boolean, "summary": string, "technicalSeo": [{ "item": string, "status": string }], "keywordOpportunities": [string], "contentStrategy": string },
  "competitivePositioning": { "marketPosition": string, "summary": string, "differentiators": [string], "benchmarks": [{ "category": string, "score": number }] },
  "mobileExperience": { "mobileScore": number, "viewportConfigured": boolean, "summary": string, "issues": [string], "recommendations": [string] },
  "criticalIssues": { "summary": string, "issues": [{ "title": string, "severity": string, "description": string, "impact": string }] },
  "recommendations": [{ "title": string, "priority": string, "impact": string, "effort": string, "rationale": string, "implementationSteps": [string], "expectedOutcome": string, "projectedRevenue": string, "projectedCustomers": string }],
  "growthOpportunities": { "summary": string, "opportunities": [{ "title": string, "description": string, "potential": string }] },
  "competitiveIntelligence": { "summary": string, "competitors": [{ "name": string, "strength": string, "weakness": string }], "marketTrends": [string] },
  "finalSummary": { "overallScore": number, "verdict": string, "summary": string, "nextSteps": [string] },
  "actionPlan": { "summary": string, "phases": [{ "phase": string, "timeframe": string, "actions": [string] }] }
}"#;

/// Instructions for one audit. Measurement data is appended separately by
/// the controller through [`measurement_context`].
pub fn build_prompt(url: &str, currency: CurrencyCode) -> String {
    format!(
        "You are a senior web performance and digital growth consultant. \
         Write a client-ready audit report for {url}.\n\
         Express every monetary amount in {code} using the symbol \"{symbol}\".\n\
         Provide exactly six recommendations ordered by priority, each with \
         concrete implementation steps, a projectedRevenue and a projectedCustomers estimate.\n\
         Base technical findings on the measurement data below; do not invent scores \
         that contradict it.\n\
         Respond with a single JSON object and nothing else, matching this shape:\n{shape}",
        url = url,
        code = currency.code(),
        symbol = currency.symbol(),
        shape = REPORT_SHAPE,
    )
}

/// Summary of the measurement, including the ranked top opportunities.
pub fn measurement_context(measurement: &MeasurementRecord) -> String {
    let mut out = String::from("Measurement data (PageSpeed Insights, desktop):\n");
    let _ = writeln!(
        out,
        "- Scores: performance {}, SEO {}, accessibility {}, best practices {}",
        measurement.performance_score,
        measurement.seo_score,
        measurement.accessibility_score,
        measurement.best_practices_score
    );
    let _ = writeln!(
        out,
        "- Lab metrics: LCP {:.2}s, CLS {:.3}, FCP {:.2}s, page weight {} KB",
        measurement.lcp, measurement.cls, measurement.fcp, measurement.total_size
    );
    let _ = writeln!(
        out,
        "- Field data: LCP {}, INP {}, CLS {}",
        field(&measurement.field_lcp),
        field(&measurement.field_inp),
        field(&measurement.field_cls)
    );
    let _ = writeln!(
        out,
        "- SEO basics: HTTPS {}, viewport {}, meta description {}, title {}, images missing alt text {}",
        yes_no(measurement.https),
        yes_no(measurement.viewport),
        measurement.meta_description,
        measurement.document_title,
        measurement.image_alt_missing
    );

    if measurement.opportunities.is_empty() {
        out.push_str("- No ranked optimization opportunities were reported.\n");
    } else {
        out.push_str("- Top optimization opportunities (largest savings first):\n");
        for (i, o) in measurement.opportunities.iter().enumerate() {
            let _ = writeln!(out, "  {}. {} (~{:.0} ms): {}", i + 1, o.title, o.savings, o.description);
        }
    }

    if measurement.is_degraded() {
        let _ = writeln!(
            out,
            "- Note: live measurement failed ({}); scores above are placeholders.",
            measurement.errors.join("; ")
        );
    }
    out
}

fn field(metric: &Option<FieldMetric>) -> String {
    match metric {
        Some(m) => format!("{} (p75 {})", m.category, m.percentile),
        None => "n/a".to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Opportunity;

    #[test]
    fn prompt_names_url_and_currency() {
        let prompt = build_prompt("https://acme.io", CurrencyCode::Gbp);
        assert!(prompt.contains("https://acme.io"));
        assert!(prompt.contains("GBP"));
        assert!(prompt.contains("£"));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn context_lists_opportunities_in_order() {
        let mut m = MeasurementRecord::unavailable("x");
        m.errors.clear();
        m.performance_score = 64;
        m.opportunities = vec![
            Opportunity { title: "First".into(), description: "a".into(), savings: 900.0 },
            Opportunity { title: "Second".into(), description: "b".into(), savings: 300.0 },
        ];

        let ctx = measurement_context(&m);
        assert!(ctx.contains("performance 64"));
        let first = ctx.find("1. First").unwrap();
        let second = ctx.find("2. Second").unwrap();
        assert!(first < second);
        assert!(!ctx.contains("placeholders"));
    }

    #[test]
    fn degraded_measurement_is_flagged() {
        let ctx = measurement_context(&MeasurementRecord::unavailable("timed out"));
        assert!(ctx.contains("timed out"));
        assert!(ctx.contains("placeholders"));
    }
}
