use super::candidate::Candidate;
use super::defaults::{self as d, DefaultContext, GENERIC_CUSTOMER_IMPACT, GENERIC_REVENUE_IMPACT};
use crate::models::report::*;
use crate::models::{CurrencyCode, MeasurementRecord};
use serde_json::Value;

/// Builds a complete [`AuditReport`] from untrusted model output.
///
/// Pure and total. Each leaf takes the candidate's value when it is present,
/// non-null, correctly typed and non-empty, and the context-aware default
/// otherwise. Present lists replace the default list entirely.
pub fn normalize(
    candidate: &Value,
    measurement: &MeasurementRecord,
    url: &str,
    currency: CurrencyCode,
) -> AuditReport {
    let c = Candidate::new(candidate);
    let ctx = DefaultContext::new(url, currency, measurement);

    // Both summaries derive from the same inputs, so they always agree.
    let overall_score = overall_score(&c, measurement);

    AuditReport {
        title_page: title_page(&c, &ctx),
        roi_analysis: roi_analysis(&c, &ctx),
        executive_summary: executive_summary(&c, &ctx, overall_score),
        business_intelligence: business_intelligence(&c, &ctx),
        technical_audit: technical_audit(&c, &ctx),
        content_audit: content_audit(&c, &ctx),
        conversion_insights: conversion_insights(&c, &ctx),
        seo_marketing: seo_marketing(&c, &ctx),
        competitive_positioning: competitive_positioning(&c, &ctx),
        mobile_experience: mobile_experience(&c, &ctx),
        critical_issues: critical_issues(&c, &ctx),
        recommendations: recommendations(&c, &ctx),
        growth_opportunities: growth_opportunities(&c, &ctx),
        competitive_intelligence: competitive_intelligence(&c),
        final_summary: final_summary(&c, overall_score),
        action_plan: action_plan(&c),
    }
}

/// The larger of the model's executive score and the measured performance
/// score; a pessimistic model never understates a site that measured well.
fn overall_score(c: &Candidate, measurement: &MeasurementRecord) -> u32 {
    c.score("executiveSummary.overallScore")
        .or_else(|| c.score("finalSummary.overallScore"))
        .unwrap_or(0)
        .max(measurement.performance_score)
}

fn title_page(c: &Candidate, ctx: &DefaultContext) -> TitlePage {
    TitlePage {
        website_name: c.text_or("titlePage.websiteName", ctx.domain.clone()),
        url: c.text_or("titlePage.url", ctx.url),
        report_title: c.text_or("titlePage.reportTitle", d::report_title()),
        subtitle: c.text_or(
            "titlePage.subtitle",
            "Performance, SEO and conversion analysis",
        ),
        prepared_by: c.text_or("titlePage.preparedBy", "Digital Growth Team"),
        // The measurement capture is authoritative.
        screenshot: ctx
            .measurement
            .screenshot
            .clone()
            .or_else(|| c.text("titlePage.screenshot"))
            .unwrap_or_default(),
    }
}

fn roi_analysis(c: &Candidate, ctx: &DefaultContext) -> RoiAnalysis {
    RoiAnalysis {
        estimated_lost_revenue: c.text_or(
            "roiAnalysis.estimatedLostRevenue",
            d::revenue_risk(ctx.measurement.performance_score, ctx.currency),
        ),
        potential_revenue_gain: c.text_or(
            "roiAnalysis.potentialRevenueGain",
            d::potential_revenue_gain(ctx),
        ),
        conversion_impact: c.text_or(
            "roiAnalysis.conversionImpact",
            "Every second of delay can reduce conversions by up to 7%",
        ),
        payback_period: c.text_or("roiAnalysis.paybackPeriod", "3-6 months"),
        summary: c.text_or(
            "roiAnalysis.summary",
            "Performance and conversion improvements are expected to pay back quickly.",
        ),
        metrics: c.list_or("roiAnalysis.metrics", || d::roi_metrics(ctx)),
    }
}

fn executive_summary(c: &Candidate, ctx: &DefaultContext, overall_score: u32) -> ExecutiveSummary {
    ExecutiveSummary {
        overall_score,
        headline: c.text_or("executiveSummary.headline", d::headline(ctx)),
        summary: c.text_or(
            "executiveSummary.summary",
            format!(
                "{} has a working online presence, but measurable gaps in speed, search visibility \
                 and conversion design are costing leads.",
                ctx.domain
            ),
        ),
        key_findings: c.list_or("executiveSummary.keyFindings", || d::key_findings(ctx)),
        strengths: c.list_or("executiveSummary.strengths", d::strengths),
        weaknesses: c.list_or("executiveSummary.weaknesses", d::weaknesses),
    }
}

fn business_intelligence(c: &Candidate, ctx: &DefaultContext) -> BusinessIntelligence {
    BusinessIntelligence {
        company_profile: c.list_or("businessIntelligence.companyProfile", || {
            d::company_profile(ctx)
        }),
        industry: c.text_or("businessIntelligence.industry", "Digital services"),
        target_audience: c.text_or(
            "businessIntelligence.targetAudience",
            "Customers researching providers online",
        ),
        value_proposition: c.text_or(
            "businessIntelligence.valueProposition",
            "Reliable, expert service tailored to each client",
        ),
        business_model: c.text_or("businessIntelligence.businessModel", "Service-based"),
    }
}

fn technical_audit(c: &Candidate, ctx: &DefaultContext) -> TechnicalAudit {
    TechnicalAudit {
        performance_score: c
            .score("technicalAudit.performanceScore")
            .unwrap_or(ctx.measurement.performance_score),
        summary: c.text_or("technicalAudit.summary", d::technical_summary(ctx)),
        category_scores: c.list_or("technicalAudit.categoryScores", || d::category_scores(ctx)),
        core_web_vitals: c.list_or("technicalAudit.coreWebVitals", || d::core_web_vitals(ctx)),
        issues: c.list_or("technicalAudit.issues", || d::technical_issues(ctx)),
    }
}

fn content_audit(c: &Candidate, ctx: &DefaultContext) -> ContentAudit {
    ContentAudit {
        content_score: c
            .score("contentAudit.contentScore")
            .unwrap_or_else(|| d::content_score(ctx)),
        summary: c.text_or(
            "contentAudit.summary",
            "Content covers the core offer but leaves buyer questions unanswered.",
        ),
        meta_description: c.text_or(
            "contentAudit.metaDescription",
            ctx.measurement.meta_description.clone(),
        ),
        document_title: c.text_or(
            "contentAudit.documentTitle",
            ctx.measurement.document_title.clone(),
        ),
        image_alt_missing: c
            .count("contentAudit.imageAltMissing")
            .unwrap_or(ctx.measurement.image_alt_missing),
        strengths: c.list_or("contentAudit.strengths", d::content_strengths),
        gaps: c.list_or("contentAudit.gaps", || d::content_gaps(ctx)),
    }
}

fn conversion_insights(c: &Candidate, ctx: &DefaultContext) -> ConversionInsights {
    ConversionInsights {
        conversion_score: c
            .score("conversionInsights.conversionScore")
            .unwrap_or_else(|| d::conversion_score(ctx)),
        summary: c.text_or(
            "conversionInsights.summary",
            "Visitors arrive with intent, but the path to enquiry has avoidable friction.",
        ),
        cta_analysis: c.text_or(
            "conversionInsights.ctaAnalysis",
            "Calls to action exist but compete with secondary links and sit below the fold.",
        ),
        barriers: c.list_or("conversionInsights.barriers", d::conversion_barriers),
        opportunities: c.list_or("conversionInsights.opportunities", d::conversion_opportunities),
        trust_signals: c.list_or("conversionInsights.trustSignals", d::trust_signals),
    }
}

fn seo_marketing(c: &Candidate, ctx: &DefaultContext) -> SeoMarketing {
    SeoMarketing {
        seo_score: c
            .score("seoMarketing.seoScore")
            .unwrap_or(ctx.measurement.seo_score),
        https_enabled: c
            .flag("seoMarketing.httpsEnabled")
            .unwrap_or(ctx.measurement.https),
        summary: c.text_or(
            "seoMarketing.summary",
            "Technical SEO basics are partly in place; content depth limits rankings.",
        ),
        technical_seo: c.list_or("seoMarketing.technicalSeo", || d::technical_seo(ctx)),
        keyword_opportunities: c.list_or("seoMarketing.keywordOpportunities", || {
            d::keyword_opportunities(ctx)
        }),
        content_strategy: c.text_or(
            "seoMarketing.contentStrategy",
            "Publish in-depth guides that answer the questions buyers search before contacting a provider.",
        ),
    }
}

fn competitive_positioning(c: &Candidate, ctx: &DefaultContext) -> CompetitivePositioning {
    CompetitivePositioning {
        market_position: c.text_or("competitivePositioning.marketPosition", "Challenger"),
        summary: c.text_or(
            "competitivePositioning.summary",
            "Competitors with faster, clearer websites capture a larger share of online demand.",
        ),
        differentiators: c.list_or("competitivePositioning.differentiators", d::differentiators),
        benchmarks: c.list_or("competitivePositioning.benchmarks", || d::benchmarks(ctx)),
    }
}

fn mobile_experience(c: &Candidate, ctx: &DefaultContext) -> MobileExperience {
    MobileExperience {
        mobile_score: c
            .score("mobileExperience.mobileScore")
            .unwrap_or(ctx.measurement.performance_score),
        viewport_configured: c
            .flag("mobileExperience.viewportConfigured")
            .unwrap_or(ctx.measurement.viewport),
        summary: c.text_or(
            "mobileExperience.summary",
            "Mobile visitors face slower loads and harder navigation than desktop users.",
        ),
        issues: c.list_or("mobileExperience.issues", || d::mobile_issues(ctx)),
        recommendations: c.list_or("mobileExperience.recommendations", d::mobile_recommendations),
    }
}

fn critical_issues(c: &Candidate, ctx: &DefaultContext) -> CriticalIssues {
    CriticalIssues {
        summary: c.text_or(
            "criticalIssues.summary",
            "These issues have the largest measured effect on speed and revenue.",
        ),
        issues: c.list_or("criticalIssues.issues", || d::critical_issues(ctx)),
    }
}

fn recommendations(c: &Candidate, ctx: &DefaultContext) -> Vec<Recommendation> {
    let mut recommendations = c.list_or("recommendations", || d::recommendations(ctx));
    for rec in &mut recommendations {
        if rec.projected_revenue.is_empty() {
            rec.projected_revenue = GENERIC_REVENUE_IMPACT.to_string();
        }
        if rec.projected_customers.is_empty() {
            rec.projected_customers = GENERIC_CUSTOMER_IMPACT.to_string();
        }
    }
    recommendations
}

fn growth_opportunities(c: &Candidate, ctx: &DefaultContext) -> GrowthOpportunities {
    GrowthOpportunities {
        summary: c.text_or(
            "growthOpportunities.summary",
            "Beyond fixes, these channels offer the strongest compounding growth.",
        ),
        opportunities: c.list_or("growthOpportunities.opportunities", || {
            d::growth_opportunities(ctx)
        }),
    }
}

fn competitive_intelligence(c: &Candidate) -> CompetitiveIntelligence {
    CompetitiveIntelligence {
        summary: c.text_or(
            "competitiveIntelligence.summary",
            "The competitive field rewards speed, trust and helpful content.",
        ),
        competitors: c.list_or("competitiveIntelligence.competitors", d::competitors),
        market_trends: c.list_or("competitiveIntelligence.marketTrends", d::market_trends),
    }
}

fn final_summary(c: &Candidate, overall_score: u32) -> FinalSummary {
    FinalSummary {
        overall_score,
        verdict: c.text_or("finalSummary.verdict", d::verdict(overall_score)),
        summary: c.text_or(
            "finalSummary.summary",
            "Acting on the prioritized recommendations will improve speed, visibility and conversions.",
        ),
        next_steps: c.list_or("finalSummary.nextSteps", d::next_steps),
    }
}

fn action_plan(c: &Candidate) -> ActionPlan {
    ActionPlan {
        summary: c.text_or(
            "actionPlan.summary",
            "A phased plan that delivers quick wins first and compounding growth after.",
        ),
        phases: c.list_or("actionPlan.phases", d::action_phases),
    }
}
