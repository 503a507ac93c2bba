use crate::models::report::{
    ActionPhase, CategoryScore, CheckItem, Competitor, CriticalIssue, GrowthItem, LabeledValue,
    MetricItem, ProfileItem, Recommendation,
};
use crate::models::measurement::record::MISSING;
use crate::models::{CurrencyCode, MeasurementRecord};
use crate::utils::display_domain;

pub const GENERIC_REVENUE_IMPACT: &str = "Positive revenue impact expected once implemented";
pub const GENERIC_CUSTOMER_IMPACT: &str = "Growth in new customers expected once implemented";

/// Everything a default may depend on. Built once per normalization.
#[derive(Debug, Clone)]
pub struct DefaultContext<'a> {
    pub url: &'a str,
    pub domain: String,
    pub currency: CurrencyCode,
    pub measurement: &'a MeasurementRecord,
}

impl<'a> DefaultContext<'a> {
    pub fn new(url: &'a str, currency: CurrencyCode, measurement: &'a MeasurementRecord) -> Self {
        Self {
            url,
            domain: display_domain(url),
            currency,
            measurement,
        }
    }

    fn money(&self, low: &str, high: &str) -> String {
        let s = self.currency.symbol();
        format!("{s}{low} - {s}{high}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            RiskTier::Low
        } else if score >= 50 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    fn band(self) -> (&'static str, &'static str) {
        match self {
            RiskTier::Low => ("5,000", "15,000"),
            RiskTier::Medium => ("25,000", "45,000"),
            RiskTier::High => ("60,000", "120,000"),
        }
    }
}

/// Annual revenue at risk for a measured performance score, e.g.
/// `"$25,000 - $45,000 Risk"`.
pub fn revenue_risk(score: u32, currency: CurrencyCode) -> String {
    let (low, high) = RiskTier::from_score(score).band();
    let s = currency.symbol();
    format!("{s}{low} - {s}{high} Risk")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn status_for(score: u32) -> &'static str {
    match RiskTier::from_score(score) {
        RiskTier::Low => "Good",
        RiskTier::Medium => "Needs Improvement",
        RiskTier::High => "Poor",
    }
}

fn pass_fail(ok: bool) -> String {
    let status = if ok { "Pass" } else { "Fail" };
    status.to_string()
}

// Title page, ROI

pub fn report_title() -> &'static str {
    "Website Performance & Growth Audit"
}

pub fn roi_metrics(ctx: &DefaultContext) -> Vec<LabeledValue> {
    vec![
        LabeledValue {
            label: "Revenue at risk".to_string(),
            value: revenue_risk(ctx.measurement.performance_score, ctx.currency),
        },
        LabeledValue {
            label: "Conversion uplift potential".to_string(),
            value: "15-25%".to_string(),
        },
        LabeledValue {
            label: "Bounce rate reduction".to_string(),
            value: "10-20%".to_string(),
        },
        LabeledValue {
            label: "Estimated payback".to_string(),
            value: "3-6 months".to_string(),
        },
    ]
}

pub fn potential_revenue_gain(ctx: &DefaultContext) -> String {
    format!("{} annually", ctx.money("30,000", "75,000"))
}

// Executive summary

pub fn headline(ctx: &DefaultContext) -> String {
    format!(
        "{} scores {}/100 on performance with clear room to grow",
        ctx.domain, ctx.measurement.performance_score
    )
}

pub fn key_findings(ctx: &DefaultContext) -> Vec<String> {
    let m = ctx.measurement;
    vec![
        format!("Performance score of {}/100 on desktop", m.performance_score),
        format!("Largest Contentful Paint of {:.1}s", m.lcp),
        format!("SEO score of {}/100", m.seo_score),
        format!("Accessibility score of {}/100", m.accessibility_score),
    ]
}

pub fn strengths() -> Vec<String> {
    strings(&[
        "Established online presence with a clear brand",
        "Core pages are indexable by search engines",
        "Foundation in place for incremental optimization",
    ])
}

pub fn weaknesses() -> Vec<String> {
    strings(&[
        "Page speed below modern user expectations",
        "Limited conversion-focused page structure",
        "Untapped organic search opportunities",
    ])
}

// Business intelligence

pub fn company_profile(ctx: &DefaultContext) -> Vec<ProfileItem> {
    vec![
        ProfileItem {
            label: "Company".to_string(),
            details: ctx.domain.clone(),
        },
        ProfileItem {
            label: "Website".to_string(),
            details: ctx.url.to_string(),
        },
        ProfileItem {
            label: "Industry".to_string(),
            details: "Digital services".to_string(),
        },
        ProfileItem {
            label: "Primary channel".to_string(),
            details: "Online".to_string(),
        },
    ]
}

// Technical audit

pub fn category_scores(ctx: &DefaultContext) -> Vec<CategoryScore> {
    let m = ctx.measurement;
    [
        ("Performance", m.performance_score),
        ("SEO", m.seo_score),
        ("Accessibility", m.accessibility_score),
        ("Best Practices", m.best_practices_score),
    ]
    .into_iter()
    .map(|(category, score)| CategoryScore {
        category: category.to_string(),
        score,
    })
    .collect()
}

pub fn core_web_vitals(ctx: &DefaultContext) -> Vec<MetricItem> {
    let m = ctx.measurement;
    let rate = |value: f64, good: f64, poor: f64| {
        let status = if value <= good {
            "Good"
        } else if value <= poor {
            "Needs Improvement"
        } else {
            "Poor"
        };
        status.to_string()
    };
    vec![
        MetricItem {
            name: "Largest Contentful Paint".to_string(),
            value: format!("{:.1} s", m.lcp),
            status: rate(m.lcp, 2.5, 4.0),
        },
        MetricItem {
            name: "Cumulative Layout Shift".to_string(),
            value: format!("{:.3}", m.cls),
            status: rate(m.cls, 0.1, 0.25),
        },
        MetricItem {
            name: "First Contentful Paint".to_string(),
            value: format!("{:.1} s", m.fcp),
            status: rate(m.fcp, 1.8, 3.0),
        },
        MetricItem {
            name: "Total Page Weight".to_string(),
            value: format!("{} KB", m.total_size),
            status: rate(m.total_size as f64, 1600.0, 3200.0),
        },
    ]
}

pub fn technical_summary(ctx: &DefaultContext) -> String {
    format!(
        "Measured performance is rated {} ({}/100).",
        status_for(ctx.measurement.performance_score).to_lowercase(),
        ctx.measurement.performance_score
    )
}

pub fn technical_issues(ctx: &DefaultContext) -> Vec<String> {
    if ctx.measurement.opportunities.is_empty() {
        strings(&[
            "Render-blocking resources delay first paint",
            "Images are not served in modern formats",
            "Unused JavaScript increases download size",
        ])
    } else {
        ctx.measurement
            .opportunities
            .iter()
            .map(|o| o.title.clone())
            .collect()
    }
}

// Content

pub fn content_score(ctx: &DefaultContext) -> u32 {
    (ctx.measurement.seo_score + ctx.measurement.accessibility_score) / 2
}

pub fn content_strengths() -> Vec<String> {
    strings(&[
        "Clear description of core services",
        "Consistent tone across key pages",
    ])
}

pub fn content_gaps(ctx: &DefaultContext) -> Vec<String> {
    let m = ctx.measurement;
    let mut gaps = Vec::new();
    if m.meta_description == MISSING {
        gaps.push("Meta description missing on the audited page".to_string());
    }
    if m.document_title == MISSING {
        gaps.push("Document title missing or empty".to_string());
    }
    if m.image_alt_missing > 0 {
        gaps.push(format!("{} images without alt text", m.image_alt_missing));
    }
    gaps.push("Few long-form pages targeting buyer questions".to_string());
    gaps.push("Limited case studies and customer stories".to_string());
    gaps
}

// Conversion

pub fn conversion_score(ctx: &DefaultContext) -> u32 {
    (ctx.measurement.performance_score + ctx.measurement.best_practices_score) / 2
}

pub fn conversion_barriers() -> Vec<String> {
    strings(&[
        "Slow load times increase abandonment",
        "Primary call to action not visible above the fold",
        "Contact forms ask for more fields than needed",
    ])
}

pub fn conversion_opportunities() -> Vec<String> {
    strings(&[
        "Add a persistent primary call to action",
        "Introduce lead magnets for early-stage visitors",
        "Shorten forms to the essential fields",
    ])
}

pub fn trust_signals() -> Vec<String> {
    strings(&[
        "Customer testimonials",
        "Recognizable client logos",
        "Security and privacy badges",
    ])
}

// SEO

pub fn technical_seo(ctx: &DefaultContext) -> Vec<CheckItem> {
    let m = ctx.measurement;
    vec![
        CheckItem {
            item: "HTTPS".to_string(),
            status: pass_fail(m.https),
        },
        CheckItem {
            item: "Mobile viewport".to_string(),
            status: pass_fail(m.viewport),
        },
        CheckItem {
            item: "Meta description".to_string(),
            status: pass_fail(m.meta_description != MISSING),
        },
        CheckItem {
            item: "Document title".to_string(),
            status: pass_fail(m.document_title != MISSING),
        },
        CheckItem {
            item: "Image alt text".to_string(),
            status: pass_fail(m.image_alt_missing == 0),
        },
    ]
}

pub fn keyword_opportunities(ctx: &DefaultContext) -> Vec<String> {
    vec![
        format!("{} reviews", ctx.domain.to_lowercase()),
        "best local provider".to_string(),
        "pricing and packages".to_string(),
        "how to choose a provider".to_string(),
    ]
}

// Competition

pub fn differentiators() -> Vec<String> {
    strings(&[
        "Personalized service",
        "Specialist expertise",
        "Responsive support",
    ])
}

pub fn benchmarks(ctx: &DefaultContext) -> Vec<CategoryScore> {
    vec![
        CategoryScore {
            category: ctx.domain.clone(),
            score: ctx.measurement.performance_score,
        },
        CategoryScore {
            category: "Industry average".to_string(),
            score: 65,
        },
        CategoryScore {
            category: "Top competitor".to_string(),
            score: 85,
        },
    ]
}

pub fn competitors() -> Vec<Competitor> {
    vec![
        Competitor {
            name: "Market leader".to_string(),
            strength: "Fast, conversion-optimized website".to_string(),
            weakness: "Generic, less personal messaging".to_string(),
        },
        Competitor {
            name: "Regional challenger".to_string(),
            strength: "Strong local search visibility".to_string(),
            weakness: "Thin content and weak trust signals".to_string(),
        },
        Competitor {
            name: "Low-cost provider".to_string(),
            strength: "Aggressive pricing".to_string(),
            weakness: "Poor mobile experience".to_string(),
        },
    ]
}

pub fn market_trends() -> Vec<String> {
    strings(&[
        "Buyers research on mobile before contacting a provider",
        "Search engines reward fast, stable pages",
        "AI-assisted search summarizes answers from well-structured content",
    ])
}

// Mobile

pub fn mobile_issues(ctx: &DefaultContext) -> Vec<String> {
    let mut issues = Vec::new();
    if !ctx.measurement.viewport {
        issues.push("Viewport meta tag missing or misconfigured".to_string());
    }
    issues.push("Tap targets too close together on small screens".to_string());
    issues.push("Large images slow down cellular connections".to_string());
    issues
}

pub fn mobile_recommendations() -> Vec<String> {
    strings(&[
        "Serve responsive images sized per device",
        "Increase tap target spacing to at least 48px",
        "Test key journeys on mid-range Android devices",
    ])
}

// Critical issues

pub fn critical_issues(ctx: &DefaultContext) -> Vec<CriticalIssue> {
    if !ctx.measurement.opportunities.is_empty() {
        return ctx
            .measurement
            .opportunities
            .iter()
            .map(|o| CriticalIssue {
                title: o.title.clone(),
                severity: if o.savings >= 1000.0 { "High" } else { "Medium" }.to_string(),
                description: o.description.clone(),
                impact: format!("Potential savings of {:.1} s per page load", o.savings / 1000.0),
            })
            .collect();
    }
    vec![
        CriticalIssue {
            title: "Slow page load".to_string(),
            severity: "High".to_string(),
            description: "Key pages take too long to become usable.".to_string(),
            impact: "Visitors leave before seeing the offer".to_string(),
        },
        CriticalIssue {
            title: "Weak calls to action".to_string(),
            severity: "Medium".to_string(),
            description: "Next steps are not obvious on primary pages.".to_string(),
            impact: "Lower enquiry and purchase rates".to_string(),
        },
        CriticalIssue {
            title: "Incomplete on-page SEO".to_string(),
            severity: "Medium".to_string(),
            description: "Metadata and structured content are inconsistent.".to_string(),
            impact: "Reduced organic visibility".to_string(),
        },
    ]
}

// Recommendations

/// Six pre-authored recommendations, highest priority first. Financial
/// projections are example magnitudes in the selected currency.
pub fn recommendations(ctx: &DefaultContext) -> Vec<Recommendation> {
    let rec = |title: &str,
               priority: &str,
               impact: &str,
               effort: &str,
               rationale: &str,
               steps: &[&str],
               outcome: &str,
               revenue: (&str, &str),
               customers: &str| Recommendation {
        title: title.to_string(),
        priority: priority.to_string(),
        impact: impact.to_string(),
        effort: effort.to_string(),
        rationale: rationale.to_string(),
        implementation_steps: strings(steps),
        expected_outcome: outcome.to_string(),
        projected_revenue: format!("{} annually", ctx.money(revenue.0, revenue.1)),
        projected_customers: customers.to_string(),
    };

    vec![
        rec(
            "Optimize Core Web Vitals",
            "Critical",
            "High",
            "Medium",
            "Load speed directly affects bounce rate, conversions and rankings.",
            &[
                "Defer non-critical JavaScript",
                "Inline critical CSS",
                "Preload the largest above-the-fold image",
            ],
            "Pages become usable in under 2.5 seconds",
            ("15,000", "25,000"),
            "+40-60 customers/year",
        ),
        rec(
            "Compress and Modernize Images",
            "High",
            "High",
            "Low",
            "Images are usually the largest share of page weight.",
            &[
                "Convert images to WebP or AVIF",
                "Serve responsive sizes with srcset",
                "Lazy-load below-the-fold media",
            ],
            "Page weight reduced by 40% or more",
            ("8,000", "15,000"),
            "+25-40 customers/year",
        ),
        rec(
            "Strengthen On-Page SEO",
            "High",
            "High",
            "Medium",
            "Complete metadata and structured content lift organic visibility.",
            &[
                "Write unique titles and meta descriptions",
                "Add descriptive alt text to all images",
                "Implement schema.org markup for the business",
            ],
            "More qualified organic traffic within 3 months",
            ("12,000", "20,000"),
            "+30-50 customers/year",
        ),
        rec(
            "Improve Mobile Conversion Paths",
            "High",
            "High",
            "Medium",
            "Most first visits happen on mobile devices.",
            &[
                "Add a sticky call-to-action bar",
                "Enable click-to-call and one-tap forms",
                "Simplify navigation for small screens",
            ],
            "Higher mobile enquiry rate",
            ("10,000", "18,000"),
            "+30-45 customers/year",
        ),
        rec(
            "Add Trust Signals and Social Proof",
            "Medium",
            "Medium",
            "Low",
            "Visitors need reassurance before making contact.",
            &[
                "Publish testimonials near calls to action",
                "Show client logos and certifications",
                "Add short case studies with results",
            ],
            "Improved visitor-to-lead conversion",
            ("6,000", "12,000"),
            "+15-30 customers/year",
        ),
        rec(
            "Establish a Content Marketing Program",
            "Medium",
            "High",
            "High",
            "Helpful content compounds search traffic and authority over time.",
            &[
                "Build a topic plan around buyer questions",
                "Publish two in-depth articles per month",
                "Promote content through email and social channels",
            ],
            "Steady growth in organic leads",
            ("20,000", "35,000"),
            "+50-80 customers/year",
        ),
    ]
}

// Growth, final summary, action plan

pub fn growth_opportunities(ctx: &DefaultContext) -> Vec<GrowthItem> {
    vec![
        GrowthItem {
            title: "Local search visibility".to_string(),
            description: "Optimize the business profile and location pages.".to_string(),
            potential: format!("{} per year", ctx.money("10,000", "20,000")),
        },
        GrowthItem {
            title: "Email nurturing".to_string(),
            description: "Capture leads with a newsletter and automated follow-ups.".to_string(),
            potential: format!("{} per year", ctx.money("5,000", "15,000")),
        },
        GrowthItem {
            title: "Conversion rate optimization".to_string(),
            description: "Run structured A/B tests on key landing pages.".to_string(),
            potential: format!("{} per year", ctx.money("8,000", "25,000")),
        },
    ]
}

pub fn verdict(score: u32) -> String {
    let verdict = match RiskTier::from_score(score) {
        RiskTier::Low => "Strong foundation, ready to scale",
        RiskTier::Medium => "Solid base with significant upside",
        RiskTier::High => "Urgent improvements needed",
    };
    verdict.to_string()
}

pub fn next_steps() -> Vec<String> {
    strings(&[
        "Prioritize the critical performance fixes",
        "Schedule a technical implementation sprint",
        "Re-run this audit after changes go live",
    ])
}

pub fn action_phases() -> Vec<ActionPhase> {
    let phase = |phase: &str, timeframe: &str, actions: &[&str]| ActionPhase {
        phase: phase.to_string(),
        timeframe: timeframe.to_string(),
        actions: strings(actions),
    };
    vec![
        phase(
            "Quick wins",
            "Weeks 1-2",
            &["Compress images", "Fix missing metadata", "Enable text compression"],
        ),
        phase(
            "Foundation",
            "Weeks 3-6",
            &["Optimize Core Web Vitals", "Improve mobile conversion paths"],
        ),
        phase(
            "Growth",
            "Months 2-3",
            &["Launch content program", "Add trust signals", "Start A/B testing"],
        ),
        phase(
            "Scale",
            "Months 4-6",
            &["Expand local SEO", "Review results and re-audit"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tier_boundaries() {
        assert_eq!(RiskTier::from_score(100), RiskTier::Low);
        assert_eq!(RiskTier::from_score(90), RiskTier::Low);
        assert_eq!(RiskTier::from_score(89), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(50), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(49), RiskTier::High);
        assert_eq!(RiskTier::from_score(0), RiskTier::High);
    }

    #[test]
    fn revenue_risk_uses_currency_symbol() {
        assert_eq!(revenue_risk(72, CurrencyCode::Usd), "$25,000 - $45,000 Risk");
        assert_eq!(revenue_risk(95, CurrencyCode::Gbp), "£5,000 - £15,000 Risk");
        assert_eq!(revenue_risk(10, CurrencyCode::Aud), "A$60,000 - A$120,000 Risk");
    }

    #[test]
    fn six_recommendations_with_projections() {
        let m = MeasurementRecord::unavailable("x");
        let ctx = DefaultContext::new("https://acme.io", CurrencyCode::Eur, &m);
        let recs = recommendations(&ctx);
        assert_eq!(recs.len(), 6);
        assert!(recs.iter().all(|r| r.projected_revenue.starts_with('€')));
        assert!(recs.iter().all(|r| !r.projected_customers.is_empty()));
    }
}
