use super::items::{
    ActionPhase, CategoryScore, CheckItem, Competitor, CriticalIssue, GrowthItem, LabeledValue,
    MetricItem, ProfileItem,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePage {
    pub website_name: String,
    pub url: String,
    pub report_title: String,
    pub subtitle: String,
    pub prepared_by: String,
    /// Base64 data URI of the rendered page; empty when no capture exists.
    pub screenshot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiAnalysis {
    pub estimated_lost_revenue: String,
    pub potential_revenue_gain: String,
    pub conversion_impact: String,
    pub payback_period: String,
    pub summary: String,
    pub metrics: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub overall_score: u32,
    pub headline: String,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIntelligence {
    pub company_profile: Vec<ProfileItem>,
    pub industry: String,
    pub target_audience: String,
    pub value_proposition: String,
    pub business_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAudit {
    pub performance_score: u32,
    pub summary: String,
    pub category_scores: Vec<CategoryScore>,
    pub core_web_vitals: Vec<MetricItem>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAudit {
    pub content_score: u32,
    pub summary: String,
    pub meta_description: String,
    pub document_title: String,
    pub image_alt_missing: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInsights {
    pub conversion_score: u32,
    pub summary: String,
    pub cta_analysis: String,
    pub barriers: Vec<String>,
    pub opportunities: Vec<String>,
    pub trust_signals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMarketing {
    pub seo_score: u32,
    pub https_enabled: bool,
    pub summary: String,
    pub technical_seo: Vec<CheckItem>,
    pub keyword_opportunities: Vec<String>,
    pub content_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitivePositioning {
    pub market_position: String,
    pub summary: String,
    pub differentiators: Vec<String>,
    pub benchmarks: Vec<CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileExperience {
    pub mobile_score: u32,
    pub viewport_configured: bool,
    pub summary: String,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalIssues {
    pub summary: String,
    pub issues: Vec<CriticalIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthOpportunities {
    pub summary: String,
    pub opportunities: Vec<GrowthItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveIntelligence {
    pub summary: String,
    pub competitors: Vec<Competitor>,
    pub market_trends: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSummary {
    pub overall_score: u32,
    pub verdict: String,
    pub summary: String,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub summary: String,
    pub phases: Vec<ActionPhase>,
}
