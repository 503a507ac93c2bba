pub mod items;
pub mod lenient;
pub mod sections;

pub use items::{
    ActionPhase, CategoryScore, CheckItem, Competitor, CriticalIssue, GrowthItem, LabeledValue,
    MetricItem, ProfileItem, Recommendation,
};
pub use sections::{
    ActionPlan, BusinessIntelligence, CompetitiveIntelligence, CompetitivePositioning,
    ContentAudit, ConversionInsights, CriticalIssues, ExecutiveSummary, FinalSummary,
    GrowthOpportunities, MobileExperience, RoiAnalysis, SeoMarketing, TechnicalAudit, TitlePage,
};

use serde::{Deserialize, Serialize};

/// The complete, schema-conformant audit report.
///
/// Only the normalizer constructs one, and it always fills every field, so
/// renderers never check for absent data. Replaced wholesale per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub title_page: TitlePage,
    pub roi_analysis: RoiAnalysis,
    pub executive_summary: ExecutiveSummary,
    pub business_intelligence: BusinessIntelligence,
    pub technical_audit: TechnicalAudit,
    pub content_audit: ContentAudit,
    pub conversion_insights: ConversionInsights,
    pub seo_marketing: SeoMarketing,
    pub competitive_positioning: CompetitivePositioning,
    pub mobile_experience: MobileExperience,
    pub critical_issues: CriticalIssues,
    pub recommendations: Vec<Recommendation>,
    pub growth_opportunities: GrowthOpportunities,
    pub competitive_intelligence: CompetitiveIntelligence,
    pub final_summary: FinalSummary,
    pub action_plan: ActionPlan,
}
