use crate::models::report::*;
use chrono::Utc;
use std::fmt::Write;
use uuid::Uuid;

/// Fixed page size in CSS pixels (A4 at 96 dpi).
pub const PAGE_WIDTH_PX: u32 = 794;
pub const PAGE_HEIGHT_PX: u32 = 1123;
const PAGE_PADDING_PX: usize = 56;
const RECOMMENDATIONS_PER_PAGE: usize = 2;
const BULLETS_PER_BLOCK: usize = 8;
const ROWS_PER_BLOCK: usize = 10;

/// Space left for section blocks once the title and footer are placed.
const CONTENT_HEIGHT_PX: usize = PAGE_HEIGHT_PX as usize - 2 * PAGE_PADDING_PX - 90;
const LINE_HEIGHT_PX: usize = 18;
const CHARS_PER_LINE: usize = 95;

/// Rendering-time decoration. Not part of the report and carries no
/// uniqueness guarantee.
#[derive(Debug, Clone)]
pub struct ReportDecoration {
    pub audit_id: String,
    pub generated_at: String,
}

impl ReportDecoration {
    pub fn generate() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self {
            audit_id: format!("AUD-{}", token[..8].to_uppercase()),
            generated_at: Utc::now().format("%B %-d, %Y").to_string(),
        }
    }
}

/// A page is a title plus blocks. Blocks never split; pagination moves
/// whole blocks onto continuation pages.
struct Page {
    title: String,
    blocks: Vec<String>,
}

impl Page {
    fn new(title: impl Into<String>, blocks: Vec<String>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }
}

fn visible_len(html: &str) -> usize {
    let mut in_tag = false;
    html.chars()
        .filter(|c| match c {
            '<' => {
                in_tag = true;
                false
            }
            '>' => {
                in_tag = false;
                false
            }
            _ => !in_tag,
        })
        .count()
}

/// Rough rendered height: a line per list item, table row, paragraph or
/// heading, plus wrapped text.
fn estimated_height(block: &str) -> usize {
    let lines: usize = ["<li>", "<tr>", "<p", "<h3>"]
        .iter()
        .map(|tag| block.matches(tag).count())
        .sum();
    (lines + visible_len(block) / CHARS_PER_LINE + 1) * LINE_HEIGHT_PX + 16
}

/// Spreads a section over as many fixed-size pages as its blocks need.
/// A single block taller than a page is still clipped by the page box.
fn paginate(page: Page) -> Vec<Page> {
    let mut chunks: Vec<Vec<String>> = Vec::new();
    let mut current = Vec::new();
    let mut used = 0;
    for block in page.blocks {
        let height = estimated_height(&block);
        if used + height > CONTENT_HEIGHT_PX && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        used += height;
        current.push(block);
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, blocks)| {
            let title = if i == 0 {
                page.title.clone()
            } else {
                format!("{} (continued)", page.title)
            };
            Page::new(title, blocks)
        })
        .collect()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn paragraph(text: &str) -> Vec<String> {
    vec![format!("<p>{}</p>", escape(text))]
}

fn callout(text: &str) -> Vec<String> {
    vec![format!("<div class=\"callout\">{}</div>", escape(text))]
}

fn bullets(items: &[String]) -> Vec<String> {
    items
        .chunks(BULLETS_PER_BLOCK)
        .map(|chunk| {
            let mut out = String::from("<ul>");
            for item in chunk {
                let _ = write!(out, "<li>{}</li>", escape(item));
            }
            out.push_str("</ul>");
            out
        })
        .collect()
}

/// Long tables are cut into blocks that each repeat the header row.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> Vec<String> {
    let mut head = String::from("<table><thead><tr>");
    for h in headers {
        let _ = write!(head, "<th>{}</th>", escape(h));
    }
    head.push_str("</tr></thead><tbody>");

    let render = |chunk: &[Vec<String>]| {
        let mut out = head.clone();
        for row in chunk {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", escape(cell));
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
        out
    };

    if rows.is_empty() {
        return vec![render(&[])];
    }
    rows.chunks(ROWS_PER_BLOCK).map(render).collect()
}

fn score(label: &str, value: u32) -> Vec<String> {
    vec![format!(
        "<div class=\"score\"><span class=\"value\">{}</span><span class=\"label\">{}</span></div>",
        value,
        escape(label)
    )]
}

fn heading(text: &str) -> Vec<String> {
    vec![format!("<h3>{}</h3>", escape(text))]
}

fn cover_page(report: &AuditReport, warnings: &[String], decoration: &ReportDecoration) -> Page {
    let t = &report.title_page;
    let mut body = String::new();
    if !warnings.is_empty() {
        let _ = write!(
            body,
            "<div class=\"warning\">Live measurement was unavailable: {}</div>",
            escape(&warnings.join("; "))
        );
    }
    let _ = write!(
        body,
        "<h1>{}</h1><h2>{}</h2><p class=\"subtitle\">{}</p>",
        escape(&t.website_name),
        escape(&t.report_title),
        escape(&t.subtitle)
    );
    if !t.screenshot.is_empty() {
        let _ = write!(
            body,
            "<img class=\"screenshot\" src=\"{}\" alt=\"Screenshot of {}\">",
            escape(&t.screenshot),
            escape(&t.url)
        );
    }
    let _ = write!(
        body,
        "<p class=\"meta\">{} &middot; Prepared by {} &middot; {} &middot; {}</p>",
        escape(&t.url),
        escape(&t.prepared_by),
        escape(&decoration.generated_at),
        escape(&decoration.audit_id)
    );
    Page::new("Cover", vec![body])
}

fn section_pages(report: &AuditReport) -> Vec<Page> {
    let mut pages = Vec::new();

    let r = &report.roi_analysis;
    pages.push(Page::new(
        "ROI Analysis",
        [
            callout(&r.estimated_lost_revenue),
            paragraph(&r.summary),
            table(
                &["Metric", "Value"],
                vec![
                    vec!["Potential revenue gain".into(), r.potential_revenue_gain.clone()],
                    vec!["Conversion impact".into(), r.conversion_impact.clone()],
                    vec!["Payback period".into(), r.payback_period.clone()],
                ],
            ),
            table(
                &["Indicator", "Estimate"],
                r.metrics.iter().map(|m| vec![m.label.clone(), m.value.clone()]).collect(),
            ),
        ]
        .concat(),
    ));

    let e = &report.executive_summary;
    pages.push(Page::new(
        "Executive Summary",
        [
            score("Overall score", e.overall_score),
            heading(&e.headline),
            paragraph(&e.summary),
            heading("Key findings"),
            bullets(&e.key_findings),
            heading("Strengths"),
            bullets(&e.strengths),
            heading("Weaknesses"),
            bullets(&e.weaknesses),
        ]
        .concat(),
    ));

    let b = &report.business_intelligence;
    pages.push(Page::new(
        "Business Intelligence",
        [
            table(
                &["Profile", "Details"],
                b.company_profile
                    .iter()
                    .map(|p| vec![p.label.clone(), p.details.clone()])
                    .collect(),
            ),
            table(
                &["Aspect", "Assessment"],
                vec![
                    vec!["Industry".into(), b.industry.clone()],
                    vec!["Target audience".into(), b.target_audience.clone()],
                    vec!["Value proposition".into(), b.value_proposition.clone()],
                    vec!["Business model".into(), b.business_model.clone()],
                ],
            ),
        ]
        .concat(),
    ));

    let t = &report.technical_audit;
    pages.push(Page::new(
        "Technical Audit",
        [
            score("Performance", t.performance_score),
            paragraph(&t.summary),
            table(
                &["Category", "Score"],
                t.category_scores
                    .iter()
                    .map(|s| vec![s.category.clone(), s.score.to_string()])
                    .collect(),
            ),
            table(
                &["Metric", "Value", "Status"],
                t.core_web_vitals
                    .iter()
                    .map(|m| vec![m.name.clone(), m.value.clone(), m.status.clone()])
                    .collect(),
            ),
            heading("Issues"),
            bullets(&t.issues),
        ]
        .concat(),
    ));

    let c = &report.content_audit;
    pages.push(Page::new(
        "Content Audit",
        [
            score("Content", c.content_score),
            paragraph(&c.summary),
            table(
                &["Signal", "Status"],
                vec![
                    vec!["Meta description".into(), c.meta_description.clone()],
                    vec!["Document title".into(), c.document_title.clone()],
                    vec!["Images missing alt text".into(), c.image_alt_missing.to_string()],
                ],
            ),
            heading("Strengths"),
            bullets(&c.strengths),
            heading("Gaps"),
            bullets(&c.gaps),
        ]
        .concat(),
    ));

    let ci = &report.conversion_insights;
    pages.push(Page::new(
        "Conversion Insights",
        [
            score("Conversion", ci.conversion_score),
            paragraph(&ci.summary),
            heading("Calls to action"),
            paragraph(&ci.cta_analysis),
            heading("Barriers"),
            bullets(&ci.barriers),
            heading("Opportunities"),
            bullets(&ci.opportunities),
            heading("Trust signals"),
            bullets(&ci.trust_signals),
        ]
        .concat(),
    ));

    let s = &report.seo_marketing;
    pages.push(Page::new(
        "SEO & Marketing",
        [
            score("SEO", s.seo_score),
            paragraph(&s.summary),
            table(
                &["Check", "Status"],
                std::iter::once(vec![
                    "HTTPS enabled".to_string(),
                    if s.https_enabled { "Yes" } else { "No" }.to_string(),
                ])
                .chain(s.technical_seo.iter().map(|c| vec![c.item.clone(), c.status.clone()]))
                .collect(),
            ),
            heading("Keyword opportunities"),
            bullets(&s.keyword_opportunities),
            heading("Content strategy"),
            paragraph(&s.content_strategy),
        ]
        .concat(),
    ));

    let p = &report.competitive_positioning;
    pages.push(Page::new(
        "Competitive Positioning",
        [
            callout(&p.market_position),
            paragraph(&p.summary),
            heading("Differentiators"),
            bullets(&p.differentiators),
            table(
                &["Benchmark", "Score"],
                p.benchmarks
                    .iter()
                    .map(|b| vec![b.category.clone(), b.score.to_string()])
                    .collect(),
            ),
        ]
        .concat(),
    ));

    let m = &report.mobile_experience;
    pages.push(Page::new(
        "Mobile Experience",
        [
            score("Mobile", m.mobile_score),
            paragraph(&format!(
                "Viewport configured: {}",
                if m.viewport_configured { "Yes" } else { "No" }
            )),
            paragraph(&m.summary),
            heading("Issues"),
            bullets(&m.issues),
            heading("Recommendations"),
            bullets(&m.recommendations),
        ]
        .concat(),
    ));

    let ci = &report.critical_issues;
    pages.push(Page::new(
        "Critical Issues",
        [
            paragraph(&ci.summary),
            table(
                &["Issue", "Severity", "Description", "Impact"],
                ci.issues
                    .iter()
                    .map(|i| {
                        vec![
                            i.title.clone(),
                            i.severity.clone(),
                            i.description.clone(),
                            i.impact.clone(),
                        ]
                    })
                    .collect(),
            ),
        ]
        .concat(),
    ));

    let total = report.recommendations.len();
    for (chunk_index, chunk) in report
        .recommendations
        .chunks(RECOMMENDATIONS_PER_PAGE)
        .enumerate()
    {
        let mut blocks = Vec::with_capacity(chunk.len());
        for (offset, rec) in chunk.iter().enumerate() {
            let number = chunk_index * RECOMMENDATIONS_PER_PAGE + offset + 1;
            let mut block = format!(
                "<div class=\"recommendation\"><h3>{}. {}</h3>",
                number,
                escape(&rec.title)
            );
            let parts = [
                table(
                    &["Priority", "Impact", "Effort"],
                    vec![vec![rec.priority.clone(), rec.impact.clone(), rec.effort.clone()]],
                ),
                paragraph(&rec.rationale),
                bullets(&rec.implementation_steps),
                paragraph(&format!("Expected outcome: {}", rec.expected_outcome)),
                table(
                    &["Projected revenue", "Projected customers"],
                    vec![vec![rec.projected_revenue.clone(), rec.projected_customers.clone()]],
                ),
            ]
            .concat();
            for part in parts {
                block.push_str(&part);
            }
            block.push_str("</div>");
            blocks.push(block);
        }
        pages.push(Page::new(
            format!("Recommendations ({} of {})", chunk_index + 1, total.div_ceil(RECOMMENDATIONS_PER_PAGE)),
            blocks,
        ));
    }

    let g = &report.growth_opportunities;
    pages.push(Page::new(
        "Growth Opportunities",
        [
            paragraph(&g.summary),
            table(
                &["Opportunity", "Description", "Potential"],
                g.opportunities
                    .iter()
                    .map(|o| vec![o.title.clone(), o.description.clone(), o.potential.clone()])
                    .collect(),
            ),
        ]
        .concat(),
    ));

    let ci = &report.competitive_intelligence;
    pages.push(Page::new(
        "Competitive Intelligence",
        [
            paragraph(&ci.summary),
            table(
                &["Competitor", "Strength", "Weakness"],
                ci.competitors
                    .iter()
                    .map(|c| vec![c.name.clone(), c.strength.clone(), c.weakness.clone()])
                    .collect(),
            ),
            heading("Market trends"),
            bullets(&ci.market_trends),
        ]
        .concat(),
    ));

    let f = &report.final_summary;
    pages.push(Page::new(
        "Final Summary",
        [
            score("Overall score", f.overall_score),
            heading(&f.verdict),
            paragraph(&f.summary),
            heading("Next steps"),
            bullets(&f.next_steps),
        ]
        .concat(),
    ));

    let a = &report.action_plan;
    let mut plan = paragraph(&a.summary);
    for phase in &a.phases {
        plan.extend(heading(&format!("{} ({})", phase.phase, phase.timeframe)));
        plan.extend(bullets(&phase.actions));
    }
    pages.push(Page::new("Action Plan", plan));

    pages
}

fn contents_page(titles: &[String]) -> Page {
    let mut body = String::from("<ol class=\"contents\">");
    for title in titles {
        let _ = write!(body, "<li>{}</li>", escape(title));
    }
    body.push_str("</ol>");
    Page::new("Contents", vec![body])
}

fn stylesheet() -> String {
    format!(
        "*{{box-sizing:border-box}}body{{margin:0;font-family:Helvetica,Arial,sans-serif;color:#1a202c}}\
         .page{{width:{w}px;height:{h}px;padding:{p}px;overflow:hidden;page-break-after:always;break-after:page}}\
         .page:last-child{{page-break-after:auto;break-after:auto}}\
         h1{{font-size:40px;margin:0 0 8px}}h2{{font-size:24px;color:#2b6cb0}}h3{{font-size:16px;margin:18px 0 6px}}\
         table{{width:100%;border-collapse:collapse;margin:12px 0;font-size:12px}}\
         th,td{{border:1px solid #e2e8f0;padding:6px;text-align:left;vertical-align:top}}\
         .score{{display:inline-block;padding:12px 18px;border-radius:8px;background:#ebf8ff}}\
         .score .value{{font-size:32px;font-weight:bold;margin-right:8px}}\
         .callout{{font-size:22px;font-weight:bold;color:#c53030;margin:12px 0}}\
         .warning{{background:#fffaf0;border:1px solid #dd6b20;padding:8px;margin-bottom:16px;font-size:12px}}\
         .screenshot{{max-width:100%;max-height:520px;border:1px solid #e2e8f0}}\
         .meta{{color:#718096;font-size:12px}}",
        w = PAGE_WIDTH_PX,
        h = PAGE_HEIGHT_PX,
        p = PAGE_PADDING_PX
    )
}

/// Renders the report as a stable HTML document with one fixed-size page
/// per section and a forced page break after each page.
pub fn render_document(
    report: &AuditReport,
    warnings: &[String],
    decoration: &ReportDecoration,
) -> String {
    let sections = section_pages(report);
    let titles: Vec<String> = sections.iter().map(|p| p.title.clone()).collect();

    let mut pages = vec![cover_page(report, warnings, decoration), contents_page(&titles)];
    pages.extend(sections.into_iter().flat_map(paginate));

    let mut html = format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\"><title>{} - {}</title><style>{}</style></head><body>",
        escape(&report.title_page.website_name),
        escape(&report.title_page.report_title),
        stylesheet()
    );
    let count = pages.len();
    for (i, page) in pages.iter().enumerate() {
        let _ = write!(
            html,
            "<section class=\"page\" data-page=\"{}\"><h2>{}</h2>{}<footer class=\"meta\">Page {} of {}</footer></section>",
            i + 1,
            escape(&page.title),
            page.blocks.concat(),
            i + 1,
            count
        );
    }
    html.push_str("</body></html>");
    html
}
