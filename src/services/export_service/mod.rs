pub mod document;
pub mod pdf;

pub use document::{render_document, ReportDecoration, PAGE_HEIGHT_PX, PAGE_WIDTH_PX};
pub use pdf::export_pdf;

use crate::error::Result;
use crate::models::AuditReport;
use crate::utils::{sanitize_filename, save_report};
use std::path::{Path, PathBuf};

/// Files written by [`export_report`]. `pdf` is `None` when no renderer is
/// available.
#[derive(Debug, Clone)]
pub struct ExportedFiles {
    pub json: PathBuf,
    pub html: PathBuf,
    pub pdf: Option<PathBuf>,
}

/// Writes the report as JSON, the paginated HTML document and, when
/// possible, a PDF into `dir`.
pub fn export_report(dir: &Path, report: &AuditReport, warnings: &[String]) -> Result<ExportedFiles> {
    std::fs::create_dir_all(dir)?;
    let stem = sanitize_filename(&report.title_page.website_name.to_lowercase());

    let json = dir.join(format!("{}_audit.json", stem));
    save_report(&json, report)?;

    let html = dir.join(format!("{}_audit.html", stem));
    let document = render_document(report, warnings, &ReportDecoration::generate());
    std::fs::write(&html, document)?;

    let pdf_path = dir.join(format!("{}_audit.pdf", stem));
    let pdf = export_pdf(&html, &pdf_path)?.then_some(pdf_path);

    Ok(ExportedFiles { json, html, pdf })
}
