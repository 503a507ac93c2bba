use crate::error::Result;
use crate::models::AuditReport;
use std::fs::File;
use std::path::Path;

pub fn save_report(output_path: &Path, report: &AuditReport) -> Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

pub fn sanitize_filename(url: &str) -> String {
    url.replace(|c: char| !c.is_alphanumeric() && c != '.', "_")
}
