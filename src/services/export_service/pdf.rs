use crate::error::{AuditError, Result};
use log::{info, warn};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

pub const PDF_RENDERER: &str = "wkhtmltopdf";

/// Converts the rendered HTML document to an A4 PDF with an external
/// renderer. Returns `Ok(false)` when the renderer is not installed: that
/// case is logged and otherwise ignored.
pub fn export_pdf(html_path: &Path, pdf_path: &Path) -> Result<bool> {
    export_pdf_with(PDF_RENDERER, html_path, pdf_path)
}

pub fn export_pdf_with(renderer: &str, html_path: &Path, pdf_path: &Path) -> Result<bool> {
    match render(renderer, html_path, pdf_path) {
        Ok(()) => {
            info!("PDF exported to {}", pdf_path.display());
            Ok(true)
        }
        Err(AuditError::ExportUnavailable(reason)) => {
            warn!("Skipping PDF export: {}", reason);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn render(renderer: &str, html_path: &Path, pdf_path: &Path) -> Result<()> {
    let spawned = Command::new(renderer)
        .arg("--quiet")
        .args(["--page-size", "A4"])
        .args(["--margin-top", "0", "--margin-bottom", "0"])
        .args(["--margin-left", "0", "--margin-right", "0"])
        .arg("--disable-smart-shrinking")
        .arg("--enable-local-file-access")
        .arg(html_path)
        .arg(pdf_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AuditError::ExportUnavailable(format!(
                "{} is not installed",
                renderer
            )))
        }
        Err(e) => return Err(e.into()),
    };

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(AuditError::InvalidResponse(format!(
            "{} failed: {}",
            renderer,
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_renderer_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("report.html");
        let pdf = dir.path().join("report.pdf");
        std::fs::write(&html, "<html></html>").unwrap();

        let exported =
            export_pdf_with("definitely-not-a-pdf-renderer-binary", &html, &pdf).unwrap();
        assert!(!exported);
        assert!(!pdf.exists());
    }
}
