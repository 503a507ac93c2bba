use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber; `log` records are bridged into it.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Appends a timestamped progress line to `<log_dir>/<domain>.txt`.
pub fn audit_log(log_dir: &Path, domain: &str, text: &str) -> io::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let filename = log_dir.join(format!("{}.txt", super::sanitize_filename(domain)));
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.fZ");

    let log_entry = format!("{}::{}\n", timestamp, text);

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(filename)?;

    file.write_all(log_entry.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_per_domain() {
        let dir = tempfile::tempdir().unwrap();
        audit_log(dir.path(), "example.com", "Fetching performance data").unwrap();
        audit_log(dir.path(), "example.com", "Report ready").unwrap();

        let contents = std::fs::read_to_string(dir.path().join("example.com.txt")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("::Fetching performance data"));
        assert!(lines[1].ends_with("::Report ready"));
    }
}
