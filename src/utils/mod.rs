pub mod file_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{sanitize_filename, save_report};
pub use log_utils::{audit_log, init_logging};
pub use url_utils::{display_domain, normalize_url};
