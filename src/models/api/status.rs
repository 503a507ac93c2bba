use serde::{Deserialize, Serialize};
use std::fmt;

// Audit response status
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Completed,
    /// Discarded because a newer run started.
    Superseded,
    Error,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            AuditStatus::Completed => "completed",
            AuditStatus::Superseded => "superseded",
            AuditStatus::Error => "error",
        };
        write!(f, "{}", status_str)
    }
}
