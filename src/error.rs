use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Performance data unavailable: {0}")]
    MeasurementUnavailable(String),

    #[error("No API key configured for the generative model")]
    CredentialMissing,

    #[error("All models failed, last attempt {model}: {reason}")]
    GenerationExhausted { model: String, reason: String },

    #[error("Report synthesis failed: model returned malformed JSON ({0})")]
    Parse(#[source] serde_json::Error),

    #[error("PDF export unavailable: {0}")]
    ExportUnavailable(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    /// Short machine-readable name used by the HTTP layer.
    pub fn kind(&self) -> &'static str {
        match self {
            AuditError::MeasurementUnavailable(_) => "measurement_unavailable",
            AuditError::CredentialMissing => "credential_missing",
            AuditError::GenerationExhausted { .. } => "generation_exhausted",
            AuditError::Parse(_) => "synthesis_failed",
            AuditError::ExportUnavailable(_) => "export_unavailable",
            AuditError::Http(_) => "http",
            AuditError::Timeout(_) => "timeout",
            AuditError::Api { .. } => "api",
            AuditError::InvalidResponse(_) => "invalid_response",
            AuditError::UnknownSetting(_) => "unknown_setting",
            AuditError::Io(_) => "io",
            AuditError::Json(_) => "json",
        }
    }

    /// Whether a run that ended with this error can be retried, possibly
    /// with a faster model.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AuditError::GenerationExhausted { .. } | AuditError::Parse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_exhaustion_have_distinct_messages() {
        let parse = AuditError::Parse(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        let exhausted = AuditError::GenerationExhausted {
            model: "gemini-1.5-flash".to_string(),
            reason: "timed out".to_string(),
        };

        assert!(parse.to_string().contains("synthesis failed"));
        assert!(exhausted.to_string().contains("gemini-1.5-flash"));
        assert!(exhausted.to_string().contains("timed out"));
        assert_ne!(parse.kind(), exhausted.kind());
    }

    #[test]
    fn credential_missing_is_not_retryable() {
        assert!(!AuditError::CredentialMissing.is_retryable());
        assert!(AuditError::GenerationExhausted {
            model: "a".into(),
            reason: "b".into()
        }
        .is_retryable());
    }
}
