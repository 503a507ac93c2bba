use crate::error::{AuditError, Result};
use serde_json::Value;

/// Removes Markdown code fences (with or without a language tag) from
/// either end of the model output.
pub fn strip_fences(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .trim_start();
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest.trim_end();
    }
    body
}

/// Parses model output into an untyped candidate. Shape is not checked here.
pub fn parse_candidate(raw: &str) -> Result<Value> {
    serde_json::from_str(strip_fences(raw)).map_err(AuditError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json() {
        let value = parse_candidate(r#"{"executiveSummary":{"overallScore":80}}"#).unwrap();
        assert_eq!(value["executiveSummary"]["overallScore"], 80);
    }

    #[test]
    fn fenced_json_with_language_tag() {
        let raw = "```json\n{\"titlePage\": {\"websiteName\": \"ACME\"}}\n```";
        let value = parse_candidate(raw).unwrap();
        assert_eq!(value["titlePage"]["websiteName"], "ACME");
    }

    #[test]
    fn fence_on_one_end_only() {
        assert_eq!(strip_fences("```\n{}"), "{}");
        assert_eq!(strip_fences("{}\n```"), "{}");
        assert_eq!(strip_fences("  ```JSON{\"a\":1}```  "), "{\"a\":1}");
    }

    #[test]
    fn prose_is_a_parse_error() {
        let err = parse_candidate("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, AuditError::Parse(_)));
    }

    #[test]
    fn non_object_json_still_parses() {
        assert!(parse_candidate("[1, 2, 3]").unwrap().is_array());
    }
}
