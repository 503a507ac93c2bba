use crate::models::report::lenient::clamp_score;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read-only view over the parsed model output.
///
/// Every accessor is total: a missing segment, a null, a wrong type, an
/// empty string or an empty list all read as `None`.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    root: &'a Value,
}

impl<'a> Candidate<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Dotted-path lookup; numeric segments index into arrays.
    pub fn lookup(&self, path: &str) -> Option<&'a Value> {
        let mut current = self.root;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        (!current.is_null()).then_some(current)
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.lookup(path)?
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.lookup(path)?.as_f64().filter(|n| n.is_finite())
    }

    /// Any JSON number, rounded and clamped to a 0..=100 score.
    pub fn score(&self, path: &str) -> Option<u32> {
        self.number(path).map(clamp_score)
    }

    /// Non-negative whole count.
    pub fn count(&self, path: &str) -> Option<u32> {
        self.number(path)
            .filter(|n| *n >= 0.0)
            .map(|n| n.round().min(u32::MAX as f64) as u32)
    }

    pub fn flag(&self, path: &str) -> Option<bool> {
        self.lookup(path)?.as_bool()
    }

    /// A non-empty array of the entries that have the shape of `T`. Null,
    /// empty and unreadable entries are skipped; the list is absent when
    /// nothing usable remains.
    pub fn list<T: DeserializeOwned>(&self, path: &str) -> Option<Vec<T>> {
        let items: Vec<T> = self
            .lookup(path)?
            .as_array()?
            .iter()
            .filter(|item| !is_blank(item))
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect();
        (!items.is_empty()).then_some(items)
    }

    pub fn text_or(&self, path: &str, default: impl Into<String>) -> String {
        self.text(path).unwrap_or_else(|| default.into())
    }

    pub fn list_or<T: DeserializeOwned>(&self, path: &str, default: impl FnOnce() -> Vec<T>) -> Vec<T> {
        self.list(path).unwrap_or_else(default)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_objects_and_arrays() {
        let value = json!({ "a": { "b": [{ "c": "deep" }] } });
        let c = Candidate::new(&value);
        assert_eq!(c.text("a.b.0.c").as_deref(), Some("deep"));
        assert_eq!(c.text("a.b.1.c"), None);
        assert_eq!(c.text("a.b.x.c"), None);
        assert_eq!(c.text("a.b.0.c.d"), None);
    }

    #[test]
    fn empty_and_wrong_types_are_absent() {
        let value = json!({
            "empty": "",
            "blank": "   ",
            "null": null,
            "number": 5,
            "list": [],
            "text": "ok"
        });
        let c = Candidate::new(&value);
        assert_eq!(c.text("empty"), None);
        assert_eq!(c.text("blank").as_deref(), Some("   "));
        assert_eq!(c.text("null"), None);
        assert_eq!(c.text("number"), None);
        assert_eq!(c.flag("text"), None);
        assert_eq!(c.score("text"), None);
        assert_eq!(c.list::<String>("list"), None);
        assert_eq!(c.list::<String>("text"), None);
    }

    #[test]
    fn scores_are_clamped() {
        let value = json!({ "hi": 140, "lo": -3, "mid": 72.6 });
        let c = Candidate::new(&value);
        assert_eq!(c.score("hi"), Some(100));
        assert_eq!(c.score("lo"), Some(0));
        assert_eq!(c.score("mid"), Some(73));
        assert_eq!(c.count("lo"), None);
    }

    #[test]
    fn list_skips_unusable_items() {
        let value = json!({
            "good": ["a", "b"],
            "mixed": ["a", 2, null, "", "c"],
            "unusable": [null, "", {}, 3]
        });
        let c = Candidate::new(&value);
        assert_eq!(c.list::<String>("good"), Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(
            c.list::<String>("mixed"),
            Some(vec!["a".to_string(), "c".to_string()])
        );
        assert_eq!(c.list::<String>("unusable"), None);
    }

    #[test]
    fn non_object_root_reads_as_absent() {
        let value = json!([1, 2, 3]);
        let c = Candidate::new(&value);
        assert_eq!(c.text("titlePage.websiteName"), None);
    }
}
