// src/docs.rs
//
// Safe accessors over the dynamically-shaped JSON documents the scrapers
// produce. Every "optional field with default" read in the crate routes
// through here so the default policy lives in one place.

use serde_json::Value;

/// String field of a JSON object, with a default for a missing key, a
/// non-string value, or a non-object document.
pub fn str_or(doc: &Value, key: &str, default: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Array field of a JSON object; missing, non-array, or non-object all
/// degrade to an empty slice.
pub fn array_or_empty<'a>(doc: &'a Value, key: &str) -> &'a [Value] {
    doc.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First element of an array field, when it has one.
pub fn first_element<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    array_or_empty(doc, key).first()
}

/// Whether a document is absent or carries no usable content: None, null,
/// or an empty mapping/array/string.
pub fn is_effectively_empty(doc: Option<&Value>) -> bool {
    match doc {
        None | Some(Value::Null) => true,
        Some(Value::Object(m)) => m.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_or_defaults() {
        let doc = json!({"name": "中央線", "count": 3});
        assert_eq!(str_or(&doc, "name", "?"), "中央線");
        assert_eq!(str_or(&doc, "missing", "?"), "?");
        // wrong type degrades the same as missing
        assert_eq!(str_or(&doc, "count", "?"), "?");
        // non-object documents never panic
        assert_eq!(str_or(&json!(null), "name", "?"), "?");
        assert_eq!(str_or(&json!([1, 2]), "name", "?"), "?");
    }

    #[test]
    fn test_array_or_empty() {
        let doc = json!({"delay": [{"name": "a"}], "note": "text"});
        assert_eq!(array_or_empty(&doc, "delay").len(), 1);
        assert!(array_or_empty(&doc, "suspend").is_empty());
        assert!(array_or_empty(&doc, "note").is_empty());
        assert!(array_or_empty(&json!(42), "delay").is_empty());
    }

    #[test]
    fn test_first_element() {
        let doc = json!({"segments": [{"type": "快速"}, {"type": "普通"}]});
        let seg = first_element(&doc, "segments").unwrap();
        assert_eq!(str_or(seg, "type", ""), "快速");
        assert!(first_element(&doc, "other").is_none());
        assert!(first_element(&json!({"segments": []}), "segments").is_none());
    }

    #[test]
    fn test_is_effectively_empty() {
        assert!(is_effectively_empty(None));
        assert!(is_effectively_empty(Some(&json!(null))));
        assert!(is_effectively_empty(Some(&json!({}))));
        assert!(is_effectively_empty(Some(&json!([]))));
        assert!(is_effectively_empty(Some(&json!(""))));
        assert!(!is_effectively_empty(Some(&json!({"新宿": {}}))));
        assert!(!is_effectively_empty(Some(&json!(0))));
    }
}
