//! Extension maps: stringified on the way into an event, key-checked on the
//! way back into a statement.

use std::sync::LazyLock;

use lrw_core::errors::{ConversionError, ConversionResult};
use lrw_core::models::{EventExtensions, StatementExtensions};
use regex::Regex;
use serde_json::Value;

/// RFC 3986 URI characters: unreserved, reserved, and percent escapes.
static EXTENSION_KEY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[0-9A-Fa-f]{2})+$").ok()
});

/// JSON strings verbatim, everything else as compact JSON.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Copy statement extensions into a fresh event extension map.
pub fn stringify_extensions(extensions: &StatementExtensions) -> EventExtensions {
    extensions
        .iter()
        .map(|(k, v)| (k.clone(), stringify_value(v)))
        .collect()
}

/// Whether a key can be carried as a statement extension identifier.
pub fn is_valid_extension_key(key: &str) -> bool {
    match EXTENSION_KEY_RE.as_ref() {
        Some(re) => re.is_match(key),
        None => !key.is_empty() && !key.chars().any(char::is_whitespace),
    }
}

/// Convert event extensions back to statement extensions.
///
/// A malformed key fails the whole conversion when `strict`; otherwise that
/// entry alone is dropped and the rest are kept.
pub fn restore_extensions(
    extensions: &EventExtensions,
    strict: bool,
) -> ConversionResult<StatementExtensions> {
    let mut restored = StatementExtensions::new();
    for (key, value) in extensions {
        if !is_valid_extension_key(key) {
            if strict {
                return Err(ConversionError::MalformedExtensionKey { key: key.clone() });
            }
            tracing::warn!(key = %key, "dropping extension with malformed key");
            continue;
        }
        restored.insert(key.clone(), Value::String(value.clone()));
    }
    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_verbatim_and_others_are_json() {
        assert_eq!(stringify_value(&json!("plain")), "plain");
        assert_eq!(stringify_value(&json!(3)), "3");
        assert_eq!(stringify_value(&json!({"courseid": "7"})), r#"{"courseid":"7"}"#);
    }

    #[test]
    fn key_validation() {
        assert!(is_valid_extension_key("http://example.com/ext?a=1#frag"));
        assert!(is_valid_extension_key("HOMEPAGE"));
        assert!(is_valid_extension_key("http://example.com/a%20b"));
        assert!(!is_valid_extension_key("not a uri"));
        assert!(!is_valid_extension_key(""));
        assert!(!is_valid_extension_key("http://example.com/%zz"));
        assert!(!is_valid_extension_key("http://example.com/{x}"));
    }

    #[test]
    fn lenient_restore_drops_only_bad_keys() {
        let mut ext = EventExtensions::new();
        ext.insert("http://example.com/good".into(), "1".into());
        ext.insert("bad key".into(), "2".into());
        let restored = restore_extensions(&ext, false).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored["http://example.com/good"], json!("1"));
    }

    #[test]
    fn strict_restore_fails_on_bad_key() {
        let mut ext = EventExtensions::new();
        ext.insert("bad key".into(), "2".into());
        let err = restore_extensions(&ext, true).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedExtensionKey { key } if key == "bad key"));
    }
}
