//! Blank checks and language-map resolution.

use lrw_core::constants::PREFERRED_LANGUAGE;
use lrw_core::models::LanguageMap;

/// `Some(value)` unless the value is absent, empty, or whitespace only.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Pick a single display string from a language map.
///
/// A single entry wins whatever its tag. With several entries only the `en`
/// entry is ever chosen; no `en` means no text.
pub fn resolve_localized(map: &LanguageMap) -> Option<String> {
    match map.len() {
        0 => None,
        1 => map.values().next().cloned(),
        _ => map.get(PREFERRED_LANGUAGE).cloned(),
    }
}

/// Wrap a non-blank display string as a single-entry `en` map.
pub fn to_language_map(text: Option<&str>) -> LanguageMap {
    let mut map = LanguageMap::new();
    if let Some(text) = non_blank(text) {
        map.insert(PREFERRED_LANGUAGE.to_string(), text.to_string());
    }
    map
}
