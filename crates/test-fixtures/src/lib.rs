//! Test fixture loader for statement and event golden files.
//!
//! Fixtures live next to this crate (`statements/`, `events/`) and are loaded
//! by relative path from tests in any workspace crate.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_fixtures_are_listed() {
        let statements = list_fixtures("statements");
        assert!(statements.len() >= 4);
        assert!(statements.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn fixtures_parse_as_json_objects() {
        for path in list_fixtures("statements")
            .into_iter()
            .chain(list_fixtures("events"))
        {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap()
                .to_string_lossy()
                .into_owned();
            assert!(load_fixture_value(&relative).is_object(), "{relative}");
        }
    }

    #[test]
    fn missing_subdirectory_lists_nothing() {
        assert!(list_fixtures("no-such-dir").is_empty());
    }
}
