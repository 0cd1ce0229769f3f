use serde::{Deserialize, Serialize};

use super::defaults;

/// Statement/event converter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Fail the event->statement direction on a malformed extension key
    /// instead of dropping that single entry.
    pub strict_extension_keys: bool,
    /// Stamp a fresh UUID on every generated result entity.
    pub generate_result_ids: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strict_extension_keys: defaults::DEFAULT_STRICT_EXTENSION_KEYS,
            generate_result_ids: defaults::DEFAULT_GENERATE_RESULT_IDS,
        }
    }
}
