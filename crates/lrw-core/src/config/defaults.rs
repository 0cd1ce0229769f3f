// Single source of truth for all default values.

// --- Conversion ---
pub const DEFAULT_STRICT_EXTENSION_KEYS: bool = false;
pub const DEFAULT_GENERATE_RESULT_IDS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
