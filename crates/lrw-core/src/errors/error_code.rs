//! LrwErrorCode trait for transport-layer error reporting.

/// Trait for mapping errors to stable machine-readable codes.
/// Every error enum implements this so an HTTP or queue layer can report
/// a code without matching on variants.
pub trait LrwErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const MALFORMED_EXTENSION_KEY: &str = "MALFORMED_EXTENSION_KEY";
pub const INVALID_TIMESTAMP: &str = "INVALID_TIMESTAMP";
pub const CONVERSION_ERROR: &str = "CONVERSION_ERROR";
pub const REGISTRY_INVALID: &str = "REGISTRY_INVALID";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
