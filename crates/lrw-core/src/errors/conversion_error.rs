//! Statement/event conversion errors.

use super::error_code::{self, LrwErrorCode};

/// Errors raised while translating between xAPI statements and Caliper events.
///
/// Unregistered verbs and activity types are not errors; they pass through.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("extension key is not a valid identifier: {key:?}")]
    MalformedExtensionKey { key: String },

    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("statement cannot be converted: {reason}")]
    Unusable { reason: String },

    #[error("registry {registry} maps more than one key to {value:?}")]
    DuplicateRegistryValue {
        registry: &'static str,
        value: String,
    },
}

impl LrwErrorCode for ConversionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedExtensionKey { .. } => error_code::MALFORMED_EXTENSION_KEY,
            Self::InvalidTimestamp { .. } => error_code::INVALID_TIMESTAMP,
            Self::Unusable { .. } => error_code::CONVERSION_ERROR,
            Self::DuplicateRegistryValue { .. } => error_code::REGISTRY_INVALID,
        }
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;
