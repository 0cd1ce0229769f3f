//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::LrwErrorCode;
use super::{ConfigError, ConversionError, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum LrwError {
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LrwErrorCode for LrwError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Conversion(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type LrwResult<T> = Result<T, LrwError>;
