//! Error handling for the learning record warehouse.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod conversion_error;
pub mod error_code;
pub mod lrw_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use conversion_error::{ConversionError, ConversionResult};
pub use error_code::LrwErrorCode;
pub use lrw_error::{LrwError, LrwResult};
pub use session_error::{SessionError, SessionResult};
