//! Academic session store errors.

use super::error_code::{self, LrwErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("academic session not found for sourcedId {sourced_id} (tenant {tenant_id}, org {org_id})")]
    NotFound {
        tenant_id: String,
        org_id: String,
        sourced_id: String,
    },

    #[error("invalid argument: {field} must not be blank")]
    InvalidArgument { field: &'static str },
}

impl LrwErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
