use thiserror::Error;

use crate::types::ids::AccountId;

#[derive(Error, Debug)]
pub enum Error {
    // Request Validation Errors
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    // Ledger Errors
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    // Downstream Errors
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    // System Errors
    #[error("internal error: {0}")]
    Internal(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status the error maps to at the API boundary.
    ///
    /// Upstream failures keep the downstream's original status; transport
    /// failures surface as 502 since the request never produced a response.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::MissingField(_) | Error::InvalidRequest(_) => 400,
            Error::AccountNotFound(_) => 404,
            Error::Upstream { status, .. } => *status,
            Error::UpstreamUnreachable(_) => 502,
            Error::Internal(_) | Error::ConfigError(_) | Error::IoError(_) => 500,
        }
    }

    /// Message exposed in the JSON error body. Internal errors are not
    /// echoed back to clients.
    pub fn public_message(&self) -> String {
        match self {
            Error::Internal(_) | Error::ConfigError(_) | Error::IoError(_) => {
                "internal error".to_string()
            }
            Error::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
