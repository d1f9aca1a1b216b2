//! Error types for the admin client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while dispatching an admin action.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid connection configuration.
    #[error(transparent)]
    Config(#[from] fms_config::ConfigError),

    /// A call parameter value is not representable as a scalar.
    #[error("parameter '{key}' is not a scalar value")]
    InvalidParameter { key: String },

    /// The request target could not be assembled.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// HTTP-level request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured timeout elapsed before the server replied.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The connection could not be established.
    #[error("connection refused to {0}")]
    ConnectionRefused(String),

    /// The server rejected the action name with a non-OK status.
    #[error("no such admin action '{action}' (HTTP {status})")]
    InvalidAction { action: String, status: u16 },

    /// The response body is not well-formed XML.
    #[error("malformed admin response: {0}")]
    Parse(String),

    /// A required field is absent from the decoded response.
    #[error("response is missing result field '{field}'")]
    MissingField { field: String },
}

impl ClientError {
    /// Check if this error is a network-level failure, as opposed to a
    /// rejection or decode failure produced after a reply was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::ConnectionRefused(_)
        )
    }
}
