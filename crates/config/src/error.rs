//! Error types for configuration loading and validation.
//!
//! Invariants:
//! - All variants name the offending variable or field; none carry raw
//!   secret values.

use thiserror::Error;

/// Errors that can occur while building or loading an [`AdminConfig`].
///
/// [`AdminConfig`]: crate::AdminConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("admin host is required. Set FMS_HOST or pass a host explicitly.")]
    MissingHost,

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },
}
