//! Connection configuration for the admin console client.
//!
//! Responsibilities:
//! - Define connection settings (host, port, credentials, timeout).
//! - Provide serialization helpers for `Duration` and `SecretString`.
//! - Validate settings at construction time.
//!
//! Does NOT handle:
//! - Loading from environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The timeout is serialized as whole seconds.
//! - The password is a `SecretString` so it never appears in `Debug` output.
//! - Defaults come from `constants`, not magic numbers.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_ADMIN_PORT, DEFAULT_PASSWORD, DEFAULT_USERNAME, MAX_TIMEOUT_SECS};
use crate::error::ConfigError;

/// Module for serializing `SecretString` as a plain string.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing an optional `Duration` as whole seconds.
mod opt_duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Connection settings for one admin console.
///
/// Immutable once handed to a client; cheap to clone and safe to share
/// read-only across concurrent calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Host name or address of the server (required, non-empty).
    pub host: String,
    /// Admin console port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Administrator username, sent as the `auser` query parameter.
    #[serde(default = "default_username")]
    pub username: String,
    /// Administrator password, sent as the `apswd` query parameter.
    #[serde(default = "default_password", with = "secret_string")]
    pub password: SecretString,
    /// Request timeout covering both connect and read phases. `None`
    /// leaves the platform default in place.
    #[serde(
        default,
        with = "opt_duration_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

fn default_port() -> u16 {
    DEFAULT_ADMIN_PORT
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password() -> SecretString {
    SecretString::new(DEFAULT_PASSWORD.to_string().into())
}

impl AdminConfig {
    /// Create a configuration for `host` with factory defaults for
    /// everything else.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            username: default_username(),
            password: default_password(),
            timeout: None,
        }
    }

    /// Validate the configuration.
    ///
    /// The host must be non-empty and the timeout, when present, must be
    /// positive and at most [`MAX_TIMEOUT_SECS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingHost);
        }
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(ConfigError::InvalidTimeout {
                    message: "timeout must be greater than zero".to_string(),
                });
            }
            if timeout.as_secs() > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeout {
                    message: format!("timeout must be at most {MAX_TIMEOUT_SECS} seconds"),
                });
            }
        }
        Ok(())
    }
}
