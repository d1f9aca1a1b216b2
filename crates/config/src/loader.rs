//! Environment variable loading for admin client configuration.
//!
//! Responsibilities:
//! - Read `FMS_*` environment variables into an [`AdminConfig`].
//! - Optionally seed the environment from a `.env` file.
//!
//! Does NOT handle:
//! - Config file persistence (not a feature of this client).
//! - Validation beyond what [`AdminConfig::validate`] performs.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;

use crate::error::ConfigError;
use crate::types::AdminConfig;

/// Environment variable naming the admin host.
pub const ENV_HOST: &str = "FMS_HOST";
/// Environment variable overriding the admin port.
pub const ENV_PORT: &str = "FMS_PORT";
/// Environment variable overriding the administrator username.
pub const ENV_USERNAME: &str = "FMS_USERNAME";
/// Environment variable overriding the administrator password.
pub const ENV_PASSWORD: &str = "FMS_PASSWORD";
/// Environment variable setting the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "FMS_TIMEOUT";

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Load a `.env` file from the current directory, if one exists.
///
/// Missing files are not an error; the environment simply stays as-is.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(_) => debug!("no .env file found"),
    }
}

/// Build an [`AdminConfig`] from `FMS_*` environment variables.
///
/// `FMS_HOST` is required; every other variable falls back to the factory
/// default. The resulting configuration is validated before being
/// returned.
pub fn from_env() -> Result<AdminConfig, ConfigError> {
    let host = env_var_or_none(ENV_HOST).ok_or(ConfigError::MissingHost)?;
    let mut config = AdminConfig::new(host);

    if let Some(port) = env_var_or_none(ENV_PORT) {
        config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_PORT.to_string(),
            message: "must be a port number".to_string(),
        })?;
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        config.username = username;
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        config.password = SecretString::new(password.into());
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        config.timeout = Some(Duration::from_secs(secs));
    }

    config.validate()?;
    Ok(config)
}
