//! The admin console client.
//!
//! [`FmsClient`] is the single entry point for the server's open-ended
//! family of admin actions: callers name the action by identifier and the
//! client normalizes it, builds the request target, executes one GET, and
//! decodes the reply. No catalog of valid actions exists on the client
//! side; the server alone decides which identifiers it accepts.

use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use fms_config::AdminConfig;

use crate::envelope::Envelope;
use crate::error::{ClientError, Result};
use crate::naming::camelize;
use crate::params::Params;
use crate::{request, transport};

/// Builder for creating a new [`FmsClient`].
#[derive(Debug, Default)]
pub struct FmsClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<SecretString>,
    timeout: Option<Duration>,
}

impl FmsClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server host (required).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the admin console port. Defaults to 1111.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the administrator username. Defaults to `fms`.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the administrator password. Defaults to `fms`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into().into()));
        self
    }

    /// Set the request timeout, applied to both connect and read phases.
    /// Without one the platform default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FmsClient> {
        let mut config = AdminConfig::new(self.host.unwrap_or_default());
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(password) = self.password {
            config.password = password;
        }
        config.timeout = self.timeout;
        FmsClient::from_config(config)
    }
}

/// Admin console client.
///
/// Each [`invoke`](FmsClient::invoke) is one synchronous request/response
/// cycle over a fresh logical request; the client holds no mutable state,
/// so a single instance is safe to share across concurrent tasks.
#[derive(Debug)]
pub struct FmsClient {
    http: reqwest::Client,
    config: AdminConfig,
}

impl FmsClient {
    /// Create a new client builder.
    pub fn builder() -> FmsClientBuilder {
        FmsClientBuilder::new()
    }

    /// Create a client from an existing configuration.
    ///
    /// The configuration is validated first; an empty host fails here,
    /// before any call is made.
    pub fn from_config(config: AdminConfig) -> Result<Self> {
        config.validate().map_err(ClientError::Config)?;

        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// The connection configuration this client was built with.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Invoke an admin action by identifier.
    ///
    /// The identifier and every parameter key may be written in snake_case;
    /// both are normalized to the console's camelCase convention. Any HTTP
    /// status other than 200 fails with [`ClientError::InvalidAction`]
    /// naming the attempted action. A 200 reply has its body trimmed and
    /// decoded into an [`Envelope`].
    ///
    /// Every call issues exactly one network request. Admin actions can
    /// mutate server state, so nothing here retries on failure.
    pub async fn invoke(&self, method: &str, params: Params) -> Result<Envelope> {
        let action = camelize(method);
        let params: Params = params
            .iter()
            .map(|(key, value)| (camelize(key), value.clone()))
            .collect();

        let url = request::build(&self.config, &action, &params)?;
        debug!(action = %action, params = params.len(), "dispatching admin action");

        let reply = transport::get(&self.http, url, self.config.timeout).await?;
        if reply.status != 200 {
            debug!(action = %action, status = reply.status, "admin action rejected");
            return Err(ClientError::InvalidAction {
                action,
                status: reply.status,
            });
        }

        Envelope::decode(reply.body.trim())
    }
}
