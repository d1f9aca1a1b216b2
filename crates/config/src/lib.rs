//! Configuration for the admin console client.
//!
//! This crate provides the connection settings type consumed by the client
//! crate, factory defaults matching an out-of-the-box server, and a loader
//! for `FMS_*` environment variables.

pub mod constants;
mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{
    ENV_HOST, ENV_PASSWORD, ENV_PORT, ENV_TIMEOUT, ENV_USERNAME, env_var_or_none, from_env,
    load_dotenv,
};
pub use types::AdminConfig;
