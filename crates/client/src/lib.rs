//! Client for the media server administration console.
//!
//! The console exposes an open-ended set of admin actions over HTTP GET.
//! This crate maps snake_case identifiers onto the console's camelCase
//! action names, injects credentials into the query string, executes the
//! request, and decodes the XML reply into a typed [`Envelope`].
//!
//! ```no_run
//! use fms_client::{FmsClient, Params};
//!
//! # async fn run() -> fms_client::Result<()> {
//! let client = FmsClient::builder()
//!     .host("media.example.com")
//!     .password("s3cret")
//!     .build()?;
//!
//! let reply = client
//!     .invoke("get_app_stats", Params::new().set("app", "live"))
//!     .await?;
//! assert!(reply.is_success());
//! # Ok(())
//! # }
//! ```

mod client;
mod envelope;
mod error;
mod naming;
mod params;
mod request;
mod transport;

pub use client::{FmsClient, FmsClientBuilder};
pub use envelope::{Envelope, SUCCESS_CODE, XmlValue};
pub use error::{ClientError, Result};
pub use naming::camelize;
pub use params::Params;

pub use fms_config::{AdminConfig, ConfigError};
