//! Common test utilities for integration tests.
//!
//! # Invariants
//! - `client_for` always points the client at the wiremock server with
//!   factory-default credentials, so tests can match `auser=fms` /
//!   `apswd=fms` unless they override them.

use fms_client::FmsClient;
use url::Url;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::matchers::{method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A minimal well-formed success reply.
#[allow(dead_code)]
pub const SUCCESS_BODY: &str = "<result><level>status</level>\
     <code>NetConnection.Call.Success</code>\
     <timestamp>0</timestamp></result>";

/// Build a client with default credentials aimed at `server`.
pub fn client_for(server: &MockServer) -> FmsClient {
    let uri = Url::parse(&server.uri()).unwrap();
    FmsClient::builder()
        .host(uri.host_str().unwrap())
        .port(uri.port().unwrap())
        .build()
        .unwrap()
}
