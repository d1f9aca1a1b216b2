//! HTTP execution for admin requests.
//!
//! One GET per call, no retry, no connection reuse guarantees beyond what
//! reqwest provides internally. Classification of the HTTP status is the
//! dispatcher's job; this module only distinguishes network-level failure
//! from a received reply.
//!
//! Error messages carry a redacted endpoint (scheme, host, port, path),
//! never the query string, which holds the admin credentials.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};

/// A received HTTP reply, prior to any status classification.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Execute one GET against `url`.
///
/// Any received status comes back as a [`RawResponse`]; only failures to
/// produce a reply at all become errors.
pub(crate) async fn get(http: &Client, url: Url, timeout: Option<Duration>) -> Result<RawResponse> {
    let endpoint = redacted_endpoint(&url);
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| classify(e, &endpoint, timeout))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| classify(e, &endpoint, timeout))?;

    debug!(endpoint = %endpoint, status, bytes = body.len(), "admin reply received");
    Ok(RawResponse { status, body })
}

/// Map a reqwest failure onto the client's transport error kinds.
fn classify(err: reqwest::Error, endpoint: &str, timeout: Option<Duration>) -> ClientError {
    if err.is_timeout()
        && let Some(limit) = timeout
    {
        return ClientError::Timeout(limit);
    }
    if err.is_connect() {
        return ClientError::ConnectionRefused(endpoint.to_string());
    }
    ClientError::Http(err)
}

/// Render `url` without its query string.
fn redacted_endpoint(url: &Url) -> String {
    let mut endpoint = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        endpoint.push(':');
        endpoint.push_str(&port.to_string());
    }
    endpoint.push_str(url.path());
    endpoint
}
