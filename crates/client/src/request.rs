//! Request target construction for admin actions.
//!
//! Builds `http://{host}:{port}/admin/{action}?{query}` from the stored
//! configuration and the call-site parameters. Credentials ride in the
//! query string as `auser`/`apswd`; call parameters take precedence over
//! them on key collision. Query ordering is stable: credentials first,
//! then call parameters in insertion order.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};
use secrecy::ExposeSecret;
use url::Url;

use fms_config::AdminConfig;
use fms_config::constants::ADMIN_PATH;

use crate::error::{ClientError, Result};
use crate::params::{Params, scalar_to_string};

/// Query parameter carrying the administrator username.
pub(crate) const PARAM_USER: &str = "auser";

/// Query parameter carrying the administrator password.
pub(crate) const PARAM_PASSWORD: &str = "apswd";

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that would otherwise
/// change how the action path is resolved:
/// - Slash: prevents path traversal
/// - Percent: prevents double-encoding issues
/// - Question mark and hash: have special URL meaning
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode an action name for safe use as a URL path segment.
fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Build the full request target for `action`.
///
/// Parameter values are coerced to strings before anything is assembled,
/// so a non-scalar value fails the call without network activity.
pub(crate) fn build(config: &AdminConfig, action: &str, params: &Params) -> Result<Url> {
    let mut encoded: Vec<(&str, String)> = Vec::with_capacity(params.len());
    for (key, value) in params.iter() {
        encoded.push((key, scalar_to_string(key, value)?));
    }

    let base = format!(
        "http://{}:{}{}/{}",
        config.host,
        config.port,
        ADMIN_PATH,
        encode_path_segment(action)
    );
    let mut url = Url::parse(&base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

    let overrides = |name: &str| encoded.iter().any(|(key, _)| *key == name);
    {
        let mut query = url.query_pairs_mut();
        if !overrides(PARAM_USER) {
            query.append_pair(PARAM_USER, &config.username);
        }
        if !overrides(PARAM_PASSWORD) {
            query.append_pair(PARAM_PASSWORD, config.password.expose_secret());
        }
        for (key, value) in &encoded {
            query.append_pair(key, value);
        }
    }
    Ok(url)
}
