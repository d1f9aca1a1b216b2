//! Call-site parameters for admin actions.
//!
//! Parameters are an insertion-ordered list of key/value pairs. Values are
//! held as `serde_json::Value` so call sites can pass strings, numbers, or
//! booleans without ceremony; only scalars survive encoding. Insertion
//! order is preserved all the way into the query string so built requests
//! are stable for testing.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// Ordered key/value parameters for a single admin action call.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, consuming and returning `self` for chaining.
    ///
    /// A repeated key overwrites the earlier value in place, keeping the
    /// original position.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the parameter set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Coerce a parameter value to its query-string form.
///
/// Strings, numbers, and booleans take their display form and `null`
/// encodes as an empty string. Arrays and objects are a caller error.
pub(crate) fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(ClientError::InvalidParameter {
            key: key.to_string(),
        }),
    }
}
