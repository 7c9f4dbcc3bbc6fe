//! JSON conversion for [`RedisOptions`].
//!
//! Keys are the camel-cased names used across Redis client configuration
//! files (`maxPoolSize`, `netClientOptions`, ...). Enum values are written
//! as their uppercase names.

use serde_json::Value;
use tracing::trace;

use crate::error::{Error, Result};
use crate::options::RedisOptions;

mod decoder;
mod encoder;

impl RedisOptions {
    /// Builds options from a JSON object.
    ///
    /// Every field starts at its default and is overwritten by the matching
    /// key, when present. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `json` is not an object.
    /// Returns [`Error::Decode`] naming the key whose value has the wrong type.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_options::{ClientType, RedisOptions};
    /// use serde_json::json;
    ///
    /// let options = RedisOptions::from_json(&json!({
    ///     "type": "CLUSTER",
    ///     "maxPoolSize": 6
    /// })).unwrap();
    /// assert_eq!(options.client_type(), ClientType::Cluster);
    /// assert_eq!(options.max_pool_size(), 6);
    /// ```
    pub fn from_json(json: &Value) -> Result<Self> {
        let map = json.as_object().ok_or_else(|| Error::InvalidArgument {
            message: format!("expected a JSON object, found {}", decoder::kind(json)),
        })?;
        let options = decoder::decode_options(map)?;
        trace!(client_type = %options.client_type, "decoded redis options");
        Ok(options)
    }

    /// Parses JSON text and builds options from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not valid JSON, otherwise the
    /// same errors as [`RedisOptions::from_json`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Converts these options to a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(encoder::encode_options(self))
    }

    /// Converts these options to compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl TryFrom<Value> for RedisOptions {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

impl From<RedisOptions> for Value {
    fn from(options: RedisOptions) -> Self {
        options.to_json()
    }
}
