use thiserror::Error;

/// Result type alias for option operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building Redis options from structured data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input was not valid JSON text.
    #[error("invalid JSON: {source}")]
    Json {
        /// The underlying parser error.
        #[from]
        source: serde_json::Error,
    },

    /// A recognized option carried a value of the wrong shape.
    #[error("decode error: {source}")]
    Decode {
        /// Underlying decode error.
        #[from]
        source: DecodeError,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of invalid argument.
        message: String,
    },
}

/// Error returned when a recognized key holds a value that cannot be decoded.
///
/// Nested keys are reported with a dotted path, e.g.
/// `netClientOptions.tcpNoDelay`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for `{field}`: {message}")]
pub struct DecodeError {
    field: String,
    message: String,
}

impl DecodeError {
    /// Creates a new decode error for the given key.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the key of the offending value.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the reason the value was rejected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prefixes the field with a parent key.
    pub(crate) fn nested(self, parent: &str) -> Self {
        Self {
            field: format!("{}.{}", parent, self.field),
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let error = DecodeError::new("maxPoolSize", "expected an integer");
        assert_eq!(
            error.to_string(),
            "invalid value for `maxPoolSize`: expected an integer"
        );
        assert_eq!(error.field(), "maxPoolSize");
        assert_eq!(error.message(), "expected an integer");
    }

    #[test]
    fn test_decode_error_nested() {
        let error =
            DecodeError::new("tcpNoDelay", "expected a boolean").nested("netClientOptions");
        assert_eq!(error.field(), "netClientOptions.tcpNoDelay");
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let error = Error::InvalidArgument {
            message: "expected a JSON object".to_string(),
        };
        assert_eq!(error.to_string(), "invalid argument: expected a JSON object");
    }

    #[test]
    fn test_error_from_decode() {
        let error: Error = DecodeError::new("role", "unknown role `BOSS`").into();
        assert!(matches!(error, Error::Decode { .. }));
        assert!(error.to_string().starts_with("decode error: "));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_err.into();
        assert!(matches!(error, Error::Json { .. }));
    }
}
