//! Socket level tuning embedded in [`RedisOptions`](super::RedisOptions).

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// TCP/TLS settings used when opening connections to Redis.
///
/// Only the settings a Redis connection layer commonly tunes are typed.
/// Any other key found while decoding is retained as-is and written back
/// on encoding, so transport-specific settings survive a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct NetClientOptions {
    tcp_keep_alive: bool,
    tcp_no_delay: bool,
    connect_timeout: i32,
    idle_timeout: i32,
    reconnect_attempts: i32,
    reconnect_interval: i64,
    ssl: bool,
    other: Map<String, Value>,
}

impl Default for NetClientOptions {
    fn default() -> Self {
        Self {
            tcp_keep_alive: false,
            tcp_no_delay: true,
            connect_timeout: 60_000,
            idle_timeout: 0,
            reconnect_attempts: 0,
            reconnect_interval: 1_000,
            ssl: false,
            other: Map::new(),
        }
    }
}

impl NetClientOptions {
    /// Creates socket options with transport defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `SO_KEEPALIVE` is enabled.
    pub fn tcp_keep_alive(&self) -> bool {
        self.tcp_keep_alive
    }

    /// Enables or disables `SO_KEEPALIVE`.
    pub fn set_tcp_keep_alive(&mut self, enabled: bool) -> &mut Self {
        self.tcp_keep_alive = enabled;
        self
    }

    /// Returns whether `TCP_NODELAY` is enabled.
    pub fn tcp_no_delay(&self) -> bool {
        self.tcp_no_delay
    }

    /// Enables or disables `TCP_NODELAY`.
    pub fn set_tcp_no_delay(&mut self, enabled: bool) -> &mut Self {
        self.tcp_no_delay = enabled;
        self
    }

    /// Returns the connect timeout in milliseconds.
    pub fn connect_timeout(&self) -> i32 {
        self.connect_timeout
    }

    /// Sets the connect timeout in milliseconds.
    pub fn set_connect_timeout(&mut self, millis: i32) -> &mut Self {
        self.connect_timeout = millis;
        self
    }

    /// Returns the idle timeout in seconds. `0` disables it.
    pub fn idle_timeout(&self) -> i32 {
        self.idle_timeout
    }

    /// Sets the idle timeout in seconds.
    pub fn set_idle_timeout(&mut self, secs: i32) -> &mut Self {
        self.idle_timeout = secs;
        self
    }

    /// Returns how many times a failed connect is retried.
    pub fn reconnect_attempts(&self) -> i32 {
        self.reconnect_attempts
    }

    /// Sets how many times a failed connect is retried. `-1` retries forever.
    pub fn set_reconnect_attempts(&mut self, attempts: i32) -> &mut Self {
        self.reconnect_attempts = attempts;
        self
    }

    /// Returns the delay between connect retries in milliseconds.
    pub fn reconnect_interval(&self) -> i64 {
        self.reconnect_interval
    }

    /// Sets the delay between connect retries in milliseconds.
    pub fn set_reconnect_interval(&mut self, millis: i64) -> &mut Self {
        self.reconnect_interval = millis;
        self
    }

    /// Returns whether connections are wrapped in TLS.
    pub fn ssl(&self) -> bool {
        self.ssl
    }

    /// Enables or disables TLS.
    pub fn set_ssl(&mut self, enabled: bool) -> &mut Self {
        self.ssl = enabled;
        self
    }

    /// Returns settings this type does not model, keyed by their JSON name.
    pub fn other(&self) -> &Map<String, Value> {
        &self.other
    }

    /// Stores a setting this type does not model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `key` names a typed setting such
    /// as `ssl`; use its setter instead.
    pub fn set_other(&mut self, key: impl Into<String>, value: Value) -> Result<&mut Self> {
        let key = key.into();
        if is_typed_key(&key) {
            return Err(Error::InvalidArgument {
                message: format!("`{}` is a typed socket option", key),
            });
        }
        self.other.insert(key, value);
        Ok(self)
    }

    pub(crate) fn other_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.other
    }
}

/// Returns whether `key` is stored in a typed field rather than in `other`.
pub(crate) fn is_typed_key(key: &str) -> bool {
    matches!(
        key,
        "tcpKeepAlive"
            | "tcpNoDelay"
            | "connectTimeout"
            | "idleTimeout"
            | "reconnectAttempts"
            | "reconnectInterval"
            | "ssl"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_options_default() {
        let net = NetClientOptions::new();
        assert!(!net.tcp_keep_alive());
        assert!(net.tcp_no_delay());
        assert_eq!(net.connect_timeout(), 60_000);
        assert_eq!(net.idle_timeout(), 0);
        assert_eq!(net.reconnect_attempts(), 0);
        assert_eq!(net.reconnect_interval(), 1_000);
        assert!(!net.ssl());
        assert!(net.other().is_empty());
    }

    #[test]
    fn test_net_options_chaining() {
        let mut net = NetClientOptions::new();
        net.set_tcp_keep_alive(true)
            .set_tcp_no_delay(false)
            .set_connect_timeout(500)
            .set_ssl(true)
            .set_other("trustAll", Value::Bool(true))
            .unwrap();

        assert!(net.tcp_keep_alive());
        assert!(!net.tcp_no_delay());
        assert_eq!(net.connect_timeout(), 500);
        assert!(net.ssl());
        assert_eq!(net.other().get("trustAll"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_set_other_rejects_typed_key() {
        let mut net = NetClientOptions::new();
        let result = net.set_other("ssl", Value::Bool(true));
        match result {
            Err(Error::InvalidArgument { message }) => {
                assert_eq!(message, "`ssl` is a typed socket option");
            }
            _ => panic!("Expected InvalidArgument error"),
        }
        assert!(!net.ssl());
        assert!(net.other().is_empty());
    }
}
