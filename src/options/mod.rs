//! Redis client configuration.
//!
//! [`RedisOptions`] describes how a client should connect (standalone,
//! sentinel or cluster), how its connection pool is sized and how much
//! pipelining backlog and reply nesting it tolerates. Nothing here opens a
//! socket; the values are read by the connection, pool and parser layers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Socket option types.
pub mod net;
/// Topology, role and replica-read enums.
pub mod types;

pub use net::NetClientOptions;
pub use types::{ClientType, Role, SlavesPolicy};

/// Endpoint used when none has been configured.
pub const DEFAULT_ENDPOINT: &str = "redis://localhost:6379";

/// Configuration for a Redis client.
///
/// Values are set through chained setters and never validated here; range
/// and consistency checks belong to the layer consuming the options.
///
/// Cloning produces an independent copy: changing the endpoints or socket
/// options of one value never affects the other.
///
/// # Example
///
/// ```
/// use muxis_options::{ClientType, RedisOptions, SlavesPolicy};
///
/// let mut options = RedisOptions::new();
/// options
///     .set_client_type(ClientType::Cluster)
///     .set_endpoint("redis://10.0.0.1:7000")
///     .add_endpoint("redis://10.0.0.2:7000")
///     .set_slaves(SlavesPolicy::Share)
///     .set_max_pool_size(6);
///
/// assert_eq!(options.endpoints().len(), 2);
/// assert_eq!(options.endpoint(), "redis://10.0.0.1:7000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub struct RedisOptions {
    pub(crate) client_type: ClientType,
    pub(crate) net_client_options: NetClientOptions,
    pub(crate) endpoints: Option<Vec<String>>,
    pub(crate) max_waiting_handlers: i32,
    pub(crate) max_nested_arrays: i32,
    pub(crate) master_name: String,
    pub(crate) role: Role,
    pub(crate) slaves: SlavesPolicy,
    pub(crate) pool_cleaner_interval: i32,
    pub(crate) max_pool_size: i32,
    pub(crate) max_pool_waiting: i32,
    pub(crate) pool_recycle_timeout: i32,
}

impl Default for RedisOptions {
    fn default() -> Self {
        let mut net_client_options = NetClientOptions::default();
        net_client_options.set_tcp_keep_alive(true).set_tcp_no_delay(true);

        Self {
            client_type: ClientType::Standalone,
            net_client_options,
            endpoints: None,
            max_waiting_handlers: 2048,
            max_nested_arrays: 32,
            master_name: "mymaster".to_string(),
            role: Role::Master,
            slaves: SlavesPolicy::Never,
            pool_cleaner_interval: -1,
            max_pool_size: 1,
            max_pool_waiting: 1,
            pool_recycle_timeout: 15_000,
        }
    }
}

impl RedisOptions {
    /// Creates options populated with Redis defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the topology the client connects to.
    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// Sets the topology the client connects to.
    pub fn set_client_type(&mut self, client_type: ClientType) -> &mut Self {
        self.client_type = client_type;
        self
    }

    /// Returns the socket options used for every connection.
    pub fn net_client_options(&self) -> &NetClientOptions {
        &self.net_client_options
    }

    /// Returns the socket options for in-place tuning.
    pub fn net_client_options_mut(&mut self) -> &mut NetClientOptions {
        &mut self.net_client_options
    }

    /// Replaces the socket options.
    pub fn set_net_client_options(&mut self, net_client_options: NetClientOptions) -> &mut Self {
        self.net_client_options = net_client_options;
        self
    }

    /// Returns the configured endpoints in order.
    ///
    /// An unset or empty list reads as `[DEFAULT_ENDPOINT]`. Reading does not
    /// store the default, so an untouched value still serializes without
    /// `endpoints`.
    pub fn endpoints(&self) -> Vec<&str> {
        match self.endpoints.as_deref() {
            Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
            _ => vec![DEFAULT_ENDPOINT],
        }
    }

    /// Returns the endpoint list for in-place editing.
    ///
    /// An unset list is first filled with [`DEFAULT_ENDPOINT`].
    pub fn endpoints_mut(&mut self) -> &mut Vec<String> {
        self.endpoints.get_or_insert_with(|| vec![DEFAULT_ENDPOINT.to_string()])
    }

    /// Returns the primary endpoint, the only one used in standalone mode.
    pub fn endpoint(&self) -> &str {
        self.endpoints
            .as_deref()
            .and_then(|list| list.first())
            .map(String::as_str)
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Replaces all endpoints with `endpoints`.
    ///
    /// An empty list is stored as-is and reads back as the default endpoint.
    pub fn set_endpoints<I, S>(&mut self, endpoints: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = Some(endpoints.into_iter().map(Into::into).collect());
        self
    }

    /// Appends an endpoint.
    ///
    /// When no endpoint was configured the default one is kept in front of
    /// the added endpoint.
    pub fn add_endpoint(&mut self, endpoint: impl Into<String>) -> &mut Self {
        self.endpoints_mut().push(endpoint.into());
        self
    }

    /// Replaces all endpoints with a single one.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> &mut Self {
        self.endpoints = Some(vec![endpoint.into()]);
        self
    }

    /// Returns how many reply handlers may be queued before backpressure.
    pub fn max_waiting_handlers(&self) -> i32 {
        self.max_waiting_handlers
    }

    /// Sets how many reply handlers may be queued before backpressure.
    pub fn set_max_waiting_handlers(&mut self, max_waiting_handlers: i32) -> &mut Self {
        self.max_waiting_handlers = max_waiting_handlers;
        self
    }

    /// Returns the nesting depth allowed for array replies.
    pub fn max_nested_arrays(&self) -> i32 {
        self.max_nested_arrays
    }

    /// Sets the nesting depth allowed for array replies.
    pub fn set_max_nested_arrays(&mut self, max_nested_arrays: i32) -> &mut Self {
        self.max_nested_arrays = max_nested_arrays;
        self
    }

    /// Returns the sentinel master group name.
    pub fn master_name(&self) -> &str {
        &self.master_name
    }

    /// Sets the sentinel master group name.
    pub fn set_master_name(&mut self, master_name: impl Into<String>) -> &mut Self {
        self.master_name = master_name.into();
        self
    }

    /// Returns the role resolved through sentinel.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Sets the role resolved through sentinel.
    pub fn set_role(&mut self, role: Role) -> &mut Self {
        self.role = role;
        self
    }

    /// Returns the replica read policy used in cluster mode.
    pub fn slaves(&self) -> SlavesPolicy {
        self.slaves
    }

    /// Sets the replica read policy used in cluster mode.
    pub fn set_slaves(&mut self, slaves: SlavesPolicy) -> &mut Self {
        self.slaves = slaves;
        self
    }

    /// Returns the pool cleaner interval in milliseconds, `-1` when disabled.
    pub fn pool_cleaner_interval(&self) -> i32 {
        self.pool_cleaner_interval
    }

    /// Sets the pool cleaner interval in milliseconds.
    pub fn set_pool_cleaner_interval(&mut self, pool_cleaner_interval: i32) -> &mut Self {
        self.pool_cleaner_interval = pool_cleaner_interval;
        self
    }

    /// Returns the pool cleaner interval, or `None` when the cleaner is off.
    pub fn pool_cleaner_period(&self) -> Option<Duration> {
        positive_millis(self.pool_cleaner_interval)
    }

    /// Returns the maximum number of pooled connections.
    pub fn max_pool_size(&self) -> i32 {
        self.max_pool_size
    }

    /// Sets the maximum number of pooled connections.
    ///
    /// With cluster or sentinel topologies this should be at least the
    /// number of cluster members (or sentinels + 1).
    pub fn set_max_pool_size(&mut self, max_pool_size: i32) -> &mut Self {
        self.max_pool_size = max_pool_size;
        self
    }

    /// Returns how many callers may wait for a pooled connection.
    pub fn max_pool_waiting(&self) -> i32 {
        self.max_pool_waiting
    }

    /// Sets how many callers may wait for a pooled connection.
    pub fn set_max_pool_waiting(&mut self, max_pool_waiting: i32) -> &mut Self {
        self.max_pool_waiting = max_pool_waiting;
        self
    }

    /// Returns the idle age in milliseconds after which a connection is recycled.
    pub fn pool_recycle_timeout(&self) -> i32 {
        self.pool_recycle_timeout
    }

    /// Sets the idle age in milliseconds after which a connection is recycled.
    pub fn set_pool_recycle_timeout(&mut self, pool_recycle_timeout: i32) -> &mut Self {
        self.pool_recycle_timeout = pool_recycle_timeout;
        self
    }

    /// Returns the recycle timeout, or `None` when it is not positive.
    pub fn pool_recycle_period(&self) -> Option<Duration> {
        positive_millis(self.pool_recycle_timeout)
    }
}

fn positive_millis(millis: i32) -> Option<Duration> {
    u64::try_from(millis)
        .ok()
        .filter(|&ms| ms > 0)
        .map(Duration::from_millis)
}
