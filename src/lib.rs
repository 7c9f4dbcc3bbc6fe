//! # Muxis Options
//!
//! Connection, pool and parser options for a Redis client: which topology to
//! use (standalone, sentinel or cluster), where the servers are, how the
//! connection pool is sized and how much pipelining backlog and reply
//! nesting the client tolerates.
//!
//! Options are plain values. They are built from defaults, cloned, or
//! decoded from JSON, tuned through chained setters and then handed to the
//! connection layer.
//!
//! ## Example
//!
//! ```
//! use muxis_options::{ClientType, RedisOptions, Role};
//!
//! let mut options = RedisOptions::new();
//! options
//!     .set_client_type(ClientType::Sentinel)
//!     .set_endpoints(["redis://sentinel-1:26379", "redis://sentinel-2:26379"])
//!     .set_master_name("orders")
//!     .set_role(Role::Replica)
//!     .set_max_pool_size(3);
//!
//! let json = options.to_json();
//! assert_eq!(json["masterName"], "orders");
//!
//! let decoded = RedisOptions::from_json(&json)?;
//! assert_eq!(decoded, options);
//! # Ok::<(), muxis_options::Error>(())
//! ```

#![warn(missing_docs)]

pub(crate) mod codec;
/// Error types.
pub mod error;
pub mod options;

pub use crate::error::{DecodeError, Error, Result};
pub use crate::options::{
    ClientType, NetClientOptions, RedisOptions, Role, SlavesPolicy, DEFAULT_ENDPOINT,
};
