use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Connection topology the client should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientType {
    /// A single Redis server.
    #[default]
    Standalone,
    /// A master/replica group discovered through sentinels.
    Sentinel,
    /// A Redis Cluster.
    Cluster,
}

impl ClientType {
    /// Returns the wire name of this client type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Standalone => "STANDALONE",
            ClientType::Sentinel => "SENTINEL",
            ClientType::Cluster => "CLUSTER",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDALONE" => Ok(ClientType::Standalone),
            "SENTINEL" => Ok(ClientType::Sentinel),
            "CLUSTER" => Ok(ClientType::Cluster),
            other => Err(Error::InvalidArgument {
                message: format!("unknown client type `{}`", other),
            }),
        }
    }
}

/// Node role resolved through sentinel (sentinel mode only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// The current master of the group.
    #[default]
    Master,
    /// One of the replicas of the group.
    Replica,
}

impl Role {
    /// Returns the wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "MASTER",
            Role::Replica => "REPLICA",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MASTER" => Ok(Role::Master),
            "REPLICA" => Ok(Role::Replica),
            other => Err(Error::InvalidArgument {
                message: format!("unknown role `{}`", other),
            }),
        }
    }
}

/// Whether reads may be routed to replica nodes (cluster mode only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlavesPolicy {
    /// Always read from masters.
    #[default]
    Never,
    /// Spread reads across masters and replicas.
    Share,
    /// Always read from replicas.
    Always,
}

impl SlavesPolicy {
    /// Returns the wire name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlavesPolicy::Never => "NEVER",
            SlavesPolicy::Share => "SHARE",
            SlavesPolicy::Always => "ALWAYS",
        }
    }
}

impl fmt::Display for SlavesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlavesPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEVER" => Ok(SlavesPolicy::Never),
            "SHARE" => Ok(SlavesPolicy::Share),
            "ALWAYS" => Ok(SlavesPolicy::Always),
            other => Err(Error::InvalidArgument {
                message: format!("unknown slaves policy `{}`", other),
            }),
        }
    }
}
