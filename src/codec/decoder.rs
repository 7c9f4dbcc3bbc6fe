use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::options::net::is_typed_key;
use crate::options::{NetClientOptions, RedisOptions};

/// Overlays every recognized key of `map` onto default options.
///
/// Unrecognized keys are skipped and `null` values leave the default in
/// place. The first value of the wrong shape aborts decoding.
pub(crate) fn decode_options(map: &Map<String, Value>) -> Result<RedisOptions, DecodeError> {
    let mut options = RedisOptions::default();

    for (key, value) in map {
        if value.is_null() {
            continue;
        }
        let field = key.as_str();
        match field {
            "type" => options.client_type = variant(field, value)?,
            "netClientOptions" => {
                let nested = value
                    .as_object()
                    .ok_or_else(|| mismatch(field, "an object", value))?;
                options.net_client_options =
                    decode_net_options(nested).map_err(|e| e.nested(field))?;
            }
            "endpoints" => options.endpoints = Some(string_list(field, value)?),
            "maxWaitingHandlers" => options.max_waiting_handlers = int(field, value)?,
            "maxNestedArrays" => options.max_nested_arrays = int(field, value)?,
            "masterName" => options.master_name = string(field, value)?,
            "role" => options.role = variant(field, value)?,
            "slaves" => options.slaves = variant(field, value)?,
            "poolCleanerInterval" => options.pool_cleaner_interval = int(field, value)?,
            "maxPoolSize" => options.max_pool_size = int(field, value)?,
            "maxPoolWaiting" => options.max_pool_waiting = int(field, value)?,
            "poolRecycleTimeout" => options.pool_recycle_timeout = int(field, value)?,
            _ => debug!(key = %key, "ignoring unrecognized redis option"),
        }
    }

    Ok(options)
}

/// Decodes socket options, starting from transport defaults.
///
/// Keys that are not modelled are kept verbatim.
pub(crate) fn decode_net_options(
    map: &Map<String, Value>,
) -> Result<NetClientOptions, DecodeError> {
    let mut net = NetClientOptions::default();

    for (key, value) in map {
        let field = key.as_str();
        if value.is_null() && is_typed_key(field) {
            continue;
        }
        match field {
            "tcpKeepAlive" => {
                net.set_tcp_keep_alive(boolean(field, value)?);
            }
            "tcpNoDelay" => {
                net.set_tcp_no_delay(boolean(field, value)?);
            }
            "connectTimeout" => {
                net.set_connect_timeout(int(field, value)?);
            }
            "idleTimeout" => {
                net.set_idle_timeout(int(field, value)?);
            }
            "reconnectAttempts" => {
                net.set_reconnect_attempts(int(field, value)?);
            }
            "reconnectInterval" => {
                net.set_reconnect_interval(long(field, value)?);
            }
            "ssl" => {
                net.set_ssl(boolean(field, value)?);
            }
            _ => {
                trace!(key = %key, "keeping opaque socket option");
                net.other_mut().insert(key.clone(), value.clone());
            }
        }
    }

    Ok(net)
}

fn int(field: &str, value: &Value) -> Result<i32, DecodeError> {
    let n = long(field, value)?;
    i32::try_from(n).map_err(|_| DecodeError::new(field, format!("{} is out of range", n)))
}

fn long(field: &str, value: &Value) -> Result<i64, DecodeError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_u64() {
        Some(n) => Err(DecodeError::new(field, format!("{} is out of range", n))),
        None => Err(mismatch(field, "an integer", value)),
    }
}

fn boolean(field: &str, value: &Value) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| mismatch(field, "a boolean", value))
}

fn string(field: &str, value: &Value) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(field, "a string", value))
}

fn string_list(field: &str, value: &Value) -> Result<Vec<String>, DecodeError> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(field, "an array of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                DecodeError::new(
                    field,
                    format!("element {} is {}, expected a string", i, kind(item)),
                )
            })
        })
        .collect()
}

fn variant<T: FromStr>(field: &str, value: &Value) -> Result<T, DecodeError> {
    let literal = value
        .as_str()
        .ok_or_else(|| mismatch(field, "a string", value))?;
    literal
        .parse()
        .map_err(|_| DecodeError::new(field, format!("unknown literal `{}`", literal)))
}

fn mismatch(field: &str, expected: &str, found: &Value) -> DecodeError {
    DecodeError::new(field, format!("expected {}, found {}", expected, kind(found)))
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
