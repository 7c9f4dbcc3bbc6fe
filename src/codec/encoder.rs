use serde_json::{Map, Value};

use crate::options::{NetClientOptions, RedisOptions};

/// Writes every option under its JSON key.
///
/// `endpoints` is only written once it has been set.
pub(crate) fn encode_options(options: &RedisOptions) -> Map<String, Value> {
    let mut map = Map::new();

    map.insert("type".into(), options.client_type.as_str().into());
    map.insert(
        "netClientOptions".into(),
        Value::Object(encode_net_options(&options.net_client_options)),
    );
    if let Some(endpoints) = &options.endpoints {
        map.insert(
            "endpoints".into(),
            Value::Array(endpoints.iter().cloned().map(Value::String).collect()),
        );
    }
    map.insert("maxWaitingHandlers".into(), options.max_waiting_handlers.into());
    map.insert("maxNestedArrays".into(), options.max_nested_arrays.into());
    map.insert("masterName".into(), options.master_name.clone().into());
    map.insert("role".into(), options.role.as_str().into());
    map.insert("slaves".into(), options.slaves.as_str().into());
    map.insert("poolCleanerInterval".into(), options.pool_cleaner_interval.into());
    map.insert("maxPoolSize".into(), options.max_pool_size.into());
    map.insert("maxPoolWaiting".into(), options.max_pool_waiting.into());
    map.insert("poolRecycleTimeout".into(), options.pool_recycle_timeout.into());

    map
}

/// Writes typed socket options alongside the opaque ones.
pub(crate) fn encode_net_options(net: &NetClientOptions) -> Map<String, Value> {
    let mut map = net.other().clone();

    map.insert("tcpKeepAlive".into(), net.tcp_keep_alive().into());
    map.insert("tcpNoDelay".into(), net.tcp_no_delay().into());
    map.insert("connectTimeout".into(), net.connect_timeout().into());
    map.insert("idleTimeout".into(), net.idle_timeout().into());
    map.insert("reconnectAttempts".into(), net.reconnect_attempts().into());
    map.insert("reconnectInterval".into(), net.reconnect_interval().into());
    map.insert("ssl".into(), net.ssl().into());

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ClientType, SlavesPolicy};
    use serde_json::json;

    #[test]
    fn test_encode_defaults() {
        let map = encode_options(&RedisOptions::default());

        assert_eq!(map.get("type"), Some(&json!("STANDALONE")));
        assert_eq!(map.get("maxWaitingHandlers"), Some(&json!(2048)));
        assert_eq!(map.get("maxNestedArrays"), Some(&json!(32)));
        assert_eq!(map.get("masterName"), Some(&json!("mymaster")));
        assert_eq!(map.get("role"), Some(&json!("MASTER")));
        assert_eq!(map.get("slaves"), Some(&json!("NEVER")));
        assert_eq!(map.get("poolCleanerInterval"), Some(&json!(-1)));
        assert_eq!(map.get("maxPoolSize"), Some(&json!(1)));
        assert_eq!(map.get("maxPoolWaiting"), Some(&json!(1)));
        assert_eq!(map.get("poolRecycleTimeout"), Some(&json!(15000)));
        assert_eq!(map["netClientOptions"]["tcpKeepAlive"], json!(true));
        assert_eq!(map["netClientOptions"]["tcpNoDelay"], json!(true));
    }

    #[test]
    fn test_encode_omits_unset_endpoints() {
        let options = RedisOptions::default();
        let _ = options.endpoints();
        let map = encode_options(&options);
        assert!(!map.contains_key("endpoints"));
    }

    #[test]
    fn test_encode_endpoints_in_order() {
        let mut options = RedisOptions::default();
        options
            .set_client_type(ClientType::Cluster)
            .set_slaves(SlavesPolicy::Share)
            .set_endpoints(["redis://n3:7002", "redis://n1:7000"]);

        let map = encode_options(&options);
        assert_eq!(map.get("type"), Some(&json!("CLUSTER")));
        assert_eq!(map.get("slaves"), Some(&json!("SHARE")));
        assert_eq!(
            map.get("endpoints"),
            Some(&json!(["redis://n3:7002", "redis://n1:7000"]))
        );
    }

    #[test]
    fn test_encode_empty_endpoints() {
        let mut options = RedisOptions::default();
        options.set_endpoints(Vec::<String>::new());
        let map = encode_options(&options);
        assert_eq!(map.get("endpoints"), Some(&json!([])));
    }

    #[test]
    fn test_encode_net_options_includes_opaque() {
        let mut net = NetClientOptions::default();
        net.set_ssl(true).set_other("trustAll", json!(true)).unwrap();

        let map = encode_net_options(&net);
        assert_eq!(map.get("ssl"), Some(&json!(true)));
        assert_eq!(map.get("trustAll"), Some(&json!(true)));
        assert_eq!(map.len(), 8);
    }
}
