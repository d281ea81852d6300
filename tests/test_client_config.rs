//! Base client configuration and master descriptor.

use maplit::btreeset;

use tubemq_client::constants::{DEFAULT_RPC_TIMEOUT_MS, MAX_RPC_TIMEOUT_MS, MIN_RPC_TIMEOUT_MS};
use tubemq_client::{ClientConfig, ClientError, ConsumerConfig, MasterInfo, NodeAddr};

use crate::utils::logging::init_test_logger;
use crate::utils::rand::rand_blank;
use crate::utils::{LOCAL_HOST, MASTER_ADDR};

mod utils;

#[test]
fn test_master_info_parsing() {
    init_test_logger();

    let info = MasterInfo::new("b.example:8715 , a.example:8715,,b.example:8715").unwrap();
    let nodes = info.nodes().map(NodeAddr::to_string).collect::<std::collections::BTreeSet<_>>();
    assert_eq!(
        nodes,
        btreeset! {"a.example:8715".to_string(), "b.example:8715".to_string()}
    );
    assert_eq!(info.first_node().host(), "b.example");
    assert_eq!(info.cluster_str(), "a.example:8715,b.example:8715");
}

#[test]
fn test_master_info_rejects_malformed() {
    init_test_logger();

    for input in ["no-port", "host:abc", "host:-1", "host:65536", "host:0", ":8715"] {
        match MasterInfo::new(input) {
            Err(ClientError::InvalidArgument(_)) => (),
            other => panic!("{:?} gave {:?}", input, other),
        }
    }
    for _ in 0..20 {
        assert!(MasterInfo::new(&rand_blank()).is_err());
    }
}

#[test]
fn test_local_host_rejects_blank() {
    init_test_logger();

    for _ in 0..20 {
        let host = rand_blank();
        assert!(ClientConfig::new(&host, MASTER_ADDR).is_err());
        assert!(ConsumerConfig::new(&host, MASTER_ADDR, "group").is_err());
    }
}

#[test]
fn test_rpc_timeout_bounds() {
    init_test_logger();

    let mut config = ClientConfig::new(LOCAL_HOST, MASTER_ADDR).unwrap();
    assert_eq!(config.rpc_timeout_ms(), DEFAULT_RPC_TIMEOUT_MS);
    for (input, expected) in [
        (i64::MIN, MIN_RPC_TIMEOUT_MS),
        (0, MIN_RPC_TIMEOUT_MS),
        (MIN_RPC_TIMEOUT_MS, MIN_RPC_TIMEOUT_MS),
        (30_000, 30_000),
        (MAX_RPC_TIMEOUT_MS, MAX_RPC_TIMEOUT_MS),
        (i64::MAX, MAX_RPC_TIMEOUT_MS),
    ] {
        config.set_rpc_timeout_ms(input);
        assert_eq!(config.rpc_timeout_ms(), expected);
    }
}

#[test]
fn test_client_config_through_consumer() {
    init_test_logger();

    let mut config = ConsumerConfig::new(LOCAL_HOST, MASTER_ADDR, "group").unwrap();
    config
        .client_config_mut()
        .set_tls_enable(true)
        .set_max_register_retry_times(9);
    config
        .client_config_mut()
        .set_user_authentication(true, "reader")
        .unwrap();

    let client = config.client_config();
    assert!(client.tls_enable());
    assert_eq!(client.max_register_retry_times(), 9);
    assert_eq!(client.user_name(), "reader");

    let text = config.to_diagnostic_string();
    assert!(text.ends_with(&format!("\"ClientConfig\":{}}}", client.to_json_string())));
}
