use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_is_set() {
    let cfg = ChatConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ChatConfig::default());
    assert_eq!(cfg.contract_addr, DEFAULT_CONTRACT_ADDR);
    assert_eq!(cfg.room_addr, DEFAULT_ROOM_ADDR);
    assert_eq!(cfg.stream_url, DEFAULT_STREAM_URL);
    assert_eq!(cfg.node_url, DEFAULT_NODE_URL);
    assert_eq!(cfg.base_path, "");
    assert_eq!(cfg.wallet, "aptos");
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ChatConfig::from_lookup(lookup_from(&[(ROOM_ADDR_KEY, "   "), (WALLET_KEY, "")])).unwrap();
    assert_eq!(cfg.room_addr, DEFAULT_ROOM_ADDR);
    assert_eq!(cfg.wallet, DEFAULT_WALLET);
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = ChatConfig::from_lookup(lookup_from(&[
        (CONTRACT_ADDR_KEY, "0xabc"),
        (ROOM_ADDR_KEY, "0xdef"),
        (STREAM_URL_KEY, "wss://stream.example/stream"),
        (NODE_URL_KEY, "http://127.0.0.1:8080/v1/"),
        (BASE_PATH_KEY, "/chat/"),
        (WALLET_KEY, "petra"),
    ]))
    .unwrap();
    assert_eq!(cfg.contract_addr, "0xabc");
    assert_eq!(cfg.room_addr, "0xdef");
    assert_eq!(cfg.stream_url, "wss://stream.example/stream");
    assert_eq!(cfg.node_url, "http://127.0.0.1:8080/v1");
    assert_eq!(cfg.base_path, "/chat");
    assert_eq!(cfg.wallet, "petra");
}

#[test]
fn from_lookup_rejects_non_hex_contract() {
    let err = ChatConfig::from_lookup(lookup_from(&[(CONTRACT_ADDR_KEY, "chat")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAddress { key: CONTRACT_ADDR_KEY, value: "chat".to_owned() });
}

#[test]
fn from_lookup_rejects_http_stream_url() {
    let err = ChatConfig::from_lookup(lookup_from(&[(STREAM_URL_KEY, "http://localhost:12345/stream")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStreamUrl { .. }));
}

#[test]
fn from_lookup_rejects_ws_node_url() {
    let err = ChatConfig::from_lookup(lookup_from(&[(NODE_URL_KEY, "ws://node")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNodeUrl { .. }));
}

#[test]
fn from_lookup_rejects_relative_base_path() {
    let err = ChatConfig::from_lookup(lookup_from(&[(BASE_PATH_KEY, "chat")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBasePath { key: BASE_PATH_KEY, value: "chat".to_owned() });
}

#[test]
fn root_base_path_collapses_to_empty() {
    let cfg = ChatConfig::from_lookup(lookup_from(&[(BASE_PATH_KEY, "/")])).unwrap();
    assert_eq!(cfg.base_path, "");
}

#[test]
fn validate_rejects_empty_wallet_name() {
    let cfg = ChatConfig { wallet: String::new(), ..ChatConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::Empty { key: WALLET_KEY }));
}

#[test]
fn qualified_names_live_under_the_chat_module() {
    let cfg = ChatConfig { contract_addr: "0xabc".to_owned(), ..ChatConfig::default() };
    assert_eq!(cfg.module_id(), "0xabc::chat_room");
    assert_eq!(cfg.qualified("send_chat"), "0xabc::chat_room::send_chat");
}

#[test]
fn asset_url_respects_base_path() {
    let root = ChatConfig::default();
    assert_eq!(root.asset_url("react.png"), "/react.png");

    let nested = ChatConfig { base_path: "/chat".to_owned(), ..ChatConfig::default() };
    assert_eq!(nested.asset_url("/react.png"), "/chat/react.png");
}

#[test]
fn config_error_messages_name_the_key() {
    let err = ConfigError::InvalidAddress { key: ROOM_ADDR_KEY, value: "x".to_owned() };
    assert_eq!(err.to_string(), "CHAT_ROOM_ADDR must be a 0x-prefixed hex address, got `x`");
}
