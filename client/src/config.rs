//! Build-time chat room config for the browser bundle.
//!
//! The WASM bundle has no process environment, so the `CHAT_*` keys are
//! baked in by `option_env!` when `cargo leptos build` runs. A malformed
//! value falls back to the defaults and logs why.

use events::ChatConfig;
use events::config::{BASE_PATH_KEY, CONTRACT_ADDR_KEY, NODE_URL_KEY, ROOM_ADDR_KEY, STREAM_URL_KEY, WALLET_KEY};

/// Look up a key among the values captured at compile time.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        CONTRACT_ADDR_KEY => option_env!("CHAT_CONTRACT_ADDR"),
        ROOM_ADDR_KEY => option_env!("CHAT_ROOM_ADDR"),
        STREAM_URL_KEY => option_env!("CHAT_STREAM_URL"),
        NODE_URL_KEY => option_env!("CHAT_NODE_URL"),
        BASE_PATH_KEY => option_env!("CHAT_BASE_PATH"),
        WALLET_KEY => option_env!("CHAT_WALLET"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Config the app runs with.
pub fn chat_config() -> ChatConfig {
    match ChatConfig::from_lookup(build_env) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("invalid build config, using defaults: {e}");
            ChatConfig::default()
        }
    }
}
