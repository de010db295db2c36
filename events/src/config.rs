//! Chat room deployment settings.
//!
//! The same keys are read from three places: compile-time env for the WASM
//! bundle, process env for the host, and CLI flags (with env fallback). All
//! of them funnel through [`ChatConfig::from_lookup`] so validation and
//! defaults stay identical.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::MODULE_NAME;
use crate::address::is_hex_address;

pub const CONTRACT_ADDR_KEY: &str = "CHAT_CONTRACT_ADDR";
pub const ROOM_ADDR_KEY: &str = "CHAT_ROOM_ADDR";
pub const STREAM_URL_KEY: &str = "CHAT_STREAM_URL";
pub const NODE_URL_KEY: &str = "CHAT_NODE_URL";
pub const BASE_PATH_KEY: &str = "CHAT_BASE_PATH";
pub const WALLET_KEY: &str = "CHAT_WALLET";

pub const DEFAULT_CONTRACT_ADDR: &str = "0xf7b036b6eb1dfadd1255f3aba0398b146e16f34aa510ee07b58439d0e80be211";
pub const DEFAULT_ROOM_ADDR: &str = "0x5d7cc9fdb838a482a7f6a781fa4baee72f7c434cf1242300dc0e8e2d700e192e";
pub const DEFAULT_STREAM_URL: &str = "ws://localhost:12345/stream";
pub const DEFAULT_NODE_URL: &str = "https://fullnode.devnet.aptoslabs.com/v1";
pub const DEFAULT_WALLET: &str = "aptos";

/// Error returned by [`ChatConfig::from_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a 0x-prefixed hex address, got `{value}`")]
    InvalidAddress { key: &'static str, value: String },
    #[error("{key} must start with ws:// or wss://, got `{value}`")]
    InvalidStreamUrl { key: &'static str, value: String },
    #[error("{key} must start with http:// or https://, got `{value}`")]
    InvalidNodeUrl { key: &'static str, value: String },
    #[error("{key} must be empty or start with '/', got `{value}`")]
    InvalidBasePath { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Where the chat room lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Account that published the `chat_room` module.
    pub contract_addr: String,
    /// Room object every action is scoped to.
    pub room_addr: String,
    /// Event stream websocket endpoint.
    pub stream_url: String,
    /// Fullnode REST base, including the `/v1` segment.
    pub node_url: String,
    /// Deployment prefix for static assets; empty for the site root.
    pub base_path: String,
    /// Name of the injected wallet object on `window`.
    pub wallet: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            contract_addr: DEFAULT_CONTRACT_ADDR.to_owned(),
            room_addr: DEFAULT_ROOM_ADDR.to_owned(),
            stream_url: DEFAULT_STREAM_URL.to_owned(),
            node_url: DEFAULT_NODE_URL.to_owned(),
            base_path: String::new(),
            wallet: DEFAULT_WALLET.to_owned(),
        }
    }
}

impl ChatConfig {
    /// Build config from a key lookup. Missing or blank keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a supplied value is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let contract_addr = get(CONTRACT_ADDR_KEY).unwrap_or_else(|| DEFAULT_CONTRACT_ADDR.to_owned());
        let room_addr = get(ROOM_ADDR_KEY).unwrap_or_else(|| DEFAULT_ROOM_ADDR.to_owned());
        let stream_url = get(STREAM_URL_KEY).unwrap_or_else(|| DEFAULT_STREAM_URL.to_owned());
        let node_url = get(NODE_URL_KEY)
            .unwrap_or_else(|| DEFAULT_NODE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let base_path = get(BASE_PATH_KEY).unwrap_or_default();
        let wallet = get(WALLET_KEY).unwrap_or_else(|| DEFAULT_WALLET.to_owned());

        let config = Self {
            contract_addr,
            room_addr,
            stream_url,
            node_url,
            base_path: normalize_base_path(&base_path)?,
            wallet,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Check every field. Called by [`Self::from_lookup`]; public so
    /// hand-built configs (CLI overrides) get the same checks.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_hex_address(&self.contract_addr) {
            return Err(ConfigError::InvalidAddress { key: CONTRACT_ADDR_KEY, value: self.contract_addr.clone() });
        }
        if !is_hex_address(&self.room_addr) {
            return Err(ConfigError::InvalidAddress { key: ROOM_ADDR_KEY, value: self.room_addr.clone() });
        }
        if !(self.stream_url.starts_with("ws://") || self.stream_url.starts_with("wss://")) {
            return Err(ConfigError::InvalidStreamUrl { key: STREAM_URL_KEY, value: self.stream_url.clone() });
        }
        if !(self.node_url.starts_with("http://") || self.node_url.starts_with("https://")) {
            return Err(ConfigError::InvalidNodeUrl { key: NODE_URL_KEY, value: self.node_url.clone() });
        }
        if self.wallet.is_empty() {
            return Err(ConfigError::Empty { key: WALLET_KEY });
        }
        Ok(())
    }

    /// Fully-qualified module id, e.g. `0xf7b0…::chat_room`.
    #[must_use]
    pub fn module_id(&self) -> String {
        format!("{}::{MODULE_NAME}", self.contract_addr)
    }

    /// Fully-qualified name of a function or struct in the chat module.
    #[must_use]
    pub fn qualified(&self, name: &str) -> String {
        format!("{}::{name}", self.module_id())
    }

    /// URL of a static asset under the deployment base path.
    #[must_use]
    pub fn asset_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_path, name.trim_start_matches('/'))
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBasePath { key: BASE_PATH_KEY, value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}
