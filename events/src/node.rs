//! Fullnode REST shapes: view calls and transaction lookup.
//!
//! Only request building and response parsing live here; the HTTP clients
//! are `gloo-net` in the browser and `reqwest` in the CLI.

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use serde::Serialize;
use serde_json::Value;

use crate::config::ChatConfig;
use crate::envelope::value_as_u64;

/// View function that maps `(room, address)` to a display name.
pub const USERNAME_VIEW_FUNCTION: &str = "get_username";

/// Delay between finality polls.
pub const FINALITY_POLL_INTERVAL_MS: u64 = 1_000;
/// Give up waiting for finality after this long.
pub const FINALITY_TIMEOUT_MS: u64 = 20_000;

/// Error returned when a node or wallet response has an unexpected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxStatusError {
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

/// Body of `POST /view`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewRequest {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl ViewRequest {
    /// Username lookup for `address` in the configured room.
    #[must_use]
    pub fn username(config: &ChatConfig, address: &str) -> Self {
        Self {
            function: config.qualified(USERNAME_VIEW_FUNCTION),
            type_arguments: Vec::new(),
            arguments: vec![config.room_addr.clone(), address.to_owned()],
        }
    }
}

/// `POST` target for view calls.
#[must_use]
pub fn view_url(config: &ChatConfig) -> String {
    format!("{}/view", config.node_url)
}

/// `GET` target for a transaction by hash.
#[must_use]
pub fn transaction_url(config: &ChatConfig, hash: &str) -> String {
    format!("{}/transactions/by_hash/{hash}", config.node_url)
}

/// Extract the display name from a view response.
///
/// The view returns a one-element array. An empty or blank name means the
/// account has not joined yet.
#[must_use]
pub fn parse_username_view(response: &Value) -> Option<String> {
    response
        .as_array()
        .and_then(|values| values.first())
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

/// Hash of a submitted transaction as returned by the wallet.
///
/// # Errors
///
/// Returns [`TxStatusError::MissingField`] when there is no `hash` string.
pub fn parse_submit_hash(response: &Value) -> Result<String, TxStatusError> {
    response
        .get("hash")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(TxStatusError::MissingField("hash"))
}

/// Account address as returned by the wallet's `connect`/`account`.
///
/// # Errors
///
/// Returns [`TxStatusError::MissingField`] when there is no `address` string.
pub fn parse_account_address(response: &Value) -> Result<String, TxStatusError> {
    response
        .get("address")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(TxStatusError::MissingField("address"))
}

/// Where a submitted transaction stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Not yet committed, or not yet known to this node.
    Pending,
    Committed { version: Option<u64> },
    Aborted { vm_status: String },
}

impl TransactionStatus {
    #[must_use]
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Classify a `GET /transactions/by_hash` body.
#[must_use]
pub fn parse_transaction_status(body: &Value) -> TransactionStatus {
    let kind = body.get("type").and_then(Value::as_str).unwrap_or("pending_transaction");
    if kind == "pending_transaction" {
        return TransactionStatus::Pending;
    }
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if success {
        TransactionStatus::Committed { version: body.get("version").and_then(value_as_u64) }
    } else {
        TransactionStatus::Aborted {
            vm_status: body
                .get("vm_status")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_owned(),
        }
    }
}
