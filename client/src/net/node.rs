//! Fullnode REST calls: username view and transaction finality.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use events::ChatConfig;
#[cfg(any(test, feature = "hydrate"))]
use events::TransactionStatus;

use super::types::TxError;

/// Look up the display name stored for `address` in the configured room.
///
/// `Ok(None)` means the account has no name yet.
///
/// # Errors
///
/// Returns [`TxError::Http`] when the view call fails.
pub async fn resolve_username(config: &ChatConfig, address: &str) -> Result<Option<String>, TxError> {
    #[cfg(feature = "hydrate")]
    {
        use events::ViewRequest;
        use events::node::{parse_username_view, view_url};

        let request = ViewRequest::username(config, address);
        let resp = gloo_net::http::Request::post(&view_url(config))
            .json(&request)
            .map_err(|e| TxError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| TxError::Http(e.to_string()))?;
        if !resp.ok() {
            return Err(TxError::Http(format!("view request failed: {}", resp.status())));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| TxError::Http(e.to_string()))?;
        Ok(parse_username_view(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, address);
        Err(TxError::Http("not available on server".to_owned()))
    }
}

/// Poll the node until `hash` is committed or aborted.
///
/// A 404 means the node has not seen the transaction yet and counts as
/// pending.
///
/// # Errors
///
/// Returns [`TxError::Aborted`] for a failed transaction,
/// [`TxError::Timeout`] when it stays pending too long, and
/// [`TxError::Http`] for transport failures.
pub async fn wait_for_transaction(config: &ChatConfig, hash: &str) -> Result<(), TxError> {
    #[cfg(feature = "hydrate")]
    {
        use events::node::{FINALITY_POLL_INTERVAL_MS, FINALITY_TIMEOUT_MS, parse_transaction_status, transaction_url};

        let url = transaction_url(config, hash);
        let mut waited_ms: u64 = 0;
        loop {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| TxError::Http(e.to_string()))?;
            let status = if resp.status() == 404 {
                TransactionStatus::Pending
            } else if resp.ok() {
                let body: serde_json::Value = resp.json().await.map_err(|e| TxError::Http(e.to_string()))?;
                parse_transaction_status(&body)
            } else {
                return Err(TxError::Http(format!("transaction lookup failed: {}", resp.status())));
            };

            if let Some(outcome) = finality_outcome(hash, status) {
                return outcome;
            }
            if waited_ms >= FINALITY_TIMEOUT_MS {
                return Err(TxError::Timeout(hash.to_owned()));
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(FINALITY_POLL_INTERVAL_MS)).await;
            waited_ms += FINALITY_POLL_INTERVAL_MS;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, hash);
        Err(TxError::Http("not available on server".to_owned()))
    }
}

/// `None` while pending; the final result once committed or aborted.
#[cfg(any(test, feature = "hydrate"))]
fn finality_outcome(hash: &str, status: TransactionStatus) -> Option<Result<(), TxError>> {
    if !status.is_final() {
        return None;
    }
    match status {
        TransactionStatus::Aborted { vm_status } => Some(Err(TxError::Aborted { hash: hash.to_owned(), vm_status })),
        _ => Some(Ok(())),
    }
}
