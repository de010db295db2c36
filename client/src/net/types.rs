//! Error type shared by wallet and node calls.
//!
//! ERROR HANDLING
//! ==============
//! Every outbound action reports through [`TxError`]. Callers do not branch
//! on the variant beyond logging it: join/leave failures reopen the username
//! modal, send/react failures are only logged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use events::TxStatusError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxError {
    #[error("wallet `{0}` is not installed")]
    WalletUnavailable(String),
    #[error("wallet rejected the request: {0}")]
    Rejected(String),
    #[error("unexpected response: {0}")]
    BadResponse(String),
    #[error("node request failed: {0}")]
    Http(String),
    #[error("transaction {hash} aborted: {vm_status}")]
    Aborted { hash: String, vm_status: String },
    #[error("timed out waiting for transaction {0}")]
    Timeout(String),
}

impl From<TxStatusError> for TxError {
    fn from(err: TxStatusError) -> Self {
        Self::BadResponse(err.to_string())
    }
}
