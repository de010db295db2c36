//! Injected wallet availability and connect progress.
//!
//! The connected address itself lives in `SessionState::account`; this
//! model only tracks what the wallet button needs to render.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    /// The injected wallet object was found on `window`.
    pub available: bool,
    /// A connect/disconnect call is in flight.
    pub busy: bool,
    /// Last wallet error, shown under the button until the next attempt.
    pub last_error: Option<String>,
}

impl WalletState {
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.last_error = None;
        true
    }

    pub fn finish(&mut self, error: Option<String>) {
        self.busy = false;
        self.last_error = error;
    }
}
