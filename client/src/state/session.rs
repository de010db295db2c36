//! Identity/session state for the connected wallet account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the username modal. Transitions never touch the network; they
//! return a [`SessionCommand`] that `net::actions` executes and feeds back
//! as another transition (`username_resolved`, `join_failed`, ...).
//!
//! The modal is visible at start, hidden once a name is resolved or
//! confirmed, and shown again on leave or on any join/leave failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Side effect requested by a session transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Look up an existing display name for this account.
    ResolveUsername { address: String },
    /// Submit the join transaction.
    Join { username: String },
    /// Submit the leave transaction.
    Leave,
}

/// Current account and display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Connected wallet address, if any.
    pub account: Option<String>,
    /// Display name: the modal's input while choosing, the resolved name after.
    pub username: String,
    pub modal_open: bool,
    /// Blocking "invalid username" warning is showing.
    pub invalid_username: bool,
    /// A join succeeded or an existing name was resolved.
    pub joined: bool,
    /// A join transaction is out and has not settled yet.
    pub joining: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            account: None,
            username: String::new(),
            modal_open: true,
            invalid_username: false,
            joined: false,
            joining: false,
        }
    }
}

impl SessionState {
    /// Wallet connected (or switched accounts).
    pub fn account_connected(&mut self, address: String) -> Option<SessionCommand> {
        if self.account.as_deref() == Some(address.as_str()) {
            return None;
        }
        self.account = Some(address.clone());
        self.joined = false;
        self.joining = false;
        Some(SessionCommand::ResolveUsername { address })
    }

    pub fn account_disconnected(&mut self) {
        self.account = None;
        self.joined = false;
        self.joining = false;
    }

    /// Outcome of the username lookup; `None` covers both "no name" and
    /// "lookup failed".
    ///
    /// When the user already confirmed a name before connecting, the join
    /// goes out now instead of prompting again. A lookup that settles while
    /// a join is in flight, or after it succeeded, changes nothing.
    pub fn username_resolved(&mut self, name: Option<String>) -> Option<SessionCommand> {
        if let Some(name) = name {
            self.username = name;
            self.modal_open = false;
            self.joined = true;
            self.joining = false;
            return None;
        }
        if self.joined || self.joining {
            return None;
        }

        let pending = self.username.trim();
        if !self.modal_open && !pending.is_empty() && self.account.is_some() {
            let username = pending.to_owned();
            self.joining = true;
            return Some(SessionCommand::Join { username });
        }
        self.modal_open = true;
        None
    }

    /// Keystroke in the modal's input.
    pub fn set_username_input(&mut self, value: String) {
        self.username = value;
    }

    /// "Enter Chat" pressed.
    ///
    /// A blank name raises the warning and keeps the modal open. Otherwise
    /// the modal closes and, if a wallet is connected, a join is issued.
    pub fn confirm(&mut self) -> Option<SessionCommand> {
        let name = self.username.trim().to_owned();
        if name.is_empty() {
            self.invalid_username = true;
            self.modal_open = true;
            return None;
        }
        self.username.clone_from(&name);
        self.modal_open = false;
        self.invalid_username = false;
        if self.account.is_none() {
            return None;
        }
        self.joining = true;
        Some(SessionCommand::Join { username: name })
    }

    pub fn dismiss_warning(&mut self) {
        self.invalid_username = false;
    }

    pub fn join_succeeded(&mut self) {
        self.joined = true;
        self.joining = false;
    }

    pub fn join_failed(&mut self) {
        self.joined = false;
        self.joining = false;
        self.modal_open = true;
    }

    /// "Leave" pressed: reset identity and prompt again.
    pub fn leave(&mut self) -> Option<SessionCommand> {
        self.username.clear();
        self.joined = false;
        self.joining = false;
        self.modal_open = true;
        if self.account.is_none() {
            return None;
        }
        Some(SessionCommand::Leave)
    }

    pub fn leave_failed(&mut self) {
        self.modal_open = true;
    }

    /// Label for the header.
    pub fn display_name(&self) -> &str {
        if self.modal_open { "" } else { self.username.as_str() }
    }
}
