//! Message input for the chat composer.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Text field contents plus an in-flight marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub input: String,
    pub sending: bool,
}

impl ComposerState {
    /// Start a send; returns the text to submit.
    ///
    /// Nothing is sent without a wallet account or with a blank field. The
    /// field keeps its contents until [`Self::finish_send`].
    pub fn begin_send(&mut self, has_account: bool) -> Option<String> {
        if !has_account || self.input.trim().is_empty() {
            return None;
        }
        self.sending = true;
        Some(self.input.clone())
    }

    /// The send transaction settled, successfully or not. The field is
    /// cleared either way.
    pub fn finish_send(&mut self) {
        self.input.clear();
        self.sending = false;
    }
}
