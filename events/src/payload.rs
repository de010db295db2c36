//! Entry-function payloads for the four chat room transactions.
//!
//! The wallet takes the node's JSON payload shape and signs it; positional
//! arguments follow the Move signatures, with `u64` values as decimal strings.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ChatConfig;

/// `type` discriminator of entry-function payloads.
pub const ENTRY_FUNCTION_PAYLOAD: &str = "entry_function_payload";

/// A user-initiated chat room action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Join { username: String },
    Leave,
    Send { text: String },
    React { message_index: u64 },
}

impl ChatAction {
    /// Entry function in the chat module this action calls.
    #[must_use]
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join_chat_room",
            Self::Leave => "leave_chat_room",
            Self::Send { .. } => "send_chat",
            Self::React { .. } => "react_to_message",
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Leave => "leave",
            Self::Send { .. } => "send",
            Self::React { .. } => "react",
        }
    }

    /// Build the payload scoped to the configured room.
    #[must_use]
    pub fn payload(&self, config: &ChatConfig) -> EntryFunctionPayload {
        let room = Value::String(config.room_addr.clone());
        let arguments = match self {
            Self::Join { username } => vec![room, Value::String(username.clone())],
            Self::Leave => vec![room],
            Self::Send { text } => vec![room, Value::String(text.clone())],
            Self::React { message_index } => vec![room, Value::String(message_index.to_string())],
        };
        EntryFunctionPayload::new(config.qualified(self.function_name()), arguments)
    }
}

/// Transaction payload in the node's JSON encoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

impl EntryFunctionPayload {
    #[must_use]
    pub fn new(function: String, arguments: Vec<Value>) -> Self {
        Self {
            kind: ENTRY_FUNCTION_PAYLOAD.to_owned(),
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }
}
