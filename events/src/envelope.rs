//! Event stream wire format.
//!
//! Outbound: plain-text subscription directives, one per event tag.
//! Inbound: one JSON object per text frame. Only `type_` and `data` are
//! read by the feed; the indexer metadata is parsed leniently and otherwise
//! ignored.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::MODULE_NAME;
use crate::address::same_address;

/// Error raised while turning an inbound frame into a feed entry.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The frame text is not a JSON event object.
    #[error("invalid event frame: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// A recognized event lacks a payload field the feed needs.
    #[error("{tag} payload is missing `{field}`")]
    MissingField { tag: &'static str, field: &'static str },
}

/// The four chat room events the client subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTag {
    JoinedChatRoom,
    SentMessage,
    SentReaction,
    LeftChatRoom,
}

impl EventTag {
    /// Subscription order used when the socket opens.
    pub const ALL: [Self; 4] = [Self::JoinedChatRoom, Self::SentMessage, Self::SentReaction, Self::LeftChatRoom];

    /// Move struct name of the event.
    #[must_use]
    pub fn struct_name(self) -> &'static str {
        match self {
            Self::JoinedChatRoom => "JoinedChatRoom",
            Self::SentMessage => "SentMessage",
            Self::SentReaction => "SentReaction",
            Self::LeftChatRoom => "LeftChatRoom",
        }
    }

    /// Fully-qualified tag, e.g. `0xabc::chat_room::SentMessage`.
    #[must_use]
    pub fn qualified(self, contract_addr: &str) -> String {
        format!("{contract_addr}::{MODULE_NAME}::{}", self.struct_name())
    }

    /// Match an inbound `type_` against the tags published by `contract_addr`.
    ///
    /// Address spelling is normalized; module and struct names must match
    /// exactly. Tags from other modules or contracts yield `None`.
    #[must_use]
    pub fn from_qualified(tag: &str, contract_addr: &str) -> Option<Self> {
        let mut parts = tag.splitn(3, "::");
        let addr = parts.next()?;
        let module = parts.next()?;
        let name = parts.next()?;
        if module != MODULE_NAME || !same_address(addr, contract_addr) {
            return None;
        }
        Self::ALL.into_iter().find(|t| t.struct_name() == name)
    }
}

/// Text frame asking the stream to start forwarding events of `tag`.
#[must_use]
pub fn subscription_directive(tag: &str) -> String {
    format!("type,add,{tag}")
}

/// One directive per [`EventTag`], in subscription order.
#[must_use]
pub fn subscription_directives(contract_addr: &str) -> Vec<String> {
    EventTag::ALL
        .iter()
        .map(|tag| subscription_directive(&tag.qualified(contract_addr)))
        .collect()
}

/// Inbound event as produced by the indexer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub sequence_number: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub creation_number: Option<u64>,
    #[serde(default)]
    pub account_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub transaction_version: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub transaction_block_height: Option<u64>,
    /// Fully-qualified event tag.
    pub type_: String,
    /// Tag-specific payload.
    #[serde(default)]
    pub data: Value,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub event_index: Option<u64>,
    #[serde(default)]
    pub indexed_type: Option<String>,
}

/// Parse one inbound text frame.
///
/// # Errors
///
/// Returns [`EventError::InvalidJson`] when the text is not an event object.
pub fn parse_event(text: &str) -> Result<Event, EventError> {
    Ok(serde_json::from_str(text)?)
}

/// Move `u64` values show up as numbers or decimal strings.
pub(crate) fn value_as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_u64))
}
