//! Classification of inbound events into chat feed entries.
//!
//! DESIGN
//! ======
//! The feed is an append-only list in arrival order. Each recognized event
//! contributes exactly one entry; unrecognized tags and join/leave events for
//! other rooms contribute nothing. Entries are never edited or removed, so a
//! reaction is its own entry rather than a mutation of the message it targets.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::same_address;
use crate::config::ChatConfig;
use crate::envelope::{Event, EventError, EventTag, parse_event, subscription_directives, value_as_u64};

/// Kind of a rendered feed entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Chat,
    React,
    Join,
    Leave,
}

impl FeedKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::React => "react",
            Self::Join => "join",
            Self::Leave => "leave",
        }
    }
}

/// One row of the chat feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub kind: FeedKind,
    /// Account that emitted the event; empty when the payload omits it.
    pub sender: String,
    pub username: String,
    /// Rendered text. Verbatim for chat, synthesized for everything else.
    pub message: String,
    /// On-chain index of a chat message; `None` for every other kind.
    pub message_index: Option<u64>,
}

impl FeedEntry {
    /// Index a click on this entry should react to.
    ///
    /// Only chat messages can be reacted to.
    #[must_use]
    pub fn reaction_target(&self) -> Option<u64> {
        match self.kind {
            FeedKind::Chat => self.message_index,
            FeedKind::React | FeedKind::Join | FeedKind::Leave => None,
        }
    }
}

/// Ordered, append-only feed for one socket connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feed {
    entries: Vec<FeedEntry>,
}

impl Feed {
    pub fn push(&mut self, entry: FeedEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedEntry> {
        self.entries.iter()
    }
}

/// Turns events published by one contract into entries for one room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classifier {
    contract_addr: String,
    room_addr: String,
}

impl Classifier {
    #[must_use]
    pub fn new(contract_addr: impl Into<String>, room_addr: impl Into<String>) -> Self {
        Self { contract_addr: contract_addr.into(), room_addr: room_addr.into() }
    }

    #[must_use]
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.contract_addr.clone(), config.room_addr.clone())
    }

    /// Directives to send once the socket opens.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<String> {
        subscription_directives(&self.contract_addr)
    }

    /// Parse a text frame and classify it.
    ///
    /// # Errors
    ///
    /// See [`Self::classify`]; additionally fails on non-JSON text.
    pub fn classify_frame(&self, text: &str) -> Result<Option<FeedEntry>, EventError> {
        let event = parse_event(text)?;
        self.classify(&event)
    }

    /// Map an event to a feed entry.
    ///
    /// Returns `Ok(None)` for tags outside the chat module and for join/leave
    /// events that name a different room.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingField`] when a recognized event lacks a
    /// field the entry is built from.
    pub fn classify(&self, event: &Event) -> Result<Option<FeedEntry>, EventError> {
        let Some(tag) = EventTag::from_qualified(&event.type_, &self.contract_addr) else {
            return Ok(None);
        };
        let data = &event.data;
        let name = tag.struct_name();

        let entry = match tag {
            EventTag::SentMessage => FeedEntry {
                kind: FeedKind::Chat,
                sender: require_str(data, name, "sender")?,
                username: require_str(data, name, "username")?,
                message: require_str(data, name, "message")?,
                message_index: Some(
                    pick_u64(data, &["message_index"]).ok_or(EventError::MissingField {
                        tag: name,
                        field: "message_index",
                    })?,
                ),
            },
            EventTag::SentReaction => {
                let username = require_str(data, name, "username")?;
                let message = require_str(data, name, "message")?;
                FeedEntry {
                    kind: FeedKind::React,
                    sender: optional_sender(data),
                    message: format!("{username} reacted to {message}"),
                    username,
                    message_index: None,
                }
            }
            EventTag::JoinedChatRoom | EventTag::LeftChatRoom => {
                if !self.is_this_room(data) {
                    return Ok(None);
                }
                let (kind, verb) = if tag == EventTag::JoinedChatRoom {
                    (FeedKind::Join, "joined")
                } else {
                    (FeedKind::Leave, "left")
                };
                let username = require_str(data, name, "username")?;
                FeedEntry {
                    kind,
                    sender: optional_sender(data),
                    message: format!("{username} has {verb} the chat room!"),
                    username,
                    message_index: None,
                }
            }
        };
        Ok(Some(entry))
    }

    /// Events without a room identifier are treated as belonging here.
    fn is_this_room(&self, data: &Value) -> bool {
        pick_str(data, &["room_addr", "room"]).map_or(true, |room| same_address(room, &self.room_addr))
    }
}

pub(crate) fn pick_str<'a>(payload: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| payload.get(*key).and_then(Value::as_str))
}

pub(crate) fn pick_u64(payload: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| payload.get(*key).and_then(value_as_u64))
}

fn require_str(payload: &Value, tag: &'static str, field: &'static str) -> Result<String, EventError> {
    pick_str(payload, &[field])
        .map(str::to_owned)
        .ok_or(EventError::MissingField { tag, field })
}

fn optional_sender(payload: &Value) -> String {
    pick_str(payload, &["sender", "user"]).unwrap_or_default().to_owned()
}
