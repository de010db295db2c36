//! Shared chat-room event model for the browser client, host and CLI.
//!
//! This crate owns everything that does not need a browser or a runtime:
//! deployment config, the subscription directives sent to the event stream,
//! the inbound event envelope, classification of events into feed entries,
//! the transaction payloads handed to the wallet, and parsing of node
//! responses. Keeping it pure lets both `client` (WASM) and `cli` (tokio)
//! render the same feed from the same frames.

pub mod address;
pub mod config;
pub mod envelope;
pub mod feed;
pub mod node;
pub mod payload;

pub use address::{abbreviate, normalize_address, same_address};
pub use config::{ChatConfig, ConfigError};
pub use envelope::{Event, EventError, EventTag, parse_event, subscription_directive};
pub use feed::{Classifier, Feed, FeedEntry, FeedKind};
pub use node::{TransactionStatus, TxStatusError, ViewRequest};
pub use payload::{ChatAction, EntryFunctionPayload};

/// Move module that defines the chat room entry functions and events.
pub const MODULE_NAME: &str = "chat_room";
