//! Networking modules for the event stream, wallet and fullnode.
//!
//! SYSTEM CONTEXT
//! ==============
//! `event_stream` owns the websocket and feeds `FeedState`; `wallet` bridges
//! to the injected browser wallet; `node` talks to the fullnode REST API;
//! `actions` combines wallet + node into "submit and await finality" and runs
//! the commands produced by `SessionState`. `types` holds the shared error.

pub mod actions;
pub mod event_stream;
pub mod node;
pub mod types;
#[cfg(feature = "hydrate")]
pub mod wallet;
