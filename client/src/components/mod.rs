//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `ChatConfig` and the state signals from Leptos context
//! and hand user input to `net::actions`.

pub mod composer;
pub mod feed_list;
pub mod username_modal;
pub mod wallet_bar;
