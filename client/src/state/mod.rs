//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `feed`, `wallet`, `composer`) so
//! components depend on small focused models. Every model is a plain struct
//! with pure transitions; components hold them in `RwSignal`s and run the
//! side effects the transitions ask for.

pub mod composer;
pub mod feed;
pub mod session;
pub mod wallet;
