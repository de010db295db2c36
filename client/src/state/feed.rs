//! Live chat feed and event stream connection status.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use events::{Feed, FeedEntry};

/// Lifecycle of the single event stream connection.
///
/// There is no reconnect: `Closed` and `Failed` are terminal until reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StreamStatus {
    #[default]
    Connecting,
    Open,
    Closed,
    Failed,
}

impl StreamStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Open => "live",
            Self::Closed => "closed",
            Self::Failed => "offline",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Failed)
    }
}

/// Feed rendered by the chat page.
#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub feed: Feed,
    pub status: StreamStatus,
    /// Frames dropped because they could not be classified.
    pub dropped: u64,
}

impl FeedState {
    pub fn append(&mut self, entry: FeedEntry) {
        self.feed.push(entry);
    }

    pub fn note_dropped(&mut self) {
        self.dropped = self.dropped.saturating_add(1);
    }

    /// Record a status change. A terminal status is never left.
    pub fn set_status(&mut self, status: StreamStatus) {
        if self.status.is_terminal() {
            return;
        }
        self.status = status;
    }
}
