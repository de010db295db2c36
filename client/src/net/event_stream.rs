//! Websocket subscription to the chat room event stream.
//!
//! On open the client sends one `type,add,<tag>` directive per chat event
//! tag, then every inbound text frame is classified and appended to
//! `FeedState`. There is no reconnect: when the socket ends the status goes
//! to `Closed` (clean) or `Failed` (error) and stays there.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! Each appended entry is logged to the console.
//!
//! ERROR HANDLING
//! ==============
//! A malformed or incomplete frame is logged at warn, counted in
//! `FeedState::dropped` and skipped; one bad event never ends the stream.

#[cfg(test)]
#[path = "event_stream_test.rs"]
mod event_stream_test;

#[cfg(any(test, feature = "hydrate"))]
use events::{Classifier, EventError, FeedEntry};

#[cfg(any(test, feature = "hydrate"))]
use crate::state::feed::FeedState;

/// Apply one inbound text frame. Returns `Ok(true)` when an entry was
/// appended and `Ok(false)` for frames the feed does not show.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn apply_frame(classifier: &Classifier, text: &str, state: &mut FeedState) -> Result<bool, EventError> {
    match classifier.classify_frame(text) {
        Ok(Some(entry)) => {
            state.append(entry);
            Ok(true)
        }
        Ok(None) => Ok(false),
        Err(e) => {
            state.note_dropped();
            Err(e)
        }
    }
}

/// Console line for an appended entry.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn entry_log_line(entry: &FeedEntry) -> String {
    let sender = if entry.sender.is_empty() { "-" } else { entry.sender.as_str() };
    match entry.message_index {
        Some(index) => format!("event {} #{index} from {sender}: {}", entry.kind.as_str(), entry.message),
        None => format!("event {} from {sender}: {}", entry.kind.as_str(), entry.message),
    }
}

/// Start the stream task. Dropping or firing the returned sender closes the
/// socket.
#[cfg(feature = "hydrate")]
pub fn spawn_event_stream(
    config: events::ChatConfig,
    feed: leptos::prelude::RwSignal<FeedState>,
) -> futures::channel::oneshot::Sender<()> {
    use crate::state::feed::StreamStatus;
    use leptos::prelude::Update;

    let (stop_tx, stop_rx) = futures::channel::oneshot::channel();
    leptos::task::spawn_local(async move {
        let status = match connect_and_run(&config, feed, stop_rx).await {
            Ok(()) => {
                leptos::logging::log!("event stream closed");
                StreamStatus::Closed
            }
            Err(e) => {
                leptos::logging::warn!("event stream error: {e}");
                StreamStatus::Failed
            }
        };
        feed.update(|f| f.set_status(status));
    });
    stop_tx
}

#[cfg(feature = "hydrate")]
async fn connect_and_run(
    config: &events::ChatConfig,
    feed: leptos::prelude::RwSignal<FeedState>,
    stop: futures::channel::oneshot::Receiver<()>,
) -> Result<(), String> {
    use crate::state::feed::StreamStatus;
    use futures::future::Either;
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, WebSocketError};
    use leptos::prelude::Update;

    let classifier = Classifier::from_config(config);
    let ws = WebSocket::open(&config.stream_url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // The sink waits for the socket to leave CONNECTING before the first send.
    for directive in classifier.subscriptions() {
        ws_write.send(Message::Text(directive)).await.map_err(|e| e.to_string())?;
    }
    leptos::logging::log!("subscribed to {}", config.stream_url);
    feed.update(|f| f.set_status(StreamStatus::Open));

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => dispatch_text(&classifier, &text, feed),
                Ok(Message::Bytes(_)) => {}
                Err(WebSocketError::ConnectionClose(event)) if event.was_clean => return Ok(()),
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok(())
    };

    let result = match futures::future::select(Box::pin(recv_task), stop).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Ok(()),
    };
    let _ = ws_write.close().await;
    result
}

#[cfg(feature = "hydrate")]
fn dispatch_text(classifier: &Classifier, text: &str, feed: leptos::prelude::RwSignal<FeedState>) {
    use leptos::prelude::Update;

    let mut dropped = None;
    let mut appended_line = None;
    feed.maybe_update(|f| match apply_frame(classifier, text, f) {
        Ok(appended) => {
            if appended {
                appended_line = f.feed.entries().last().map(entry_log_line);
            }
            appended
        }
        Err(e) => {
            dropped = Some(e);
            true
        }
    });
    if let Some(line) = appended_line {
        leptos::logging::log!("{line}");
    }
    if let Some(e) = dropped {
        leptos::logging::warn!("dropping event frame: {e}");
    }
}
