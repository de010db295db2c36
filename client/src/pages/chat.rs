//! Chat room page: the only screen.
//!
//! ARCHITECTURE
//! ============
//! The page owns the lifetime of the event stream: it opens on mount and is
//! closed from `on_cleanup`. Wallet detection and auto-connect also run once
//! on mount. Everything else is rendered by components reading context.

use events::ChatConfig;
use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::feed_list::FeedList;
use crate::components::username_modal::UsernameModal;
use crate::components::wallet_bar::WalletBar;
use crate::net::actions::auto_connect;
use crate::state::feed::FeedState;
use crate::state::session::SessionState;
use crate::state::wallet::WalletState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let config = expect_context::<ChatConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();

    #[cfg(feature = "hydrate")]
    {
        let stop = crate::net::event_stream::spawn_event_stream(config.clone(), feed);
        on_cleanup(move || {
            let _ = stop.send(());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = feed;

    auto_connect(config, session, wallet);

    view! {
        <div class="chat-page">
            <WalletBar/>
            <main class="chat-page__body">
                <FeedList/>
            </main>
            <Composer/>
            <UsernameModal/>
        </div>
    }
}
