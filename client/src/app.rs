//! Root application component with routing and context providers.

use events::ChatConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::chat_config;
use crate::pages::chat::ChatPage;
use crate::state::{feed::FeedState, session::SessionState, wallet::WalletState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the room config and all shared state contexts, mounted under
/// the configured base path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = chat_config();
    let base = config.base_path.clone();
    let stylesheet = config.asset_url("pkg/chatroom.css");

    provide_context(config);
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(FeedState::default()));
    provide_context(RwSignal::new(WalletState::default()));

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text="Chat Room"/>

        <Router base=base>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
