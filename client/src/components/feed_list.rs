//! Scrolling list of chat, reaction, join and leave entries.

use events::{ChatConfig, FeedEntry, FeedKind};
use leptos::prelude::*;

use crate::net::actions::react_to;
use crate::state::feed::FeedState;
use crate::state::session::SessionState;

#[component]
pub fn FeedList() -> impl IntoView {
    let config = expect_context::<ChatConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let list_ref = NodeRef::<leptos::html::Ul>::new();

    Effect::new(move || {
        let _ = feed.with(|f| f.feed.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <ul class="feed" node_ref=list_ref>
            {move || {
                let entries = feed.with(|f| f.feed.entries().to_vec());
                if entries.is_empty() {
                    return view! { <li class="feed__empty">"No messages yet"</li> }.into_any();
                }
                entries
                    .into_iter()
                    .map(|entry| view! { <FeedItem entry=entry config=config.clone() session=session /> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </ul>
    }
}

/// Chat entries are titled with the sender's name and react on click;
/// other kinds show the reaction icon and ignore clicks.
#[component]
fn FeedItem(entry: FeedEntry, config: ChatConfig, session: RwSignal<SessionState>) -> impl IntoView {
    let class = format!("feed__item feed__item--{}", entry.kind.as_str());
    let icon_url = config.asset_url("react.png");
    let target = entry.reaction_target();
    let FeedEntry { kind, sender, username, message, .. } = entry;

    if kind == FeedKind::Chat {
        let on_react = move |_| {
            if let Some(index) = target {
                react_to(config.clone(), session, index);
            }
        };
        view! {
            <li class=format!("{class} feed__item--clickable") title="Click to react" on:click=on_react>
                <span class="feed__author" title=sender>{username}</span>
                <span class="feed__text">{message}</span>
            </li>
        }
        .into_any()
    } else {
        view! {
            <li class=class>
                <img class="feed__icon" src=icon_url alt="" />
                <span class="feed__text">{message}</span>
            </li>
        }
        .into_any()
    }
}
