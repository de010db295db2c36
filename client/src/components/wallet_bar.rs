//! Header bar: room title, display name, stream status and wallet controls.

use events::{ChatConfig, abbreviate};
use leptos::prelude::*;

use crate::net::actions::{connect_wallet, disconnect_wallet, leave_room};
use crate::state::feed::FeedState;
use crate::state::session::SessionState;
use crate::state::wallet::WalletState;

/// Shows "Connect Wallet" until an account is known, then the short
/// address with Leave and Disconnect.
#[component]
pub fn WalletBar() -> impl IntoView {
    let config = expect_context::<ChatConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();

    let on_connect = {
        let config = config.clone();
        move |_| connect_wallet(config.clone(), session, wallet)
    };
    let on_disconnect = {
        let config = config.clone();
        move |_| disconnect_wallet(config.clone(), session, wallet)
    };
    let on_leave = move |_| leave_room(config.clone(), session);

    let username = move || session.with(|s| s.display_name().to_owned());
    let status = move || feed.with(|f| f.status);
    let busy = move || wallet.with(|w| w.busy);

    view! {
        <header class="wallet-bar">
            <h1 class="wallet-bar__title">"Chat Room"</h1>
            <span class="wallet-bar__username">"Username: " {username}</span>
            <span class=move || format!("wallet-bar__status wallet-bar__status--{}", status().label())>
                {move || status().label()}
            </span>
            <div class="wallet-bar__wallet">
                {move || match session.with(|s| s.account.clone()) {
                    Some(address) => {
                        let on_leave = on_leave.clone();
                        let on_disconnect = on_disconnect.clone();
                        view! {
                            <span class="wallet-bar__address" title=address.clone()>{abbreviate(&address)}</span>
                            <button class="btn" on:click=on_leave>"Leave"</button>
                            <button class="btn" on:click=on_disconnect disabled=busy>"Disconnect"</button>
                        }
                            .into_any()
                    }
                    None => {
                        let on_connect = on_connect.clone();
                        view! {
                            <button class="btn btn--primary" on:click=on_connect disabled=busy>
                                "Connect Wallet"
                            </button>
                        }
                            .into_any()
                    }
                }}
                {move || wallet.with(|w| w.last_error.clone()).map(|e| view! { <span class="wallet-bar__error">{e}</span> })}
            </div>
        </header>
    }
}
