//! Message input and Send button.

use events::ChatConfig;
use leptos::prelude::*;

use crate::net::actions::send_message;
use crate::state::composer::ComposerState;
use crate::state::session::SessionState;

#[component]
pub fn Composer() -> impl IntoView {
    let config = expect_context::<ChatConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let composer = RwSignal::new(ComposerState::default());

    let do_send = move || send_message(config.clone(), session, composer);
    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        composer.with(|c| !c.sending && !c.input.trim().is_empty()) && session.with(|s| s.account.is_some())
    };

    view! {
        <div class="composer">
            <input
                class="composer__input"
                type="text"
                placeholder="Type your message here..."
                prop:value=move || composer.with(|c| c.input.clone())
                on:input=move |ev| composer.update(|c| c.input = event_target_value(&ev))
                on:keydown=on_keydown
                disabled=move || composer.with(|c| c.sending)
            />
            <button class="btn btn--primary composer__send" on:click=on_click disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
