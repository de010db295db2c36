//! Blocking "Select a Username" dialog plus the invalid-name warning.

use events::ChatConfig;
use leptos::prelude::*;

use crate::net::actions::confirm_username;
use crate::state::session::SessionState;

/// Rendered while `SessionState::modal_open` is set. There is no close
/// button: the dialog only goes away once a name is confirmed or resolved.
#[component]
pub fn UsernameModal() -> impl IntoView {
    let config = expect_context::<ChatConfig>();
    let session = expect_context::<RwSignal<SessionState>>();

    let confirm = move || confirm_username(config.clone(), session);
    let on_enter = {
        let confirm = confirm.clone();
        move |_| confirm()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            confirm();
        }
    };
    let on_dismiss = move |_| session.update(SessionState::dismiss_warning);

    view! {
        <Show when=move || session.with(|s| s.modal_open)>
            <div class="dialog-backdrop">
                <div class="dialog dialog--username">
                    <h2>"Select a Username"</h2>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || session.with(|s| s.username.clone())
                        on:input=move |ev| session.update(|s| s.set_username_input(event_target_value(&ev)))
                        on:keydown=on_keydown.clone()
                    />
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_enter.clone()>"Enter Chat"</button>
                    </div>
                </div>
            </div>
        </Show>
        <Show when=move || session.with(|s| s.invalid_username)>
            <div class="dialog-backdrop dialog-backdrop--warning">
                <div class="dialog dialog--warning" role="alertdialog">
                    <h2>"Invalid username"</h2>
                    <p>"Please enter a valid username."</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_dismiss>"OK"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
