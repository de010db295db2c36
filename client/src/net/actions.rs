//! Wallet-signed chat actions and the session side effects around them.
//!
//! Components call these with the signals they hold. Each function applies
//! the pure state transition first, then spawns the network work and feeds
//! the result back into state.
//!
//! Client-side (hydrate): wallet + fullnode calls.
//! Server-side (SSR): nothing is spawned; state transitions still apply so
//! the rendered shell matches the first client render.

#![allow(clippy::unused_async)]

use events::{ChatAction, ChatConfig};
use leptos::prelude::*;

use super::types::TxError;
use crate::state::composer::ComposerState;
use crate::state::session::{SessionCommand, SessionState};
use crate::state::wallet::WalletState;

/// Sign and submit `action`, then wait until the node reports it final.
/// Returns the transaction hash.
///
/// # Errors
///
/// Any wallet rejection, transport failure, abort or finality timeout.
pub async fn submit_action(config: &ChatConfig, action: &ChatAction) -> Result<String, TxError> {
    #[cfg(feature = "hydrate")]
    {
        let wallet = super::wallet::InjectedWallet::new(config.wallet.clone());
        let hash = wallet.sign_and_submit(&action.payload(config)).await?;
        leptos::logging::log!("{} submitted: {hash}", action.label());
        super::node::wait_for_transaction(config, &hash).await?;
        Ok(hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
        Err(TxError::WalletUnavailable(config.wallet.clone()))
    }
}

/// Execute a command returned by a [`SessionState`] transition.
pub fn run_session_command(command: Option<SessionCommand>, config: ChatConfig, session: RwSignal<SessionState>) {
    let Some(command) = command else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match command {
            SessionCommand::ResolveUsername { address } => {
                let resolved = match super::node::resolve_username(&config, &address).await {
                    Ok(name) => name,
                    Err(e) => {
                        leptos::logging::warn!("username lookup failed: {e}");
                        None
                    }
                };
                // The account may have changed while the view call was out.
                if session.with_untracked(|s| s.account.as_deref() != Some(address.as_str())) {
                    return;
                }
                let next = session.try_update(|s| s.username_resolved(resolved)).flatten();
                run_session_command(next, config, session);
            }
            SessionCommand::Join { username } => match submit_action(&config, &ChatAction::Join { username }).await {
                Ok(_) => session.update(SessionState::join_succeeded),
                Err(e) => {
                    leptos::logging::warn!("join failed: {e}");
                    session.update(SessionState::join_failed);
                }
            },
            SessionCommand::Leave => {
                if let Err(e) = submit_action(&config, &ChatAction::Leave).await {
                    leptos::logging::warn!("leave failed: {e}");
                    session.update(SessionState::leave_failed);
                }
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (command, config, session);
    }
}

/// "Enter Chat" in the username modal.
pub fn confirm_username(config: ChatConfig, session: RwSignal<SessionState>) {
    let command = session.try_update(SessionState::confirm).flatten();
    run_session_command(command, config, session);
}

/// "Leave" in the header.
pub fn leave_room(config: ChatConfig, session: RwSignal<SessionState>) {
    let command = session.try_update(SessionState::leave).flatten();
    run_session_command(command, config, session);
}

/// Submit the composer's text; the field clears once the transaction
/// settles either way.
pub fn send_message(config: ChatConfig, session: RwSignal<SessionState>, composer: RwSignal<ComposerState>) {
    let has_account = session.with_untracked(|s| s.account.is_some());
    let Some(text) = composer.try_update(|c| c.begin_send(has_account)).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = submit_action(&config, &ChatAction::Send { text }).await {
            leptos::logging::warn!("send failed: {e}");
        }
        composer.update(ComposerState::finish_send);
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, text);
        composer.update(ComposerState::finish_send);
    }
}

/// React to the chat message with on-chain index `message_index`.
pub fn react_to(config: ChatConfig, session: RwSignal<SessionState>, message_index: u64) {
    if session.with_untracked(|s| s.account.is_none()) {
        leptos::logging::warn!("connect a wallet to react");
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = submit_action(&config, &ChatAction::React { message_index }).await {
            leptos::logging::warn!("reaction to #{message_index} failed: {e}");
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, message_index);
    }
}

/// "Connect Wallet" pressed.
pub fn connect_wallet(config: ChatConfig, session: RwSignal<SessionState>, wallet: RwSignal<WalletState>) {
    if !wallet.try_update(WalletState::begin).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let injected = super::wallet::InjectedWallet::new(config.wallet.clone());
        match injected.connect().await {
            Ok(address) => {
                leptos::logging::log!("wallet connected: {address}");
                wallet.update(|w| w.finish(None));
                let command = session.try_update(|s| s.account_connected(address)).flatten();
                run_session_command(command, config, session);
            }
            Err(e) => {
                leptos::logging::warn!("wallet connect failed: {e}");
                wallet.update(|w| w.finish(Some(e.to_string())));
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
        wallet.update(|w| w.finish(None));
    }
}

/// "Disconnect" pressed. The local session forgets the account even if
/// the wallet call fails.
pub fn disconnect_wallet(config: ChatConfig, session: RwSignal<SessionState>, wallet: RwSignal<WalletState>) {
    if !wallet.try_update(WalletState::begin).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let injected = super::wallet::InjectedWallet::new(config.wallet.clone());
        let error = injected.disconnect().await.err().map(|e| e.to_string());
        if let Some(e) = &error {
            leptos::logging::warn!("wallet disconnect failed: {e}");
        }
        session.update(SessionState::account_disconnected);
        wallet.update(|w| w.finish(error));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        session.update(SessionState::account_disconnected);
        wallet.update(|w| w.finish(None));
    }
}

/// On page load: detect the wallet and pick up an account that is
/// already connected.
pub fn auto_connect(config: ChatConfig, session: RwSignal<SessionState>, wallet: RwSignal<WalletState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let injected = super::wallet::InjectedWallet::new(config.wallet.clone());
        let available = injected.is_available();
        wallet.update(|w| w.available = available);
        if !available {
            leptos::logging::warn!("wallet `{}` not found", config.wallet);
            return;
        }
        if !injected.is_connected().await {
            return;
        }
        match injected.account().await {
            Ok(address) => {
                let command = session.try_update(|s| s.account_connected(address)).flatten();
                run_session_command(command, config, session);
            }
            Err(e) => leptos::logging::warn!("wallet account lookup failed: {e}"),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, wallet);
    }
}
