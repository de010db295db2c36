use super::*;

fn connected(address: &str) -> SessionState {
    let mut state = SessionState::default();
    let cmd = state.account_connected(address.to_owned());
    assert_eq!(cmd, Some(SessionCommand::ResolveUsername { address: address.to_owned() }));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_with_modal_open_and_no_account() {
    let state = SessionState::default();
    assert!(state.modal_open);
    assert!(!state.invalid_username);
    assert!(!state.joined);
    assert_eq!(state.account, None);
    assert_eq!(state.username, "");
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolved_name_hides_modal_without_join() {
    let mut state = connected("0xa");
    let cmd = state.username_resolved(Some("alice".to_owned()));
    assert_eq!(cmd, None);
    assert!(!state.modal_open);
    assert!(state.joined);
    assert_eq!(state.display_name(), "alice");
}

#[test]
fn missing_name_keeps_prompting() {
    let mut state = connected("0xa");
    assert_eq!(state.username_resolved(None), None);
    assert!(state.modal_open);
    assert!(!state.joined);
}

#[test]
fn reconnecting_same_account_does_not_resolve_again() {
    let mut state = connected("0xa");
    assert_eq!(state.account_connected("0xa".to_owned()), None);
}

#[test]
fn switching_accounts_resolves_the_new_one() {
    let mut state = connected("0xa");
    state.username_resolved(Some("alice".to_owned()));
    let cmd = state.account_connected("0xb".to_owned());
    assert_eq!(cmd, Some(SessionCommand::ResolveUsername { address: "0xb".to_owned() }));
    assert!(!state.joined);
}

#[test]
fn name_confirmed_before_connecting_joins_after_failed_lookup() {
    let mut state = SessionState::default();
    state.set_username_input("alice".to_owned());
    assert_eq!(state.confirm(), None);
    assert!(!state.modal_open);

    state.account_connected("0xa".to_owned());
    let cmd = state.username_resolved(None);
    assert_eq!(cmd, Some(SessionCommand::Join { username: "alice".to_owned() }));
}

// =============================================================
// Confirmation
// =============================================================

#[test]
fn confirm_with_empty_name_warns_and_issues_no_join() {
    let mut state = connected("0xa");
    state.username_resolved(None);
    assert_eq!(state.confirm(), None);
    assert!(state.modal_open);
    assert!(state.invalid_username);
}

#[test]
fn confirm_with_whitespace_name_warns_and_issues_no_join() {
    let mut state = connected("0xa");
    state.username_resolved(None);
    state.set_username_input("   \t".to_owned());
    assert_eq!(state.confirm(), None);
    assert!(state.modal_open);
    assert!(state.invalid_username);

    state.dismiss_warning();
    assert!(!state.invalid_username);
    assert!(state.modal_open);
}

#[test]
fn confirm_with_name_closes_modal_and_joins_trimmed() {
    let mut state = connected("0xa");
    state.username_resolved(None);
    state.set_username_input("  alice ".to_owned());
    let cmd = state.confirm();
    assert_eq!(cmd, Some(SessionCommand::Join { username: "alice".to_owned() }));
    assert!(!state.modal_open);
    assert_eq!(state.username, "alice");
}

#[test]
fn confirm_after_warning_clears_it() {
    let mut state = connected("0xa");
    state.confirm();
    state.set_username_input("bob".to_owned());
    state.confirm();
    assert!(!state.invalid_username);
}

// =============================================================
// Join / leave outcomes
// =============================================================

#[test]
fn join_failure_reopens_modal() {
    let mut state = connected("0xa");
    state.set_username_input("alice".to_owned());
    state.confirm();
    state.join_failed();
    assert!(state.modal_open);
    assert!(!state.joined);
    assert_eq!(state.username, "alice");
}

#[test]
fn join_success_marks_joined() {
    let mut state = connected("0xa");
    state.set_username_input("alice".to_owned());
    state.confirm();
    state.join_succeeded();
    assert!(state.joined);
    assert!(!state.modal_open);
}

#[test]
fn lookup_settling_during_pending_join_does_not_rejoin() {
    let mut state = connected("0xa");
    state.set_username_input("alice".to_owned());
    assert_eq!(state.confirm(), Some(SessionCommand::Join { username: "alice".to_owned() }));
    assert!(state.joining);

    assert_eq!(state.username_resolved(None), None);
    assert!(!state.modal_open);
    assert!(state.joining);
}

#[test]
fn late_lookup_after_join_does_not_rejoin() {
    let mut state = connected("0xa");
    state.set_username_input("alice".to_owned());
    state.confirm();
    state.join_succeeded();
    assert!(!state.joining);

    assert_eq!(state.username_resolved(None), None);
    assert!(state.joined);
    assert!(!state.modal_open);
}

#[test]
fn deferred_join_is_issued_once() {
    let mut state = SessionState::default();
    state.set_username_input("alice".to_owned());
    state.confirm();
    state.account_connected("0xa".to_owned());
    assert_eq!(state.username_resolved(None), Some(SessionCommand::Join { username: "alice".to_owned() }));
    assert_eq!(state.username_resolved(None), None);
}

#[test]
fn retry_after_join_failure_issues_join_again() {
    let mut state = connected("0xa");
    state.set_username_input("alice".to_owned());
    state.confirm();
    state.join_failed();
    assert!(!state.joining);
    assert_eq!(state.confirm(), Some(SessionCommand::Join { username: "alice".to_owned() }));
}

#[test]
fn leave_resets_identity_and_reopens_prompt() {
    let mut state = connected("0xa");
    state.username_resolved(Some("alice".to_owned()));
    let cmd = state.leave();
    assert_eq!(cmd, Some(SessionCommand::Leave));
    assert!(state.modal_open);
    assert!(!state.joined);
    assert_eq!(state.username, "");
    assert_eq!(state.account.as_deref(), Some("0xa"));
}

#[test]
fn leave_without_account_only_resets() {
    let mut state = SessionState::default();
    state.set_username_input("alice".to_owned());
    state.confirm();
    assert_eq!(state.leave(), None);
    assert!(state.modal_open);
}

#[test]
fn leave_failure_keeps_modal_open() {
    let mut state = connected("0xa");
    state.username_resolved(Some("alice".to_owned()));
    state.leave();
    state.leave_failed();
    assert!(state.modal_open);
}

#[test]
fn disconnect_clears_account() {
    let mut state = connected("0xa");
    state.username_resolved(Some("alice".to_owned()));
    state.account_disconnected();
    assert_eq!(state.account, None);
    assert!(!state.joined);
}

#[test]
fn display_name_is_blank_while_prompting() {
    let mut state = SessionState::default();
    state.set_username_input("typing".to_owned());
    assert_eq!(state.display_name(), "");
}
