use super::*;

fn session(token: &str) -> Session {
    Session(serde_json::json!({ "token": token }))
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Credential store
// =============================================================

#[test]
fn set_credentials_stores_session() {
    let mut state = AuthState::default();
    state.set_credentials(session("abc"));
    assert!(state.is_authenticated());
    assert_eq!(state.session, Some(session("abc")));
}

#[test]
fn set_credentials_replaces_previous_session() {
    let mut state = AuthState::default();
    state.set_credentials(session("first"));
    state.set_credentials(session("second"));
    assert_eq!(state.session, Some(session("second")));
}
