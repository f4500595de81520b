use super::*;

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

#[test]
fn auth_state_with_session_is_authenticated() {
    let state = AuthState {
        session: Some(SessionRecord {
            token: "t".to_owned(),
            user_id: "1".to_owned(),
            username: "u".to_owned(),
            email: "e".to_owned(),
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
