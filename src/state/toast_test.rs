use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_empty() {
    let state = ToastState::default();
    assert!(state.current.is_none());
}

#[test]
fn show_replaces_current_toast() {
    let mut state = ToastState::default();
    state.show("First", "one", ToastVariant::Default);
    state.show("Second", "two", ToastVariant::Destructive);

    let toast = state.current.expect("toast shown");
    assert_eq!(toast.title, "Second");
    assert_eq!(toast.message, "two");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_clears_current_toast() {
    let mut state = ToastState::default();
    state.show("Title", "msg", ToastVariant::Default);
    state.dismiss();
    assert!(state.current.is_none());
}
