use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_light_mode_menu_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.menu_open);
}

#[test]
fn time_range_defaults_to_week() {
    assert_eq!(TimeRange::default(), TimeRange::Week);
}

#[test]
fn profile_tab_defaults_to_activity() {
    assert_eq!(ProfileTab::default(), ProfileTab::Activity);
}
