#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navbar: dark mode and the mobile menu toggle.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

/// Time range filter on the dashboard header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
}

/// Tabs on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Activity,
    Questions,
    Answers,
    Badges,
}
