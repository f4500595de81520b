//! Reusable view components shared across pages.

pub mod features_section;
pub mod hero_section;
pub mod navbar;
pub mod password_field;
pub mod popular_topics;
pub mod question_card;
pub mod stat_card;
pub mod toast_host;
