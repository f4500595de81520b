//! Browser-environment helpers: theme persistence and the session
//! record written after login.

pub mod dark_mode;
pub mod session;
