//! Page-level components, one per route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
