#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::outcome::SessionRecord;

/// Authentication state tracking the current session and loading
/// status. `loading` is true until the persisted session (if any) has
/// been read back from localStorage on mount.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<SessionRecord>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
