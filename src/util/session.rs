//! Session record persistence in `localStorage`.
//!
//! Four keys written after a successful login and read by any
//! authenticated page. No client-side expiry: the record lives until
//! an explicit logout clears it.

use crate::net::outcome::SessionRecord;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "authToken";
#[cfg(feature = "hydrate")]
const USER_ID_KEY: &str = "userId";
#[cfg(feature = "hydrate")]
const USERNAME_KEY: &str = "username";
#[cfg(feature = "hydrate")]
const EMAIL_KEY: &str = "userEmail";

/// Persist a session record. Best-effort: storage failures degrade to
/// an unauthenticated state on the next load rather than erroring.
pub fn store(record: &SessionRecord) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &record.token);
            let _ = storage.set_item(USER_ID_KEY, &record.user_id);
            let _ = storage.set_item(USERNAME_KEY, &record.username);
            let _ = storage.set_item(EMAIL_KEY, &record.email);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
    }
}

/// Read the persisted session back, or `None` when no token is stored
/// or this is not a browser environment.
pub fn load() -> Option<SessionRecord> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let get = |key| storage.get_item(key).ok().flatten().unwrap_or_default();
        Some(SessionRecord {
            token,
            user_id: get(USER_ID_KEY),
            username: get(USERNAME_KEY),
            email: get(EMAIL_KEY),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the persisted session (logout).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
